//! Server-side HTML for the upload form and the results view.
//!
//! Everything user-derived goes through `html_escape` before it reaches markup.

use html_escape::encode_text;

use crate::models::screening::ScreeningResult;

const STYLE: &str = r#"
    body { font-family: system-ui, sans-serif; max-width: 720px; margin: 2rem auto; padding: 0 1rem; color: #1f2933; }
    h1 { font-size: 1.6rem; }
    label { display: block; margin-top: 1rem; font-weight: 600; }
    textarea { width: 100%; min-height: 12rem; }
    button { margin-top: 1rem; padding: 0.5rem 1.25rem; }
    .score { font-size: 3rem; font-weight: 700; }
    .summary { white-space: pre-wrap; background: #f5f7fa; padding: 1rem; border-radius: 4px; }
"#;

fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>{title}</title>
  <style>{STYLE}</style>
</head>
<body>
{body}
</body>
</html>
"#,
        title = encode_text(title),
    )
}

/// GET /: résumé upload form posting to `/process`.
pub fn index_page() -> String {
    page(
        "Résumé Screener",
        r#"<h1>Résumé Screener</h1>
<form action="/process" method="post" enctype="multipart/form-data">
  <label for="resume">Résumé (PDF or DOCX)</label>
  <input type="file" id="resume" name="resume" accept=".pdf,.docx" required>
  <label for="job_desc">Job description</label>
  <textarea id="job_desc" name="job_desc" required></textarea>
  <button type="submit">Screen</button>
</form>"#,
    )
}

/// POST /process: score, summary and skills for one screening.
pub fn results_page(result: &ScreeningResult) -> String {
    let skills: String = result
        .top_skills
        .iter()
        .map(|skill| format!("    <li>{}</li>\n", encode_text(skill)))
        .collect();

    let body = format!(
        r#"<h1>Screening Results</h1>
<p>Match score</p>
<p class="score">{score:.2}</p>
<h2>Summary</h2>
<p class="summary">{summary}</p>
<h2>Top Skills</h2>
<ul>
{skills}</ul>
<p><a href="/">Screen another résumé</a></p>"#,
        score = result.score,
        summary = encode_text(&result.summary),
    );

    page("Screening Results", &body)
}
