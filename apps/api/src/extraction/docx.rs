use std::path::Path;

use docx_rs::{read_docx, DocumentChild, Paragraph, ParagraphChild, RunChild};

use super::ExtractionError;

/// Returns the text of every top-level body paragraph, in document order.
///
/// Runs inside a paragraph (including those nested in hyperlinks) are
/// concatenated without a separator; tables, headers and footers are skipped.
pub fn extract_docx_text(path: &Path) -> Result<Vec<String>, ExtractionError> {
    let bytes = std::fs::read(path)?;

    let docx = read_docx(&bytes)
        .map_err(|e| ExtractionError::Malformed(format!("docx-rs parse error: {e:?}")))?;

    let paragraphs = docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(para) => Some(paragraph_text(para)),
            _ => None,
        })
        .collect();

    Ok(paragraphs)
}

fn paragraph_text(para: &Paragraph) -> String {
    let mut text = String::new();
    collect_runs(&para.children, &mut text);
    text
}

fn collect_runs(children: &[ParagraphChild], out: &mut String) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => {
                for rc in &run.children {
                    match rc {
                        RunChild::Text(t) => out.push_str(&t.text),
                        RunChild::Tab(_) => out.push('\t'),
                        _ => {}
                    }
                }
            }
            ParagraphChild::Hyperlink(link) => collect_runs(&link.children, out),
            _ => {}
        }
    }
}
