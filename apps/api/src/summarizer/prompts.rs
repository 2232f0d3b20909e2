pub const SUMMARY_SYSTEM: &str = "You are a recruiting assistant. You write short, factual candidate \
synopses from résumé text. Never invent facts that are not in the résumé.";

pub const SUMMARY_PROMPT_TEMPLATE: &str = r#"Summarize the following résumé in at most three sentences.
Mention the candidate's most recent role, years of experience if stated, and core skills.
Reply with the summary text only, no preamble.

<resume>
{resume_text}
</resume>"#;
