// Résumé screening: validation, staging, extraction, scoring, summarization.
// Remote text generation goes through the summarizer, never directly from here.

pub mod handlers;
pub mod pipeline;
pub mod staging;
