//! Summarizer: pluggable, trait-based synopsis of the résumé text.
//!
//! Default: `TruncationSummarizer` (deterministic, no network, used by tests).
//! Optional: `LlmSummarizer` (remote text generation through `LlmClient`).
//!
//! `AppState` holds an `Arc<dyn Summarizer>`, chosen at startup via `SUMMARIZER_BACKEND`.

mod llm;
mod prompts;

use async_trait::async_trait;

use crate::errors::AppError;

pub use llm::LlmSummarizer;

/// Every synopsis starts with this prefix, whichever backend produced it.
pub const SUMMARY_PREFIX: &str = "Summary: ";
const PREVIEW_CHARS: usize = 200;
const ELLIPSIS: &str = "...";

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Implement this to swap summarization backends without touching the handlers.
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, text: &str) -> Result<String, AppError>;

    /// "stub" or "llm", surfaced by `/health`.
    fn backend(&self) -> &'static str;
}

// ────────────────────────────────────────────────────────────────────────────
// TruncationSummarizer (default)
// ────────────────────────────────────────────────────────────────────────────

/// `"Summary: "` + the first 200 characters + `"..."`, regardless of content.
pub struct TruncationSummarizer;

#[async_trait]
impl Summarizer for TruncationSummarizer {
    async fn summarize(&self, text: &str) -> Result<String, AppError> {
        Ok(truncate_summary(text))
    }

    fn backend(&self) -> &'static str {
        "stub"
    }
}

fn truncate_summary(text: &str) -> String {
    let preview: String = text.chars().take(PREVIEW_CHARS).collect();
    format!("{SUMMARY_PREFIX}{preview}{ELLIPSIS}")
}
