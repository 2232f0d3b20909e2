use async_trait::async_trait;

use super::prompts::{SUMMARY_PROMPT_TEMPLATE, SUMMARY_SYSTEM};
use super::{Summarizer, SUMMARY_PREFIX};
use crate::errors::AppError;
use crate::llm_client::LlmClient;

/// Remote summarizer backed by the text-generation API.
pub struct LlmSummarizer(pub LlmClient);

#[async_trait]
impl Summarizer for LlmSummarizer {
    async fn summarize(&self, text: &str) -> Result<String, AppError> {
        let prompt = build_prompt(text);
        let synopsis = self
            .0
            .call_text(&prompt, SUMMARY_SYSTEM)
            .await
            .map_err(|e| AppError::Llm(format!("Summarization failed: {e}")))?;

        Ok(with_prefix(&synopsis))
    }

    fn backend(&self) -> &'static str {
        "llm"
    }
}

fn build_prompt(resume_text: &str) -> String {
    SUMMARY_PROMPT_TEMPLATE.replace("{resume_text}", resume_text)
}

fn with_prefix(synopsis: &str) -> String {
    if synopsis.starts_with(SUMMARY_PREFIX) {
        synopsis.to_string()
    } else {
        format!("{SUMMARY_PREFIX}{synopsis}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::test_support::{spawn_messages_server, TEST_API_KEY};

    #[test]
    fn test_prompt_embeds_resume_text() {
        let prompt = build_prompt("Led the payments team at Acme.");
        assert!(prompt.contains("<resume>\nLed the payments team at Acme.\n</resume>"));
        assert!(!prompt.contains("{resume_text}"));
    }

    #[tokio::test]
    async fn test_summarize_through_remote_service() {
        let (url, _) = spawn_messages_server("Backend engineer with eight years of Rust.", 0).await;
        let client = LlmClient::new(TEST_API_KEY.to_string())
            .unwrap()
            .with_api_url(url);

        let summary = LlmSummarizer(client)
            .summarize("Jane Doe, Rust engineer since 2016")
            .await
            .unwrap();

        assert_eq!(summary, "Summary: Backend engineer with eight years of Rust.");
    }

    #[tokio::test]
    async fn test_remote_failure_is_llm_error() {
        let (url, _) = spawn_messages_server("unused", 0).await;
        let client = LlmClient::new("wrong-key".to_string())
            .unwrap()
            .with_api_url(url);

        let err = LlmSummarizer(client).summarize("resume").await.unwrap_err();

        assert!(matches!(err, AppError::Llm(_)));
    }

    #[test]
    fn test_prefix_added_once() {
        assert_eq!(with_prefix("Backend engineer."), "Summary: Backend engineer.");
        assert_eq!(with_prefix("Summary: Backend engineer."), "Summary: Backend engineer.");
    }
}
