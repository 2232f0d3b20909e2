use std::path::PathBuf;

use anyhow::{bail, Context, Result};

const DEFAULT_MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

/// Which summarizer implementation the service is wired with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummarizerBackend {
    /// Deterministic truncation, no network access.
    Stub,
    /// Remote text-generation service via `LlmClient`.
    Llm,
}

impl SummarizerBackend {
    fn parse(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "stub" | "truncate" => Ok(Self::Stub),
            "llm" | "remote" => Ok(Self::Llm),
            other => bail!("SUMMARIZER_BACKEND must be 'stub' or 'llm', got '{other}'"),
        }
    }
}

/// Application configuration loaded from environment variables.
/// Every variable has a default; only the LLM backend needs a secret.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub upload_dir: PathBuf,
    pub max_upload_bytes: usize,
    pub embedding_model: String,
    pub summarizer_backend: SummarizerBackend,
    pub anthropic_api_key: Option<String>,
    /// Override for the Messages endpoint; the public API when unset.
    pub anthropic_api_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let summarizer_backend =
            SummarizerBackend::parse(&optional_env("SUMMARIZER_BACKEND", "stub"))?;
        let anthropic_api_key = std::env::var("ANTHROPIC_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());

        if summarizer_backend == SummarizerBackend::Llm && anthropic_api_key.is_none() {
            bail!("ANTHROPIC_API_KEY is required when SUMMARIZER_BACKEND=llm");
        }

        Ok(Config {
            port: optional_env("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: optional_env("RUST_LOG", "info"),
            upload_dir: PathBuf::from(optional_env("UPLOAD_DIR", "uploads")),
            max_upload_bytes: match std::env::var("MAX_UPLOAD_BYTES") {
                Ok(raw) => raw
                    .parse::<usize>()
                    .context("MAX_UPLOAD_BYTES must be a positive integer")?,
                Err(_) => DEFAULT_MAX_UPLOAD_BYTES,
            },
            embedding_model: optional_env("EMBEDDING_MODEL", crate::embedding::DEFAULT_MODEL),
            summarizer_backend,
            anthropic_api_key,
            anthropic_api_url: std::env::var("ANTHROPIC_API_URL")
                .ok()
                .filter(|url| !url.trim().is_empty()),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            upload_dir: PathBuf::from("uploads"),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            embedding_model: crate::embedding::DEFAULT_MODEL.to_string(),
            summarizer_backend: SummarizerBackend::Stub,
            anthropic_api_key: None,
            anthropic_api_url: None,
        }
    }
}

fn optional_env(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_parse_accepts_aliases() {
        assert_eq!(SummarizerBackend::parse("stub").unwrap(), SummarizerBackend::Stub);
        assert_eq!(SummarizerBackend::parse(" LLM ").unwrap(), SummarizerBackend::Llm);
        assert_eq!(SummarizerBackend::parse("remote").unwrap(), SummarizerBackend::Llm);
    }

    #[test]
    fn test_backend_parse_rejects_unknown() {
        assert!(SummarizerBackend::parse("gpt").is_err());
    }

    #[test]
    fn test_default_config_uses_stub_summarizer() {
        let config = Config::default();
        assert_eq!(config.summarizer_backend, SummarizerBackend::Stub);
        assert_eq!(config.upload_dir, PathBuf::from("uploads"));
    }
}
