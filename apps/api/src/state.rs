use std::sync::Arc;

use crate::config::Config;
use crate::embedding::Embedder;
use crate::summarizer::Summarizer;

/// Shared application state injected into all route handlers via Axum extractors.
/// Built once by the composition root; read-only afterwards.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Sentence-embedding model, loaded once at startup.
    pub embedder: Arc<dyn Embedder>,
    /// Pluggable summarizer. Default: TruncationSummarizer. Swap via SUMMARIZER_BACKEND.
    pub summarizer: Arc<dyn Summarizer>,
}
