//! Embedding: maps text to a dense vector with a pretrained sentence-embedding model.
//!
//! The model is loaded once by the composition root and shared through `AppState`
//! as `Arc<dyn Embedder>`, so tests can swap in a deterministic backend.

mod fast;

use thiserror::Error;

pub use fast::FastEmbedder;

/// Model used when `EMBEDDING_MODEL` is not set.
pub const DEFAULT_MODEL: &str = "all-MiniLM-L6-v2";

#[derive(Debug, Error)]
pub enum EmbeddingError {
    #[error("Unknown embedding model '{0}'")]
    UnknownModel(String),

    #[error("Failed to load embedding model: {0}")]
    Load(String),

    #[error("Embedding inference failed: {0}")]
    Inference(String),

    #[error("Embedding model returned no vector")]
    EmptyOutput,
}

/// A text embedder. Identical input must yield an identical vector.
pub trait Embedder: Send + Sync {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError>;

    /// Human-readable model identifier, surfaced by `/health`.
    fn model_name(&self) -> &str;
}
