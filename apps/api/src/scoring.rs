//! Cosine-similarity scoring between two embeddings.

use crate::embedding::{Embedder, EmbeddingError};

/// Cosine similarity in `[-1, 1]`. Zero-magnitude input yields `0.0`.
///
/// Both vectors must come from the same embedder; a dimension mismatch panics.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    assert_eq!(
        a.len(),
        b.len(),
        "embedding dimension mismatch: {} vs {}",
        a.len(),
        b.len()
    );

    let (dot, norm_a, norm_b) = a.iter().zip(b.iter()).fold(
        (0.0_f64, 0.0_f64, 0.0_f64),
        |(dot, na, nb), (&x, &y)| {
            let (x, y) = (x as f64, y as f64);
            (dot + x * y, na + x * x, nb + y * y)
        },
    );

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    (dot / (norm_a.sqrt() * norm_b.sqrt())).clamp(-1.0, 1.0)
}

/// Linear rescale to a user-facing score: `similarity * 100`, two decimals.
/// Negative similarity stays negative.
pub fn similarity_to_score(similarity: f64) -> f64 {
    (similarity * 100.0 * 100.0).round() / 100.0
}

/// Embeds both texts and returns their 0–100 score.
pub fn score_texts(embedder: &dyn Embedder, a: &str, b: &str) -> Result<f64, EmbeddingError> {
    let va = embedder.embed(a)?;
    let vb = embedder.embed(b)?;
    let similarity = cosine_similarity(&va, &vb);
    tracing::debug!(similarity, dimension = va.len(), "Computed cosine similarity");
    Ok(similarity_to_score(similarity))
}
