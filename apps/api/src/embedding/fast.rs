use std::sync::{Mutex, MutexGuard, PoisonError};

use fastembed::{EmbeddingModel, InitOptions, TextEmbedding};

use super::{Embedder, EmbeddingError};

/// `fastembed` ONNX sentence embedder.
///
/// `TextEmbedding::embed` needs `&mut self`, so the model lives behind a mutex;
/// callers run it on the blocking pool.
pub struct FastEmbedder {
    model: Mutex<TextEmbedding>,
    name: String,
}

impl FastEmbedder {
    /// Loads (downloading on first use) the named model.
    pub fn load(name: &str) -> Result<Self, EmbeddingError> {
        let model_kind = resolve_model(name)?;

        let model = TextEmbedding::try_new(
            InitOptions::new(model_kind).with_show_download_progress(false),
        )
        .map_err(|e| EmbeddingError::Load(format!("{e:?}")))?;

        Ok(Self {
            model: Mutex::new(model),
            name: name.to_string(),
        })
    }
}

impl Embedder for FastEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let mut model = lock_model(&self.model);

        model
            .embed(vec![text], None)
            .map_err(|e| EmbeddingError::Inference(format!("{e:?}")))?
            .into_iter()
            .next()
            .ok_or(EmbeddingError::EmptyOutput)
    }

    fn model_name(&self) -> &str {
        &self.name
    }
}

/// A panic mid-inference leaves no broken state in the model, so a poisoned
/// lock is taken over instead of failing every later request.
fn lock_model<T>(model: &Mutex<T>) -> MutexGuard<'_, T> {
    model.lock().unwrap_or_else(PoisonError::into_inner)
}

fn resolve_model(name: &str) -> Result<EmbeddingModel, EmbeddingError> {
    match name.trim().to_ascii_lowercase().as_str() {
        "all-minilm-l6-v2" | "sentence-transformers/all-minilm-l6-v2" => {
            Ok(EmbeddingModel::AllMiniLML6V2)
        }
        "bge-small-en-v1.5" | "baai/bge-small-en-v1.5" => Ok(EmbeddingModel::BGESmallENV15),
        _ => Err(EmbeddingError::UnknownModel(name.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_default_model() {
        assert!(matches!(
            resolve_model(crate::embedding::DEFAULT_MODEL),
            Ok(EmbeddingModel::AllMiniLML6V2)
        ));
    }

    #[test]
    fn test_resolve_accepts_hub_prefix() {
        assert!(matches!(
            resolve_model("BAAI/bge-small-en-v1.5"),
            Ok(EmbeddingModel::BGESmallENV15)
        ));
    }

    #[test]
    fn test_lock_recovers_after_panic() {
        let model = std::sync::Arc::new(Mutex::new(vec![0.5_f32]));

        let poisoner = model.clone();
        let outcome = std::thread::spawn(move || {
            let _guard = poisoner.lock().unwrap();
            panic!("inference blew up");
        })
        .join();

        assert!(outcome.is_err());
        assert!(model.is_poisoned());
        assert_eq!(*lock_model(&*model), vec![0.5_f32]);
    }

    #[test]
    fn test_resolve_unknown_model() {
        assert!(matches!(
            resolve_model("word2vec"),
            Err(EmbeddingError::UnknownModel(_))
        ));
    }
}
