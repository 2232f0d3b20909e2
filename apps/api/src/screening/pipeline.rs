//! Screening pipeline: stage → extract → embed & score → summarize.

use anyhow::anyhow;
use bytes::Bytes;
use tokio::task::JoinError;
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::errors::AppError;
use crate::extraction::{extract_text, DocumentFormat, ExtractionError};
use crate::models::screening::ScreeningResult;
use crate::scoring::score_texts;
use crate::screening::staging::StagedUpload;
use crate::state::AppState;

/// A validated résumé upload: non-empty client file name plus raw bytes.
#[derive(Debug, Clone)]
pub struct ResumeUpload {
    pub file_name: String,
    pub bytes: Bytes,
}

/// Runs the full pipeline for one request.
///
/// Extraction and embedding are CPU-bound and run on the blocking pool.
/// The staged file never outlives the extraction step.
pub async fn screen_resume(
    state: &AppState,
    upload: ResumeUpload,
    job_desc: String,
) -> Result<ScreeningResult, AppError> {
    let request_id = Uuid::new_v4();
    let span = info_span!("screening", %request_id, file_name = %upload.file_name);

    async move {
        let upload_dir = state.config.upload_dir.clone();
        let resume_text = tokio::task::spawn_blocking(move || {
            stage_and_extract(&upload_dir, request_id, &upload)
        })
        .await
        .map_err(|e| join_error("extraction", e))??;

        info!(chars = resume_text.chars().count(), "Extracted résumé text");

        let embedder = state.embedder.clone();
        let resume_for_scoring = resume_text.clone();
        let score = tokio::task::spawn_blocking(move || {
            score_texts(embedder.as_ref(), &resume_for_scoring, &job_desc)
        })
        .await
        .map_err(|e| join_error("embedding", e))??;

        info!(score, model = state.embedder.model_name(), "Scored résumé");

        let summary = state.summarizer.summarize(&resume_text).await?;

        Ok(ScreeningResult::new(score, summary))
    }
    .instrument(span)
    .await
}

fn stage_and_extract(
    upload_dir: &std::path::Path,
    request_id: Uuid,
    upload: &ResumeUpload,
) -> Result<String, AppError> {
    let staged = StagedUpload::stage(upload_dir, request_id, &upload.file_name, &upload.bytes)?;

    // Dropping `staged` on the early returns removes the file as well.
    let format = DocumentFormat::from_file_name(staged.file_name())?;
    let extracted = extract_text(format, staged.path());
    staged.release();

    let text = extracted?;
    if text.trim().is_empty() {
        return Err(ExtractionError::Empty.into());
    }
    Ok(text)
}

/// Parser panics (pdf-extract does this on some inputs) surface as extraction errors.
fn join_error(stage: &str, err: JoinError) -> AppError {
    if err.is_panic() && stage == "extraction" {
        AppError::Extraction("document parser panicked".to_string())
    } else {
        AppError::Internal(anyhow!("{stage} task failed: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::config::Config;
    use crate::embedding::test_support::HashingEmbedder;
    use crate::extraction::test_support::{docx_bytes, pdf_bytes};
    use crate::models::screening::TOP_SKILLS;
    use crate::summarizer::TruncationSummarizer;

    fn test_state(upload_dir: &std::path::Path) -> AppState {
        AppState {
            config: Config {
                upload_dir: upload_dir.to_path_buf(),
                ..Config::default()
            },
            embedder: Arc::new(HashingEmbedder::default()),
            summarizer: Arc::new(TruncationSummarizer),
        }
    }

    fn upload(file_name: &str, bytes: Vec<u8>) -> ResumeUpload {
        ResumeUpload {
            file_name: file_name.to_string(),
            bytes: Bytes::from(bytes),
        }
    }

    fn staged_files(dir: &std::path::Path) -> usize {
        std::fs::read_dir(dir).unwrap().count()
    }

    #[tokio::test]
    async fn test_identical_docx_scores_hundred() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(dir.path());
        let jd = "Senior Rust engineer building async services with tokio";

        let result = screen_resume(&state, upload("cv.docx", docx_bytes(&[jd])), jd.to_string())
            .await
            .unwrap();

        assert_eq!(result.score, 100.0);
        assert!(result.summary.starts_with("Summary: "));
        assert_eq!(result.top_skills, TOP_SKILLS.to_vec());
        assert_eq!(staged_files(dir.path()), 0);
    }

    #[tokio::test]
    async fn test_unrelated_docx_scores_lower() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(dir.path());

        let result = screen_resume(
            &state,
            upload("cv.docx", docx_bytes(&["Pastry chef", "Croissants and sourdough"])),
            "Kubernetes platform engineer".to_string(),
        )
        .await
        .unwrap();

        assert!(result.score < 100.0);
    }

    #[tokio::test]
    async fn test_pdf_resume_is_scored() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(dir.path());

        let result = screen_resume(
            &state,
            upload("cv.pdf", pdf_bytes(&["Rust engineer", "Tokio and Axum"])),
            "Rust engineer".to_string(),
        )
        .await
        .unwrap();

        assert!(result.score > 0.0);
        assert!(result.summary.starts_with("Summary: "));
        assert!(result.summary.contains("Rust engineer"));
        assert_eq!(staged_files(dir.path()), 0);
    }

    #[tokio::test]
    async fn test_garbage_pdf_is_extraction_error() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(dir.path());

        let err = screen_resume(&state, upload("cv.pdf", b"%PDF-nope".to_vec()), "jd".into())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Extraction(_)));
        assert_eq!(staged_files(dir.path()), 0);
    }

    #[tokio::test]
    async fn test_unsupported_format_cleans_up() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(dir.path());

        let err = screen_resume(&state, upload("notes.txt", b"hello".to_vec()), "jd".into())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::UnsupportedFormat));
        assert_eq!(staged_files(dir.path()), 0);
    }

    #[tokio::test]
    async fn test_malformed_docx_is_extraction_error() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(dir.path());

        let err = screen_resume(&state, upload("cv.docx", b"not a zip".to_vec()), "jd".into())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Extraction(_)));
        assert_eq!(staged_files(dir.path()), 0);
    }

    #[tokio::test]
    async fn test_docx_without_text_is_extraction_error() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(dir.path());

        let err = screen_resume(&state, upload("cv.docx", docx_bytes(&["", ""])), "jd".into())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Extraction(_)));
    }

    #[tokio::test]
    async fn test_missing_upload_dir_is_internal_error() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(&dir.path().join("gone"));

        let err = screen_resume(&state, upload("cv.docx", docx_bytes(&["x"])), "jd".into())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Internal(_)));
    }
}
