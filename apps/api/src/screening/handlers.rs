//! Axum route handlers for the screening flow.

use axum::{
    extract::{Multipart, State},
    response::Html,
    Json,
};
use bytes::Bytes;

use crate::errors::{AppError, JsonError};
use crate::models::screening::ScreeningResult;
use crate::render;
use crate::screening::pipeline::{screen_resume, ResumeUpload};
use crate::state::AppState;

const RESUME_FIELD: &str = "resume";
const JOB_DESC_FIELD: &str = "job_desc";

// ────────────────────────────────────────────────────────────────────────────
// Form parsing and validation
// ────────────────────────────────────────────────────────────────────────────

/// Raw multipart fields, before validation.
#[derive(Debug, Default)]
struct ScreeningForm {
    /// `(file name, bytes)` when the `resume` part carried a file.
    resume: Option<(String, Bytes)>,
    job_desc: Option<String>,
}

async fn read_form(mut multipart: Multipart) -> Result<ScreeningForm, AppError> {
    let mut form = ScreeningForm::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some(RESUME_FIELD) => {
                // A part without a filename is a plain form value, not an upload.
                if let Some(file_name) = field.file_name().map(str::to_string) {
                    let bytes = field.bytes().await?;
                    form.resume = Some((file_name, bytes));
                }
            }
            Some(JOB_DESC_FIELD) => {
                form.job_desc = Some(field.text().await?);
            }
            _ => {}
        }
    }

    Ok(form)
}

fn validate(form: ScreeningForm) -> Result<(ResumeUpload, String), AppError> {
    let (file_name, bytes) = form
        .resume
        .ok_or_else(|| AppError::Validation("No file uploaded".to_string()))?;

    if file_name.is_empty() {
        return Err(AppError::Validation("No selected file".to_string()));
    }

    let job_desc = form
        .job_desc
        .filter(|jd| !jd.trim().is_empty())
        .ok_or_else(|| AppError::Validation("Job description is required".to_string()))?;

    Ok((ResumeUpload { file_name, bytes }, job_desc))
}

async fn screen_multipart(
    state: &AppState,
    multipart: Multipart,
) -> Result<ScreeningResult, AppError> {
    let (upload, job_desc) = validate(read_form(multipart).await?)?;
    screen_resume(state, upload, job_desc).await
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /
///
/// Upload form with a résumé file input and a job description textarea.
pub async fn handle_index() -> Html<String> {
    Html(render::index_page())
}

/// POST /process
///
/// Screens the uploaded résumé and renders the results page.
/// Errors come back as plain-text bodies.
pub async fn handle_process(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Html<String>, AppError> {
    let result = screen_multipart(&state, multipart).await?;
    Ok(Html(render::results_page(&result)))
}

/// POST /api/v1/screen
///
/// Same input as `/process`, JSON `ScreeningResult` out.
pub async fn handle_screen(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ScreeningResult>, JsonError> {
    let result = screen_multipart(&state, multipart).await?;
    Ok(Json(result))
}
