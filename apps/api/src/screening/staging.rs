//! Scoped staging of uploaded files.
//!
//! Each upload is written to a uniquely named file inside the upload directory
//! (`<request-id>-<random>-<original name>`). The file is removed when the
//! `StagedUpload` is released or dropped, on every exit path.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use tempfile::NamedTempFile;
use uuid::Uuid;

const FALLBACK_NAME: &str = "upload";

pub struct StagedUpload {
    file: NamedTempFile,
    file_name: String,
}

impl StagedUpload {
    /// Writes `bytes` into `dir` under a request-qualified name.
    pub fn stage(dir: &Path, request_id: Uuid, file_name: &str, bytes: &[u8]) -> Result<Self> {
        let safe_name = sanitize_file_name(file_name);

        let mut file = tempfile::Builder::new()
            .prefix(&format!("{request_id}-"))
            .suffix(&format!("-{safe_name}"))
            .tempfile_in(dir)
            .with_context(|| format!("Failed to create staging file in '{}'", dir.display()))?;

        file.write_all(bytes)
            .and_then(|_| file.flush())
            .context("Failed to write staged upload")?;

        tracing::debug!(
            path = %file.path().display(),
            bytes = bytes.len(),
            "Staged upload"
        );

        Ok(Self {
            file,
            file_name: file_name.to_string(),
        })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// The client-supplied file name, unmodified.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Removes the staged file now, logging (not failing) on error.
    pub fn release(self) {
        let path = self.file.path().to_path_buf();
        if let Err(e) = self.file.close() {
            tracing::warn!("Failed to remove staged upload '{}': {e}", path.display());
        }
    }
}

/// Keeps only the final path component so a client cannot escape the upload dir.
fn sanitize_file_name(file_name: &str) -> String {
    Path::new(file_name)
        .file_name()
        .and_then(|n| n.to_str())
        .filter(|n| !n.is_empty())
        .unwrap_or(FALLBACK_NAME)
        .to_string()
}
