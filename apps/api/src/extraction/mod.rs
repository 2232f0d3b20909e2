//! Text extraction: turns an uploaded résumé (PDF or DOCX) into one flat string.
//!
//! Fragments (pages for PDF, paragraphs for DOCX) are joined with a single space,
//! in the order the container stores them. Empty fragments are kept as empty strings.
//! No OCR, no layout reconstruction.

mod docx;
mod pdf;

use std::fmt;
use std::path::Path;

use thiserror::Error;

pub use docx::extract_docx_text;
pub use pdf::extract_pdf_text;


const FRAGMENT_SEPARATOR: &str = " ";

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Unsupported file type: {0}")]
    UnsupportedFormat(String),

    #[error("Failed to read document: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed document: {0}")]
    Malformed(String),

    #[error("Document contains no extractable text")]
    Empty,
}

/// The document containers the extractor understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
}

impl DocumentFormat {
    /// Resolves the format from a file name suffix (`.pdf` / `.docx`, any case).
    pub fn from_file_name(file_name: &str) -> Result<Self, ExtractionError> {
        let extension = Path::new(file_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match extension.as_deref() {
            Some("pdf") => Ok(DocumentFormat::Pdf),
            Some("docx") => Ok(DocumentFormat::Docx),
            _ => Err(ExtractionError::UnsupportedFormat(file_name.to_string())),
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentFormat::Pdf => f.write_str("pdf"),
            DocumentFormat::Docx => f.write_str("docx"),
        }
    }
}

/// Extracts the visible text of the document at `path`.
pub fn extract_text(format: DocumentFormat, path: &Path) -> Result<String, ExtractionError> {
    let fragments = match format {
        DocumentFormat::Pdf => extract_pdf_text(path)?,
        DocumentFormat::Docx => extract_docx_text(path)?,
    };

    tracing::debug!(
        format = %format,
        fragments = fragments.len(),
        "Extracted document fragments"
    );

    Ok(join_fragments(&fragments))
}

fn join_fragments(fragments: &[String]) -> String {
    fragments.join(FRAGMENT_SEPARATOR)
}
