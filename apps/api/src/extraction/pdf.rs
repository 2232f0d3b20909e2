use std::path::Path;

use super::ExtractionError;

/// Returns the text of every page, in page order.
/// A page without a text layer comes back as an empty string.
pub fn extract_pdf_text(path: &Path) -> Result<Vec<String>, ExtractionError> {
    pdf_extract::extract_text_by_pages(path)
        .map_err(|e| ExtractionError::Malformed(format!("pdf-extract failed: {e:?}")))
}
