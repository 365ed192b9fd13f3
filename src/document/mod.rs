// src/document/mod.rs
use crate::utils::error::DocumentError;
use lopdf::Document;
use std::path::Path;

/// Loads a PDF and returns the plain text of all pages, concatenated in page order.
pub fn read_report_text(path: &Path) -> Result<String, DocumentError> {
    if !path.exists() {
        return Err(DocumentError::NotFound(path.to_path_buf()));
    }

    tracing::info!("Loading PDF: {}", path.display());
    let doc = Document::load(path).map_err(|e| DocumentError::Load(e.to_string()))?;

    // get_pages is keyed by page number, so iteration is already in page order
    let mut text = String::new();
    for (page_num, _page_id) in doc.get_pages() {
        let content = doc
            .extract_text(&[page_num])
            .map_err(|e| DocumentError::PageText {
                page: page_num,
                reason: e.to_string(),
            })?;
        tracing::debug!("Page {}: {} chars", page_num, content.len());
        text.push_str(&content);
    }

    tracing::info!("Extracted {} chars of text from {}", text.len(), path.display());
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_reported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ism-report-missing.pdf");

        let err = read_report_text(&path).unwrap_err();
        assert!(matches!(err, DocumentError::NotFound(ref p) if p == &path));
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_non_pdf_fails_to_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("not-a-report.pdf");
        std::fs::write(&path, "plain text, not a PDF").unwrap();

        let err = read_report_text(&path).unwrap_err();
        assert!(matches!(err, DocumentError::Load(_)));
    }
}
