//! PDF text extraction

use crate::error::ExtractError;

/// Extracts the text layer of a PDF
///
/// Scanned PDFs without a text layer produce empty text, which the
/// conversion rejects as empty content.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfExtractor;

impl PdfExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl super::TextExtractor for PdfExtractor {
    fn extract(&self, data: &[u8]) -> Result<String, ExtractError> {
        pdf_extract::extract_text_from_mem(data)
            .map_err(|e| ExtractError::InvalidPdf(format!("Failed to extract PDF text: {}", e)))
    }

    fn supported_extensions(&self) -> &[&str] {
        &["pdf"]
    }
}
