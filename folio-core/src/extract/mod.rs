//! Raw text extraction from manuscript files
//!
//! Extraction is deliberately shallow: formatting, images and layout are
//! discarded and only the text, with paragraph breaks, is kept for the
//! segmenter.

mod docx;
mod pdf;
mod plain;

pub use docx::DocxExtractor;
pub use pdf::PdfExtractor;
pub use plain::PlainTextExtractor;

use crate::error::ExtractError;
use std::path::Path;

/// Trait for pulling plain text out of a source document
pub trait TextExtractor: Send + Sync {
    /// Extract text from the raw file contents
    fn extract(&self, data: &[u8]) -> Result<String, ExtractError>;

    /// File extensions this extractor handles
    fn supported_extensions(&self) -> &[&str];
}

/// Get the extractor for a file extension
///
/// Anything that is not a PDF or DOCX file is read as plain text.
pub fn extractor_for_extension(ext: &str) -> Box<dyn TextExtractor> {
    match ext.to_lowercase().as_str() {
        "pdf" => Box::new(PdfExtractor::new()),
        "docx" => Box::new(DocxExtractor::new()),
        _ => Box::new(PlainTextExtractor::new()),
    }
}

/// Whether an extension is one the extractors claim
///
/// Used to pick manuscripts out of a directory; unknown extensions still
/// convert as plain text when named explicitly.
pub fn is_supported_extension(ext: &str) -> bool {
    let ext = ext.to_lowercase();
    let extractors: [Box<dyn TextExtractor>; 3] = [
        Box::new(PlainTextExtractor::new()),
        Box::new(PdfExtractor::new()),
        Box::new(DocxExtractor::new()),
    ];
    extractors
        .iter()
        .any(|e| e.supported_extensions().contains(&ext.as_str()))
}

/// Get the extractor for a file path, based on its extension
pub fn extractor_for_path(path: &str) -> Box<dyn TextExtractor> {
    let ext = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default();
    extractor_for_extension(ext)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extractor_selection() {
        assert_eq!(extractor_for_extension("PDF").supported_extensions(), &["pdf"]);
        assert_eq!(extractor_for_extension("docx").supported_extensions(), &["docx"]);
        assert!(extractor_for_extension("md")
            .supported_extensions()
            .contains(&"txt"));
        assert_eq!(
            extractor_for_path("manuscripts/draft.final.docx").supported_extensions(),
            &["docx"]
        );
        assert!(extractor_for_path("README")
            .supported_extensions()
            .contains(&"txt"));
    }

    #[test]
    fn test_supported_extensions() {
        assert!(is_supported_extension("TXT"));
        assert!(is_supported_extension("pdf"));
        assert!(is_supported_extension("docx"));
        assert!(!is_supported_extension("epub"));
        assert!(!is_supported_extension(""));
    }
}
