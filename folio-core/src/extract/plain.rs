//! Plain text extraction

use crate::error::ExtractError;

/// Reads UTF-8 text, replacing invalid sequences and dropping a byte order mark
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextExtractor;

impl PlainTextExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl super::TextExtractor for PlainTextExtractor {
    fn extract(&self, data: &[u8]) -> Result<String, ExtractError> {
        let data = data.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(data);
        Ok(String::from_utf8_lossy(data).into_owned())
    }

    fn supported_extensions(&self) -> &[&str] {
        &["txt", "text", "md"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::TextExtractor;

    #[test]
    fn test_strips_bom() {
        let text = PlainTextExtractor.extract(b"\xEF\xBB\xBFChapter 1").unwrap();
        assert_eq!(text, "Chapter 1");
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let text = PlainTextExtractor.extract(b"caf\xE9").unwrap();
        assert_eq!(text, "caf\u{FFFD}");
    }
}
