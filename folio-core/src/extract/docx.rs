//! DOCX text extraction
//!
//! Reads `word/document.xml` and keeps the text runs of each paragraph.
//! Paragraphs are separated by a blank line so the segmenter sees the same
//! structure it would in a plain text manuscript.

use crate::error::ExtractError;
use quick_xml::events::Event;
use quick_xml::reader::Reader;
use std::io::{Cursor, Read};

const DOCUMENT_PART: &str = "word/document.xml";

#[derive(Debug, Clone, Copy, Default)]
pub struct DocxExtractor;

impl DocxExtractor {
    pub fn new() -> Self {
        Self
    }

    fn document_xml(data: &[u8]) -> Result<String, ExtractError> {
        let mut archive = zip::ZipArchive::new(Cursor::new(data))
            .map_err(|e| ExtractError::InvalidDocx(format!("not a zip archive: {}", e)))?;
        let mut part = archive
            .by_name(DOCUMENT_PART)
            .map_err(|e| ExtractError::InvalidDocx(format!("missing {}: {}", DOCUMENT_PART, e)))?;

        let mut xml = String::new();
        part.read_to_string(&mut xml)
            .map_err(|e| ExtractError::InvalidDocx(e.to_string()))?;
        Ok(xml)
    }

    /// Collect paragraph text from WordprocessingML
    fn paragraphs(xml: &str) -> Result<Vec<String>, ExtractError> {
        let mut reader = Reader::from_str(xml);
        let mut paragraphs = Vec::new();
        let mut current = String::new();
        let mut in_run = false;
        let mut in_text = false;

        loop {
            match reader.read_event() {
                Ok(Event::Start(ref e)) => match e.local_name().as_ref() {
                    b"r" => in_run = true,
                    b"t" => in_text = true,
                    _ => {}
                },
                // Tab stops in paragraph properties are also `w:tab`
                Ok(Event::Empty(ref e)) if in_run => match e.local_name().as_ref() {
                    b"tab" => current.push('\t'),
                    b"br" | b"cr" => current.push('\n'),
                    _ => {}
                },
                Ok(Event::Text(ref e)) if in_text => {
                    let text = e
                        .unescape()
                        .map_err(|e| ExtractError::InvalidDocx(e.to_string()))?;
                    current.push_str(&text);
                }
                Ok(Event::End(ref e)) => match e.local_name().as_ref() {
                    b"t" => in_text = false,
                    b"r" => in_run = false,
                    b"p" => paragraphs.push(std::mem::take(&mut current)),
                    _ => {}
                },
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(ExtractError::InvalidDocx(format!(
                        "malformed document.xml at byte {}: {}",
                        reader.buffer_position(),
                        e
                    )))
                }
                _ => {}
            }
        }

        if !current.is_empty() {
            paragraphs.push(current);
        }

        Ok(paragraphs)
    }
}

impl super::TextExtractor for DocxExtractor {
    fn extract(&self, data: &[u8]) -> Result<String, ExtractError> {
        let xml = Self::document_xml(data)?;
        let paragraphs = Self::paragraphs(&xml)?;
        Ok(paragraphs.join("\n\n"))
    }

    fn supported_extensions(&self) -> &[&str] {
        &["docx"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::TextExtractor;
    use std::io::Write;

    const DOCUMENT: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body>
    <w:p><w:r><w:t>Chapter 1</w:t></w:r></w:p>
    <w:p><w:r><w:t xml:space="preserve">Fish &amp; </w:t></w:r><w:r><w:t>chips</w:t></w:r><w:r><w:tab/><w:t>served.</w:t></w:r></w:p>
    <w:p/>
    <w:p><w:r><w:t>Line one</w:t><w:br/><w:t>Line two</w:t></w:r></w:p>
  </w:body>
</w:document>"#;

    fn docx_bytes(document: &str) -> Vec<u8> {
        let mut zip = zip::ZipWriter::new(Cursor::new(Vec::new()));
        zip.start_file(DOCUMENT_PART, zip::write::FileOptions::default())
            .unwrap();
        zip.write_all(document.as_bytes()).unwrap();
        zip.finish().unwrap().into_inner()
    }

    #[test]
    fn test_paragraph_text() {
        let text = DocxExtractor.extract(&docx_bytes(DOCUMENT)).unwrap();
        assert_eq!(
            text,
            "Chapter 1\n\nFish & chips\tserved.\n\nLine one\nLine two"
        );
    }

    #[test]
    fn test_tab_stops_are_not_text() {
        let document = r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body>
    <w:p>
      <w:pPr><w:tabs><w:tab w:val="left" w:pos="720"/><w:tab w:val="right" w:pos="9000"/></w:tabs></w:pPr>
      <w:r><w:t>Name</w:t><w:tab/><w:t>Page</w:t></w:r>
    </w:p>
  </w:body>
</w:document>"#;

        let text = DocxExtractor.extract(&docx_bytes(document)).unwrap();
        assert_eq!(text, "Name\tPage");
    }

    #[test]
    fn test_not_a_zip() {
        assert!(matches!(
            DocxExtractor.extract(b"plain text"),
            Err(ExtractError::InvalidDocx(_))
        ));
    }

    #[test]
    fn test_missing_document_part() {
        let mut zip = zip::ZipWriter::new(Cursor::new(Vec::new()));
        zip.start_file("word/styles.xml", zip::write::FileOptions::default())
            .unwrap();
        zip.write_all(b"<styles/>").unwrap();
        let bytes = zip.finish().unwrap().into_inner();

        assert!(DocxExtractor.extract(&bytes).is_err());
    }
}
