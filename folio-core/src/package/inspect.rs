//! Read-back checks for packaged archives

use super::layout::{EpubLayout, EPUB_MIME_TYPE, MIMETYPE_FILE};
use crate::error::{FolioError, Result};
use serde::Serialize;
use std::io::{Cursor, Read};
use zip::{CompressionMethod, ZipArchive};

/// One entry of a packaged archive
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct EntryInfo {
    pub name: String,
    pub size: u64,
    pub compressed_size: u64,
    pub stored: bool,
}

/// Entries of an archive plus any container rule it breaks
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ArchiveReport {
    pub entries: Vec<EntryInfo>,
    pub problems: Vec<String>,
}

impl ArchiveReport {
    pub fn is_valid(&self) -> bool {
        self.problems.is_empty()
    }
}

/// List the entries of `bytes` and check the mimetype and container rules
///
/// Fails only when the bytes are not a readable zip archive.
pub fn inspect(bytes: &[u8], layout: &EpubLayout) -> Result<ArchiveReport> {
    let mut archive = ZipArchive::new(Cursor::new(bytes)).map_err(read_failure)?;
    let mut entries = Vec::with_capacity(archive.len());
    let mut problems = Vec::new();

    for index in 0..archive.len() {
        let mut file = archive.by_index(index).map_err(read_failure)?;
        let stored = file.compression() == CompressionMethod::Stored;

        if index == 0 {
            if file.name() != MIMETYPE_FILE {
                problems.push(format!("first entry is '{}', not '{}'", file.name(), MIMETYPE_FILE));
            } else {
                if !stored {
                    problems.push("mimetype entry is compressed".to_string());
                }
                if file.header_start() != 0 {
                    problems.push("mimetype entry does not start the archive".to_string());
                }
                let mut content = Vec::new();
                file.read_to_end(&mut content)
                    .map_err(|e| FolioError::InvalidArchive(e.to_string()))?;
                if content != EPUB_MIME_TYPE.as_bytes() {
                    problems.push(format!(
                        "mimetype entry holds '{}'",
                        String::from_utf8_lossy(&content)
                    ));
                }
            }
        }

        entries.push(EntryInfo {
            name: file.name().to_string(),
            size: file.size(),
            compressed_size: file.compressed_size(),
            stored,
        });
    }

    for required in [layout.container_path(), layout.package_path()] {
        if !entries.iter().any(|e| e.name == required) {
            problems.push(format!("missing '{}'", required));
        }
    }

    Ok(ArchiveReport { entries, problems })
}

fn read_failure(err: zip::result::ZipError) -> FolioError {
    FolioError::InvalidArchive(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::package::Packager;
    use crate::types::RenderedDocument;
    use chrono::Utc;
    use std::io::Write;
    use zip::write::FileOptions;
    use zip::ZipWriter;

    #[test]
    fn test_packaged_archive_passes() {
        let layout = EpubLayout::default();
        let documents = vec![RenderedDocument::new(layout.package_path(), "<package/>")];
        let bytes = Packager::default().package(&documents, Utc::now()).unwrap();

        let report = inspect(&bytes, &layout).unwrap();

        assert!(report.is_valid(), "{:?}", report.problems);
        assert_eq!(report.entries[0].name, "mimetype");
        assert!(report.entries[0].stored);
        assert!(!report.entries[1].stored);
    }

    #[test]
    fn test_misplaced_mimetype_is_reported() {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options = FileOptions::default().compression_method(CompressionMethod::Deflated);
        zip.start_file("OEBPS/content.opf", options).unwrap();
        zip.write_all(b"<package/>").unwrap();
        zip.start_file("mimetype", options).unwrap();
        zip.write_all(EPUB_MIME_TYPE.as_bytes()).unwrap();
        let bytes = zip.finish().unwrap().into_inner();

        let report = inspect(&bytes, &EpubLayout::default()).unwrap();

        assert!(!report.is_valid());
        assert!(report.problems[0].contains("first entry"));
        assert!(report.problems.iter().any(|p| p.contains("container.xml")));
    }

    #[test]
    fn test_not_a_zip() {
        let err = inspect(b"plain text", &EpubLayout::default()).unwrap_err();
        assert!(matches!(err, FolioError::InvalidArchive(_)));
        assert!(err.to_string().starts_with("Invalid archive"));
    }
}
