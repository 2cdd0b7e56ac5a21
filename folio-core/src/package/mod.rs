//! EPUB container packaging
//!
//! The archive's first entry must be an uncompressed `mimetype` file holding
//! exactly `application/epub+zip`; reading systems sniff it at a fixed
//! offset. The container redirect follows, then every generated document.

mod inspect;
mod layout;

pub use inspect::{inspect, ArchiveReport, EntryInfo};
pub use layout::{EpubLayout, CONTAINER_FILE, EPUB_MIME_TYPE, MIMETYPE_FILE};

use crate::error::{FolioError, Result};
use crate::types::RenderedDocument;
use chrono::{DateTime, Datelike, Timelike, Utc};
use std::collections::HashSet;
use std::io::{Cursor, Write};
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Default deflate level
pub const DEFAULT_COMPRESSION_LEVEL: i32 = 9;

/// Writes generated documents into an EPUB zip container
#[derive(Debug, Clone)]
pub struct Packager {
    layout: EpubLayout,
    compression_level: i32,
}

impl Packager {
    pub fn new(layout: EpubLayout) -> Self {
        Self {
            layout,
            compression_level: DEFAULT_COMPRESSION_LEVEL,
        }
    }

    /// Set the deflate level (clamped to 0..=9)
    pub fn with_compression_level(mut self, level: i32) -> Self {
        self.compression_level = level.clamp(0, 9);
        self
    }

    pub fn layout(&self) -> &EpubLayout {
        &self.layout
    }

    /// Package `documents`, in order, after the mimetype and container entries
    ///
    /// Every entry is stamped with `modified`, so the same documents and
    /// timestamp always produce the same bytes.
    pub fn package(&self, documents: &[RenderedDocument], modified: DateTime<Utc>) -> Result<Vec<u8>> {
        let container_path = self.layout.container_path();
        self.check_paths(documents, &container_path)?;

        let timestamp = zip_timestamp(modified);
        let stored = FileOptions::default()
            .compression_method(CompressionMethod::Stored)
            .last_modified_time(timestamp);
        let deflated = FileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .compression_level(Some(self.compression_level))
            .last_modified_time(timestamp);

        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));

        zip.start_file(MIMETYPE_FILE, stored)?;
        zip.write_all(EPUB_MIME_TYPE.as_bytes()).map_err(write_failure)?;

        zip.start_file(container_path.as_str(), deflated)?;
        zip.write_all(self.layout.container_xml().as_bytes())
            .map_err(write_failure)?;

        for document in documents {
            zip.start_file(document.path.as_str(), deflated)?;
            zip.write_all(&document.content).map_err(write_failure)?;
        }

        let cursor = zip.finish()?;
        Ok(cursor.into_inner())
    }

    fn check_paths(&self, documents: &[RenderedDocument], container_path: &str) -> Result<()> {
        let mut seen: HashSet<&str> = HashSet::new();
        seen.insert(MIMETYPE_FILE);
        seen.insert(container_path);

        for document in documents {
            if document.path.is_empty() || document.path.starts_with('/') {
                return Err(FolioError::PackagingFailure(format!(
                    "invalid archive path '{}'",
                    document.path
                )));
            }
            if !seen.insert(document.path.as_str()) {
                return Err(FolioError::PackagingFailure(format!(
                    "duplicate archive entry '{}'",
                    document.path
                )));
            }
        }

        Ok(())
    }
}

impl Default for Packager {
    fn default() -> Self {
        Self::new(EpubLayout::default())
    }
}

fn write_failure(err: std::io::Error) -> FolioError {
    FolioError::PackagingFailure(err.to_string())
}

/// Convert to an MS-DOS timestamp, falling back to 1980-01-01 when out of range
fn zip_timestamp(at: DateTime<Utc>) -> zip::DateTime {
    let year = u16::try_from(at.year()).unwrap_or(0);
    zip::DateTime::from_date_and_time(
        year,
        at.month() as u8,
        at.day() as u8,
        at.hour() as u8,
        at.minute() as u8,
        at.second() as u8,
    )
    .unwrap_or_default()
}
