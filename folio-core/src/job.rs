//! Storage-backed conversion jobs
//!
//! A job reads a manuscript from storage, converts it and writes the finished
//! book under the configured output directory.

use crate::convert::Converter;
use crate::error::{FolioError, Result};
use crate::extract::extractor_for_path;
use crate::package::EpubLayout;
use crate::storage::StorageProvider;
use crate::types::{BookMetadata, Language};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// A request to convert one manuscript
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConversionRequest {
    /// Identifier of the book; names the output file
    pub book_id: String,

    /// Storage key of the uploaded manuscript
    pub manuscript_key: String,

    /// Target language
    #[serde(default)]
    pub language: Language,
}

/// Outcome of a successful job
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionOutcome {
    /// Storage key the book was written to
    pub output_key: String,

    /// Number of chapters in the book
    pub chapters: usize,

    /// Size of the archive in bytes
    pub bytes: usize,
}

/// Runs conversions against a storage backend
pub struct ConversionJob {
    storage: Arc<dyn StorageProvider>,
    converter: Converter,
    layout: EpubLayout,
}

impl ConversionJob {
    pub fn new(storage: Arc<dyn StorageProvider>, converter: Converter) -> Self {
        let layout = converter.packager().layout().clone();
        Self {
            storage,
            converter,
            layout,
        }
    }

    pub fn converter(&self) -> &Converter {
        &self.converter
    }

    /// Convert the manuscript named by `request`
    pub async fn run(&self, request: &ConversionRequest) -> Result<ConversionOutcome> {
        if request.book_id.trim().is_empty() || request.book_id.contains('/') {
            return Err(FolioError::MalformedMetadata(format!(
                "invalid book id '{}'",
                request.book_id
            )));
        }

        info!(
            book_id = %request.book_id,
            key = %request.manuscript_key,
            "Extracting text from manuscript"
        );
        let data = self.storage.read(&request.manuscript_key).await?;
        let extractor = extractor_for_path(&request.manuscript_key);
        let text = extractor.extract(&data)?;

        if text.trim().is_empty() {
            warn!(key = %request.manuscript_key, "No text content extracted");
            return Err(FolioError::EmptyContent);
        }

        let metadata = BookMetadata::from_file_name(&request.manuscript_key, request.language)?;

        let assembly = self.converter.assemble(&text, &metadata)?;
        info!(
            title = %metadata.title,
            chapters = assembly.chapters.len(),
            "Detected chapters"
        );
        for chapter in &assembly.chapters {
            debug!(order = chapter.order, title = %chapter.title, "Chapter");
        }

        let bytes = self
            .converter
            .packager()
            .package(&assembly.documents, assembly.stamp.modified)?;

        let output_key = self.layout.output_key(&request.book_id);
        let size = bytes.len();
        self.storage.write(&output_key, bytes).await?;

        info!(output = %output_key, bytes = size, "EPUB generated successfully");

        Ok(ConversionOutcome {
            output_key,
            chapters: assembly.chapters.len(),
            bytes: size,
        })
    }
}
