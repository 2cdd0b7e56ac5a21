//! End-to-end assembly: text in, EPUB bytes out

use crate::config::Config;
use crate::error::{FolioError, Result};
use crate::manifest::{
    build_manifest, Clock, IdGenerator, PublicationStamp, SystemClock, UuidGenerator, COVER_FILE,
    NAV_FILE, NCX_FILE, PACKAGE_FILE,
};
use crate::package::Packager;
use crate::render::{render_chapter, render_cover};
use crate::segment::Segmenter;
use crate::types::{chapter_file_name, BookMetadata, Chapter, RenderedDocument};

/// Everything generated for one book, ready to be packaged
#[derive(Debug, Clone)]
pub struct Assembly {
    pub chapters: Vec<Chapter>,
    pub stamp: PublicationStamp,

    /// Content documents in archive order
    pub documents: Vec<RenderedDocument>,
}

/// Runs segmentation, rendering, manifest generation and packaging
///
/// Holds no per-run state, so one converter can serve many conversions,
/// including concurrent ones.
pub struct Converter {
    segmenter: Segmenter,
    packager: Packager,
    ids: Box<dyn IdGenerator>,
    clock: Box<dyn Clock>,
}

impl Converter {
    /// Converter with default patterns, layout, random identifiers and wall-clock time
    pub fn new() -> Self {
        Self {
            segmenter: Segmenter::new(),
            packager: Packager::default(),
            ids: Box::new(UuidGenerator),
            clock: Box::new(SystemClock),
        }
    }

    /// Converter configured from `config`
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;
        Ok(Self::new()
            .with_segmenter(config.segmenter()?)
            .with_packager(
                Packager::new(config.layout.clone()).with_compression_level(config.compression_level),
            ))
    }

    pub fn with_segmenter(mut self, segmenter: Segmenter) -> Self {
        self.segmenter = segmenter;
        self
    }

    pub fn with_packager(mut self, packager: Packager) -> Self {
        self.packager = packager;
        self
    }

    pub fn with_id_generator(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn segmenter(&self) -> &Segmenter {
        &self.segmenter
    }

    pub fn packager(&self) -> &Packager {
        &self.packager
    }

    /// Generate every document for `text` without packaging
    pub fn assemble(&self, text: &str, metadata: &BookMetadata) -> Result<Assembly> {
        if text.trim().is_empty() {
            return Err(FolioError::EmptyContent);
        }

        let chapters = self.segmenter.segment(text);
        if chapters.is_empty() {
            return Err(FolioError::EmptyContent);
        }

        let stamp = PublicationStamp::generate(self.ids.as_ref(), self.clock.as_ref());
        let layout = self.packager.layout();
        let language = metadata.language;

        let mut documents = Vec::with_capacity(chapters.len() + 4);
        documents.push(RenderedDocument::new(
            layout.content_path(COVER_FILE),
            render_cover(&metadata.title, language),
        ));

        for (i, chapter) in chapters.iter().enumerate() {
            documents.push(RenderedDocument::new(
                layout.content_path(&chapter_file_name(i + 1)),
                render_chapter(&chapter.title, &chapter.body, language),
            ));
        }

        let manifest = build_manifest(&chapters, metadata, &stamp);
        documents.push(RenderedDocument::new(
            layout.content_path(PACKAGE_FILE),
            manifest.package_doc,
        ));
        documents.push(RenderedDocument::new(
            layout.content_path(NCX_FILE),
            manifest.legacy_nav,
        ));
        documents.push(RenderedDocument::new(
            layout.content_path(NAV_FILE),
            manifest.modern_nav,
        ));

        Ok(Assembly {
            chapters,
            stamp,
            documents,
        })
    }

    /// Convert `text` into a complete EPUB archive
    pub fn convert(&self, text: &str, metadata: &BookMetadata) -> Result<Vec<u8>> {
        let assembly = self.assemble(text, metadata)?;
        self.packager.package(&assembly.documents, assembly.stamp.modified)
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}
