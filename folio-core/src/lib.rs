//! Folio Core Library
//!
//! Turns manuscript text into an EPUB publication. The text is segmented
//! into chapters, each chapter and a cover page are rendered as XHTML, the
//! package document and both navigation documents are generated, and all of
//! it is packed into an EPUB zip container.
//!
//! ```no_run
//! use folio_core::{BookMetadata, Converter, Language};
//!
//! let metadata = BookMetadata::new("My Novel", Language::English)?;
//! let epub = Converter::new().convert("Chapter 1\n\nIt begins.", &metadata)?;
//! std::fs::write("my-novel.epub", epub)?;
//! # Ok::<(), folio_core::FolioError>(())
//! ```

pub mod config;
pub mod convert;
pub mod error;
pub mod extract;
pub mod job;
pub mod manifest;
pub mod package;
pub mod render;
pub mod segment;
pub mod storage;
pub mod types;

pub use config::Config;
pub use convert::{Assembly, Converter};
pub use error::{ExtractError, FolioError, Result, StorageError};
pub use types::{BookMetadata, Chapter, Language, RenderedDocument};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_produces_zip() {
        let metadata = BookMetadata::new("Test Book", Language::English).unwrap();
        let epub = Converter::new()
            .convert("Chapter 1\n\nHello.\n\nChapter 2\n\nBye.", &metadata)
            .unwrap();
        assert_eq!(&epub[0..2], b"PK");
    }
}
