//! Core data types shared by the assembly pipeline

mod chapter;
mod document;
mod metadata;

pub use chapter::{chapter_file_name, chapter_id, Chapter};
pub use document::RenderedDocument;
pub use metadata::{BookMetadata, Language};
