//! Chapter type representing a single segmented unit of a manuscript

use serde::{Deserialize, Serialize};

/// A single chapter of a manuscript
///
/// `order` is zero-based and dense across a segmentation run; it is assigned
/// when the chapter is created and never changes afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Chapter {
    /// Chapter title, usually the heading line verbatim
    pub title: String,

    /// Zero-based position in the book
    pub order: usize,

    /// Full text of the chapter, possibly several paragraphs
    pub body: String,
}

impl Chapter {
    /// Create a new chapter
    pub fn new(title: impl Into<String>, order: usize, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            order,
            body: body.into(),
        }
    }

    /// 1-based position, used for file names and manifest identifiers
    pub fn number(&self) -> usize {
        self.order + 1
    }

    /// Manifest identifier (`chapter-<n>`)
    pub fn id(&self) -> String {
        chapter_id(self.number())
    }

    /// File name inside the content directory (`chapter-<n>.xhtml`)
    pub fn file_name(&self) -> String {
        chapter_file_name(self.number())
    }
}

/// Manifest identifier for the chapter at 1-based position `number`
pub fn chapter_id(number: usize) -> String {
    format!("chapter-{}", number)
}

/// Content file name for the chapter at 1-based position `number`
pub fn chapter_file_name(number: usize) -> String {
    format!("chapter-{}.xhtml", number)
}
