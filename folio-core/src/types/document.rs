//! Generated archive entries

/// A single file destined for the EPUB container
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    /// Archive-relative path (e.g. `OEBPS/chapter-1.xhtml`)
    pub path: String,

    /// Raw file contents
    pub content: Vec<u8>,
}

impl RenderedDocument {
    pub fn new(path: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Contents as UTF-8, if they are valid text
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.content).ok()
    }
}
