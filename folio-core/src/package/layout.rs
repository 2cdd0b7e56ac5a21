//! Directory layout of the generated container and its storage location

use crate::error::{FolioError, Result};
use crate::manifest::PACKAGE_FILE;
use serde::{Deserialize, Serialize};

/// Name of the first archive entry
pub const MIMETYPE_FILE: &str = "mimetype";

/// Contents of the first archive entry
pub const EPUB_MIME_TYPE: &str = "application/epub+zip";

/// Container redirect file name inside the container directory
pub const CONTAINER_FILE: &str = "container.xml";

/// Where generated files go, inside the archive and in storage
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct EpubLayout {
    /// Storage prefix for finished books
    pub output_directory: String,

    /// Reserved metadata directory holding the container redirect
    pub container_directory: String,

    /// Directory holding the package, navigation and content documents
    pub content_directory: String,
}

impl Default for EpubLayout {
    fn default() -> Self {
        Self {
            output_directory: "epubs".to_string(),
            container_directory: "META-INF".to_string(),
            content_directory: "OEBPS".to_string(),
        }
    }
}

impl EpubLayout {
    /// Reject directory names that would escape the archive root or collide
    pub fn validate(&self) -> Result<()> {
        for (name, dir) in [
            ("outputDirectory", &self.output_directory),
            ("containerDirectory", &self.container_directory),
            ("contentDirectory", &self.content_directory),
        ] {
            let invalid = dir.is_empty()
                || dir.starts_with('/')
                || dir.ends_with('/')
                || dir.contains('\\')
                || dir.split('/').any(|part| part.is_empty() || part == "." || part == "..");
            if invalid {
                return Err(FolioError::Config(format!("invalid {}: '{}'", name, dir)));
            }
        }

        if self.container_directory == self.content_directory {
            return Err(FolioError::Config(
                "containerDirectory and contentDirectory must differ".to_string(),
            ));
        }

        Ok(())
    }

    /// Archive path of a file in the content directory
    pub fn content_path(&self, file_name: &str) -> String {
        format!("{}/{}", self.content_directory, file_name)
    }

    /// Archive path of the container redirect document
    pub fn container_path(&self) -> String {
        format!("{}/{}", self.container_directory, CONTAINER_FILE)
    }

    /// Archive path of the package document
    pub fn package_path(&self) -> String {
        self.content_path(PACKAGE_FILE)
    }

    /// Storage key for a finished book
    pub fn output_key(&self, book_id: &str) -> String {
        format!("{}/{}.epub", self.output_directory, book_id)
    }

    /// The container redirect document pointing at the package document
    pub fn container_xml(&self) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<container version="1.0" xmlns="urn:oasis:names:tc:opendocument:xmlns:container">
    <rootfiles>
        <rootfile full-path="{}" media-type="application/oebps-package+xml"/>
    </rootfiles>
</container>"#,
            self.package_path()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let layout = EpubLayout::default();
        assert_eq!(layout.container_path(), "META-INF/container.xml");
        assert_eq!(layout.package_path(), "OEBPS/content.opf");
        assert_eq!(layout.content_path("chapter-3.xhtml"), "OEBPS/chapter-3.xhtml");
        assert_eq!(layout.output_key("book-42"), "epubs/book-42.epub");
        assert!(layout.validate().is_ok());
    }

    #[test]
    fn test_container_points_at_package() {
        let layout = EpubLayout {
            content_directory: "content".to_string(),
            ..EpubLayout::default()
        };
        assert!(layout
            .container_xml()
            .contains(r#"full-path="content/content.opf""#));
    }

    #[test]
    fn test_validate_rejects_bad_directories() {
        for bad in ["", "/abs", "trailing/", "../up", "a//b", "a\\b"] {
            let layout = EpubLayout {
                content_directory: bad.to_string(),
                ..EpubLayout::default()
            };
            assert!(layout.validate().is_err(), "accepted {:?}", bad);
        }

        let same = EpubLayout {
            content_directory: "META-INF".to_string(),
            ..EpubLayout::default()
        };
        assert!(same.validate().is_err());
    }

    #[test]
    fn test_deserialize_partial_layout() {
        let layout: EpubLayout = serde_json::from_str(r#"{"contentDirectory": "EPUB"}"#).unwrap();
        assert_eq!(layout.content_directory, "EPUB");
        assert_eq!(layout.container_directory, "META-INF");
    }
}
