//! Conversion configuration
//!
//! Every field has a default, so an empty JSON object is a valid config.
//!
//! ```json
//! {
//!   "outputDirectory": "epubs",
//!   "containerDirectory": "META-INF",
//!   "contentDirectory": "OEBPS",
//!   "heading": { "detectShortTitles": false },
//!   "extraPatterns": [{ "script": "french", "pattern": "(?i)^chapitre\\s+\\d+" }],
//!   "compressionLevel": 6
//! }
//! ```

use crate::error::{FolioError, Result};
use crate::package::{EpubLayout, DEFAULT_COMPRESSION_LEVEL};
use crate::segment::{HeadingPatterns, HeadingPolicy, PatternSpec, Segmenter};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Archive and storage directories
    #[serde(flatten)]
    pub layout: EpubLayout,

    /// Heuristic heading thresholds
    pub heading: HeadingPolicy,

    /// Chapter label patterns added after the built-in ones
    pub extra_patterns: Vec<PatternSpec>,

    /// Deflate level for archive entries (0-9)
    pub compression_level: i32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            layout: EpubLayout::default(),
            heading: HeadingPolicy::default(),
            extra_patterns: Vec::new(),
            compression_level: DEFAULT_COMPRESSION_LEVEL,
        }
    }
}

impl Config {
    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path).map_err(|e| {
            FolioError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_json(&data)
    }

    /// Parse and validate configuration from JSON text
    pub fn from_json(data: &str) -> Result<Self> {
        let config: Config =
            serde_json::from_str(data).map_err(|e| FolioError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.layout.validate()?;

        if !(0..=9).contains(&self.compression_level) {
            return Err(FolioError::Config(format!(
                "compressionLevel must be between 0 and 9, got {}",
                self.compression_level
            )));
        }

        if self.heading.paragraphs_per_chapter == 0 {
            return Err(FolioError::Config(
                "heading.paragraphsPerChapter must be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    /// Build the segmenter described by this configuration
    pub fn segmenter(&self) -> Result<Segmenter> {
        let patterns = HeadingPatterns::builtin()
            .extend_from_specs(&self.extra_patterns)
            .map_err(|e| FolioError::Config(format!("invalid heading pattern: {}", e)))?;

        Ok(Segmenter::new()
            .with_patterns(patterns)
            .with_policy(self.heading.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_is_default() {
        let config = Config::from_json("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_flattened_layout_and_policy() {
        let config = Config::from_json(
            r#"{
                "contentDirectory": "EPUB",
                "heading": { "detectAllCaps": false, "paragraphsPerChapter": 5 },
                "compressionLevel": 1
            }"#,
        )
        .unwrap();

        assert_eq!(config.layout.content_directory, "EPUB");
        assert_eq!(config.layout.output_directory, "epubs");
        assert!(!config.heading.detect_all_caps);
        assert!(config.heading.detect_short_titles);
        assert_eq!(config.heading.paragraphs_per_chapter, 5);
        assert_eq!(config.compression_level, 1);
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(matches!(
            Config::from_json(r#"{"compressionLevel": 12}"#),
            Err(FolioError::Config(_))
        ));
        assert!(Config::from_json(r#"{"contentDirectory": "../x"}"#).is_err());
        assert!(Config::from_json(r#"{"heading": {"paragraphsPerChapter": 0}}"#).is_err());
        assert!(Config::from_json("not json").is_err());
    }

    #[test]
    fn test_extra_patterns_reach_segmenter() {
        let config = Config::from_json(
            r#"{"extraPatterns": [{"script": "french", "pattern": "(?i)^chapitre\\s+\\d+"}]}"#,
        )
        .unwrap();
        let segmenter = config.segmenter().unwrap();

        let chapters = segmenter.segment("Chapitre 1\nBonjour.\nChapitre 2\nAu revoir.");
        assert_eq!(chapters.len(), 2);
        assert_eq!(chapters[1].title, "Chapitre 2");

        let broken = Config {
            extra_patterns: vec![PatternSpec {
                script: "broken".to_string(),
                pattern: "(".to_string(),
            }],
            ..Config::default()
        };
        assert!(broken.segmenter().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("folio.json");
        std::fs::write(&path, r#"{"outputDirectory": "books"}"#).unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.layout.output_key("x"), "books/x.epub");

        assert!(Config::load(&dir.path().join("missing.json")).is_err());
    }
}
