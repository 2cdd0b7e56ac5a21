//! Book metadata supplied once per conversion

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, Result};

/// Target language of the publication
///
/// Only two languages are supported. Unknown codes fall back to the default.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, Hash)]
#[serde(from = "String", into = "String")]
pub enum Language {
    #[default]
    English,
    Sinhala,
}

impl From<String> for Language {
    fn from(code: String) -> Self {
        Language::from_code(&code)
    }
}

impl From<Language> for String {
    fn from(language: Language) -> Self {
        language.code().to_string()
    }
}

impl Language {
    /// Parse a language code, mapping anything unrecognised to English
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "si" | "sin" | "sinhala" => Language::Sinhala,
            _ => Language::English,
        }
    }

    /// Two-letter code for `dc:language` and `xml:lang`
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Sinhala => "si",
        }
    }

    /// CSS font stack for body text
    pub fn font_family(&self) -> &'static str {
        match self {
            Language::English => "serif",
            Language::Sinhala => "'Noto Serif Sinhala', 'Iskoola Pota', serif",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Language {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Language::from_code(s))
    }
}

/// Title and language of the book being assembled
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookMetadata {
    /// Human-readable book title
    pub title: String,

    /// Target language
    pub language: Language,
}

impl BookMetadata {
    /// Create validated metadata
    ///
    /// The title must contain visible text and no control characters.
    pub fn new(title: impl Into<String>, language: Language) -> Result<Self> {
        let title = title.into().trim().to_string();

        if title.is_empty() {
            return Err(FolioError::MalformedMetadata(
                "book title is empty".to_string(),
            ));
        }

        if let Some(c) = title.chars().find(|c| c.is_control()) {
            return Err(FolioError::MalformedMetadata(format!(
                "book title contains control character U+{:04X}",
                c as u32
            )));
        }

        Ok(Self { title, language })
    }

    /// Derive metadata from a manuscript file name (`drafts/My Novel.docx` -> `My Novel`)
    pub fn from_file_name(path: &str, language: Language) -> Result<Self> {
        let stem = std::path::Path::new(path)
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| {
                FolioError::MalformedMetadata(format!("cannot derive a title from '{}'", path))
            })?;
        Self::new(stem, language)
    }
}
