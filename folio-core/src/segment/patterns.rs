//! Chapter label matchers
//!
//! Each entry pairs a script/language label with a compiled expression. The
//! segmenter only asks whether any entry matches, so adding a language is a
//! matter of pushing another entry.

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Uncompiled pattern, as it appears in configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PatternSpec {
    /// Script or language the pattern belongs to (informational)
    pub script: String,

    /// Regular expression matched against a trimmed line
    pub pattern: String,
}

/// A compiled chapter label matcher
#[derive(Debug, Clone)]
pub struct HeadingPattern {
    script: String,
    regex: Regex,
}

impl HeadingPattern {
    pub fn new(script: impl Into<String>, pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            script: script.into(),
            regex: Regex::new(pattern)?,
        })
    }

    pub fn script(&self) -> &str {
        &self.script
    }

    pub fn is_match(&self, line: &str) -> bool {
        self.regex.is_match(line)
    }
}

const ENGLISH: &[&str] = &[
    r"(?i)^chapter\s+(\d+)",
    r"(?i)^chapter\s+([ivxlcdm]+)\b",
    r"(?i)^(\d+)\.\s+chapter",
    r"(?i)^chapter\s+(\d+):",
];

const SINHALA: &[&str] = &[
    r"^පරිච්ඡේද\s+(\d+)",
    r"^(\d+)\s*පරිච්ඡේදය",
    r"^පළමු\s+පරිච්ඡේදය",
    r"^දෙවන\s+පරිච්ඡේදය",
    r"^තෙවන\s+පරිච්ඡේදය",
    r"^සිව්වන\s+පරිච්ඡේදය",
    r"^පස්වන\s+පරිච්ඡේදය",
];

/// Ordered table of chapter label matchers
#[derive(Debug, Clone, Default)]
pub struct HeadingPatterns {
    patterns: Vec<HeadingPattern>,
}

impl HeadingPatterns {
    /// An empty table; only the heuristic tests will fire
    pub fn empty() -> Self {
        Self::default()
    }

    /// English and Sinhala chapter labels
    pub fn builtin() -> Self {
        let mut table = Self::empty();
        for (script, patterns) in [("english", ENGLISH), ("sinhala", SINHALA)] {
            for pattern in patterns {
                // Built-in expressions are constants
                if let Ok(compiled) = HeadingPattern::new(script, pattern) {
                    table.patterns.push(compiled);
                }
            }
        }
        table
    }

    /// Append a pattern
    pub fn with_pattern(mut self, script: impl Into<String>, pattern: &str) -> Result<Self, regex::Error> {
        self.patterns.push(HeadingPattern::new(script, pattern)?);
        Ok(self)
    }

    /// Append every configured pattern
    pub fn extend_from_specs(mut self, specs: &[PatternSpec]) -> Result<Self, regex::Error> {
        for spec in specs {
            self = self.with_pattern(spec.script.clone(), &spec.pattern)?;
        }
        Ok(self)
    }

    /// Whether any pattern matches the (already trimmed) line
    pub fn matches(&self, line: &str) -> bool {
        self.patterns.iter().any(|p| p.is_match(line))
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HeadingPattern> {
        self.patterns.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_compiles_every_pattern() {
        let table = HeadingPatterns::builtin();
        assert_eq!(table.len(), ENGLISH.len() + SINHALA.len());
        assert!(table.iter().any(|p| p.script() == "sinhala"));
    }

    #[test]
    fn test_english_labels() {
        let table = HeadingPatterns::builtin();
        assert!(table.matches("Chapter 1"));
        assert!(table.matches("CHAPTER 12: The Storm"));
        assert!(table.matches("chapter iv"));
        assert!(table.matches("3. Chapter"));
        assert!(!table.matches("The chapter ended quietly."));
        assert!(!table.matches("Chapterhouse"));
    }

    #[test]
    fn test_sinhala_labels() {
        let table = HeadingPatterns::builtin();
        assert!(table.matches("පරිච්ඡේද 2"));
        assert!(table.matches("3 පරිච්ඡේදය"));
        assert!(table.matches("පළමු පරිච්ඡේදය"));
        assert!(table.matches("පස්වන පරිච්ඡේදය"));
    }

    #[test]
    fn test_custom_pattern() {
        let table = HeadingPatterns::empty()
            .with_pattern("french", r"(?i)^chapitre\s+\d+")
            .unwrap();
        assert!(table.matches("Chapitre 7"));
        assert!(!table.matches("Chapter 7"));

        assert!(HeadingPatterns::empty().with_pattern("broken", "(").is_err());
    }
}
