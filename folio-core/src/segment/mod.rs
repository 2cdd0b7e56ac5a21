//! Chapter segmentation of raw manuscript text
//!
//! Text extracted from PDFs and word processors has no reliable structure, so
//! chapter boundaries are inferred heuristically: a line is a heading when it
//! matches one of the configured chapter labels, or when it looks like a title
//! (all upper-case, or a short line after a blank one) and has body text
//! directly beneath it. When fewer than two chapters come out of that pass the
//! text is instead cut into fixed-size groups of paragraphs.

mod patterns;

pub use patterns::{HeadingPattern, HeadingPatterns, PatternSpec};

use crate::types::Chapter;
use serde::{Deserialize, Serialize};

/// Title of the chapter that collects text before the first heading
pub const INTRODUCTION_TITLE: &str = "Introduction";

/// Tunable thresholds for heuristic heading detection
///
/// No threshold is right for every manuscript; short dialogue lines in
/// particular can be mistaken for titles.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct HeadingPolicy {
    /// Treat all upper-case lines as headings
    pub detect_all_caps: bool,

    /// Upper bound (exclusive, in characters) for an all upper-case heading
    pub all_caps_max_len: usize,

    /// Treat short lines following a blank line as headings
    pub detect_short_titles: bool,

    /// Upper bound (exclusive) for a short title
    pub short_title_max_len: usize,

    /// Lower bound (exclusive) for a short title
    pub short_title_min_len: usize,

    /// Paragraphs per synthetic chapter when no structure is found
    pub paragraphs_per_chapter: usize,
}

impl Default for HeadingPolicy {
    fn default() -> Self {
        Self {
            detect_all_caps: true,
            all_caps_max_len: 100,
            detect_short_titles: true,
            short_title_max_len: 80,
            short_title_min_len: 10,
            paragraphs_per_chapter: 15,
        }
    }
}

/// Splits manuscript text into ordered chapters
#[derive(Debug, Clone)]
pub struct Segmenter {
    patterns: HeadingPatterns,
    policy: HeadingPolicy,
}

impl Segmenter {
    /// Segmenter with the built-in chapter labels and default policy
    pub fn new() -> Self {
        Self {
            patterns: HeadingPatterns::builtin(),
            policy: HeadingPolicy::default(),
        }
    }

    /// Replace the chapter label table
    pub fn with_patterns(mut self, patterns: HeadingPatterns) -> Self {
        self.patterns = patterns;
        self
    }

    /// Replace the heuristic policy
    pub fn with_policy(mut self, policy: HeadingPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> &HeadingPolicy {
        &self.policy
    }

    /// Split `text` into chapters
    ///
    /// The caller must reject blank text first; for blank input this returns
    /// an empty list. For any other input the result is non-empty, `order`
    /// runs `0..n` and every body holds visible text.
    pub fn segment(&self, text: &str) -> Vec<Chapter> {
        let text = normalize_newlines(text);
        let chapters = self.split_by_headings(&text);

        if chapters.len() <= 1 {
            return self.split_by_paragraphs(&text);
        }

        chapters
    }

    /// Whether `lines[index]` opens a new chapter
    ///
    /// An index past the end is never a heading.
    pub fn is_heading(&self, lines: &[&str], index: usize) -> bool {
        let line = match lines.get(index) {
            Some(line) => line.trim(),
            None => return false,
        };
        if line.is_empty() {
            return false;
        }

        if self.patterns.matches(line) {
            return true;
        }

        let len = line.chars().count();
        let all_caps = self.policy.detect_all_caps
            && len < self.policy.all_caps_max_len
            && is_upper_case(line);
        let short_title = self.policy.detect_short_titles
            && len < self.policy.short_title_max_len
            && len > self.policy.short_title_min_len
            && index > 0
            && lines[index - 1].trim().is_empty();

        if !(all_caps || short_title) {
            return false;
        }

        // A heuristic heading needs body text right below it
        lines
            .get(index + 1)
            .map(|next| !next.trim().is_empty())
            .unwrap_or(false)
    }

    fn split_by_headings(&self, text: &str) -> Vec<Chapter> {
        let lines: Vec<&str> = text.split('\n').collect();
        let mut chapters = Vec::new();
        let mut current = ChapterBuilder::new(INTRODUCTION_TITLE);

        for (index, line) in lines.iter().enumerate() {
            if self.is_heading(&lines, index) {
                let title = line.trim();
                if current.has_body() {
                    let finished =
                        std::mem::replace(&mut current, ChapterBuilder::new(title));
                    chapters.push(finished.build(chapters.len()));
                } else {
                    current.title = title.to_string();
                }
            } else {
                current.push(line);
            }
        }

        if current.has_body() {
            chapters.push(current.build(chapters.len()));
        }

        chapters
    }

    fn split_by_paragraphs(&self, text: &str) -> Vec<Chapter> {
        let per_chapter = self.policy.paragraphs_per_chapter.max(1);
        let paragraphs = split_paragraphs(text);

        paragraphs
            .chunks(per_chapter)
            .enumerate()
            .map(|(order, group)| {
                Chapter::new(format!("Chapter {}", order + 1), order, group.join("\n\n"))
            })
            .collect()
    }
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new()
    }
}

/// Chapter under construction
struct ChapterBuilder {
    title: String,
    lines: Vec<String>,
    has_text: bool,
}

impl ChapterBuilder {
    fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lines: Vec::new(),
            has_text: false,
        }
    }

    fn push(&mut self, line: &str) {
        if !line.trim().is_empty() {
            self.has_text = true;
        }
        self.lines.push(line.trim_end().to_string());
    }

    fn has_body(&self) -> bool {
        self.has_text
    }

    fn build(self, order: usize) -> Chapter {
        let body = self.lines.join("\n").trim().to_string();
        Chapter::new(self.title, order, body)
    }
}

/// Convert `\r\n` and lone `\r` line endings to `\n`
pub fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Split on blank-line boundaries, dropping blank paragraphs
///
/// A paragraph is a run of lines that contain visible text; any line holding
/// only whitespace ends it.
pub fn split_paragraphs(text: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                paragraphs.push(current.join("\n").trim().to_string());
                current.clear();
            }
        } else {
            current.push(line);
        }
    }

    if !current.is_empty() {
        paragraphs.push(current.join("\n").trim().to_string());
    }

    paragraphs
}

/// Whether text contains a cased letter and no lower-case letters
pub fn is_upper_case(text: &str) -> bool {
    text.chars().any(char::is_uppercase) && !text.chars().any(char::is_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(chapters: &[Chapter]) -> Vec<&str> {
        chapters.iter().map(|c| c.title.as_str()).collect()
    }

    #[test]
    fn test_labelled_chapters() {
        let text = "Chapter 1\n\nHello world.\n\nChapter 2\n\nGoodbye.";
        let chapters = Segmenter::new().segment(text);

        assert_eq!(titles(&chapters), vec!["Chapter 1", "Chapter 2"]);
        assert_eq!(chapters[0].body, "Hello world.");
        assert_eq!(chapters[1].body, "Goodbye.");
        assert_eq!(chapters[0].order, 0);
        assert_eq!(chapters[1].order, 1);
    }

    #[test]
    fn test_text_before_first_heading_is_introduction() {
        let text = "Some opening words.\n\nChapter 1\nThe story begins.\nChapter 2\nIt ends.";
        let chapters = Segmenter::new().segment(text);

        assert_eq!(titles(&chapters), vec!["Introduction", "Chapter 1", "Chapter 2"]);
        assert_eq!(chapters[0].body, "Some opening words.");
    }

    #[test]
    fn test_all_caps_heading_needs_following_text() {
        let segmenter = Segmenter::new();
        let lines = vec!["THE RETURN", "He came back at dawn.", "", "THE END"];

        assert!(segmenter.is_heading(&lines, 0));
        assert!(!segmenter.is_heading(&lines, 3));
        assert!(!segmenter.is_heading(&lines, 2));
    }

    #[test]
    fn test_short_title_after_blank_line() {
        let segmenter = Segmenter::new();
        let lines = vec![
            "Some earlier text here.",
            "",
            "A Quiet Morning",
            "The kettle whistled.",
            "",
            "Short",
            "Too short to be a title.",
        ];

        assert!(segmenter.is_heading(&lines, 2));
        assert!(!segmenter.is_heading(&lines, 5));
        // First line has no blank line above it
        assert!(!segmenter.is_heading(&lines, 0));
    }

    #[test]
    fn test_policy_can_disable_heuristics() {
        let policy = HeadingPolicy {
            detect_all_caps: false,
            detect_short_titles: false,
            ..HeadingPolicy::default()
        };
        let segmenter = Segmenter::new().with_policy(policy);
        let lines = vec!["THE RETURN", "He came back at dawn."];

        assert!(!segmenter.is_heading(&lines, 0));
    }

    #[test]
    fn test_mixed_line_endings() {
        let text = "Chapter 1\r\nFirst.\r\nChapter 2\rSecond.";
        let chapters = Segmenter::new().segment(text);

        assert_eq!(titles(&chapters), vec!["Chapter 1", "Chapter 2"]);
        assert_eq!(chapters[1].body, "Second.");
    }

    #[test]
    fn test_fallback_groups_paragraphs() {
        let text = (1..=40)
            .map(|i| format!("this is paragraph {} of the text.", i))
            .collect::<Vec<_>>()
            .join("\n\n");
        let chapters = Segmenter::new().segment(&text);

        assert_eq!(titles(&chapters), vec!["Chapter 1", "Chapter 2", "Chapter 3"]);
        let sizes: Vec<usize> = chapters
            .iter()
            .map(|c| split_paragraphs(&c.body).len())
            .collect();
        assert_eq!(sizes, vec![15, 15, 10]);
        assert!(chapters[2].body.starts_with("this is paragraph 31"));
    }

    #[test]
    fn test_fallback_single_short_text() {
        let chapters = Segmenter::new().segment("just a few words");

        assert_eq!(chapters.len(), 1);
        assert_eq!(chapters[0].title, "Chapter 1");
        assert_eq!(chapters[0].body, "just a few words");
    }

    #[test]
    fn test_custom_paragraph_group_size() {
        let policy = HeadingPolicy {
            paragraphs_per_chapter: 2,
            ..HeadingPolicy::default()
        };
        let chapters = Segmenter::new()
            .with_policy(policy)
            .segment("one.\n\ntwo.\n\nthree.");

        assert_eq!(chapters.len(), 2);
        assert_eq!(chapters[1].body, "three.");
    }

    #[test]
    fn test_blank_input_yields_nothing() {
        assert!(Segmenter::new().segment("  \n\n \t ").is_empty());
    }

    #[test]
    fn test_is_heading_out_of_range() {
        let segmenter = Segmenter::new();
        let lines = ["Chapter 1", "Text."];

        assert!(segmenter.is_heading(&lines, 0));
        assert!(!segmenter.is_heading(&lines, 2));
        assert!(!segmenter.is_heading(&[], 0));
    }

    #[test]
    fn test_is_upper_case() {
        assert!(is_upper_case("PART ONE"));
        assert!(is_upper_case("I. THE BEGINNING"));
        assert!(!is_upper_case("Part One"));
        assert!(!is_upper_case("1984"));
        assert!(!is_upper_case("පළමු කොටස"));
    }
}
