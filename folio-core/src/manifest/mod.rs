//! Package document and navigation generation
//!
//! All three documents are derived from the same chapter list so they always
//! agree on which chapter files exist and in what order.

mod identifier;
mod nav;
mod ncx;
mod opf;

pub use identifier::{Clock, FixedClock, FixedIdGenerator, IdGenerator, SystemClock, UuidGenerator};
pub use nav::generate_nav_xhtml;
pub use ncx::generate_toc_ncx;
pub use opf::generate_content_opf;

use crate::types::{BookMetadata, Chapter};
use chrono::{DateTime, Utc};

/// Cover page file name inside the content directory
pub const COVER_FILE: &str = "cover.xhtml";

/// EPUB 3 navigation document file name
pub const NAV_FILE: &str = "nav.xhtml";

/// EPUB 2 navigation map file name
pub const NCX_FILE: &str = "toc.ncx";

/// Package document file name
pub const PACKAGE_FILE: &str = "content.opf";

/// Label used for the cover in both tables of contents
pub const COVER_LABEL: &str = "Cover";

/// Identity of one publication run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicationStamp {
    /// Unique identifier, without the `urn:uuid:` prefix
    pub identifier: String,

    /// Last-modified time
    pub modified: DateTime<Utc>,
}

impl PublicationStamp {
    pub fn new(identifier: impl Into<String>, modified: DateTime<Utc>) -> Self {
        Self {
            identifier: identifier.into(),
            modified,
        }
    }

    /// Draw a stamp from the injected sources
    pub fn generate(ids: &dyn IdGenerator, clock: &dyn Clock) -> Self {
        Self::new(ids.generate(), clock.now())
    }

    /// `dcterms:modified` value (`CCYY-MM-DDThh:mm:ssZ`)
    pub fn modified_string(&self) -> String {
        self.modified.format("%Y-%m-%dT%H:%M:%SZ").to_string()
    }
}

/// The three generated navigation/manifest documents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestSet {
    /// `content.opf`
    pub package_doc: String,

    /// `toc.ncx`
    pub legacy_nav: String,

    /// `nav.xhtml`
    pub modern_nav: String,
}

/// Build the package document and both navigation documents
pub fn build_manifest(
    chapters: &[Chapter],
    metadata: &BookMetadata,
    stamp: &PublicationStamp,
) -> ManifestSet {
    ManifestSet {
        package_doc: generate_content_opf(chapters, metadata, stamp),
        legacy_nav: generate_toc_ncx(chapters, &metadata.title, stamp),
        modern_nav: generate_nav_xhtml(chapters, metadata),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Language;
    use chrono::TimeZone;

    fn sample() -> (Vec<Chapter>, BookMetadata, PublicationStamp) {
        let chapters = vec![
            Chapter::new("Arrival", 0, "text"),
            Chapter::new("Departure", 1, "text"),
            Chapter::new("Arrival", 2, "text"),
        ];
        let metadata = BookMetadata::new("Travels", Language::English).unwrap();
        let stamp = PublicationStamp::new(
            "00000000-0000-4000-8000-000000000000",
            Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap(),
        );
        (chapters, metadata, stamp)
    }

    /// Chapter file references in document order
    fn chapter_refs(doc: &str) -> Vec<String> {
        doc.match_indices("chapter-")
            .filter_map(|(i, _)| {
                let rest = &doc[i..];
                let end = rest.find(".xhtml")?;
                let name = &rest[..end];
                name["chapter-".len()..]
                    .chars()
                    .all(|c| c.is_ascii_digit())
                    .then(|| format!("{}.xhtml", name))
            })
            .collect()
    }

    #[test]
    fn test_documents_agree_on_chapter_files() {
        let (chapters, metadata, stamp) = sample();
        let set = build_manifest(&chapters, &metadata, &stamp);

        let expected = vec!["chapter-1.xhtml", "chapter-2.xhtml", "chapter-3.xhtml"];
        assert_eq!(chapter_refs(&set.package_doc), expected);
        assert_eq!(chapter_refs(&set.legacy_nav), expected);
        assert_eq!(chapter_refs(&set.modern_nav), expected);
    }

    #[test]
    fn test_chapters_numbered_by_position() {
        let (_, metadata, stamp) = sample();
        let chapters = vec![
            Chapter::new("B", 1, "text"),
            Chapter::new("C", 2, "text"),
            Chapter::new("C again", 2, "text"),
        ];

        let set = build_manifest(&chapters, &metadata, &stamp);

        let expected = vec!["chapter-1.xhtml", "chapter-2.xhtml", "chapter-3.xhtml"];
        assert_eq!(chapter_refs(&set.package_doc), expected);
        assert_eq!(chapter_refs(&set.legacy_nav), expected);
        assert_eq!(chapter_refs(&set.modern_nav), expected);

        assert_eq!(set.package_doc.matches(r#"<item id="chapter-3""#).count(), 1);
        assert_eq!(set.package_doc.matches(r#"<item id="chapter-2""#).count(), 1);
        assert!(set.legacy_nav.contains(r#"<navPoint id="navpoint-1" playOrder="2">"#));
        assert!(set.legacy_nav.contains(r#"<navPoint id="navpoint-3" playOrder="4">"#));
    }

    #[test]
    fn test_modified_format() {
        let (_, _, stamp) = sample();
        assert_eq!(stamp.modified_string(), "2024-01-02T03:04:05Z");
    }

    #[test]
    fn test_stamp_from_sources() {
        let at = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let stamp = PublicationStamp::generate(&FixedIdGenerator::new("abc"), &FixedClock(at));
        assert_eq!(stamp, PublicationStamp::new("abc", at));
    }
}
