//! EPUB 3 package document (`content.opf`)

use super::{PublicationStamp, COVER_FILE, NAV_FILE, NCX_FILE};
use crate::render::escape_xml;
use crate::types::{chapter_file_name, chapter_id, BookMetadata, Chapter};

const XHTML_MEDIA_TYPE: &str = "application/xhtml+xml";

/// Generate the package document
///
/// The manifest registers the cover, both navigation documents and every
/// chapter. The spine opens with the cover and then follows chapter order.
pub fn generate_content_opf(
    chapters: &[Chapter],
    metadata: &BookMetadata,
    stamp: &PublicationStamp,
) -> String {
    let mut items = vec![
        format!(r#"        <item id="cover" href="{COVER_FILE}" media-type="{XHTML_MEDIA_TYPE}"/>"#),
        format!(
            r#"        <item id="nav" href="{NAV_FILE}" media-type="{XHTML_MEDIA_TYPE}" properties="nav"/>"#
        ),
        format!(r#"        <item id="ncx" href="{NCX_FILE}" media-type="application/x-dtbncx+xml"/>"#),
    ];
    let mut itemrefs = vec![r#"        <itemref idref="cover"/>"#.to_string()];

    for number in 1..=chapters.len() {
        let id = chapter_id(number);
        items.push(format!(
            r#"        <item id="{id}" href="{}" media-type="{XHTML_MEDIA_TYPE}"/>"#,
            chapter_file_name(number)
        ));
        itemrefs.push(format!(r#"        <itemref idref="{id}"/>"#));
    }

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<package xmlns="http://www.idpf.org/2007/opf" version="3.0" unique-identifier="book-id">
    <metadata xmlns:dc="http://purl.org/dc/elements/1.1/">
        <dc:identifier id="book-id">urn:uuid:{identifier}</dc:identifier>
        <dc:title>{title}</dc:title>
        <dc:language>{lang}</dc:language>
        <dc:creator>Unknown</dc:creator>
        <meta property="dcterms:modified">{modified}</meta>
    </metadata>
    <manifest>
{items}
    </manifest>
    <spine toc="ncx">
{itemrefs}
    </spine>
</package>"#,
        identifier = escape_xml(&stamp.identifier),
        title = escape_xml(&metadata.title),
        lang = metadata.language.code(),
        modified = stamp.modified_string(),
        items = items.join("\n"),
        itemrefs = itemrefs.join("\n"),
    )
}
