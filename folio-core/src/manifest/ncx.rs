//! EPUB 2 navigation map (`toc.ncx`)

use super::{PublicationStamp, COVER_FILE, COVER_LABEL};
use crate::render::escape_xml;
use crate::types::{chapter_file_name, Chapter};

/// Generate the NCX navigation map
///
/// The cover sits at play order 1; the chapter at zero-based position `i`
/// follows at `i + 2`. `dtb:uid` matches the package identifier.
pub fn generate_toc_ncx(chapters: &[Chapter], book_title: &str, stamp: &PublicationStamp) -> String {
    let nav_points: Vec<String> = chapters
        .iter()
        .enumerate()
        .map(|(i, chapter)| {
            format!(
                r#"        <navPoint id="navpoint-{number}" playOrder="{play_order}">
            <navLabel>
                <text>{label}</text>
            </navLabel>
            <content src="{src}"/>
        </navPoint>"#,
                number = i + 1,
                play_order = i + 2,
                label = escape_xml(&chapter.title),
                src = chapter_file_name(i + 1),
            )
        })
        .collect();

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<ncx xmlns="http://www.daisy.org/z3986/2005/ncx/" version="2005-1">
    <head>
        <meta name="dtb:uid" content="urn:uuid:{identifier}"/>
        <meta name="dtb:depth" content="1"/>
        <meta name="dtb:totalPageCount" content="0"/>
        <meta name="dtb:maxPageNumber" content="0"/>
    </head>
    <docTitle>
        <text>{title}</text>
    </docTitle>
    <navMap>
        <navPoint id="navpoint-0" playOrder="1">
            <navLabel>
                <text>{COVER_LABEL}</text>
            </navLabel>
            <content src="{COVER_FILE}"/>
        </navPoint>
{nav_points}
    </navMap>
</ncx>"#,
        identifier = escape_xml(&stamp.identifier),
        title = escape_xml(book_title),
        nav_points = nav_points.join("\n"),
    )
}
