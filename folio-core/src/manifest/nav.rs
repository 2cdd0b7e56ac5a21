//! EPUB 3 navigation document (`nav.xhtml`)

use super::{COVER_FILE, COVER_LABEL};
use crate::render::escape_xml;
use crate::types::{chapter_file_name, BookMetadata, Chapter};

/// Generate the navigation document: cover first, then chapters in order
pub fn generate_nav_xhtml(chapters: &[Chapter], metadata: &BookMetadata) -> String {
    let items: Vec<String> = chapters
        .iter()
        .enumerate()
        .map(|(i, chapter)| {
            format!(
                r#"            <li><a href="{}">{}</a></li>"#,
                chapter_file_name(i + 1),
                escape_xml(&chapter.title)
            )
        })
        .collect();

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE html>
<html xmlns="http://www.w3.org/1999/xhtml" xmlns:epub="http://www.idpf.org/2007/ops" lang="{lang}" xml:lang="{lang}">
<head>
    <meta charset="UTF-8"/>
    <title>{title}</title>
</head>
<body>
    <nav epub:type="toc">
        <h1>Table of Contents</h1>
        <ol>
            <li><a href="{COVER_FILE}">{COVER_LABEL}</a></li>
{items}
        </ol>
    </nav>
</body>
</html>"#,
        lang = metadata.language.code(),
        title = escape_xml(&metadata.title),
        items = items.join("\n"),
    )
}
