//! XHTML rendering for chapters and the cover page

mod escape;

pub use escape::escape_xml;

use crate::segment::{is_upper_case, split_paragraphs};
use crate::types::Language;

/// A block of chapter text after classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Unit {
    /// Short, title-like text rendered as `<h2>`
    Heading(String),

    /// Body text rendered as a justified `<p>`
    Paragraph(String),
}

impl Unit {
    fn to_xhtml(&self) -> String {
        match self {
            Unit::Heading(text) => format!("        <h2>{}</h2>", escape_xml(text)),
            Unit::Paragraph(text) => format!("        <p>{}</p>", escape_xml(text)),
        }
    }
}

/// Split a chapter body into headings and paragraphs
///
/// Bodies with blank-line paragraph breaks are classified per paragraph.
/// A body with no such breaks is treated line by line instead, which suits
/// text extracted from PDFs where every line ends in a single newline.
pub fn classify_units(body: &str) -> Vec<Unit> {
    let paragraphs = split_paragraphs(body);

    if paragraphs.len() == 1 {
        return body
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| {
                let len = line.chars().count();
                if len < 100 && (is_upper_case(line) || len < 60) {
                    Unit::Heading(line.to_string())
                } else {
                    Unit::Paragraph(line.to_string())
                }
            })
            .collect();
    }

    paragraphs
        .into_iter()
        .map(|para| {
            let len = para.chars().count();
            let words = para.split_whitespace().count();
            if len < 100 && (is_upper_case(&para) || words < 10) {
                Unit::Heading(para)
            } else {
                Unit::Paragraph(para)
            }
        })
        .collect()
}

/// Render one chapter as a complete XHTML document
pub fn render_chapter(title: &str, body: &str, language: Language) -> String {
    let units: Vec<String> = classify_units(body).iter().map(Unit::to_xhtml).collect();
    let title = escape_xml(title);

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE html>
<html xmlns="http://www.w3.org/1999/xhtml" xmlns:epub="http://www.idpf.org/2007/ops" lang="{lang}" xml:lang="{lang}">
<head>
    <meta charset="UTF-8"/>
    <title>{title}</title>
    <style type="text/css">
        body {{ font-family: {font}; margin: 1em; line-height: 1.6; }}
        h1, h2 {{ margin-top: 1em; margin-bottom: 0.5em; }}
        p {{ margin: 0.5em 0; text-align: justify; }}
    </style>
</head>
<body>
    <h1>{title}</h1>
{units}
</body>
</html>"#,
        lang = language.code(),
        title = title,
        font = language.font_family(),
        units = units.join("\n"),
    )
}

/// Render the cover page, which shows only the book title
pub fn render_cover(book_title: &str, language: Language) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE html>
<html xmlns="http://www.w3.org/1999/xhtml" xmlns:epub="http://www.idpf.org/2007/ops" lang="{lang}" xml:lang="{lang}">
<head>
    <meta charset="UTF-8"/>
    <title>Cover</title>
    <style type="text/css">
        body {{
            margin: 0;
            padding: 0;
            display: flex;
            justify-content: center;
            align-items: center;
            min-height: 100vh;
            text-align: center;
            font-family: {font};
        }}
        h1 {{ font-size: 2.5em; margin: 1em; }}
    </style>
</head>
<body>
    <div>
        <h1>{title}</h1>
    </div>
</body>
</html>"#,
        lang = language.code(),
        font = language.font_family(),
        title = escape_xml(book_title),
    )
}
