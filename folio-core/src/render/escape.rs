//! XML text escaping

/// Escape text for use in XHTML element content or attribute values
///
/// Characters that XML 1.0 forbids outright (most C0 controls and the
/// `U+FFFE`/`U+FFFF` noncharacters) are dropped, since no escape makes them
/// legal. Everything else survives an unescape unchanged.
pub fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            c if is_xml_char(c) => out.push(c),
            _ => {}
        }
    }
    out
}

/// Whether `c` is allowed in an XML 1.0 document
fn is_xml_char(c: char) -> bool {
    matches!(c,
        '\t' | '\n' | '\r'
        | '\u{20}'..='\u{D7FF}'
        | '\u{E000}'..='\u{FFFD}'
        | '\u{10000}'..='\u{10FFFF}')
}
