//! HTML stripping for free-text fields.
//!
//! Geodata formats frequently embed HTML fragments in name/note fields
//! (`<b>Main St</b>`, `Caf&eacute;` spelled with numeric entities, …).
//! Display fields want plain text, so readers run every free-text value
//! through [`strip_html`] before storing it.  Values used as *lookup keys*
//! (e.g. category values matched against an icon table) must stay raw and
//! are never passed through here.

/// Strip HTML markup from `text`, returning plain text.
///
/// - Tags are removed.  `<br>` and `<p>` (and their closing forms) become a
///   single newline so line structure survives.
/// - Known named entities (`&amp;` `&lt;` `&gt;` `&quot;` `&apos;` `&nbsp;`)
///   and numeric entities (`&#233;`, `&#xE9;`) are decoded.
/// - Anything unrecognized is passed through unchanged; an unterminated tag
///   swallows the remainder of the string, matching the behavior of a
///   forgiving streaming stripper.
pub fn strip_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(i) = rest.find(['<', '&']) {
        out.push_str(&rest[..i]);
        rest = &rest[i..];

        if rest.starts_with('<') {
            match rest.find('>') {
                Some(end) => {
                    let name = tag_name(&rest[1..end]);
                    if name.eq_ignore_ascii_case("br") || name.eq_ignore_ascii_case("p") {
                        out.push('\n');
                    }
                    rest = &rest[end + 1..];
                }
                // Unterminated tag: drop the rest.
                None => rest = "",
            }
        } else {
            // Entity: look for ';' within the next few characters.
            let end = rest
                .char_indices()
                .take(10)
                .skip(1)
                .find(|&(_, c)| c == ';')
                .map(|(i, _)| i);
            match end {
                Some(end) => {
                    match decode_entity(&rest[1..end]) {
                        Some(c) => out.push(c),
                        // Unknown entity: keep it verbatim.
                        None => out.push_str(&rest[..=end]),
                    }
                    rest = &rest[end + 1..];
                }
                None => {
                    out.push('&');
                    rest = &rest[1..];
                }
            }
        }
    }

    out.push_str(rest);
    out
}

/// Extract the element name from tag innards, ignoring `/` and attributes.
fn tag_name(tag: &str) -> &str {
    tag.trim_start_matches('/')
        .split(|c: char| c.is_whitespace() || c == '/')
        .next()
        .unwrap_or("")
}

/// Decode one entity body (the text between `&` and `;`).
fn decode_entity(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some(' '),
        _ => {
            let digits = name.strip_prefix('#')?;
            let code = match digits.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => digits.parse().ok()?,
            };
            char::from_u32(code)
        }
    }
}
