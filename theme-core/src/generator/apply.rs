//! Injection of theme CSS into an HTML document's theme `<style>` element.

use std::path::Path;

use tracing::debug;

use crate::error::{Result, ThemeError};

/// `id` of the style element that holds the theme variables.
pub const STYLE_ELEMENT_ID: &str = "themeforge-variables";

/// Replace the theme style element's content in `document` with `css`.
///
/// An existing element is updated in place. Otherwise a new one is inserted
/// before `</head>`, or at the top of the document when there is no head.
pub fn apply_theme(document: &str, css: &str) -> Result<String> {
    // ASCII lowercasing keeps byte offsets aligned with `document`.
    let lower = document.to_ascii_lowercase();
    let element = style_element(css);

    if let Some(open_start) = find_theme_style(&lower) {
        let content_start = lower[open_start..]
            .find('>')
            .map(|i| open_start + i + 1)
            .ok_or_else(|| ThemeError::MalformedDocument {
                message: "unterminated theme <style> tag".to_string(),
            })?;
        let content_end = lower[content_start..]
            .find("</style>")
            .map(|i| content_start + i)
            .ok_or_else(|| ThemeError::MalformedDocument {
                message: "theme <style> element is never closed".to_string(),
            })?;

        debug!("Replacing existing theme style element");
        let mut out = String::with_capacity(document.len() + css.len());
        out.push_str(&document[..content_start]);
        out.push('\n');
        out.push_str(css);
        out.push_str(&document[content_end..]);
        return Ok(out);
    }

    if let Some(head_end) = lower.find("</head>") {
        debug!("Inserting theme style element into <head>");
        let mut out = String::with_capacity(document.len() + element.len());
        out.push_str(&document[..head_end]);
        out.push_str(&element);
        out.push_str(&document[head_end..]);
        return Ok(out);
    }

    debug!("Document has no <head>, prepending theme style element");
    Ok(format!("{}{}", element, document))
}

/// Apply `css` to the HTML file at `path`, rewriting it in place.
pub fn apply_theme_to_file(path: &Path, css: &str) -> Result<()> {
    if !path.exists() {
        return Err(ThemeError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let document = std::fs::read_to_string(path)?;
    let updated = apply_theme(&document, css)?;
    std::fs::write(path, updated)?;
    Ok(())
}

fn style_element(css: &str) -> String {
    format!("<style id=\"{}\">\n{}</style>\n", STYLE_ELEMENT_ID, css)
}

/// Byte offset of the `<style` tag carrying the theme id.
fn find_theme_style(lower: &str) -> Option<usize> {
    let mut from = 0;
    while let Some(i) = lower[from..].find("<style") {
        let start = from + i;
        let name_end = start + "<style".len();
        let tag_end = lower[start..].find('>').map_or(lower.len(), |j| start + j);
        let is_style_tag = lower[name_end..]
            .chars()
            .next()
            .map_or(false, |c| c.is_ascii_whitespace() || c == '>' || c == '/');
        if is_style_tag
            && attribute_value(&lower[name_end..tag_end], "id") == Some(STYLE_ELEMENT_ID)
        {
            return Some(start);
        }
        from = name_end;
    }
    None
}

/// Value of attribute `name` in the attribute text of a start tag.
///
/// Accepts double-quoted, single-quoted and unquoted values. Only whole
/// attribute names match, so `data-id` is not `id`.
fn attribute_value<'a>(attrs: &'a str, name: &str) -> Option<&'a str> {
    let bytes = attrs.as_bytes();
    let mut pos = 0;

    while pos < bytes.len() {
        while pos < bytes.len() && (bytes[pos].is_ascii_whitespace() || bytes[pos] == b'/') {
            pos += 1;
        }
        let name_start = pos;
        while pos < bytes.len()
            && !bytes[pos].is_ascii_whitespace()
            && bytes[pos] != b'='
            && bytes[pos] != b'/'
        {
            pos += 1;
        }
        let attr_name = &attrs[name_start..pos];
        if attr_name.is_empty() {
            pos += 1;
            continue;
        }

        while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
            pos += 1;
        }
        if pos >= bytes.len() || bytes[pos] != b'=' {
            // Boolean attribute
            continue;
        }
        pos += 1;
        while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
            pos += 1;
        }

        let value = match bytes.get(pos) {
            Some(&quote) if quote == b'"' || quote == b'\'' => {
                let value_start = pos + 1;
                let value_end = attrs[value_start..]
                    .find(quote as char)
                    .map_or(attrs.len(), |j| value_start + j);
                pos = (value_end + 1).min(attrs.len());
                &attrs[value_start..value_end]
            }
            _ => {
                let value_start = pos;
                while pos < bytes.len() && !bytes[pos].is_ascii_whitespace() {
                    pos += 1;
                }
                &attrs[value_start..pos]
            }
        };

        if attr_name == name {
            return Some(value);
        }
    }
    None
}
