//! Shortcode scanning
//!
//! Finds `[tag]`, `[tag attr="v" ...]` and `[tag /]` in page content. A doubled
//! bracket (`[[tag]]`) escapes the shortcode: it is not expanded and renders as
//! the literal `[tag]`.

use std::collections::BTreeMap;
use std::ops::Range;

/// Parsed shortcode attributes; positional values are keyed `"0"`, `"1"`, ...
pub type Attributes = BTreeMap<String, String>;

/// One shortcode occurrence in a piece of content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occurrence {
    /// Byte range of the whole occurrence, brackets included
    pub range: Range<usize>,
    pub attributes: Attributes,
    /// `[[tag]]`: emit literally instead of expanding
    pub escaped: bool,
}

impl Occurrence {
    /// Text to emit for an escaped occurrence (one bracket pair removed)
    pub fn literal<'a>(&self, content: &'a str) -> &'a str {
        &content[self.range.start + 1..self.range.end - 1]
    }
}

/// Find every occurrence of `tag` in `content`, in order
pub fn scan(content: &str, tag: &str) -> Vec<Occurrence> {
    let mut found = Vec::new();
    if tag.is_empty() {
        return found;
    }

    let mut pos = 0;
    while let Some(offset) = content[pos..].find('[') {
        let start = pos + offset;
        match parse_at(content, start, tag) {
            Some(occurrence) => {
                pos = occurrence.range.end;
                found.push(occurrence);
            }
            None => pos = start + 1,
        }
    }
    found
}

fn parse_at(content: &str, start: usize, tag: &str) -> Option<Occurrence> {
    let escaped = content[start..].starts_with("[[");
    let name_start = start + if escaped { 2 } else { 1 };

    let after_name = content[name_start..].strip_prefix(tag)?;
    match after_name.chars().next() {
        Some(']' | '/') => {}
        Some(c) if c.is_whitespace() => {}
        _ => return None,
    }

    let attrs_start = name_start + tag.len();
    let close = attrs_start + content[attrs_start..].find(']')?;
    let mut end = close + 1;

    if escaped {
        if !content[end..].starts_with(']') {
            // `[[tag]` is a stray bracket followed by a normal shortcode
            return None;
        }
        end += 1;
    }

    let raw_attrs = content[attrs_start..close].trim();
    let raw_attrs = raw_attrs.strip_suffix('/').unwrap_or(raw_attrs);

    Some(Occurrence { range: start..end, attributes: parse_attributes(raw_attrs), escaped })
}

/// Parse `name="value" name='value' name=value "positional" positional`
///
/// Names are lowercased.
pub fn parse_attributes(text: &str) -> Attributes {
    let mut attributes = Attributes::new();
    let mut positional = 0usize;
    let mut rest = text.trim_start();

    while !rest.is_empty() {
        if rest.starts_with(['"', '\'']) {
            let (value, remaining) = read_value(rest);
            attributes.insert(positional.to_string(), value);
            positional += 1;
            rest = remaining.trim_start();
            continue;
        }

        let end = rest.find(|c: char| c.is_whitespace() || c == '=').unwrap_or(rest.len());
        let token = &rest[..end];
        let remaining = rest[end..].trim_start();

        match remaining.strip_prefix('=') {
            Some(value_text) => {
                let (value, remaining) = read_value(value_text.trim_start());
                attributes.insert(token.to_lowercase(), value);
                rest = remaining.trim_start();
            }
            None => {
                attributes.insert(positional.to_string(), token.to_string());
                positional += 1;
                rest = remaining;
            }
        }
    }

    attributes
}

/// Read a quoted or bare value, returning it and the unread remainder
fn read_value(text: &str) -> (String, &str) {
    match text.chars().next() {
        Some(quote @ ('"' | '\'')) => {
            let body = &text[1..];
            match body.find(quote) {
                Some(end) => (body[..end].to_string(), &body[end + 1..]),
                None => (body.to_string(), ""),
            }
        }
        _ => {
            let end = text.find(char::is_whitespace).unwrap_or(text.len());
            (text[..end].to_string(), &text[end..])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TAG: &str = "cpt_edit_form";

    #[test]
    fn test_scan_plain_and_self_closing() {
        let content = "a [cpt_edit_form] b [cpt_edit_form /] c";
        let found = scan(content, TAG);

        assert_eq!(found.len(), 2);
        assert_eq!(&content[found[0].range.clone()], "[cpt_edit_form]");
        assert_eq!(&content[found[1].range.clone()], "[cpt_edit_form /]");
        assert!(found.iter().all(|o| !o.escaped && o.attributes.is_empty()));
    }

    #[test]
    fn test_scan_ignores_other_tags() {
        assert!(scan("[cpt_edit_formx] [gallery] [cpt_edit", TAG).is_empty());
        assert!(scan("anything", "").is_empty());
    }

    #[test]
    fn test_scan_with_attributes() {
        let found = scan(r#"[cpt_edit_form heading="Edit it" compact]"#, TAG);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].attributes.get("heading").map(String::as_str), Some("Edit it"));
        assert_eq!(found[0].attributes.get("0").map(String::as_str), Some("compact"));
    }

    #[test]
    fn test_scan_escaped() {
        let content = "show [[cpt_edit_form]] here";
        let found = scan(content, TAG);
        assert_eq!(found.len(), 1);
        assert!(found[0].escaped);
        assert_eq!(found[0].literal(content), "[cpt_edit_form]");

        // A single leading bracket is not an escape
        let content = "[[cpt_edit_form] x";
        let found = scan(content, TAG);
        assert_eq!(found.len(), 1);
        assert!(!found[0].escaped);
        assert_eq!(found[0].range, 1..16);
    }

    #[test]
    fn test_parse_attributes() {
        let attrs = parse_attributes(r#"ID="7" class='wide big' size=large "first" second"#);
        assert_eq!(attrs.get("id").map(String::as_str), Some("7"));
        assert_eq!(attrs.get("class").map(String::as_str), Some("wide big"));
        assert_eq!(attrs.get("size").map(String::as_str), Some("large"));
        assert_eq!(attrs.get("0").map(String::as_str), Some("first"));
        assert_eq!(attrs.get("1").map(String::as_str), Some("second"));
        assert!(parse_attributes("   ").is_empty());
    }
}
