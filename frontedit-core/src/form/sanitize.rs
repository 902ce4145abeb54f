//! Plain-text sanitization
//!
//! [`sanitize_text`] reduces user input to a single line of plain text, the
//! way the title and each tag are stored:
//!
//! 1. A `<` that never closes with `>` is HTML-encoded along with the text up
//!    to the next `<` (so `1 < 2` survives as `1 &lt; 2`).
//! 2. `<script>` and `<style>` elements are removed together with their body,
//!    then every remaining tag is stripped.
//! 3. Runs of whitespace collapse to one space and the result is trimmed.
//! 4. Percent-encoded octets (`%20`, `%3C`, ...) are removed.

use crate::html::HtmlEscaper;

/// Sanitize a submitted value to plain single-line text
pub fn sanitize_text(input: &str) -> String {
    let text = if input.contains('<') {
        strip_all_tags(&encode_unclosed_tags(input))
    } else {
        input.to_string()
    };

    let text = collapse_whitespace(&text);
    let text = text.trim();

    let (text, found) = strip_octets(text);
    if found {
        collapse_spaces(&text).trim().to_string()
    } else {
        text
    }
}

/// HTML-encode every `<...` segment that reaches another `<` or the end before a `>`
fn encode_unclosed_tags(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find('<') {
        out.push_str(&rest[..start]);
        let segment = &rest[start..];

        // First `<` or `>` after the opening bracket
        match segment[1..].find(['<', '>']).map(|i| i + 1) {
            Some(end) if segment.as_bytes()[end] == b'>' => {
                out.push_str(&segment[..=end]);
                rest = &segment[end + 1..];
            }
            Some(end) => {
                out.push_str(&HtmlEscaper::escape(&segment[..end]));
                rest = &segment[end..];
            }
            None => {
                out.push_str(&HtmlEscaper::escape(segment));
                rest = "";
            }
        }
    }

    out.push_str(rest);
    out
}

/// Remove script/style elements with their body, then every remaining tag
fn strip_all_tags(input: &str) -> String {
    let mut text = input.to_string();
    for element in ["script", "style"] {
        text = remove_elements(&text, element);
    }
    strip_tags(&text)
}

/// Remove `<name ...>...</name>` blocks, matching the name case-insensitively
fn remove_elements(input: &str, name: &str) -> String {
    // ASCII lowercasing keeps byte offsets aligned with `input`
    let lower = input.to_ascii_lowercase();
    let open = format!("<{}", name);
    let close = format!("</{}>", name);

    let mut out = String::with_capacity(input.len());
    let mut pos = 0;

    while let Some(found) = lower[pos..].find(&open) {
        let start = pos + found;
        let block_end = lower[start..].find('>').and_then(|gt| {
            let body = start + gt + 1;
            lower[body..].find(&close).map(|c| body + c + close.len())
        });

        match block_end {
            Some(end) => {
                out.push_str(&input[pos..start]);
                pos = end;
            }
            None => break,
        }
    }

    out.push_str(&input[pos..]);
    out
}

/// Drop everything between `<` and the next `>` (an unclosed `<` drops the rest)
fn strip_tags(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find('<') {
        out.push_str(&rest[..start]);
        match rest[start..].find('>') {
            Some(end) => rest = &rest[start + end + 1..],
            None => rest = "",
        }
    }

    out.push_str(rest);
    out
}

/// Collapse runs of `\r`, `\n`, `\t` and spaces into one space
fn collapse_whitespace(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_run = false;

    for c in input.chars() {
        if matches!(c, '\r' | '\n' | '\t' | ' ') {
            if !in_run {
                out.push(' ');
            }
            in_run = true;
        } else {
            out.push(c);
            in_run = false;
        }
    }

    out
}

fn collapse_spaces(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        if !(c == ' ' && out.ends_with(' ')) {
            out.push(c);
        }
    }
    out
}

/// Repeatedly remove `%XX` octets until none remain
fn strip_octets(input: &str) -> (String, bool) {
    let mut text = input.to_string();
    let mut found = false;

    loop {
        let bytes = text.as_bytes();
        let mut out = String::with_capacity(text.len());
        let mut removed = false;
        let mut last = 0;
        let mut i = 0;

        while i + 2 < bytes.len() {
            if bytes[i] == b'%'
                && bytes[i + 1].is_ascii_hexdigit()
                && bytes[i + 2].is_ascii_hexdigit()
            {
                out.push_str(&text[last..i]);
                i += 3;
                last = i;
                removed = true;
            } else {
                i += 1;
            }
        }

        if !removed {
            return (text, found);
        }
        out.push_str(&text[last..]);
        text = out;
        found = true;
    }
}
