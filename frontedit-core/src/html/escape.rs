//! Escaping primitives
//!
//! Every value the renderer interpolates goes through an [`Escaper`], picked by
//! the output context: attribute values, element text, or textarea bodies.

/// Context-aware HTML escaping
pub trait Escaper: Send + Sync {
    /// Escape for use inside a double- or single-quoted attribute value
    fn attr(&self, value: &str) -> String;

    /// Escape for use as element text
    fn html(&self, value: &str) -> String;

    /// Escape for use as the body of a `<textarea>`
    fn textarea(&self, value: &str) -> String {
        self.html(value)
    }
}

/// Default escaper: encodes `& < > " '` in every context
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlEscaper;

impl HtmlEscaper {
    pub fn escape(value: &str) -> String {
        let mut out = String::with_capacity(value.len());
        for c in value.chars() {
            match c {
                '&' => out.push_str("&amp;"),
                '<' => out.push_str("&lt;"),
                '>' => out.push_str("&gt;"),
                '"' => out.push_str("&quot;"),
                '\'' => out.push_str("&#039;"),
                c => out.push(c),
            }
        }
        out
    }
}

impl Escaper for HtmlEscaper {
    fn attr(&self, value: &str) -> String {
        Self::escape(value)
    }

    fn html(&self, value: &str) -> String {
        Self::escape(value)
    }
}
