//! Markup value object
//!
//! The recommendation backend sends two kinds of strings: pre-formatted HTML
//! (the summary, each benefits summary) and plain text (reviews, evidence).
//! [`Markup`] is the only way to get a string into rendered output verbatim;
//! everything else goes through [`escape_html`].

use serde::{Deserialize, Serialize};

/// Trusted, pre-sanitized HTML fragment (Value Object)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Markup(String);

impl Markup {
    /// Wrap a string that is already trusted markup.
    pub fn trusted(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    /// Build markup from plain text by escaping it.
    pub fn text(text: &str) -> Self {
        Self(escape_html(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Append another markup fragment verbatim.
    pub fn push(&mut self, other: &Markup) {
        self.0.push_str(&other.0);
    }

    /// Append plain text, escaping it.
    pub fn push_text(&mut self, text: &str) {
        self.0.push_str(&escape_html(text));
    }
}

impl std::fmt::Display for Markup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Escape text for use in HTML element content and quoted attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html_special_characters() {
        assert_eq!(
            escape_html(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_escape_html_passes_plain_text() {
        assert_eq!(escape_html("Ragi helps digestion"), "Ragi helps digestion");
        assert_eq!(escape_html(""), "");
    }

    #[test]
    fn test_trusted_markup_is_verbatim() {
        let m = Markup::trusted("<strong>Good</strong>");
        assert_eq!(m.as_str(), "<strong>Good</strong>");
    }

    #[test]
    fn test_text_markup_is_escaped() {
        let m = Markup::text("<script>");
        assert_eq!(m.as_str(), "&lt;script&gt;");
    }

    #[test]
    fn test_push_keeps_distinction() {
        let mut m = Markup::trusted("<p>");
        m.push_text("a < b");
        m.push(&Markup::trusted("</p>"));
        assert_eq!(m.as_str(), "<p>a &lt; b</p>");
    }

    #[test]
    fn test_deserialize_transparent() {
        let m: Markup = serde_json::from_str("\"<em>hi</em>\"").unwrap();
        assert_eq!(m, Markup::trusted("<em>hi</em>"));
    }
}
