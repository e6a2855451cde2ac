//! Minimal HTML writer
//!
//! Text and attribute values go through [`escape_html`]; only [`Markup`]
//! is written verbatim. Elements are closed in stack order.

use millet_domain::{Markup, escape_html};

#[derive(Debug, Default)]
pub struct HtmlBuilder {
    out: String,
    open: Vec<&'static str>,
}

impl HtmlBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open `<tag attr="value" ...>`
    pub fn open(&mut self, tag: &'static str, attrs: &[(&str, &str)]) -> &mut Self {
        self.start_tag(tag, attrs);
        self.open.push(tag);
        self
    }

    /// Close the most recently opened element
    pub fn close(&mut self) -> &mut Self {
        if let Some(tag) = self.open.pop() {
            self.out.push_str("</");
            self.out.push_str(tag);
            self.out.push('>');
        }
        self
    }

    /// `<tag ...>text</tag>` with `text` escaped
    pub fn element(&mut self, tag: &'static str, attrs: &[(&str, &str)], text: &str) -> &mut Self {
        self.open(tag, attrs).text(text).close()
    }

    /// `<tag ...>` with no content and no closing tag (`br`, `meta`)
    pub fn void(&mut self, tag: &'static str, attrs: &[(&str, &str)]) -> &mut Self {
        self.start_tag(tag, attrs);
        self
    }

    /// Font icon (`<i class="..."></i>`)
    pub fn icon(&mut self, class: &str) -> &mut Self {
        self.open("i", &[("class", class)]).close()
    }

    /// Escaped text
    pub fn text(&mut self, text: &str) -> &mut Self {
        self.out.push_str(&escape_html(text));
        self
    }

    /// Trusted markup, inserted as is
    pub fn markup(&mut self, markup: &Markup) -> &mut Self {
        self.out.push_str(markup.as_str());
        self
    }

    /// Close everything still open and hand back the markup
    pub fn finish(mut self) -> Markup {
        while !self.open.is_empty() {
            self.close();
        }
        Markup::trusted(self.out)
    }

    fn start_tag(&mut self, tag: &str, attrs: &[(&str, &str)]) {
        self.out.push('<');
        self.out.push_str(tag);
        for (name, value) in attrs {
            self.out.push(' ');
            self.out.push_str(name);
            self.out.push_str("=\"");
            self.out.push_str(&escape_html(value));
            self.out.push('"');
        }
        self.out.push('>');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_elements_close_in_order() {
        let mut b = HtmlBuilder::new();
        b.open("div", &[("class", "card")])
            .element("h3", &[], "Ragi")
            .close();
        assert_eq!(b.finish().as_str(), r#"<div class="card"><h3>Ragi</h3></div>"#);
    }

    #[test]
    fn test_text_and_attributes_are_escaped() {
        let mut b = HtmlBuilder::new();
        b.element("span", &[("data-millet", r#"a"b"#)], "<b>x</b>");
        assert_eq!(
            b.finish().as_str(),
            r#"<span data-millet="a&quot;b">&lt;b&gt;x&lt;/b&gt;</span>"#
        );
    }

    #[test]
    fn test_markup_is_verbatim() {
        let mut b = HtmlBuilder::new();
        b.open("div", &[]).markup(&Markup::trusted("<strong>Iron</strong>"));
        assert_eq!(b.finish().as_str(), "<div><strong>Iron</strong></div>");
    }
}
