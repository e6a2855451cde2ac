//! Standalone HTML export

use super::builder::HtmlBuilder;
use millet_domain::{Markup, ThemePreference};

const STYLE: &str = r#"
:root[data-theme="dark"] { --bg: #0f172a; --fg: #e2e8f0; --card: #1e293b; --accent: #10b981; }
:root[data-theme="light"] { --bg: #f8fafc; --fg: #0f172a; --card: #ffffff; --accent: #059669; }
body { background: var(--bg); color: var(--fg); font-family: system-ui, sans-serif; margin: 2rem; }
.millet-card, .concern-card, .selected-tag { background: var(--card); border-radius: 12px; padding: 1rem; margin: 0.5rem 0; }
.concern-card.selected, .relevance-badge { border: 1px solid var(--accent); }
.product-button { background: var(--accent); color: white; border: none; padding: 0.5rem 1rem; border-radius: 8px; }
"#;

/// Parts of the page, already rendered
pub struct DocumentParts<'a> {
    pub theme: ThemePreference,
    pub concerns: &'a Markup,
    pub tags: &'a Markup,
    pub results: &'a Markup,
}

/// Full page with the theme applied as `data-theme`
pub fn render_document(parts: &DocumentParts<'_>) -> String {
    let mut b = HtmlBuilder::new();
    b.open("html", &[("lang", "en"), ("data-theme", parts.theme.as_str())])
        .open("head", &[])
        .void("meta", &[("charset", "utf-8")])
        .element("title", &[], "Millet Advisor Recommendations")
        .open("style", &[])
        .markup(&Markup::trusted(STYLE))
        .close()
        .close()
        .open("body", &[])
        .element("h1", &[], "Millet Advisor")
        .open("section", &[("class", "concerns-section")])
        .markup(parts.concerns)
        .open("div", &[("id", "selectedConcerns"), ("class", "selected-concerns")])
        .markup(parts.tags)
        .close()
        .close()
        .markup(parts.results);

    format!("<!DOCTYPE html>\n{}\n", b.finish())
}
