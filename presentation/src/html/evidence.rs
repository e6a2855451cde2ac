//! Scientific-evidence block

use super::builder::HtmlBuilder;
use regex::Regex;
use std::sync::LazyLock;

/// How many evidence lines a card shows
pub const EVIDENCE_LIMIT: usize = 2;

pub const EVIDENCE_PENDING: &str =
    "Scientific evidence is being analyzed. Please check back soon.";

pub const MORE_EVIDENCE_NOTE: &str = "... and more scientific evidence available";

static PAGE_PREFIX: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^Page \d+: ").ok());

/// Drop a leading `Page <n>: ` citation marker.
pub fn strip_page_prefix(item: &str) -> &str {
    match PAGE_PREFIX.as_ref().and_then(|re| re.find(item)) {
        Some(m) => &item[m.end()..],
        None => item,
    }
}

/// What a card shows for one recommendation's evidence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvidenceSummary {
    /// Up to [`EVIDENCE_LIMIT`] lines, prefix stripped, not yet escaped
    pub items: Vec<String>,
    /// More lines exist than are shown
    pub has_more: bool,
}

impl EvidenceSummary {
    pub fn from_evidence(evidence: &[String]) -> Self {
        Self {
            items: evidence
                .iter()
                .take(EVIDENCE_LIMIT)
                .map(|item| strip_page_prefix(item).to_string())
                .collect(),
            has_more: evidence.len() > EVIDENCE_LIMIT,
        }
    }

    /// No evidence at all; the pending message is shown instead
    pub fn is_pending(&self) -> bool {
        self.items.is_empty()
    }

    pub fn write_html(&self, b: &mut HtmlBuilder) {
        if self.is_pending() {
            b.element("p", &[], EVIDENCE_PENDING);
            return;
        }

        b.open("ul", &[("class", "bullet-list")]);
        for item in &self.items {
            b.element("li", &[], item);
        }
        b.close();

        if self.has_more {
            b.open("p", &[]).element("em", &[], MORE_EVIDENCE_NOTE).close();
        }
    }
}
