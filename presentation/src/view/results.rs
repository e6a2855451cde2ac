//! Results view
//!
//! Holds the summary and cards of the last successful response, plus one
//! click binding per product control.

use super::control::ProductControl;
use crate::html::{CardView, HtmlBuilder};
use millet_domain::{Markup, RecommendationResponse};
use std::sync::Arc;
use tracing::debug;

/// A product control wired to the redirector
#[derive(Debug, Clone)]
pub struct ClickBinding {
    /// Card index the control belongs to
    pub index: usize,
    /// Millet name as the backend sent it
    pub name: String,
    /// Normalised key handed to the redirector
    pub key: String,
    pub control: Arc<ProductControl>,
}

#[derive(Debug, Default)]
pub struct ResultsView {
    summary: Markup,
    cards: Vec<CardView>,
    bindings: Vec<ClickBinding>,
}

impl ResultsView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace whatever was shown before with `response`.
    pub fn render(&mut self, response: &RecommendationResponse) {
        self.clear();

        self.summary = response.summary.clone();
        self.cards = response
            .recommendations
            .iter()
            .enumerate()
            .map(|(index, rec)| CardView::new(index, rec, response.evidence_for(&rec.name)))
            .collect();

        self.attach_bindings();
        debug!("Rendered {} recommendation card(s)", self.cards.len());
    }

    pub fn clear(&mut self) {
        self.summary = Markup::default();
        self.cards.clear();
        self.bindings.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty() && self.summary.is_empty()
    }

    pub fn summary(&self) -> &Markup {
        &self.summary
    }

    pub fn cards(&self) -> &[CardView] {
        &self.cards
    }

    pub fn bindings(&self) -> &[ClickBinding] {
        &self.bindings
    }

    pub fn binding(&self, index: usize) -> Option<&ClickBinding> {
        self.bindings.get(index)
    }

    /// Results section (summary + card list) as HTML
    pub fn to_html(&self) -> Markup {
        let mut b = HtmlBuilder::new();
        b.open("section", &[("class", "results-section")])
            .open("div", &[("class", "results-summary")])
            .markup(&self.summary)
            .close()
            .open("div", &[("class", "recommendations-list")]);

        for (card, binding) in self.cards.iter().zip(&self.bindings) {
            card.write_html(&mut b, &binding.control.snapshot());
        }

        b.close().close();
        b.finish()
    }

    // Runs after the cards are in place, one binding per product control.
    fn attach_bindings(&mut self) {
        self.bindings = self
            .cards
            .iter()
            .map(|card| ClickBinding {
                index: card.index,
                name: card.name.clone(),
                key: card.product_key.clone(),
                control: Arc::new(ProductControl::new(card.product_label())),
            })
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use millet_application::RedirectControl;
    use millet_domain::Recommendation;
    use std::collections::HashMap;

    fn response(names: &[&str]) -> RecommendationResponse {
        RecommendationResponse {
            success: true,
            summary: Markup::trusted("<p>Top picks</p>"),
            recommendations: names
                .iter()
                .map(|name| Recommendation {
                    name: name.to_string(),
                    score: 80.0,
                    ..Default::default()
                })
                .collect(),
            scientific_evidence: HashMap::from([(
                "Ragi Millet".to_string(),
                vec!["Page 2: high calcium".to_string()],
            )]),
        }
    }

    #[test]
    fn test_render_three_cards_in_order() {
        let mut view = ResultsView::new();
        view.render(&response(&["Ragi Millet", "Kodo Millet", "Foxtail Millet"]));

        let keys: Vec<_> = view.cards().iter().map(|c| c.product_key.as_str()).collect();
        assert_eq!(keys, vec!["ragi", "kodo", "foxtail"]);
        let indices: Vec<_> = view.cards().iter().map(|c| c.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);

        assert_eq!(view.bindings().len(), 3);
        assert_eq!(view.binding(0).unwrap().key, "ragi");
        assert_eq!(view.cards()[0].evidence.items, vec!["high calcium"]);
        assert!(view.cards()[1].evidence.is_pending());

        let html = view.to_html().into_string();
        assert_eq!(html.matches(r#"class="millet-card""#).count(), 3);
        assert_eq!(html.matches("product-button").count(), 3);
        assert!(html.contains("<p>Top picks</p>"));
    }

    #[test]
    fn test_render_replaces_previous_content() {
        let mut view = ResultsView::new();
        view.render(&response(&["Ragi Millet", "Kodo Millet", "Foxtail Millet"]));
        view.render(&response(&["Jowar"]));

        assert_eq!(view.cards().len(), 1);
        assert_eq!(view.bindings().len(), 1);
        assert_eq!(view.binding(0).unwrap().key, "jowar");
        assert!(view.binding(1).is_none());
    }

    #[test]
    fn test_html_reflects_control_state() {
        let mut view = ResultsView::new();
        view.render(&response(&["Ragi Millet"]));
        view.binding(0).unwrap().control.disable("Redirecting...");

        let html = view.to_html().into_string();
        assert!(html.contains("Redirecting..."));
        assert!(!html.contains("View Ragi Millet Products on MilletAmma"));
    }
}
