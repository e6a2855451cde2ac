//! Recommendation card view-model
//!
//! A [`CardView`] is everything one card displays, computed once from a
//! [`Recommendation`]. HTML and console output both read from it.

use super::builder::HtmlBuilder;
use super::evidence::EvidenceSummary;
use super::stars::StarRating;
use crate::view::control::ControlState;
use millet_domain::{ConcernTag, Markup, Recommendation, format_number};

/// One row of the health-concern match block
#[derive(Debug, Clone, PartialEq)]
pub struct ConcernMatch {
    pub key: String,
    pub display_name: String,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    /// Position in the response, stable across re-renders
    pub index: usize,
    pub name: String,
    pub score: f64,
    pub stars: StarRating,
    pub average_rating: f64,
    pub total_reviews: u64,
    pub positive_percentage: f64,
    pub neutral: u64,
    pub negative: u64,
    pub benefits: Markup,
    pub evidence: EvidenceSummary,
    pub reviews: Vec<String>,
    /// Empty when the backend sent no match table
    pub concern_matches: Vec<ConcernMatch>,
    /// Normalised storefront key ("Ragi Millet" → "ragi")
    pub product_key: String,
}

impl CardView {
    pub fn new(index: usize, recommendation: &Recommendation, evidence: &[String]) -> Self {
        let stats = &recommendation.stats;
        let concern_matches = recommendation
            .concern_matches()
            .map(|matches| {
                matches
                    .iter()
                    .map(|(key, percentage)| ConcernMatch {
                        key: key.clone(),
                        display_name: ConcernTag::display_name_for(key).to_string(),
                        percentage: *percentage,
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            index,
            name: recommendation.name.clone(),
            score: recommendation.score,
            stars: StarRating::from_rating(stats.average_rating),
            average_rating: stats.average_rating,
            total_reviews: stats.total_reviews,
            positive_percentage: stats.positive_percentage,
            neutral: stats.neutral_count(),
            negative: stats.negative_count(),
            benefits: recommendation.benefits_summary.clone(),
            evidence: EvidenceSummary::from_evidence(evidence),
            reviews: recommendation.sample_reviews.clone(),
            concern_matches,
            product_key: recommendation.product_key(),
        }
    }

    pub fn score_label(&self) -> String {
        format!("{}% Match", format_number(self.score))
    }

    pub fn rating_label(&self) -> String {
        format!(
            "{}/5 • {} reviews",
            format_number(self.average_rating),
            self.total_reviews
        )
    }

    /// Caption of the product control
    pub fn product_label(&self) -> String {
        format!("View {} Products on MilletAmma", self.name)
    }

    pub fn write_html(&self, b: &mut HtmlBuilder, control: &ControlState) {
        let index = self.index.to_string();
        b.open("div", &[("class", "millet-card"), ("data-index", index.as_str())]);

        b.open("div", &[("class", "card-header")])
            .open("div", &[("class", "millet-name")])
            .open("h3", &[])
            .icon("fas fa-seedling")
            .text(&self.name)
            .close()
            .element("div", &[("class", "relevance-badge")], &self.score_label())
            .close()
            .close();

        self.write_rating(b);

        Self::section(b, "benefits-section", "fas fa-heart", "Health Benefits");
        b.open("div", &[("class", "benefits-content")])
            .markup(&self.benefits)
            .close()
            .close();

        Self::section(b, "evidence-section", "fas fa-flask", "Scientific Evidence");
        b.open("div", &[("class", "evidence-content")]);
        self.evidence.write_html(b);
        b.close().close();

        Self::section(b, "reviews-section", "fas fa-users", "User Experiences");
        b.open("div", &[("class", "reviews-content")]);
        for review in &self.reviews {
            b.open("div", &[("class", "review-item")])
                .icon("fas fa-quote-left")
                .text(review)
                .close();
        }
        b.close().close();

        if !self.concern_matches.is_empty() {
            b.open("div", &[("class", "health-match")]);
            for m in &self.concern_matches {
                b.open("div", &[("class", "match-item")])
                    .element(
                        "div",
                        &[("class", "match-percentage")],
                        &format!("{}%", format_number(m.percentage)),
                    )
                    .element("div", &[("class", "match-label")], &m.display_name)
                    .close();
            }
            b.close();
        }

        self.write_product(b, control);

        b.close();
    }

    fn write_rating(&self, b: &mut HtmlBuilder) {
        b.open("div", &[("class", "rating-section")])
            .open("div", &[("class", "rating-stars")]);
        self.stars.write_html(b);
        b.close()
            .element("div", &[("class", "rating-text")], &self.rating_label())
            .open("div", &[("class", "sentiment-indicators")]);

        let sentiments = [
            (
                "sentiment-item positive",
                "fas fa-thumbs-up",
                format!("{}%", format_number(self.positive_percentage)),
            ),
            ("sentiment-item neutral", "fas fa-minus", self.neutral.to_string()),
            ("sentiment-item negative", "fas fa-thumbs-down", self.negative.to_string()),
        ];
        for (class, icon, value) in sentiments {
            b.open("div", &[("class", class)])
                .icon(icon)
                .element("span", &[], &value)
                .close();
        }
        b.close().close();
    }

    fn write_product(&self, b: &mut HtmlBuilder, control: &ControlState) {
        Self::section(
            b,
            "product-section",
            "fas fa-shopping-bag",
            &format!("Ready to Try {}?", self.name),
        );
        b.open("div", &[("class", "product-content")])
            .element(
                "p",
                &[],
                &format!("Explore high-quality {} products from trusted suppliers.", self.name),
            );

        let mut attrs = vec![
            ("class", "btn btn-primary product-button"),
            ("data-millet", self.product_key.as_str()),
        ];
        if control.disabled {
            attrs.push(("disabled", "disabled"));
        }
        b.open("button", &attrs)
            .icon(if control.disabled {
                "fas fa-spinner fa-spin"
            } else {
                "fas fa-external-link-alt"
            })
            .text(&control.label)
            .close();

        b.open("p", &[("class", "product-note")])
            .icon("fas fa-info-circle")
            .text("You'll be redirected to MilletAmma.com in a new tab")
            .close()
            .close()
            .close();
    }

    /// Opens `<div class=...>` plus its title row; the caller closes it.
    fn section(b: &mut HtmlBuilder, class: &str, icon: &str, title: &str) {
        b.open("div", &[("class", class)])
            .open("div", &[("class", "section-title")])
            .icon(icon)
            .element("span", &[], title)
            .close();
    }
}
