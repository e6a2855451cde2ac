//! Recommendation response value objects
//!
//! Mirrors the JSON returned by `POST /api/recommend`. Numbers the backend
//! computes as floats (score, percentages, ratings) are kept as `f64`;
//! missing optional collections deserialize as empty.

use crate::core::markup::Markup;
use crate::product::catalog::normalize_product_key;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Full response of one recommendation request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub success: bool,
    /// Pre-formatted summary markup
    #[serde(default)]
    pub summary: Markup,
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
    /// Evidence strings keyed by recommendation name
    #[serde(default)]
    pub scientific_evidence: HashMap<String, Vec<String>>,
}

impl RecommendationResponse {
    /// Evidence for a recommendation, empty when the backend had none.
    pub fn evidence_for(&self, name: &str) -> &[String] {
        self.scientific_evidence
            .get(name)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// One recommended millet
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub name: String,
    /// Match score as a percentage
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub stats: ReviewStats,
    /// Pre-formatted benefits markup
    #[serde(default)]
    pub benefits_summary: Markup,
    #[serde(default)]
    pub sample_reviews: Vec<String>,
    /// Match percentage per concern key
    #[serde(default)]
    pub health_concern_match: Option<BTreeMap<String, f64>>,
}

impl Recommendation {
    /// Storefront key for this recommendation (e.g. "Ragi Millet" → "ragi").
    pub fn product_key(&self) -> String {
        normalize_product_key(&self.name)
    }

    /// Concern matches, if the backend sent a non-empty table.
    pub fn concern_matches(&self) -> Option<&BTreeMap<String, f64>> {
        self.health_concern_match
            .as_ref()
            .filter(|matches| !matches.is_empty())
    }
}

/// Aggregated review statistics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReviewStats {
    /// Average star rating (0–5)
    #[serde(default)]
    pub average_rating: f64,
    #[serde(default)]
    pub total_reviews: u64,
    #[serde(default)]
    pub positive_percentage: f64,
    /// Review count per sentiment label ("Positive", "Neutral", "Negative")
    #[serde(default)]
    pub sentiment_distribution: BTreeMap<String, u64>,
}

impl ReviewStats {
    pub fn sentiment_count(&self, label: &str) -> u64 {
        self.sentiment_distribution.get(label).copied().unwrap_or(0)
    }

    pub fn neutral_count(&self) -> u64 {
        self.sentiment_count("Neutral")
    }

    pub fn negative_count(&self) -> u64 {
        self.sentiment_count("Negative")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "success": true,
        "summary": "<p>Try <strong>ragi</strong></p>",
        "recommendations": [
            {
                "name": "Ragi Millet",
                "score": 87.35,
                "stats": {
                    "average_rating": 4.3,
                    "total_reviews": 120,
                    "positive_percentage": 78.3,
                    "sentiment_distribution": {"Positive": 94, "Neutral": 20, "Negative": 6}
                },
                "themes": ["digestion"],
                "sample_reviews": ["Tastes great"],
                "health_concern_match": {"digestive": 42.5},
                "benefits_summary": "<ul><li>Calcium</li></ul>"
            }
        ],
        "scientific_evidence": {"Ragi Millet": ["Page 4: high calcium"]}
    }"#;

    #[test]
    fn test_deserialize_backend_payload() {
        let response: RecommendationResponse = serde_json::from_str(SAMPLE).unwrap();
        assert!(response.success);
        assert_eq!(response.recommendations.len(), 1);

        let rec = &response.recommendations[0];
        assert_eq!(rec.name, "Ragi Millet");
        assert_eq!(rec.stats.total_reviews, 120);
        assert_eq!(rec.stats.neutral_count(), 20);
        assert_eq!(rec.stats.negative_count(), 6);
        assert_eq!(rec.benefits_summary.as_str(), "<ul><li>Calcium</li></ul>");
        assert_eq!(response.evidence_for("Ragi Millet").len(), 1);
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let json = r#"{"success": true, "recommendations": [{"name": "Kodo Millet", "stats": {}}]}"#;
        let response: RecommendationResponse = serde_json::from_str(json).unwrap();
        let rec = &response.recommendations[0];
        assert!(rec.sample_reviews.is_empty());
        assert!(rec.benefits_summary.is_empty());
        assert!(rec.concern_matches().is_none());
        assert_eq!(rec.stats.neutral_count(), 0);
        assert!(response.evidence_for("Kodo Millet").is_empty());
        assert!(response.summary.is_empty());
    }

    #[test]
    fn test_empty_concern_match_is_treated_as_absent() {
        let rec = Recommendation {
            health_concern_match: Some(BTreeMap::new()),
            ..Default::default()
        };
        assert!(rec.concern_matches().is_none());
    }

    #[test]
    fn test_product_key() {
        let rec = Recommendation {
            name: "Ragi Millet".to_string(),
            ..Default::default()
        };
        assert_eq!(rec.product_key(), "ragi");
    }
}
