//! Recommendation request value object

use crate::concern::{selection::SelectionState, tag::ConcernTag};
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// A request for recommendations (Value Object)
///
/// Built fresh from the current [`SelectionState`] for every fetch. The
/// concern list is never empty; construction fails instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationRequest {
    #[serde(rename = "health_concerns")]
    concerns: Vec<ConcernTag>,
    user_query: String,
}

impl RecommendationRequest {
    /// Build a request from the current selection.
    ///
    /// Returns [`DomainError::EmptySelection`] when nothing is selected.
    pub fn from_selection(
        selection: &SelectionState,
        user_query: impl Into<String>,
    ) -> Result<Self, DomainError> {
        if selection.is_empty() {
            return Err(DomainError::EmptySelection);
        }
        Ok(Self {
            concerns: selection.iter().collect(),
            user_query: user_query.into().trim().to_string(),
        })
    }

    pub fn concerns(&self) -> &[ConcernTag] {
        &self.concerns
    }

    pub fn user_query(&self) -> &str {
        &self.user_query
    }

    pub fn has_query(&self) -> bool {
        !self.user_query.is_empty()
    }
}
