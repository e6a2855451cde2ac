//! Concern tag value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// A health concern the user can ask for recommendations about (Value Object)
///
/// The set is closed; the backend keys its keyword tables by these
/// identifiers. Declaration order is the display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConcernTag {
    Diabetes,
    Heart,
    Digestive,
    Anemia,
    Weight,
    Bones,
    Gluten,
}

impl ConcernTag {
    /// Every tag, in display order.
    pub const ALL: [ConcernTag; 7] = [
        ConcernTag::Diabetes,
        ConcernTag::Heart,
        ConcernTag::Digestive,
        ConcernTag::Anemia,
        ConcernTag::Weight,
        ConcernTag::Bones,
        ConcernTag::Gluten,
    ];

    /// Wire identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            ConcernTag::Diabetes => "diabetes",
            ConcernTag::Heart => "heart",
            ConcernTag::Digestive => "digestive",
            ConcernTag::Anemia => "anemia",
            ConcernTag::Weight => "weight",
            ConcernTag::Bones => "bones",
            ConcernTag::Gluten => "gluten",
        }
    }

    /// Human readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            ConcernTag::Diabetes => "Diabetes",
            ConcernTag::Heart => "Heart Health",
            ConcernTag::Digestive => "Digestive Health",
            ConcernTag::Anemia => "Anemia",
            ConcernTag::Weight => "Weight Management",
            ConcernTag::Bones => "Bone Health",
            ConcernTag::Gluten => "Gluten Sensitivity",
        }
    }

    /// Display name for a raw key coming back from the backend.
    ///
    /// Keys outside the closed set are shown as-is.
    pub fn display_name_for(key: &str) -> &str {
        match key.parse::<ConcernTag>() {
            Ok(tag) => tag.display_name(),
            Err(_) => key,
        }
    }
}

impl std::fmt::Display for ConcernTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ConcernTag {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        ConcernTag::ALL
            .into_iter()
            .find(|tag| tag.as_str() == key)
            .ok_or_else(|| DomainError::UnknownConcern(s.to_string()))
    }
}
