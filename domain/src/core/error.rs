//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("At least one health concern is required")]
    EmptySelection,

    #[error("Unknown health concern: {0}")]
    UnknownConcern(String),

    #[error("Unknown theme: {0}")]
    UnknownTheme(String),
}

impl DomainError {
    /// Check if this error is the empty-selection validation failure
    pub fn is_empty_selection(&self) -> bool {
        matches!(self, DomainError::EmptySelection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_selection_display() {
        let error = DomainError::EmptySelection;
        assert_eq!(error.to_string(), "At least one health concern is required");
    }

    #[test]
    fn test_is_empty_selection_check() {
        assert!(DomainError::EmptySelection.is_empty_selection());
        assert!(!DomainError::UnknownConcern("x".to_string()).is_empty_selection());
        assert!(!DomainError::UnknownTheme("blue".to_string()).is_empty_selection());
    }
}
