//! Recommendation gateway port
//!
//! Defines the interface for talking to the recommendation backend.

use async_trait::async_trait;
use millet_domain::{RecommendationRequest, RecommendationResponse};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while talking to the backend
///
/// These are never shown to the user verbatim; the fetch use case logs them
/// and surfaces one generic message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP error! status: {0}")]
    Status(u16),

    #[error("Malformed response: {0}")]
    Malformed(String),

    #[error("Failed to get recommendations from server")]
    Rejected,
}

impl GatewayError {
    /// Transport-level failure (connection or non-2xx status)
    pub fn is_network(&self) -> bool {
        matches!(self, GatewayError::Network(_) | GatewayError::Status(_))
    }
}

/// Body of `GET /health`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub message: String,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

/// Gateway to the recommendation backend
///
/// Implementations (adapters) live in the infrastructure layer. `recommend`
/// returns the decoded body as-is; judging the `success` flag is the caller's
/// job.
#[async_trait]
pub trait RecommendationGateway: Send + Sync {
    /// `POST /api/recommend`
    async fn recommend(
        &self,
        request: &RecommendationRequest,
    ) -> Result<RecommendationResponse, GatewayError>;

    /// `GET /health`
    async fn health(&self) -> Result<HealthStatus, GatewayError>;

    /// `GET /api/millets`
    async fn list_millets(&self) -> Result<Vec<String>, GatewayError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_classification() {
        assert!(GatewayError::Network("refused".into()).is_network());
        assert!(GatewayError::Status(502).is_network());
        assert!(!GatewayError::Rejected.is_network());
        assert!(!GatewayError::Malformed("eof".into()).is_network());
    }

    #[test]
    fn test_status_display() {
        assert_eq!(GatewayError::Status(500).to_string(), "HTTP error! status: 500");
    }

    #[test]
    fn test_health_status() {
        let status: HealthStatus =
            serde_json::from_str(r#"{"status": "healthy", "message": "running"}"#).unwrap();
        assert!(status.is_healthy());
    }
}
