//! HTTP adapter for the recommendation backend

use async_trait::async_trait;
use millet_application::{GatewayError, HealthStatus, RecommendationGateway};
use millet_domain::{RecommendationRequest, RecommendationResponse};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::time::Instant;
use tracing::debug;

/// Default User-Agent sent with every request
pub const DEFAULT_USER_AGENT: &str = "MilletAdvisor/0.4 (+cli)";

/// Default maximum response body size (5 MB)
const MAX_BODY_SIZE: usize = 5 * 1024 * 1024;

#[derive(Deserialize)]
struct MilletsBody {
    #[serde(default)]
    millets: Vec<String>,
}

/// Recommendation gateway over HTTP (reqwest)
///
/// All paths are relative to `origin`; no request timeout is configured, a
/// pending request lives as long as the transport keeps it alive.
pub struct HttpRecommendationGateway {
    client: reqwest::Client,
    origin: String,
    max_body_size: usize,
}

impl HttpRecommendationGateway {
    pub fn new(origin: impl Into<String>) -> Result<Self, GatewayError> {
        Self::with_user_agent(origin, DEFAULT_USER_AGENT)
    }

    pub fn with_user_agent(
        origin: impl Into<String>,
        user_agent: &str,
    ) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(|e| GatewayError::Network(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            client,
            origin: origin.into().trim_end_matches('/').to_string(),
            max_body_size: MAX_BODY_SIZE,
        })
    }

    /// Reject response bodies larger than `bytes`
    pub fn with_max_body_size(mut self, bytes: usize) -> Self {
        self.max_body_size = bytes;
        self
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.origin, path)
    }

    /// Check the status, read the body up to the size limit, and decode it
    /// as JSON.
    async fn decode<T: DeserializeOwned>(
        &self,
        url: &str,
        mut response: reqwest::Response,
    ) -> Result<T, GatewayError> {
        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Status(status.as_u16()));
        }

        let too_large = |size: u64| {
            GatewayError::Malformed(format!(
                "Response too large: {} bytes (max: {} bytes)",
                size, self.max_body_size
            ))
        };

        if let Some(length) = response.content_length()
            && length > self.max_body_size as u64
        {
            return Err(too_large(length));
        }

        let mut body = Vec::new();
        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| GatewayError::Network(format!("Failed to read response body: {}", e)))?
        {
            if body.len() + chunk.len() > self.max_body_size {
                return Err(too_large((body.len() + chunk.len()) as u64));
            }
            body.extend_from_slice(&chunk);
        }

        serde_json::from_slice(&body)
            .map_err(|e| GatewayError::Malformed(format!("Decoding JSON for {}: {}", url, e)))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, GatewayError> {
        let url = self.endpoint(path);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| GatewayError::Network(format!("Request failed for {}: {}", url, e)))?;
        self.decode(&url, response).await
    }
}

#[async_trait]
impl RecommendationGateway for HttpRecommendationGateway {
    async fn recommend(
        &self,
        request: &RecommendationRequest,
    ) -> Result<RecommendationResponse, GatewayError> {
        let url = self.endpoint("/api/recommend");
        let start = Instant::now();

        debug!(
            "POST {} - concerns={:?}, query_len={}",
            url,
            request.concerns(),
            request.user_query().len()
        );

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| GatewayError::Network(format!("Request failed for {}: {}", url, e)))?;

        let decoded: RecommendationResponse = self.decode(&url, response).await?;

        debug!(
            "Recommendation API call completed - duration={:.2}s, recommendations={}",
            start.elapsed().as_secs_f32(),
            decoded.recommendations.len()
        );
        Ok(decoded)
    }

    async fn health(&self) -> Result<HealthStatus, GatewayError> {
        self.get_json("/health").await
    }

    async fn list_millets(&self) -> Result<Vec<String>, GatewayError> {
        let body: MilletsBody = self.get_json("/api/millets").await?;
        Ok(body.millets)
    }
}
