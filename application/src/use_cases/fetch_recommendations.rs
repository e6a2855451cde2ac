//! Fetch Recommendations use case
//!
//! Sends the current concern selection to the backend, at most one request
//! at a time.

use crate::ports::interaction_logger::{InteractionEvent, InteractionLogger, NoInteractionLogger};
use crate::ports::progress::{FetchProgress, LoadingGuard, NoProgress};
use crate::ports::recommendation_gateway::{GatewayError, RecommendationGateway};
use millet_domain::{DomainError, RecommendationRequest, RecommendationResponse, SelectionState};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use thiserror::Error;
use tracing::{debug, error, info};

/// Message shown for every backend-facing failure
pub const GENERIC_FAILURE_MESSAGE: &str =
    "Unable to get recommendations at the moment. Please try again later.";

/// Message shown when fetching with nothing selected
pub const EMPTY_SELECTION_MESSAGE: &str =
    "Please select at least one health concern to get recommendations.";

/// Errors that can occur while fetching recommendations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Rejected locally; no request was sent
    #[error("Validation error: {0}")]
    Validation(#[from] DomainError),

    /// Transport, status, body or `success: false`
    #[error("Recommendation error: {0}")]
    Recommendation(#[from] GatewayError),
}

impl FetchError {
    /// The only text the user ever sees for this error
    pub fn user_message(&self) -> &'static str {
        match self {
            FetchError::Validation(_) => EMPTY_SELECTION_MESSAGE,
            FetchError::Recommendation(_) => GENERIC_FAILURE_MESSAGE,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, FetchError::Validation(_))
    }
}

/// Result of a fetch that did not fail
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// The backend answered with `success: true`
    Delivered(RecommendationResponse),
    /// Another fetch was already outstanding; nothing was sent
    Skipped,
}

/// Input for the FetchRecommendations use case
#[derive(Debug, Clone)]
pub struct FetchInput {
    /// Snapshot of the selection at the time of the request
    pub selection: SelectionState,
    /// Free-text query, may be empty
    pub user_query: String,
}

impl FetchInput {
    pub fn new(selection: SelectionState, user_query: impl Into<String>) -> Self {
        Self {
            selection,
            user_query: user_query.into(),
        }
    }
}

/// Holds the single-flight flag; releases it when dropped
struct InFlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> InFlightGuard<'a> {
    fn try_acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

/// Use case for fetching recommendations
pub struct FetchRecommendationsUseCase<G: RecommendationGateway + 'static> {
    gateway: Arc<G>,
    logger: Arc<dyn InteractionLogger>,
    in_flight: AtomicBool,
}

impl<G: RecommendationGateway + 'static> FetchRecommendationsUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self {
            gateway,
            logger: Arc::new(NoInteractionLogger),
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn InteractionLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Whether a request is currently outstanding
    pub fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, input: FetchInput) -> Result<FetchOutcome, FetchError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with loading callbacks
    ///
    /// A call made while another is outstanding returns
    /// [`FetchOutcome::Skipped`] immediately. The flag and the loading state
    /// are released on every path, including when the future is dropped.
    pub async fn execute_with_progress(
        &self,
        input: FetchInput,
        progress: &dyn FetchProgress,
    ) -> Result<FetchOutcome, FetchError> {
        let Some(_flight) = InFlightGuard::try_acquire(&self.in_flight) else {
            debug!("Fetch already in flight, dropping request");
            return Ok(FetchOutcome::Skipped);
        };

        let request = RecommendationRequest::from_selection(&input.selection, input.user_query)?;

        let _loading = LoadingGuard::start(progress, request.concerns().len());

        info!(
            "Requesting recommendations for {} concern(s)",
            request.concerns().len()
        );
        self.logger.log(InteractionEvent::new(
            "recommendation_request",
            serde_json::json!({
                "health_concerns": request.concerns(),
                "user_query": request.user_query(),
            }),
        ));

        let result = match self.gateway.recommend(&request).await {
            Ok(response) if response.success => Ok(response),
            Ok(_) => Err(GatewayError::Rejected),
            Err(e) => Err(e),
        };

        match result {
            Ok(response) => {
                info!(
                    "Received {} recommendation(s)",
                    response.recommendations.len()
                );
                self.logger.log(InteractionEvent::new(
                    "recommendation_result",
                    serde_json::json!({
                        "success": true,
                        "recommendations": response
                            .recommendations
                            .iter()
                            .map(|r| r.name.as_str())
                            .collect::<Vec<_>>(),
                    }),
                ));
                Ok(FetchOutcome::Delivered(response))
            }
            Err(e) => {
                error!("Error fetching recommendations: {}", e);
                self.logger.log(InteractionEvent::new(
                    "recommendation_result",
                    serde_json::json!({ "success": false, "error": e.to_string() }),
                ));
                Err(FetchError::Recommendation(e))
            }
        }
    }
}
