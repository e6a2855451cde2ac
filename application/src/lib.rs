//! Application layer for millet-advisor
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::RedirectParams;
pub use ports::{
    interaction_logger::{InteractionEvent, InteractionLogger, NoInteractionLogger},
    navigator::{Navigator, RedirectControl},
    progress::{FetchProgress, NoProgress},
    recommendation_gateway::{GatewayError, HealthStatus, RecommendationGateway},
    theme_store::{MemoryThemeStore, ThemeStore},
};
pub use use_cases::fetch_recommendations::{
    EMPTY_SELECTION_MESSAGE, FetchError, FetchInput, FetchOutcome, FetchRecommendationsUseCase,
    GENERIC_FAILURE_MESSAGE,
};
pub use use_cases::redirect_product::{REDIRECTING_LABEL, RedirectProductUseCase};
