//! Domain layer for millet-advisor
//!
//! This crate contains the core entities and value objects of the advisor.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Concerns
//!
//! - **ConcernTag**: one of a closed set of health concerns (diabetes, heart, ...)
//! - **SelectionState**: the concerns the user has toggled on; the only input
//!   a recommendation request is built from
//!
//! ## Recommendations
//!
//! - **RecommendationRequest**: never constructed from an empty selection
//! - **RecommendationResponse**: summary markup, ranked millets and evidence
//!
//! ## Markup
//!
//! Backend strings are either trusted [`Markup`] (inserted verbatim) or plain
//! text that is always escaped. The type decides, not the call site.

pub mod concern;
pub mod core;
pub mod product;
pub mod recommendation;
pub mod theme;

// Re-export commonly used types
pub use concern::{selection::SelectionState, tag::ConcernTag};
pub use core::{
    error::DomainError,
    markup::{Markup, escape_html},
    string::format_number,
};
pub use product::catalog::{
    FALLBACK_PRODUCT_URL, LinkMatch, ProductCatalog, ProductLink, normalize_product_key,
};
pub use recommendation::{
    request::RecommendationRequest,
    response::{Recommendation, RecommendationResponse, ReviewStats},
};
pub use theme::ThemePreference;
