//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation adapters must implement.

pub mod interaction_logger;
pub mod navigator;
pub mod progress;
pub mod recommendation_gateway;
pub mod theme_store;
