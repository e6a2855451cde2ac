//! Port for structured interaction logging.
//!
//! Defines the [`InteractionLogger`] trait for recording what the user did
//! and what came back (recommendation requests, results, product clicks) to
//! a structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures a
//! machine-readable record of interactions (JSONL).

use serde_json::Value;

/// A structured interaction event for logging.
pub struct InteractionEvent {
    /// Event type identifier (e.g., "recommendation_request", "product_click").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl InteractionEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging interaction events to a structured log.
///
/// `log` is synchronous and non-fallible: a logging failure must never
/// change the outcome of the operation being logged.
pub trait InteractionLogger: Send + Sync {
    /// Record an interaction event.
    fn log(&self, event: InteractionEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoInteractionLogger;

impl InteractionLogger for NoInteractionLogger {
    fn log(&self, _event: InteractionEvent) {}
}
