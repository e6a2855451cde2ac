//! Redirect parameters: timing of the product redirect.
//!
//! [`RedirectParams`] groups the static parameters that control the delayed
//! navigation in [`RedirectProductUseCase`](crate::use_cases::redirect_product::RedirectProductUseCase).

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Timing of a product redirect.
///
/// The control is disabled at click time, the page opens after `open_delay`,
/// and the control is restored `restore_delay` after that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedirectParams {
    pub open_delay: Duration,
    pub restore_delay: Duration,
}

impl Default for RedirectParams {
    fn default() -> Self {
        Self {
            open_delay: Duration::from_millis(500),
            restore_delay: Duration::from_millis(1000),
        }
    }
}

impl RedirectParams {
    // ==================== Builder Methods ====================

    pub fn with_open_delay(mut self, delay: Duration) -> Self {
        self.open_delay = delay;
        self
    }

    pub fn with_restore_delay(mut self, delay: Duration) -> Self {
        self.restore_delay = delay;
        self
    }

    /// No delays at all (one-shot mode, tests)
    pub fn immediate() -> Self {
        Self {
            open_delay: Duration::ZERO,
            restore_delay: Duration::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_delays() {
        let params = RedirectParams::default();
        assert_eq!(params.open_delay, Duration::from_millis(500));
        assert_eq!(params.restore_delay, Duration::from_millis(1000));
    }

    #[test]
    fn test_builder() {
        let params = RedirectParams::immediate().with_open_delay(Duration::from_millis(10));
        assert_eq!(params.open_delay, Duration::from_millis(10));
        assert_eq!(params.restore_delay, Duration::ZERO);
    }
}
