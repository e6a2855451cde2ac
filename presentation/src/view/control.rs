//! Product redirect control

use millet_application::RedirectControl;
use std::sync::Mutex;

/// Visible state of a control at one point in time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlState {
    pub label: String,
    pub disabled: bool,
}

/// The "View ... Products" button of one card
///
/// Shared between the results view and a pending redirect task.
#[derive(Debug)]
pub struct ProductControl {
    caption: String,
    state: Mutex<ControlState>,
}

impl ProductControl {
    pub fn new(caption: impl Into<String>) -> Self {
        let caption = caption.into();
        Self {
            state: Mutex::new(ControlState {
                label: caption.clone(),
                disabled: false,
            }),
            caption,
        }
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }

    pub fn snapshot(&self) -> ControlState {
        match self.state.lock() {
            Ok(state) => state.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn is_disabled(&self) -> bool {
        self.snapshot().disabled
    }

    fn set(&self, label: &str, disabled: bool) {
        let mut state = match self.state.lock() {
            Ok(state) => state,
            Err(poisoned) => poisoned.into_inner(),
        };
        state.label = label.to_string();
        state.disabled = disabled;
    }
}

impl RedirectControl for ProductControl {
    fn disable(&self, label: &str) {
        self.set(label, true);
    }

    fn restore(&self) {
        self.set(&self.caption, false);
    }
}
