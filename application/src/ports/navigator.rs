//! External navigation port
//!
//! Opening a storefront page is fire-and-forget: adapters log failures
//! themselves and never report them back.

/// Opens URLs in a new browsing context (system browser, console echo, ...)
pub trait Navigator: Send + Sync {
    fn open(&self, url: &str);
}

/// A control (button) that is disabled while a redirect is pending
///
/// Implemented by the presentation layer's product control.
pub trait RedirectControl: Send + Sync {
    /// Disable the control and show `label` in place of its caption
    fn disable(&self, label: &str);

    /// Re-enable the control with its original caption
    fn restore(&self);
}
