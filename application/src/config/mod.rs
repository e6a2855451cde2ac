//! Application-level configuration
//!
//! Parameters the use cases need that are neither domain policy nor
//! adapter settings.

pub mod redirect_params;

pub use redirect_params::RedirectParams;
