//! Presentation layer for millet-advisor
//!
//! This crate contains CLI definitions, the typed HTML view, console
//! formatters, loading indicators and the interactive session.

pub mod app;
pub mod cli;
pub mod html;
pub mod notify;
pub mod output;
pub mod progress;
pub mod view;

// Re-export commonly used types
pub use app::{AdvisorApp, AppEvent, spawn_reader};
pub use cli::commands::Cli;
pub use notify::{ConsoleNotifier, NotificationLevel, Notifier};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{LoadingSpinner, SimpleProgress};
pub use view::{ConcernSelector, ResultsView};
