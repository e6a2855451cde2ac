//! Interactive session: events, reactor and line input

pub mod advisor;
pub mod event;
pub mod repl;

pub use advisor::AdvisorApp;
pub use event::AppEvent;
pub use repl::{HELP_TEXT, parse_line, spawn_reader};
