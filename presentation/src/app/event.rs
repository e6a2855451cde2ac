//! Reactor events
//!
//! Everything the advisor reacts to (user commands and completions of
//! background work) arrives as one of these on a single queue.

use millet_application::{FetchError, FetchOutcome, GatewayError};
use millet_domain::{ConcernTag, ProductLink};
use std::path::PathBuf;

#[derive(Debug)]
pub enum AppEvent {
    // -- Selection --
    Toggle(ConcernTag),
    Remove(ConcernTag),
    ShowConcerns,

    // -- Fetch --
    /// Fetch with the current selection; `Some` replaces the stored query
    Fetch { query: Option<String> },
    FetchFinished(Result<FetchOutcome, FetchError>),

    // -- Products --
    /// Zero-based card index
    OpenProduct(usize),
    RedirectFinished { index: usize, link: ProductLink },

    // -- Backend info --
    ListMillets,
    MilletsListed(Result<Vec<String>, GatewayError>),

    // -- Session --
    ToggleTheme,
    Save(PathBuf),
    Help,
    /// Input that could not be understood, with a message for the user
    Invalid(String),
    Quit,
}
