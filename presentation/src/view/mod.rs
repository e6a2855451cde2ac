//! View state: concern selection, results and product controls

pub mod concerns;
pub mod control;
pub mod results;

pub use concerns::{ConcernCard, ConcernSelector, TAGS_PLACEHOLDER, TagView, TagsDisplay};
pub use control::{ControlState, ProductControl};
pub use results::{ClickBinding, ResultsView};
