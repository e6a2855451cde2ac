//! Health concerns and the user's current selection of them.

pub mod selection;
pub mod tag;
