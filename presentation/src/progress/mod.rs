//! Loading indicators

pub mod reporter;
