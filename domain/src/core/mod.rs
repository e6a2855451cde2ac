//! Core domain concepts shared across all subdomains.
//!
//! - [`markup::Markup`]: trusted, pre-formatted HTML and the escaping rules for plain text
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod markup;
pub mod string;
