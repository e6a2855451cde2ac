//! Storefront product links for recommended millets.

pub mod catalog;
