//! Use cases (application services)
//!
//! - [`fetch_recommendations`]: single-flight request to the backend
//! - [`redirect_product`]: delayed navigation to a storefront page

pub mod fetch_recommendations;
pub mod redirect_product;
