//! Recommendation request/response model.

pub mod request;
pub mod response;
