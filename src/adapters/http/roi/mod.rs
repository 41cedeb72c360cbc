//! HTTP adapters for the ROI calculator
//!
//! Exposes the projection as a stateless REST endpoint.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::{FormValue, RoiRequest, RoiResponse};
pub use routes::roi_router;
