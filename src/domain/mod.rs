//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (ids, validation errors)
//! - `roi` - Pure ROI and payback projection
//! - `audit` - Diagnostic shapes, auditor prompt, response schema, fallback

pub mod audit;
pub mod foundation;
pub mod roi;
