//! ROI Audit - ROI projection and AI initiative auditing
//!
//! Two capabilities back the webinar landing page:
//!
//! - A closed-form ROI projector (annual ROI percentage and payback months)
//! - A thesis auditor that asks a hosted model to classify an initiative as
//!   strategic value or tactical leakage, returning a fixed fallback
//!   diagnostic whenever the model's answer cannot be trusted

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
