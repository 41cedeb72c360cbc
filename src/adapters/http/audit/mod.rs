//! HTTP adapters for the thesis auditor
//!
//! Exposes the audit as a REST endpoint. A session may run at most one
//! audit at a time; the slot is keyed by the `x-session-id` header.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::{AuditRequestDto, AuditResponse, ErrorResponse};
pub use handlers::{AuditAppState, SESSION_HEADER};
pub use routes::audit_router;
