//! Route definitions for the thesis auditor

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{audit_schema, audit_thesis, AuditAppState};

/// Create the audit router
///
/// # Endpoints
///
/// - `POST /api/audit` - Classify an AI initiative
/// - `GET /api/audit/schema` - Response schema used to validate diagnostics
pub fn audit_router(state: AuditAppState) -> Router {
    Router::new()
        .route("/api/audit", post(audit_thesis))
        .route("/api/audit/schema", get(audit_schema))
        .with_state(state)
}
