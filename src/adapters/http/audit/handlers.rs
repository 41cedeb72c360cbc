//! HTTP handlers for the thesis auditor

use std::sync::Arc;

use axum::extract::{Json, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use serde_json::Value;

use crate::application::{AuditSlotRegistry, AuditThesisCommand, AuditThesisHandler};
use crate::domain::audit::AuditRequest;
use crate::domain::foundation::SessionId;
use crate::ports::{AIProvider, DiagnosticSchemaValidator};

use super::dto::{AuditRequestDto, AuditResponse, ErrorResponse};

/// Header naming the browser session that owns the audit slot.
pub const SESSION_HEADER: &str = "x-session-id";

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

/// Application state for audit handlers
#[derive(Clone)]
pub struct AuditAppState {
    pub ai_provider: Arc<dyn AIProvider>,
    pub validator: Arc<dyn DiagnosticSchemaValidator>,
    pub slots: AuditSlotRegistry,
}

impl AuditAppState {
    pub fn new(
        ai_provider: Arc<dyn AIProvider>,
        validator: Arc<dyn DiagnosticSchemaValidator>,
    ) -> Self {
        Self {
            ai_provider,
            validator,
            slots: AuditSlotRegistry::new(),
        }
    }

    pub fn audit_handler(&self) -> AuditThesisHandler<dyn AIProvider> {
        AuditThesisHandler::new(self.ai_provider.clone(), self.validator.clone())
    }
}

type HandlerError = (StatusCode, Json<ErrorResponse>);

fn session_from_headers(headers: &HeaderMap) -> Result<Option<SessionId>, HandlerError> {
    let Some(raw) = headers.get(SESSION_HEADER) else {
        return Ok(None);
    };

    raw.to_str()
        .ok()
        .and_then(|value| value.parse::<SessionId>().ok())
        .map(Some)
        .ok_or_else(|| {
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request(format!(
                    "{} must be a UUID",
                    SESSION_HEADER
                ))),
            )
        })
}

// ════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════

/// Audit an AI initiative
///
/// POST /api/audit
///
/// Blank text gets `204 No Content` without contacting the model. A second
/// request for a session with an audit in flight gets `409 Conflict`. Every
/// other outcome is `200 OK`, carrying either the model's diagnostic or the
/// fixed fallback.
pub async fn audit_thesis(
    State(state): State<AuditAppState>,
    headers: HeaderMap,
    Json(req): Json<AuditRequestDto>,
) -> Result<Response, HandlerError> {
    let session_id = session_from_headers(&headers)?;

    let Ok(request) = AuditRequest::new(req.use_case) else {
        tracing::debug!("audit skipped: empty use case");
        return Ok(StatusCode::NO_CONTENT.into_response());
    };

    let _slot = match session_id {
        Some(id) => Some(state.slots.try_acquire(id).map_err(|busy| {
            tracing::info!(session_id = %busy.0, "audit rejected: already in flight");
            (
                StatusCode::CONFLICT,
                Json(ErrorResponse::conflict(busy.to_string())),
            )
        })?),
        None => None,
    };

    let mut cmd = AuditThesisCommand::new(request);
    if let Some(id) = session_id {
        cmd = cmd.for_session(id);
    }

    let outcome = state.audit_handler().handle(cmd).await;
    Ok((StatusCode::OK, Json(AuditResponse::from(outcome))).into_response())
}

/// Return the JSON schema diagnostics are validated against
///
/// GET /api/audit/schema
pub async fn audit_schema(State(state): State<AuditAppState>) -> Json<Value> {
    Json(state.validator.schema().clone())
}
