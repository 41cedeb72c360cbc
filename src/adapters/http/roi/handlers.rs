//! HTTP handlers for the ROI calculator

use axum::extract::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::application::ProjectRoiHandler;

use super::dto::{RoiRequest, RoiResponse};

/// Project annual ROI and payback period
///
/// POST /api/roi
///
/// Input that fails the precondition gets `204 No Content`: nothing is computed.
pub async fn project_roi(Json(req): Json<RoiRequest>) -> Response {
    match ProjectRoiHandler::new().handle(&req.into_command()) {
        Some(result) => (StatusCode::OK, Json(RoiResponse::from(result))).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}
