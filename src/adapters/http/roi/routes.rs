//! Route definitions for the ROI calculator

use axum::routing::post;
use axum::Router;

use super::handlers::project_roi;

/// Create the ROI router
///
/// # Endpoints
///
/// - `POST /api/roi` - Project annual ROI and payback period
pub fn roi_router() -> Router {
    Router::new().route("/api/roi", post(project_roi))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    async fn post_roi(body: &str) -> (StatusCode, Vec<u8>) {
        let response = roi_router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/roi")
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, bytes.to_vec())
    }

    #[tokio::test]
    async fn valid_input_returns_projection() {
        let (status, body) = post_roi(r#"{"investment": 1000, "monthlySavings": 100}"#).await;

        assert_eq!(status, StatusCode::OK);
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["annualRoiPercent"], 120.0);
        assert_eq!(json["paybackMonths"], 10.0);
        assert_eq!(json["annualRoiDisplay"], "120%");
        assert_eq!(json["paybackDisplay"], "10.0");
    }

    #[tokio::test]
    async fn zero_investment_returns_no_content() {
        let (status, body) = post_roi(r#"{"investment": 0, "monthlySavings": 100}"#).await;

        assert_eq!(status, StatusCode::NO_CONTENT);
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn null_field_returns_no_content() {
        let (status, body) = post_roi(r#"{"investment": null, "monthlySavings": 100}"#).await;

        assert_eq!(status, StatusCode::NO_CONTENT);
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn missing_field_returns_no_content() {
        let (status, _) = post_roi(r#"{"investment": 1000}"#).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn boolean_field_returns_no_content() {
        let (status, _) = post_roi(r#"{"investment": true, "monthlySavings": 100}"#).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn overflowing_roi_returns_no_content() {
        let (status, _) = post_roi(r#"{"investment": 1e-310, "monthlySavings": 1}"#).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn overflowing_payback_displays_infinity() {
        let (status, body) =
            post_roi(r#"{"investment": 1e308, "monthlySavings": 1e-10}"#).await;

        assert_eq!(status, StatusCode::OK);
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert!(json["paybackMonths"].is_null());
        assert_eq!(json["paybackDisplay"], "∞");
    }

    #[tokio::test]
    async fn non_numeric_text_returns_no_content() {
        let (status, _) = post_roi(r#"{"investment": "mucho", "monthlySavings": "100"}"#).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
    }
}
