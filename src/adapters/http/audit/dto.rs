//! HTTP DTOs for the thesis auditor

use serde::{Deserialize, Serialize};

use crate::domain::audit::{AuditDiagnostic, AuditOutcome};

/// Request to audit an AI initiative
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditRequestDto {
    #[serde(default)]
    pub use_case: String,
}

/// Response carrying a diagnostic
///
/// The diagnostic fields sit at the top level, next to the badge text and a
/// flag telling the page whether the fixed fallback was returned.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditResponse {
    #[serde(flatten)]
    pub diagnostic: AuditDiagnostic,
    pub status_label: String,
    pub fallback: bool,
}

impl From<AuditOutcome> for AuditResponse {
    fn from(outcome: AuditOutcome) -> Self {
        let fallback = outcome.is_fallback();
        let status_label = outcome.diagnostic.category.status_label().to_string();
        Self {
            diagnostic: outcome.diagnostic,
            status_label,
            fallback,
        }
    }
}

/// Error response body
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self {
            code: "CONFLICT".to_string(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::audit::{AuditCategory, FALLBACK_ROI_ESTIMATE};

    #[test]
    fn missing_use_case_defaults_to_empty() {
        let req: AuditRequestDto = serde_json::from_str("{}").unwrap();
        assert!(req.use_case.is_empty());
    }

    #[test]
    fn model_outcome_flattens_diagnostic() {
        let outcome = AuditOutcome::from_model(AuditDiagnostic {
            category: AuditCategory::Value,
            roi_estimate: "3x".to_string(),
            reasoning: "Reduce costes".to_string(),
            recommendation: "Escalar".to_string(),
        });

        let json = serde_json::to_value(AuditResponse::from(outcome)).unwrap();

        assert_eq!(json["category"], "VALUE");
        assert_eq!(json["roiEstimate"], "3x");
        assert_eq!(json["statusLabel"], "STATUS: ACTIVO ESTRATÉGICO");
        assert_eq!(json["fallback"], false);
    }

    #[test]
    fn fallback_outcome_is_flagged() {
        let json = serde_json::to_value(AuditResponse::from(AuditOutcome::fallback())).unwrap();

        assert_eq!(json["category"], "LEAKAGE");
        assert_eq!(json["roiEstimate"], FALLBACK_ROI_ESTIMATE);
        assert_eq!(json["statusLabel"], "STATUS: RIESGO DE DILUCIÓN");
        assert_eq!(json["fallback"], true);
    }

    #[test]
    fn error_constructors_set_codes() {
        assert_eq!(ErrorResponse::bad_request("x").code, "BAD_REQUEST");
        assert_eq!(ErrorResponse::conflict("x").code, "CONFLICT");
    }
}
