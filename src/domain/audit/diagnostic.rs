//! Audit diagnostic and its fallback.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Label used when the diagnostic could not be produced.
pub const FALLBACK_ROI_ESTIMATE: &str = "FALLA_ANALISIS";

/// Reasoning shown when the diagnostic could not be produced.
pub const FALLBACK_REASONING: &str = "El motor de auditoría no pudo procesar la solicitud debido a una interrupción en el handshake estratégico.";

/// Recommendation shown when the diagnostic could not be produced.
pub const FALLBACK_RECOMMENDATION: &str =
    "Reintentar el análisis con una descripción más detallada del flujo operativo.";

/// Whether an initiative is a strategic investment or a tactical cost leak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AuditCategory {
    /// Strategic investment with a return.
    Value,
    /// Tactical spend with null or negative return.
    Leakage,
}

impl AuditCategory {
    /// All categories, in schema order.
    pub const ALL: [AuditCategory; 2] = [AuditCategory::Value, AuditCategory::Leakage];

    /// Wire value used in the response schema.
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditCategory::Value => "VALUE",
            AuditCategory::Leakage => "LEAKAGE",
        }
    }

    /// Badge text shown next to the diagnostic.
    pub fn status_label(&self) -> &'static str {
        match self {
            AuditCategory::Value => "STATUS: ACTIVO ESTRATÉGICO",
            AuditCategory::Leakage => "STATUS: RIESGO DE DILUCIÓN",
        }
    }
}

impl fmt::Display for AuditCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured classification of an AI initiative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditDiagnostic {
    pub category: AuditCategory,
    pub roi_estimate: String,
    pub reasoning: String,
    pub recommendation: String,
}

impl AuditDiagnostic {
    /// The fixed diagnostic returned when analysis fails for any reason.
    pub fn fallback() -> Self {
        Self {
            category: AuditCategory::Leakage,
            roi_estimate: FALLBACK_ROI_ESTIMATE.to_string(),
            reasoning: FALLBACK_REASONING.to_string(),
            recommendation: FALLBACK_RECOMMENDATION.to_string(),
        }
    }
}

/// Where a diagnostic came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticSource {
    Model,
    Fallback,
}

/// A diagnostic together with its source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditOutcome {
    pub diagnostic: AuditDiagnostic,
    pub source: DiagnosticSource,
}

impl AuditOutcome {
    pub fn from_model(diagnostic: AuditDiagnostic) -> Self {
        Self {
            diagnostic,
            source: DiagnosticSource::Model,
        }
    }

    pub fn fallback() -> Self {
        Self {
            diagnostic: AuditDiagnostic::fallback(),
            source: DiagnosticSource::Fallback,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.source == DiagnosticSource::Fallback
    }
}
