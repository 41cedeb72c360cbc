//! HTTP DTOs for the ROI calculator
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};

use crate::application::ProjectRoiCommand;
use crate::domain::roi::RoiResult;

/// A calculator field, sent either as a JSON number or as the raw input text.
///
/// Any other JSON value is kept as `Other` and treated like an empty field.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FormValue {
    Number(f64),
    Text(String),
    Other(IgnoredAny),
}

impl FormValue {
    fn into_text(self) -> String {
        match self {
            FormValue::Number(n) => n.to_string(),
            FormValue::Text(s) => s,
            FormValue::Other(_) => String::new(),
        }
    }
}

fn field_text(value: Option<FormValue>) -> String {
    value.map(FormValue::into_text).unwrap_or_default()
}

/// Request to project ROI
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiRequest {
    #[serde(default)]
    pub investment: Option<FormValue>,
    #[serde(default)]
    pub monthly_savings: Option<FormValue>,
}

impl RoiRequest {
    pub fn into_command(self) -> ProjectRoiCommand {
        ProjectRoiCommand::new(
            field_text(self.investment),
            field_text(self.monthly_savings),
        )
    }
}

/// Response for a projection
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiResponse {
    pub annual_roi_percent: f64,
    /// `None` when savings never repay the investment.
    pub payback_months: Option<f64>,
    pub annual_roi_display: String,
    pub payback_display: String,
}

impl From<RoiResult> for RoiResponse {
    fn from(result: RoiResult) -> Self {
        Self {
            annual_roi_percent: result.annual_roi_percent,
            payback_months: result.payback.months(),
            annual_roi_display: result.annual_roi_display(),
            payback_display: result.payback_display(),
        }
    }
}
