//! Guarded ROI input.

use serde::Serialize;

/// Investment and monthly savings that satisfy the projection precondition.
///
/// Only constructible when both values are finite, `investment > 0`, and the
/// annual ROI they produce is finite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiInput {
    investment: f64,
    monthly_savings: f64,
}

impl RoiInput {
    /// Creates an input, or `None` when the precondition fails.
    ///
    /// Monthly savings may be zero or negative. Pairs whose annual ROI
    /// overflows, such as a subnormal investment, are rejected.
    pub fn new(investment: f64, monthly_savings: f64) -> Option<Self> {
        if !investment.is_finite() || !monthly_savings.is_finite() || investment <= 0.0 {
            return None;
        }
        if !annual_roi_percent(investment, monthly_savings).is_finite() {
            return None;
        }
        Some(Self {
            investment,
            monthly_savings,
        })
    }

    /// Parses the raw strings submitted by the calculator form.
    pub fn parse(investment: &str, monthly_savings: &str) -> Option<Self> {
        let investment = investment.trim().parse::<f64>().ok()?;
        let monthly_savings = monthly_savings.trim().parse::<f64>().ok()?;
        Self::new(investment, monthly_savings)
    }

    pub fn investment(&self) -> f64 {
        self.investment
    }

    pub fn monthly_savings(&self) -> f64 {
        self.monthly_savings
    }
}

/// Annual ROI % = monthly_savings × 12 / investment × 100.
pub(crate) fn annual_roi_percent(investment: f64, monthly_savings: f64) -> f64 {
    (monthly_savings * super::MONTHS_PER_YEAR / investment) * 100.0
}
