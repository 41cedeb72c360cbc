//! ROI Projector - Annual return and payback period.

use serde::{Serialize, Serializer};

use super::input::annual_roi_percent;
use super::RoiInput;

/// Months used to annualize monthly savings.
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// How long the investment takes to be repaid by monthly savings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Payback {
    /// Repaid after this many months.
    Months(f64),
    /// Savings are zero or negative, or too small to ever repay the
    /// investment in a finite number of months.
    Never,
}

impl Payback {
    /// Returns the month count, or `None` for `Never`.
    pub fn months(&self) -> Option<f64> {
        match self {
            Payback::Months(months) => Some(*months),
            Payback::Never => None,
        }
    }

    /// Months with one decimal, or `∞` when never repaid.
    pub fn display(&self) -> String {
        match self {
            Payback::Months(months) => format!("{:.1}", months),
            Payback::Never => "∞".to_string(),
        }
    }
}

impl Serialize for Payback {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.months().serialize(serializer)
    }
}

/// Result of a projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiResult {
    pub annual_roi_percent: f64,
    #[serde(rename = "paybackMonths")]
    pub payback: Payback,
}

impl RoiResult {
    /// Annual ROI rounded to a whole percent, e.g. `120%`.
    pub fn annual_roi_display(&self) -> String {
        format!("{:.0}%", self.annual_roi_percent)
    }

    /// Payback months with one decimal, e.g. `10.0`.
    pub fn payback_display(&self) -> String {
        self.payback.display()
    }
}

/// ROI projection functions.
pub struct RoiProjector;

impl RoiProjector {
    /// Projects annual ROI and payback period.
    ///
    /// # Formulas
    /// - annual ROI % = monthly_savings × 12 / investment × 100
    /// - payback months = investment / monthly_savings
    ///
    /// # Edge Cases
    /// - Zero or negative savings: payback is `Never`, ROI is still computed
    /// - Payback overflowing to infinity: `Never`
    pub fn project(input: &RoiInput) -> RoiResult {
        let investment = input.investment();
        let savings = input.monthly_savings();

        let annual_roi_percent = annual_roi_percent(investment, savings);
        let months = investment / savings;
        let payback = if savings > 0.0 && months.is_finite() {
            Payback::Months(months)
        } else {
            Payback::Never
        };

        RoiResult {
            annual_roi_percent,
            payback,
        }
    }

    /// Guards the precondition and projects, or returns `None`.
    pub fn try_project(investment: f64, monthly_savings: f64) -> Option<RoiResult> {
        RoiInput::new(investment, monthly_savings).map(|input| Self::project(&input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
    }

    #[test]
    fn reference_projection() {
        let result = RoiProjector::try_project(1000.0, 100.0).unwrap();
        assert!(approx_eq(result.annual_roi_percent, 120.0));
        assert_eq!(result.payback, Payback::Months(10.0));
    }

    #[test]
    fn zero_investment_yields_no_result() {
        assert!(RoiProjector::try_project(0.0, 100.0).is_none());
    }

    #[test]
    fn zero_savings_never_pays_back() {
        let result = RoiProjector::try_project(500.0, 0.0).unwrap();
        assert_eq!(result.annual_roi_percent, 0.0);
        assert_eq!(result.payback, Payback::Never);
        assert_eq!(result.payback.months(), None);
    }

    #[test]
    fn negative_savings_never_pays_back() {
        let result = RoiProjector::try_project(1000.0, -50.0).unwrap();
        assert!(approx_eq(result.annual_roi_percent, -60.0));
        assert_eq!(result.payback, Payback::Never);
    }

    #[test]
    fn overflowing_payback_never_pays_back() {
        let result = RoiProjector::try_project(1e308, 1e-10).unwrap();
        assert!(result.annual_roi_percent.is_finite());
        assert_eq!(result.payback, Payback::Never);
        assert_eq!(result.payback_display(), "∞");
    }

    #[test]
    fn overflowing_roi_yields_no_result() {
        assert!(RoiProjector::try_project(1e-310, 1.0).is_none());
    }

    #[test]
    fn display_formats_match_the_calculator() {
        let result = RoiProjector::try_project(1000.0, 100.0).unwrap();
        assert_eq!(result.annual_roi_display(), "120%");
        assert_eq!(result.payback_display(), "10.0");

        let result = RoiProjector::try_project(25000.0, 1500.0).unwrap();
        assert_eq!(result.annual_roi_display(), "72%");
        assert_eq!(result.payback_display(), "16.7");

        let result = RoiProjector::try_project(500.0, 0.0).unwrap();
        assert_eq!(result.payback_display(), "∞");
    }

    #[test]
    fn serializes_never_as_null() {
        let result = RoiProjector::try_project(500.0, 0.0).unwrap();
        let json = serde_json::to_value(result).unwrap();
        assert_eq!(json["annualRoiPercent"], 0.0);
        assert!(json["paybackMonths"].is_null());
    }

    #[test]
    fn serializes_months_as_number() {
        let result = RoiProjector::try_project(1000.0, 100.0).unwrap();
        let json = serde_json::to_value(result).unwrap();
        assert_eq!(json["paybackMonths"], 10.0);
    }

    proptest! {
        #[test]
        fn projected_values_are_finite(
            investment in proptest::num::f64::ANY,
            savings in proptest::num::f64::ANY,
        ) {
            if let Some(result) = RoiProjector::try_project(investment, savings) {
                prop_assert!(result.annual_roi_percent.is_finite());
                if let Some(months) = result.payback.months() {
                    prop_assert!(months.is_finite());
                }
            }
        }

        #[test]
        fn annual_roi_matches_formula(
            investment in 0.01f64..1e9,
            savings in -1e7f64..1e7,
        ) {
            let result = RoiProjector::try_project(investment, savings).unwrap();
            let expected = savings * 12.0 / investment * 100.0;
            prop_assert!(approx_eq(result.annual_roi_percent, expected));
        }

        #[test]
        fn payback_times_savings_recovers_investment(
            investment in 0.01f64..1e9,
            savings in 0.01f64..1e7,
        ) {
            let result = RoiProjector::try_project(investment, savings).unwrap();
            let months = result.payback.months().unwrap();
            prop_assert!(approx_eq(months * savings, investment));
        }

        #[test]
        fn projection_is_idempotent(
            investment in 0.01f64..1e9,
            savings in -1e7f64..1e7,
        ) {
            let first = RoiProjector::try_project(investment, savings);
            let second = RoiProjector::try_project(investment, savings);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn non_positive_investment_never_projects(
            investment in -1e9f64..=0.0,
            savings in -1e7f64..1e7,
        ) {
            prop_assert!(RoiProjector::try_project(investment, savings).is_none());
        }
    }
}
