//! ProjectRoiHandler - Guarded ROI projection

use crate::domain::roi::{RoiInput, RoiProjector, RoiResult};

/// Raw calculator form values.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectRoiCommand {
    pub investment: String,
    pub monthly_savings: String,
}

impl ProjectRoiCommand {
    pub fn new(investment: impl Into<String>, monthly_savings: impl Into<String>) -> Self {
        Self {
            investment: investment.into(),
            monthly_savings: monthly_savings.into(),
        }
    }
}

/// Handler for ROI projections.
///
/// Input that fails the precondition yields `None`: no computation runs and
/// nothing is emitted.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectRoiHandler;

impl ProjectRoiHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, cmd: &ProjectRoiCommand) -> Option<RoiResult> {
        let Some(input) = RoiInput::parse(&cmd.investment, &cmd.monthly_savings) else {
            tracing::debug!(
                investment = %cmd.investment,
                monthly_savings = %cmd.monthly_savings,
                "ROI projection skipped: precondition not met"
            );
            return None;
        };

        Some(RoiProjector::project(&input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::roi::Payback;

    #[test]
    fn projects_valid_form_values() {
        let result = ProjectRoiHandler::new()
            .handle(&ProjectRoiCommand::new("1000", "100"))
            .unwrap();

        assert_eq!(result.annual_roi_percent, 120.0);
        assert_eq!(result.payback, Payback::Months(10.0));
    }

    #[test]
    fn skips_zero_investment() {
        assert!(ProjectRoiHandler::new()
            .handle(&ProjectRoiCommand::new("0", "100"))
            .is_none());
    }

    #[test]
    fn skips_non_numeric_values() {
        let handler = ProjectRoiHandler::new();
        assert!(handler.handle(&ProjectRoiCommand::new("", "")).is_none());
        assert!(handler.handle(&ProjectRoiCommand::new("10k", "100")).is_none());
    }

    #[test]
    fn zero_savings_is_never_repaid() {
        let result = ProjectRoiHandler::new()
            .handle(&ProjectRoiCommand::new("500", "0"))
            .unwrap();
        assert_eq!(result.payback, Payback::Never);
    }
}
