//! ROI projection handlers.

mod project_roi;

pub use project_roi::{ProjectRoiCommand, ProjectRoiHandler};
