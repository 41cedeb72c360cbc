//! ROI Module - Closed-form projection of return on an AI investment.
//!
//! # Components
//!
//! - `RoiInput` - Guarded pair of investment and monthly savings
//! - `RoiProjector` - Annual ROI percentage and payback period
//! - `Payback` - Payback period, or `Never` when savings cannot repay
//!
//! Everything here is pure. Invalid input yields no result at all rather
//! than an error, since the page simply skips the projection.

mod input;
mod projector;

pub use input::RoiInput;
pub use projector::{Payback, RoiProjector, RoiResult, MONTHS_PER_YEAR};
