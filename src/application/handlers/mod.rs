//! Application handlers.
//!
//! Command handlers that orchestrate domain operations and ports.

pub mod audit;
pub mod roi;

pub use audit::{
    AuditFailure, AuditSlot, AuditSlotRegistry, AuditThesisCommand, AuditThesisHandler, SlotBusy,
};
pub use roi::{ProjectRoiCommand, ProjectRoiHandler};
