//! Thesis audit handlers.

mod audit_thesis;
mod slots;

pub use audit_thesis::{AuditFailure, AuditThesisCommand, AuditThesisHandler};
pub use slots::{AuditSlot, AuditSlotRegistry, SlotBusy};
