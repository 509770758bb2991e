//! Domain types and models

pub mod anomaly;
pub mod event;
pub mod justification;
pub mod leave;
pub mod shift;
pub mod validation;

// Re-export the model types for convenience
pub use anomaly::{Anomaly, UnjustifiedGap, WorkdayDeviation};
pub use event::{ClockEvent, EmployeeRef, PunchDirection};
pub use justification::{
    JustificationKey, JustificationPlan, JustificationReason, RowReplacement,
};
pub use leave::LeaveRange;
pub use shift::{ShiftBounds, ShiftCode};
pub use validation::{IssueCategory, IssueSeverity, ValidationIssue};
