//! # ShiftLedger Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The attendance reconciliation components (interval merging, leave
//!   grouping, incident detection, justification generation, conflict
//!   validation)
//! - Port/adapter interfaces (traits) for the external collaborators
//! - The orchestration service tying the components to the ports
//!
//! ## Architecture Principles
//! - Only depends on `shiftledger-domain`
//! - No database, HTTP, or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod reconciliation;

// Re-export specific items to avoid ambiguity
pub use reconciliation::incident::{detect_incident_context, IncidentContext};
pub use reconciliation::intervals::{merged_hours, overlap_efficiency, WorkInterval};
pub use reconciliation::justification::{build_plan, resolve_shape, JustificationShape};
pub use reconciliation::leave_ranges::group_leave_ranges;
pub use reconciliation::ports::{AnomalyProvider, ClockEventRepository, JustificationLedger};
pub use reconciliation::service::{JustificationProposal, ReconciliationService};
pub use reconciliation::validation::validate_insertions;
