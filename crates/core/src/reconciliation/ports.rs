//! Port interfaces for attendance reconciliation
//!
//! The engine never talks to the record store or the anomaly classifier
//! directly; both are capability interfaces implemented by the surrounding
//! application, which keeps the whole engine testable with in-memory
//! fixtures.

use async_trait::async_trait;
use chrono::NaiveDate;
use shiftledger_domain::{Anomaly, ClockEvent, JustificationKey, Result, ShiftCode};

/// Read access to the remote attendance record store.
#[async_trait]
pub trait ClockEventRepository: Send + Sync {
    /// All events for one employee within an inclusive date range.
    async fn events_for_employee(
        &self,
        employee_id: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<ClockEvent>>;

    /// Events for a single employee and day.
    async fn events_for_day(&self, employee_id: &str, date: NaiveDate) -> Result<Vec<ClockEvent>>;
}

/// Upstream anomaly classifier.
///
/// Detection happens outside the engine; this port only hands over the
/// already-classified anomaly objects and the employee's shift assignment.
#[async_trait]
pub trait AnomalyProvider: Send + Sync {
    /// Anomalies detected for one employee within an inclusive date range.
    async fn anomalies_for_employee(
        &self,
        employee_id: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<Anomaly>>;

    /// Shift code currently assigned to the employee.
    async fn shift_for_employee(&self, employee_id: &str) -> Result<ShiftCode>;
}

/// Caller-owned idempotency ledger for justification keys.
///
/// The engine derives keys deterministically but never persists them;
/// at-most-once execution against the remote store is the caller's
/// responsibility, expressed through this contract.
#[async_trait]
pub trait JustificationLedger: Send + Sync {
    /// Whether the anomaly behind this key was already justified.
    async fn is_recorded(&self, key: &JustificationKey) -> Result<bool>;

    /// Record a key after the corresponding rows were persisted.
    async fn record(&self, key: JustificationKey) -> Result<()>;
}
