//! Reconciliation service - core business logic
//!
//! Thin orchestration over the ports: pull anomalies, build justification
//! plans, validate them against the employee's stored rows, and hand the
//! result back to the caller, who persists accepted rows through the
//! external store and then confirms the key.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shiftledger_domain::{
    Anomaly, EmployeeRef, JustificationKey, JustificationPlan, JustificationReason, Result,
    RowReplacement, ShiftLedgerError, ValidationIssue,
};
use tracing::{debug, warn};

use super::incident::{detect_incident_context, IncidentContext};
use super::justification::build_plan;
use super::ports::{AnomalyProvider, ClockEventRepository, JustificationLedger};
use super::validation::validate_insertions;

/// A validated justification candidate.
///
/// The caller persists `plan.rows()` only when nothing blocks, and records
/// the key afterwards via [`ReconciliationService::confirm`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JustificationProposal {
    pub plan: JustificationPlan,
    pub issues: Vec<ValidationIssue>,
}

impl JustificationProposal {
    /// True when any issue must stop persistence.
    pub fn is_blocked(&self) -> bool {
        self.issues.iter().any(ValidationIssue::is_blocking)
    }
}

/// Attendance reconciliation service
pub struct ReconciliationService {
    events: Arc<dyn ClockEventRepository>,
    anomalies: Arc<dyn AnomalyProvider>,
    ledger: Arc<dyn JustificationLedger>,
}

impl ReconciliationService {
    /// Create a new reconciliation service
    pub fn new(
        events: Arc<dyn ClockEventRepository>,
        anomalies: Arc<dyn AnomalyProvider>,
        ledger: Arc<dyn JustificationLedger>,
    ) -> Self {
        Self { events, anomalies, ledger }
    }

    /// Anomalies for the period that were not justified yet.
    pub async fn pending_anomalies(
        &self,
        employee_id: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<Anomaly>> {
        let detected = self.anomalies.anomalies_for_employee(employee_id, from, to).await?;
        let total = detected.len();

        let mut pending = Vec::with_capacity(total);
        for anomaly in detected {
            if !self.ledger.is_recorded(&anomaly.key(employee_id)).await? {
                pending.push(anomaly);
            }
        }

        debug!(employee_id, total, pending = pending.len(), "collected pending anomalies");
        Ok(pending)
    }

    /// Build and validate the synthetic rows justifying one anomaly.
    ///
    /// Refuses anomalies whose key is already recorded; idempotency over
    /// the remote store remains the caller's job, this check only stops
    /// obviously duplicated work early.
    pub async fn propose(
        &self,
        employee: &EmployeeRef,
        anomaly: &Anomaly,
        reason: &JustificationReason,
    ) -> Result<JustificationProposal> {
        let key = anomaly.key(&employee.id);
        if self.ledger.is_recorded(&key).await? {
            return Err(ShiftLedgerError::InvalidInput(format!(
                "anomaly already justified: {key}"
            )));
        }

        let shift = self.anomalies.shift_for_employee(&employee.id).await?;
        let plan = build_plan(employee, anomaly, shift, reason)?;

        let rows = plan.rows();
        let (from, to) = touched_date_span(rows.iter().map(|row| row.date));
        let existing = self.events.events_for_employee(&employee.id, from, to).await?;
        let issues = validate_insertions(&existing, &rows, &[]);

        if issues.iter().any(ValidationIssue::is_blocking) {
            warn!(
                employee_id = %employee.id,
                date = %anomaly.date(),
                issues = issues.len(),
                "justification proposal is blocked by validation errors"
            );
        }

        Ok(JustificationProposal { plan, issues })
    }

    /// Validate an edit flow without building new plans.
    ///
    /// Each replacement's removed row is treated as already gone when its
    /// inserted row is checked.
    pub async fn validate_replacements(
        &self,
        employee_id: &str,
        replacements: &[RowReplacement],
    ) -> Result<Vec<ValidationIssue>> {
        if replacements.is_empty() {
            return Ok(Vec::new());
        }

        let inserts: Vec<_> = replacements.iter().map(|r| r.insert.clone()).collect();
        let removes: Vec<_> = replacements.iter().map(|r| r.remove.clone()).collect();

        let dates = inserts.iter().chain(removes.iter()).map(|row| row.date);
        let (from, to) = touched_date_span(dates);
        let existing = self.events.events_for_employee(employee_id, from, to).await?;

        Ok(validate_insertions(&existing, &inserts, &removes))
    }

    /// Record the key after the caller persisted the rows.
    pub async fn confirm(&self, key: JustificationKey) -> Result<()> {
        self.ledger.record(key).await
    }

    /// Classify the punch shape of one day, for planned-absence flows.
    pub async fn incident_context_for(
        &self,
        employee_id: &str,
        date: NaiveDate,
    ) -> Result<IncidentContext> {
        let events = self.events.events_for_day(employee_id, date).await?;
        Ok(detect_incident_context(&events))
    }
}

/// Smallest inclusive date span covering the given dates.
fn touched_date_span(dates: impl Iterator<Item = NaiveDate>) -> (NaiveDate, NaiveDate) {
    let mut from = NaiveDate::MAX;
    let mut to = NaiveDate::MIN;
    for date in dates {
        from = from.min(date);
        to = to.max(date);
    }
    (from, to)
}
