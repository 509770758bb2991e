//! Mock port implementations for testing
//!
//! Provides in-memory mocks for all reconciliation ports, enabling
//! deterministic integration tests without any external store.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::NaiveDate;
use shiftledger_core::{AnomalyProvider, ClockEventRepository, JustificationLedger};
use shiftledger_domain::{
    Anomaly, ClockEvent, JustificationKey, Result as DomainResult, ShiftCode,
};

/// In-memory mock for `ClockEventRepository`.
///
/// Stores a fixed set of events and answers the date-scoped queries the
/// service issues during validation.
#[derive(Default, Clone)]
pub struct MockClockEventRepository {
    events: Arc<Vec<ClockEvent>>,
}

impl MockClockEventRepository {
    pub fn new(events: Vec<ClockEvent>) -> Self {
        Self { events: Arc::new(events) }
    }
}

#[async_trait]
impl ClockEventRepository for MockClockEventRepository {
    async fn events_for_employee(
        &self,
        employee_id: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> DomainResult<Vec<ClockEvent>> {
        Ok(self
            .events
            .iter()
            .filter(|event| {
                event.employee_id == employee_id && event.date >= from && event.date <= to
            })
            .cloned()
            .collect())
    }

    async fn events_for_day(
        &self,
        employee_id: &str,
        date: NaiveDate,
    ) -> DomainResult<Vec<ClockEvent>> {
        self.events_for_employee(employee_id, date, date).await
    }
}

/// In-memory mock for `AnomalyProvider`.
#[derive(Clone)]
pub struct MockAnomalyProvider {
    anomalies: Arc<Vec<Anomaly>>,
    shift: ShiftCode,
}

impl MockAnomalyProvider {
    pub fn new(anomalies: Vec<Anomaly>, shift: ShiftCode) -> Self {
        Self { anomalies: Arc::new(anomalies), shift }
    }
}

#[async_trait]
impl AnomalyProvider for MockAnomalyProvider {
    async fn anomalies_for_employee(
        &self,
        _employee_id: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> DomainResult<Vec<Anomaly>> {
        Ok(self
            .anomalies
            .iter()
            .filter(|anomaly| anomaly.date() >= from && anomaly.date() <= to)
            .cloned()
            .collect())
    }

    async fn shift_for_employee(&self, _employee_id: &str) -> DomainResult<ShiftCode> {
        Ok(self.shift)
    }
}

/// In-memory mock for `JustificationLedger`.
///
/// Keys live in a shared set so tests can observe what the service
/// recorded.
#[derive(Default, Clone)]
pub struct MockJustificationLedger {
    recorded: Arc<Mutex<HashSet<JustificationKey>>>,
}

impl MockJustificationLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the ledger with an already-recorded key.
    pub fn with_recorded(self, key: JustificationKey) -> Self {
        if let Ok(mut recorded) = self.recorded.lock() {
            recorded.insert(key);
        }
        self
    }

    pub fn contains(&self, key: &JustificationKey) -> bool {
        self.recorded.lock().map(|recorded| recorded.contains(key)).unwrap_or(false)
    }
}

#[async_trait]
impl JustificationLedger for MockJustificationLedger {
    async fn is_recorded(&self, key: &JustificationKey) -> DomainResult<bool> {
        Ok(self.contains(key))
    }

    async fn record(&self, key: JustificationKey) -> DomainResult<()> {
        if let Ok(mut recorded) = self.recorded.lock() {
            recorded.insert(key);
        }
        Ok(())
    }
}
