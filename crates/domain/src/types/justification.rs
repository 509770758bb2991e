//! Justification outputs and idempotency keys

use std::fmt;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::types::event::ClockEvent;

/// Idempotency token preventing the same anomaly from being justified
/// twice.
///
/// The caller records the key after a successful persist and checks it
/// before offering the anomaly again; the engine only derives the
/// canonical string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JustificationKey(String);

impl JustificationKey {
    pub fn for_gap(
        employee_id: &str,
        date: NaiveDate,
        start: NaiveTime,
        end: NaiveTime,
    ) -> Self {
        Self(format!(
            "gap|{employee_id}|{date}|{}-{}",
            start.format("%H:%M"),
            end.format("%H:%M")
        ))
    }

    pub fn for_full_day(employee_id: &str, date: NaiveDate) -> Self {
        Self(format!("absence|{employee_id}|{date}"))
    }

    pub fn for_deviation(employee_id: &str, date: NaiveDate) -> Self {
        Self(format!("deviation|{employee_id}|{date}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JustificationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Reason chosen by the operator when justifying an anomaly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JustificationReason {
    pub code: String,
    pub description: String,
}

/// Synthetic entry/exit pair encoding one justification.
///
/// Both rows always carry the application-generated flag; the exit carries
/// the justification reason.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JustificationPlan {
    pub entry: ClockEvent,
    pub exit: ClockEvent,
    pub description: String,
    pub key: JustificationKey,
}

impl JustificationPlan {
    /// Rows to hand to the persistence layer, entry first.
    pub fn rows(&self) -> Vec<ClockEvent> {
        vec![self.entry.clone(), self.exit.clone()]
    }
}

/// Old-to-new row pair for edit flows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowReplacement {
    pub remove: ClockEvent,
    pub insert: ClockEvent,
}
