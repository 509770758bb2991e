//! Contiguous multi-day leave ranges
//!
//! A leave range collapses per-day absence rows of one employee and one
//! reason into a single start/end span. Ranges are derived views rebuilt on
//! every analysis pass.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::types::event::ClockEvent;

/// Contiguous absence span for one employee and one reason code.
///
/// Dates are inclusive. Two ranges of the same employee and reason never
/// overlap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveRange {
    pub employee_id: String,
    pub employee_name: String,
    pub department: String,
    pub reason_code: String,
    pub reason_description: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Whole days, as opposed to a partial span with explicit clock times
    pub full_day: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<NaiveTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<NaiveTime>,
    /// Original rows the range was built from
    pub events: Vec<ClockEvent>,
}

impl LeaveRange {
    /// Number of calendar days covered, inclusive.
    pub fn span_days(&self) -> i64 {
        self.end_date.signed_duration_since(self.start_date).num_days() + 1
    }
}
