//! Detected time-accounting anomalies
//!
//! Anomaly objects are produced by the upstream classifier and consumed by
//! the justification generator. They are derived views recomputed on every
//! analysis pass, never persisted as their own entities.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::types::justification::JustificationKey;

/// A detected hole in presence within a shift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnjustifiedGap {
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub end: NaiveTime,
    /// Event that originated the gap; informational linking only, never
    /// used for in-place mutation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_event_id: Option<String>,
    /// Set by the classifier when the gap bounds were already nudged off
    /// the surrounding punches, so the bracket lands exactly on them.
    #[serde(default)]
    pub boundary_aligned: bool,
}

/// A short workday whose shortfall is not attributable to one clear hole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkdayDeviation {
    pub date: NaiveDate,
    pub worked_hours: f64,
}

/// Anomaly consumed by the justification engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Anomaly {
    Gap(UnjustifiedGap),
    Deviation(WorkdayDeviation),
    FullDay { date: NaiveDate },
}

impl Anomaly {
    /// Calendar date the anomaly belongs to.
    pub fn date(&self) -> NaiveDate {
        match self {
            Self::Gap(gap) => gap.date,
            Self::Deviation(deviation) => deviation.date,
            Self::FullDay { date } => *date,
        }
    }

    /// Deterministic idempotency key for this anomaly.
    pub fn key(&self, employee_id: &str) -> JustificationKey {
        match self {
            Self::Gap(gap) => JustificationKey::for_gap(employee_id, gap.date, gap.start, gap.end),
            Self::Deviation(deviation) => {
                JustificationKey::for_deviation(employee_id, deviation.date)
            }
            Self::FullDay { date } => JustificationKey::for_full_day(employee_id, *date),
        }
    }
}
