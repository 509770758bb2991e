//! Real elapsed time over overlapping work entries
//!
//! Multi-task accounting reports several same-day entries that may overlap.
//! Payroll wants the real wall-clock time, so entries are swept into merged
//! intervals before summing. Same-day intervals only; overnight spans are
//! handled upstream by the shift logic.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use shiftledger_domain::minutes_from_midnight;

/// One work entry with same-day start/end clock times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkInterval {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl WorkInterval {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }
}

/// Total real elapsed time in hours over the merged intervals, rounded to
/// two decimals.
///
/// Entries with `end <= start` are dropped; zero or all-invalid input
/// yields 0.0.
pub fn merged_hours(entries: &[WorkInterval]) -> f64 {
    round2(merged_minutes(entries) as f64 / 60.0)
}

/// Ratio of raw to merged time.
///
/// Above 1.0 the entries overlap (concurrent, multi-tasked work); 0.0 when
/// no valid entries exist.
pub fn overlap_efficiency(entries: &[WorkInterval]) -> f64 {
    let merged = merged_minutes(entries);
    if merged == 0 {
        return 0.0;
    }

    let raw: i64 = spans_of(entries).iter().map(|(start, end)| end - start).sum();
    round2(raw as f64 / merged as f64)
}

/// Sweep-merge the valid entries and sum the merged durations in minutes.
fn merged_minutes(entries: &[WorkInterval]) -> i64 {
    let mut spans = spans_of(entries);
    spans.sort_unstable_by_key(|(start, _)| *start);

    let mut total = 0;
    let mut current: Option<(i64, i64)> = None;

    for (start, end) in spans {
        match current {
            // Strictly inside the open interval: extend it
            Some((open_start, open_end)) if start < open_end => {
                current = Some((open_start, open_end.max(end)));
            }
            // Touching or beyond: close the open interval
            Some((open_start, open_end)) => {
                total += open_end - open_start;
                current = Some((start, end));
            }
            None => current = Some((start, end)),
        }
    }

    if let Some((open_start, open_end)) = current {
        total += open_end - open_start;
    }

    total
}

fn spans_of(entries: &[WorkInterval]) -> Vec<(i64, i64)> {
    entries
        .iter()
        .map(|entry| (minutes_from_midnight(entry.start), minutes_from_midnight(entry.end)))
        .filter(|(start, end)| end > start)
        .collect()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
