//! Leave range grouping
//!
//! Collapses per-day absence rows into contiguous multi-day leave ranges,
//! one range per employee and reason code. The contiguity tolerance of 1.5
//! days lets a range survive a single non-labour day in the underlying
//! schedule without splitting.

use chrono::Duration;
use shiftledger_domain::constants::LEAVE_CONTIGUITY_HOURS;
use shiftledger_domain::{ClockEvent, LeaveRange};

/// Group absence rows into contiguous leave ranges.
///
/// Only absence exits participate (reasoned exits excluding the terminal
/// and break codes). Rows are grouped by employee and reason, then swept in
/// date order: a row within the contiguity tolerance of the open range's
/// end date extends it, anything else closes the range and opens a new one.
pub fn group_leave_ranges(events: &[ClockEvent]) -> Vec<LeaveRange> {
    let mut rows: Vec<&ClockEvent> = events.iter().filter(|e| e.is_absence_exit()).collect();
    rows.sort_by(|a, b| {
        (&a.employee_id, a.reason_code.as_deref(), a.date)
            .cmp(&(&b.employee_id, b.reason_code.as_deref(), b.date))
    });

    let tolerance = Duration::hours(LEAVE_CONTIGUITY_HOURS);
    let mut ranges: Vec<LeaveRange> = Vec::new();
    let mut current: Option<LeaveRange> = None;

    for row in rows {
        if let Some(range) = current.as_mut() {
            let same_group = range.employee_id == row.employee_id
                && Some(range.reason_code.as_str()) == row.reason_code.as_deref();
            let contiguous =
                row.date.signed_duration_since(range.end_date) <= tolerance;

            if same_group && contiguous {
                range.end_date = row.date;
                range.events.push(row.clone());
                continue;
            }

            if let Some(closed) = current.take() {
                ranges.push(closed);
            }
        }

        current = Some(open_range(row));
    }

    if let Some(range) = current {
        ranges.push(range);
    }

    ranges
}

fn open_range(row: &ClockEvent) -> LeaveRange {
    LeaveRange {
        employee_id: row.employee_id.clone(),
        employee_name: row.employee_name.clone(),
        department: row.department.clone(),
        reason_code: row.reason_code.clone().unwrap_or_default(),
        reason_description: row.reason_description.clone(),
        start_date: row.date,
        end_date: row.date,
        full_day: row.is_full_day_absence(),
        start_time: row.ref_start,
        end_time: row.ref_end,
        events: vec![row.clone()],
    }
}
