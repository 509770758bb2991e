//! Clock punch rows
//!
//! `ClockEvent` is the atomic attendance record: one punch, captured by a
//! terminal upstream or generated by the engine as a synthetic
//! justification row. Rows are immutable once persisted; corrections always
//! insert new rows instead of editing captured ones.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::constants::{REASON_BREAK, REASON_SHIFT_END};
use crate::impl_domain_status_conversions;

/// Direction of a clock punch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PunchDirection {
    Entry,
    Exit,
}

impl_domain_status_conversions!(PunchDirection {
    Entry => "entry",
    Exit => "exit",
});

/// Employee identity stamped onto generated rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRef {
    pub id: String,
    pub name: String,
    pub department: String,
}

/// Clock punch event
///
/// An exit with a non-null reason code represents an absence or a
/// justification. The `REASON_SHIFT_END` code is the terminal marker; at
/// most one terminal exit may exist per employee per day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClockEvent {
    pub id: String,
    pub employee_id: String,
    pub employee_name: String,
    pub department: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub direction: PunchDirection,
    pub reason_code: Option<String>,
    pub reason_description: Option<String>,
    /// Whether the row participates in worked-hour totals
    pub computable: bool,
    pub shift_type: String,
    /// Start of the range a justification covers (synthetic exits only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ref_start: Option<NaiveTime>,
    /// End of the range a justification covers (synthetic exits only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ref_end: Option<NaiveTime>,
    /// True for rows generated by the application rather than a terminal
    pub app_generated: bool,
}

impl ClockEvent {
    pub fn is_entry(&self) -> bool {
        self.direction == PunchDirection::Entry
    }

    pub fn is_exit(&self) -> bool {
        self.direction == PunchDirection::Exit
    }

    /// Terminal "end of shift" exit.
    pub fn is_terminal_exit(&self) -> bool {
        self.is_exit() && self.reason_code.as_deref() == Some(REASON_SHIFT_END)
    }

    /// Break/smoking exit.
    pub fn is_break_exit(&self) -> bool {
        self.is_exit() && self.reason_code.as_deref() == Some(REASON_BREAK)
    }

    /// Absence or justification exit: a reasoned exit that is neither the
    /// terminal marker nor a break.
    pub fn is_absence_exit(&self) -> bool {
        self.is_exit()
            && self
                .reason_code
                .as_deref()
                .is_some_and(|code| code != REASON_SHIFT_END && code != REASON_BREAK)
    }

    /// Full-day absence marker: an absence exit at midnight carrying no
    /// explicit reference range.
    pub fn is_full_day_absence(&self) -> bool {
        self.is_absence_exit()
            && self.time == NaiveTime::MIN
            && self.ref_start.is_none()
            && self.ref_end.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exit_with_reason(reason: Option<&str>, time: NaiveTime) -> ClockEvent {
        ClockEvent {
            id: "evt-1".to_string(),
            employee_id: "E100".to_string(),
            employee_name: "Ana Torres".to_string(),
            department: "Logistics".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
            time,
            direction: PunchDirection::Exit,
            reason_code: reason.map(String::from),
            reason_description: None,
            computable: false,
            shift_type: "M".to_string(),
            ref_start: None,
            ref_end: None,
            app_generated: false,
        }
    }

    #[test]
    fn terminal_and_break_exits_are_not_absences() {
        let noon = NaiveTime::from_hms_opt(12, 0, 0).unwrap();

        assert!(exit_with_reason(Some(REASON_SHIFT_END), noon).is_terminal_exit());
        assert!(exit_with_reason(Some(REASON_BREAK), noon).is_break_exit());
        assert!(!exit_with_reason(Some(REASON_SHIFT_END), noon).is_absence_exit());
        assert!(!exit_with_reason(Some(REASON_BREAK), noon).is_absence_exit());
        assert!(!exit_with_reason(None, noon).is_absence_exit());
        assert!(exit_with_reason(Some("SICK"), noon).is_absence_exit());
    }

    #[test]
    fn full_day_marker_requires_midnight_and_no_range() {
        let midnight = NaiveTime::MIN;
        let noon = NaiveTime::from_hms_opt(12, 0, 0).unwrap();

        assert!(exit_with_reason(Some("VAC"), midnight).is_full_day_absence());
        assert!(!exit_with_reason(Some("VAC"), noon).is_full_day_absence());

        let mut ranged = exit_with_reason(Some("VAC"), midnight);
        ranged.ref_start = Some(NaiveTime::from_hms_opt(9, 0, 0).unwrap());
        ranged.ref_end = Some(NaiveTime::from_hms_opt(11, 0, 0).unwrap());
        assert!(!ranged.is_full_day_absence());
    }

    #[test]
    fn punch_direction_conversions() {
        use std::str::FromStr;

        assert_eq!(PunchDirection::Entry.to_string(), "entry");
        assert_eq!(PunchDirection::from_str("EXIT").unwrap(), PunchDirection::Exit);
        assert!(PunchDirection::from_str("sideways").is_err());
    }
}
