//! Shared test support for core integration tests

pub mod repositories;

use chrono::{NaiveDate, NaiveTime};
use shiftledger_domain::{ClockEvent, EmployeeRef, PunchDirection};

/// Employee used across the integration scenarios.
pub fn ana() -> EmployeeRef {
    EmployeeRef {
        id: "E100".to_string(),
        name: "Ana Torres".to_string(),
        department: "Logistics".to_string(),
    }
}

pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

/// Captured punch row for the test employee.
pub fn punch(id: &str, date: NaiveDate, time: NaiveTime, direction: PunchDirection) -> ClockEvent {
    ClockEvent {
        id: id.to_string(),
        employee_id: "E100".to_string(),
        employee_name: "Ana Torres".to_string(),
        department: "Logistics".to_string(),
        date,
        time,
        direction,
        reason_code: None,
        reason_description: None,
        computable: true,
        shift_type: "M".to_string(),
        ref_start: None,
        ref_end: None,
        app_generated: false,
    }
}

/// Absence exit with an explicit covered range.
pub fn absence(
    id: &str,
    date: NaiveDate,
    reason: &str,
    span: Option<(NaiveTime, NaiveTime)>,
) -> ClockEvent {
    let mut event = punch(
        id,
        date,
        span.map_or(NaiveTime::MIN, |(start, _)| start),
        PunchDirection::Exit,
    );
    event.reason_code = Some(reason.to_string());
    event.reason_description = Some("absence".to_string());
    event.computable = false;
    event.ref_start = span.map(|(start, _)| start);
    event.ref_end = span.map(|(_, end)| end);
    event
}
