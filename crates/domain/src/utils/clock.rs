//! Clock-time helpers.
//!
//! Attendance terminals report times as `HH:MM` text, occasionally tagged
//! with a `+1` suffix when the punch belongs to the next calendar day of an
//! overnight shift. The engine normalizes everything to minute precision
//! and does its arithmetic on a wrapping 24-hour clock, so a pause one
//! minute before an 00:00 boundary lands on 23:59 of the previous cycle
//! instead of underflowing.

use chrono::{NaiveTime, Timelike};

use crate::errors::{Result, ShiftLedgerError};

/// Minutes on the 24-hour clock.
pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// Parse `HH:MM` clock text.
///
/// Any next-day suffix (`+1`) is stripped and anything past minute
/// precision is truncated, so `"23:45:30+1"` parses as 23:45.
pub fn parse_clock(raw: &str) -> Result<NaiveTime> {
    let cleaned = raw.trim().split('+').next().unwrap_or_default().trim();
    let mut parts = cleaned.split(':');

    let hour = parts
        .next()
        .and_then(|p| p.parse::<u32>().ok())
        .ok_or_else(|| ShiftLedgerError::InvalidTime(format!("missing hour in clock value: {raw}")))?;
    let minute = parts
        .next()
        .and_then(|p| p.parse::<u32>().ok())
        .ok_or_else(|| {
            ShiftLedgerError::InvalidTime(format!("missing minute in clock value: {raw}"))
        })?;

    NaiveTime::from_hms_opt(hour, minute, 0)
        .ok_or_else(|| ShiftLedgerError::InvalidTime(format!("out-of-range clock value: {raw}")))
}

/// Minutes elapsed since midnight, ignoring seconds.
pub fn minutes_from_midnight(time: NaiveTime) -> i64 {
    i64::from(time.hour()) * 60 + i64::from(time.minute())
}

/// Drop the seconds component of a time value.
pub fn truncate_to_minute(time: NaiveTime) -> NaiveTime {
    from_minutes(minutes_from_midnight(time))
}

/// Add minutes on the wrapping 24-hour clock.
pub fn add_minutes(time: NaiveTime, minutes: i64) -> NaiveTime {
    from_minutes((minutes_from_midnight(time) + minutes).rem_euclid(MINUTES_PER_DAY))
}

/// Subtract minutes on the wrapping 24-hour clock.
pub fn sub_minutes(time: NaiveTime, minutes: i64) -> NaiveTime {
    add_minutes(time, -minutes)
}

/// Build a time value from minutes-from-midnight already reduced to
/// `[0, MINUTES_PER_DAY)`.
fn from_minutes(total: i64) -> NaiveTime {
    NaiveTime::from_hms_opt((total / 60) as u32, (total % 60) as u32, 0)
        .unwrap_or(NaiveTime::MIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_plain_clock_text() {
        assert_eq!(parse_clock("07:00").unwrap(), NaiveTime::from_hms_opt(7, 0, 0).unwrap());
        assert_eq!(parse_clock(" 23:45 ").unwrap(), NaiveTime::from_hms_opt(23, 45, 0).unwrap());
    }

    #[test]
    fn parse_strips_next_day_suffix() {
        assert_eq!(parse_clock("07:00+1").unwrap(), NaiveTime::from_hms_opt(7, 0, 0).unwrap());
        assert_eq!(parse_clock("00:15 +1").unwrap(), NaiveTime::from_hms_opt(0, 15, 0).unwrap());
    }

    #[test]
    fn parse_truncates_seconds() {
        assert_eq!(parse_clock("08:30:59").unwrap(), NaiveTime::from_hms_opt(8, 30, 0).unwrap());
    }

    #[test]
    fn parse_rejects_malformed_values() {
        assert!(parse_clock("").is_err());
        assert!(parse_clock("seven").is_err());
        assert!(parse_clock("12").is_err());
        assert!(parse_clock("25:00").is_err());
        assert!(parse_clock("12:61").is_err());
    }

    #[test]
    fn add_minutes_wraps_past_midnight() {
        let t = NaiveTime::from_hms_opt(23, 59, 0).unwrap();
        assert_eq!(add_minutes(t, 1), NaiveTime::from_hms_opt(0, 0, 0).unwrap());
        assert_eq!(add_minutes(t, 61), NaiveTime::from_hms_opt(1, 0, 0).unwrap());
    }

    #[test]
    fn sub_minutes_wraps_before_midnight() {
        let t = NaiveTime::from_hms_opt(0, 0, 0).unwrap();
        assert_eq!(sub_minutes(t, 1), NaiveTime::from_hms_opt(23, 59, 0).unwrap());
    }

    #[test]
    fn truncate_drops_seconds_only() {
        let t = NaiveTime::from_hms_opt(11, 34, 59).unwrap();
        assert_eq!(truncate_to_minute(t), NaiveTime::from_hms_opt(11, 34, 0).unwrap());
    }
}
