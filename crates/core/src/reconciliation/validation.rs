//! Conflict validation
//!
//! Checks proposed rows against the employee's existing day records before
//! the caller persists anything. Processing is grouped by (employee, date)
//! and restricted to the dates actually touched by the proposal, so large
//! datasets only pay for the days being edited.
//!
//! Errors returned here must stop the caller from persisting; warnings are
//! surfaced for explicit operator confirmation and never block.

use std::collections::{BTreeMap, HashSet};

use chrono::NaiveDate;
use shiftledger_domain::constants::ZERO_WIDTH_INTERVAL_MINUTES;
use shiftledger_domain::utils::clock::{minutes_from_midnight, MINUTES_PER_DAY};
use shiftledger_domain::{ClockEvent, IssueCategory, ValidationIssue};

/// Validate proposed rows against the existing dataset.
///
/// `removed` lists rows an edit flow is about to delete; they are treated
/// as already gone, matched by id.
pub fn validate_insertions(
    existing: &[ClockEvent],
    proposed: &[ClockEvent],
    removed: &[ClockEvent],
) -> Vec<ValidationIssue> {
    let removed_ids: HashSet<&str> = removed.iter().map(|event| event.id.as_str()).collect();

    // Only the (employee, day) groups touched by the proposal are visited
    let mut groups: BTreeMap<(&str, NaiveDate), Vec<&ClockEvent>> = BTreeMap::new();
    for row in proposed {
        groups.entry((row.employee_id.as_str(), row.date)).or_default().push(row);
    }

    let mut issues = Vec::new();

    for ((employee_id, date), new_rows) in groups {
        let day_rows: Vec<&ClockEvent> = existing
            .iter()
            .filter(|event| {
                event.employee_id == employee_id
                    && event.date == date
                    && !removed_ids.contains(event.id.as_str())
            })
            .collect();

        let employee_name = new_rows
            .first()
            .map(|row| row.employee_name.clone())
            .unwrap_or_default();

        check_presence_conflict(&mut issues, &employee_name, date, &day_rows, &new_rows);
        check_duplicate_terminal(&mut issues, &employee_name, date, &day_rows, &new_rows);
        check_absence_overlaps(&mut issues, &employee_name, date, &day_rows, &new_rows);
    }

    issues
}

/// A proposed full-day absence next to existing presence punches is
/// suspicious but allowed; the operator decides.
fn check_presence_conflict(
    issues: &mut Vec<ValidationIssue>,
    employee_name: &str,
    date: NaiveDate,
    day_rows: &[&ClockEvent],
    new_rows: &[&ClockEvent],
) {
    let proposes_full_day = new_rows.iter().any(|row| row.is_full_day_absence());
    let has_presence = day_rows.iter().any(|row| row.is_entry());

    if proposes_full_day && has_presence {
        issues.push(ValidationIssue::warning(
            IssueCategory::PresenceConflict,
            employee_name,
            date,
            format!(
                "Full-day absence proposed for {employee_name} on {date} but presence punches already exist"
            ),
        ));
    }
}

/// At most one terminal "end of shift" exit may exist per employee per day
/// once the proposed rows are added. One issue per group, no matter how
/// many terminal rows pile up.
fn check_duplicate_terminal(
    issues: &mut Vec<ValidationIssue>,
    employee_name: &str,
    date: NaiveDate,
    day_rows: &[&ClockEvent],
    new_rows: &[&ClockEvent],
) {
    let terminal_count = day_rows
        .iter()
        .chain(new_rows.iter())
        .filter(|row| row.is_terminal_exit())
        .count();

    if terminal_count > 1 {
        issues.push(ValidationIssue::error(
            IssueCategory::DuplicateTerminal,
            employee_name,
            date,
            format!("More than one end-of-shift exit for {employee_name} on {date}"),
        ));
    }
}

fn check_absence_overlaps(
    issues: &mut Vec<ValidationIssue>,
    employee_name: &str,
    date: NaiveDate,
    day_rows: &[&ClockEvent],
    new_rows: &[&ClockEvent],
) {
    let existing_absences: Vec<&ClockEvent> =
        day_rows.iter().copied().filter(|row| row.is_absence_exit()).collect();
    let new_absences: Vec<&ClockEvent> =
        new_rows.iter().copied().filter(|row| row.is_absence_exit()).collect();

    if new_absences.is_empty() {
        return;
    }

    // Full-day and partial absences cannot coexist at all; the mix is a
    // categorical error regardless of clock times
    let total = existing_absences.len() + new_absences.len();
    let any_full_day = existing_absences
        .iter()
        .chain(new_absences.iter())
        .any(|row| row.is_full_day_absence());

    if any_full_day && total > 1 {
        issues.push(ValidationIssue::error(
            IssueCategory::FullOverlap,
            employee_name,
            date,
            format!("Full-day absence conflicts with other absences for {employee_name} on {date}"),
        ));
        return;
    }

    for new_row in &new_absences {
        let new_span = absence_span(new_row);
        for existing_row in &existing_absences {
            if !spans_overlap(new_span, absence_span(existing_row)) {
                continue;
            }

            if new_row.reason_code == existing_row.reason_code {
                issues.push(ValidationIssue::error(
                    IssueCategory::FullOverlap,
                    employee_name,
                    date,
                    format!(
                        "Absence {} duplicates an existing justification with the same reason for {employee_name} on {date}",
                        describe_span(new_row)
                    ),
                ));
            } else {
                issues.push(ValidationIssue::warning(
                    IssueCategory::PartialOverlap,
                    employee_name,
                    date,
                    format!(
                        "Absence {} overlaps an existing {} absence for {employee_name} on {date}",
                        describe_span(new_row),
                        existing_row.reason_code.as_deref().unwrap_or("?")
                    ),
                ));
            }
        }
    }
}

/// Convert an absence row to a minute span. Zero-width spans are widened to
/// one minute; an end before the start wraps into the next day.
fn absence_span(event: &ClockEvent) -> (i64, i64) {
    let start = minutes_from_midnight(event.ref_start.unwrap_or(event.time));
    let mut end = minutes_from_midnight(event.ref_end.unwrap_or(event.time));

    if end < start {
        end += MINUTES_PER_DAY;
    }
    if end == start {
        end = start + ZERO_WIDTH_INTERVAL_MINUTES;
    }

    (start, end)
}

fn spans_overlap(a: (i64, i64), b: (i64, i64)) -> bool {
    a.0 < b.1 && b.0 < a.1
}

fn describe_span(event: &ClockEvent) -> String {
    match (event.ref_start, event.ref_end) {
        (Some(start), Some(end)) => {
            format!("{}-{}", start.format("%H:%M"), end.format("%H:%M"))
        }
        _ => format!("at {}", event.time.format("%H:%M")),
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveTime;
    use shiftledger_domain::constants::REASON_SHIFT_END;
    use shiftledger_domain::{IssueSeverity, PunchDirection};

    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
    }

    fn hm(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    fn row(id: &str, direction: PunchDirection, time: NaiveTime) -> ClockEvent {
        ClockEvent {
            id: id.to_string(),
            employee_id: "E100".to_string(),
            employee_name: "Ana Torres".to_string(),
            department: "Logistics".to_string(),
            date: date(),
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

    fn absence(id: &str, reason: &str, span: Option<(NaiveTime, NaiveTime)>) -> ClockEvent {
        let mut event = row(id, PunchDirection::Exit, span.map_or(NaiveTime::MIN, |(s, _)| s));
        event.reason_code = Some(reason.to_string());
        event.computable = false;
        event.ref_start = span.map(|(start, _)| start);
        event.ref_end = span.map(|(_, end)| end);
        event
    }

    fn terminal(id: &str) -> ClockEvent {
        let mut event = row(id, PunchDirection::Exit, hm(15, 0));
        event.reason_code = Some(REASON_SHIFT_END.to_string());
        event
    }

    #[test]
    fn two_proposed_terminals_yield_exactly_one_error() {
        // AC: two proposed end-of-shift exits on the same employee/date
        // always yield exactly one duplicate-terminal error
        let proposed = vec![terminal("t1"), terminal("t2")];

        let issues = validate_insertions(&[], &proposed, &[]);

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].category, IssueCategory::DuplicateTerminal);
        assert_eq!(issues[0].severity, IssueSeverity::Error);
        assert!(issues[0].message.contains("Ana Torres"));
        assert!(issues[0].message.contains("2026-03-02"));
    }

    #[test]
    fn terminal_against_existing_terminal_is_an_error() {
        let existing = vec![terminal("old")];
        let proposed = vec![terminal("new")];

        let issues = validate_insertions(&existing, &proposed, &[]);

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].category, IssueCategory::DuplicateTerminal);
    }

    #[test]
    fn removed_rows_no_longer_conflict() {
        // Edit flow: replacing the day's terminal exit is legal
        let existing = vec![terminal("old")];
        let proposed = vec![terminal("new")];
        let removed = vec![terminal("old")];

        let issues = validate_insertions(&existing, &proposed, &removed);

        assert!(issues.is_empty());
    }

    #[test]
    fn same_reason_overlap_is_an_error() {
        // AC: same-reason 10:00-12:00 against existing 11:00-13:00 errors
        let existing = vec![absence("old", "MED", Some((hm(11, 0), hm(13, 0))))];
        let proposed = vec![absence("new", "MED", Some((hm(10, 0), hm(12, 0))))];

        let issues = validate_insertions(&existing, &proposed, &[]);

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, IssueSeverity::Error);
        assert_eq!(issues[0].category, IssueCategory::FullOverlap);
    }

    #[test]
    fn cross_reason_overlap_is_a_warning() {
        // AC: the same overlap with a different reason code warns instead
        let existing = vec![absence("old", "MED", Some((hm(11, 0), hm(13, 0))))];
        let proposed = vec![absence("new", "VAC", Some((hm(10, 0), hm(12, 0))))];

        let issues = validate_insertions(&existing, &proposed, &[]);

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, IssueSeverity::Warning);
        assert_eq!(issues[0].category, IssueCategory::PartialOverlap);
        assert!(!issues[0].is_blocking());
    }

    #[test]
    fn disjoint_absences_do_not_conflict() {
        let existing = vec![absence("old", "MED", Some((hm(8, 0), hm(9, 0))))];
        let proposed = vec![absence("new", "MED", Some((hm(10, 0), hm(12, 0))))];

        assert!(validate_insertions(&existing, &proposed, &[]).is_empty());
    }

    #[test]
    fn full_day_cannot_coexist_with_partial() {
        let existing = vec![absence("old", "MED", Some((hm(9, 0), hm(11, 0))))];
        let proposed = vec![absence("new", "VAC", None)];

        let issues = validate_insertions(&existing, &proposed, &[]);

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, IssueSeverity::Error);
        assert_eq!(issues[0].category, IssueCategory::FullOverlap);
    }

    #[test]
    fn existing_full_day_blocks_any_new_absence() {
        let existing = vec![absence("old", "VAC", None)];
        let proposed = vec![absence("new", "MED", Some((hm(9, 0), hm(10, 0))))];

        let issues = validate_insertions(&existing, &proposed, &[]);

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].category, IssueCategory::FullOverlap);
    }

    #[test]
    fn full_day_next_to_presence_warns_but_does_not_block() {
        let existing = vec![row("entry", PunchDirection::Entry, hm(7, 3))];
        let proposed = vec![absence("new", "VAC", None)];

        let issues = validate_insertions(&existing, &proposed, &[]);

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].category, IssueCategory::PresenceConflict);
        assert!(!issues[0].is_blocking());
    }

    #[test]
    fn zero_width_spans_are_one_minute_wide() {
        // Two zero-width markers at the same instant must still collide
        let existing = vec![absence("old", "ADJ", Some((hm(15, 0), hm(15, 0))))];
        let proposed = vec![absence("new", "ADJ", Some((hm(15, 0), hm(15, 0))))];

        let issues = validate_insertions(&existing, &proposed, &[]);

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, IssueSeverity::Error);
    }

    #[test]
    fn wrapping_spans_extend_into_the_next_day() {
        // 23:00-01:00 wraps; it overlaps a 23:30 absence of the same day
        let existing = vec![absence("old", "MED", Some((hm(23, 30), hm(23, 45))))];
        let proposed = vec![absence("new", "VAC", Some((hm(23, 0), hm(1, 0))))];

        let issues = validate_insertions(&existing, &proposed, &[]);

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, IssueSeverity::Warning);
    }

    #[test]
    fn untouched_days_are_not_validated() {
        // Existing duplicate terminals on another day stay invisible as
        // long as the proposal does not touch that day
        let mut other_day = terminal("old1");
        other_day.date = NaiveDate::from_ymd_opt(2026, 3, 3).unwrap();
        let mut other_day_dup = terminal("old2");
        other_day_dup.date = NaiveDate::from_ymd_opt(2026, 3, 3).unwrap();

        let existing = vec![other_day, other_day_dup];
        let proposed = vec![absence("new", "MED", Some((hm(10, 0), hm(11, 0))))];

        assert!(validate_insertions(&existing, &proposed, &[]).is_empty());
    }

    #[test]
    fn other_employees_rows_are_ignored() {
        let mut foreign = terminal("other");
        foreign.employee_id = "E999".to_string();

        let existing = vec![foreign];
        let proposed = vec![terminal("new")];

        assert!(validate_insertions(&existing, &proposed, &[]).is_empty());
    }
}
