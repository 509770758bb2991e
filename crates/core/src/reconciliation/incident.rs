//! Incident context detection
//!
//! Classifies the punch state of one day so the caller knows which
//! synthetic-punch recipe to request when registering a planned absence for
//! a date whose final punch state is not yet known in detail.

use serde::{Deserialize, Serialize};
use shiftledger_domain::ClockEvent;

/// Shape of a day's existing punches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncidentContext {
    FullDay,
    LateArrival,
    EarlyDeparture,
    Intermediate,
}

/// Classify the day's events into an incident context.
///
/// Multiple entries or exits win over the single-punch shapes; a day with
/// both a single entry and a single exit falls back to `FullDay`.
pub fn detect_incident_context(events_of_day: &[ClockEvent]) -> IncidentContext {
    let entries = events_of_day.iter().filter(|e| e.is_entry()).count();
    let exits = events_of_day.iter().filter(|e| e.is_exit()).count();

    match (entries, exits) {
        (0, 0) => IncidentContext::FullDay,
        (e, x) if e > 1 || x > 1 => IncidentContext::Intermediate,
        (1, 0) => IncidentContext::EarlyDeparture,
        (0, 1) => IncidentContext::LateArrival,
        _ => IncidentContext::FullDay,
    }
}
