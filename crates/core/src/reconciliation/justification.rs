//! Justification strategy generation
//!
//! The central state machine of the engine: given a detected anomaly and a
//! justification reason, produce the exact synthetic punch pair that
//! encodes the correction under the shift-boundary rules. The anomaly
//! shape is resolved once per call into a variant so each arm's arithmetic
//! stays independently testable.
//!
//! The generator is a pure function: the same anomaly and reason always
//! yield the same plan, down to the row ids, which are derived from the
//! idempotency key rather than drawn from a clock. Malformed anomalies are
//! rejected outright; the generator never falls back to a best-guess
//! correction.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use shiftledger_domain::constants::GAP_BRACKET_MINUTES;
use shiftledger_domain::utils::clock::{add_minutes, sub_minutes, truncate_to_minute};
use shiftledger_domain::{
    Anomaly, ClockEvent, EmployeeRef, JustificationKey, JustificationPlan, JustificationReason,
    PunchDirection, Result, ShiftBounds, ShiftCode, ShiftLedgerError, UnjustifiedGap,
    WorkdayDeviation,
};

/// Correction shape applying to one anomaly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JustificationShape {
    /// Gap starts exactly at the shift start (late arrival)
    GapStartAligned,
    /// Gap ends exactly at the shift end (early departure)
    GapEndAligned,
    /// Gap touches neither boundary (left and returned)
    GapInterior,
    /// No time interval, only a date
    FullDay,
    /// Shortfall without a locatable hole
    Deviation,
}

/// Resolve which correction shape applies under the given shift boundaries.
///
/// Boundary comparison happens at minute precision, after normalization.
pub fn resolve_shape(anomaly: &Anomaly, bounds: ShiftBounds) -> Result<JustificationShape> {
    match anomaly {
        Anomaly::Gap(gap) => resolve_gap_shape(gap, bounds),
        Anomaly::FullDay { .. } => Ok(JustificationShape::FullDay),
        Anomaly::Deviation(deviation) => {
            if deviation.worked_hours < 0.0 {
                return Err(ShiftLedgerError::InvalidAnomaly(format!(
                    "negative worked hours on {}: {}",
                    deviation.date, deviation.worked_hours
                )));
            }
            Ok(JustificationShape::Deviation)
        }
    }
}

fn resolve_gap_shape(gap: &UnjustifiedGap, bounds: ShiftBounds) -> Result<JustificationShape> {
    let start = truncate_to_minute(gap.start);
    let end = truncate_to_minute(gap.end);

    // A gap may only wrap past midnight inside a shift that does
    if end <= start && !bounds.crosses_midnight() {
        return Err(ShiftLedgerError::InvalidAnomaly(format!(
            "gap on {} does not span forward in time: {}-{}",
            gap.date,
            gap.start.format("%H:%M"),
            gap.end.format("%H:%M")
        )));
    }

    if start == truncate_to_minute(bounds.start) {
        Ok(JustificationShape::GapStartAligned)
    } else if end == truncate_to_minute(bounds.end) {
        Ok(JustificationShape::GapEndAligned)
    } else {
        Ok(JustificationShape::GapInterior)
    }
}

/// Build the synthetic punch pair for one anomaly.
pub fn build_plan(
    employee: &EmployeeRef,
    anomaly: &Anomaly,
    shift: ShiftCode,
    reason: &JustificationReason,
) -> Result<JustificationPlan> {
    let bounds = shift.bounds();
    let shape = resolve_shape(anomaly, bounds)?;
    let ctx = RowContext { employee, reason, shift, bounds, key: anomaly.key(&employee.id) };

    match (shape, anomaly) {
        (JustificationShape::GapStartAligned, Anomaly::Gap(gap)) => plan_start_aligned(&ctx, gap),
        (JustificationShape::GapEndAligned, Anomaly::Gap(gap)) => plan_end_aligned(&ctx, gap),
        (JustificationShape::GapInterior, Anomaly::Gap(gap)) => plan_interior(&ctx, gap),
        (JustificationShape::FullDay, Anomaly::FullDay { date }) => plan_full_day(&ctx, *date),
        (JustificationShape::Deviation, Anomaly::Deviation(deviation)) => {
            plan_deviation(&ctx, deviation)
        }
        _ => Err(ShiftLedgerError::Internal(
            "resolved shape does not match anomaly kind".to_string(),
        )),
    }
}

struct RowContext<'a> {
    employee: &'a EmployeeRef,
    reason: &'a JustificationReason,
    shift: ShiftCode,
    bounds: ShiftBounds,
    key: JustificationKey,
}

/// Late arrival: the nominal shift start must be preserved exactly for
/// downstream payroll consistency, so the entry is forced onto it rather
/// than echoing the detected time.
fn plan_start_aligned(ctx: &RowContext<'_>, gap: &UnjustifiedGap) -> Result<JustificationPlan> {
    let gap_end = truncate_to_minute(gap.end);
    let entry_time = truncate_to_minute(ctx.bounds.start);
    let exit_time = sub_minutes(gap_end, GAP_BRACKET_MINUTES);
    ensure_bracket_spans_forward(gap, entry_time, exit_time)?;

    let entry = entry_row(ctx, gap.date, entry_time);
    let exit = exit_row(ctx, gap.date, exit_time, Some((entry_time, gap_end)));
    let description = format!(
        "Late arrival for {} on {}: {} from {} to {}",
        ctx.employee.name,
        gap.date,
        ctx.reason.description,
        entry_time.format("%H:%M"),
        gap_end.format("%H:%M")
    );

    Ok(JustificationPlan { entry, exit, description, key: ctx.key.clone() })
}

/// Early departure: the exit is forced onto the exact shift end.
fn plan_end_aligned(ctx: &RowContext<'_>, gap: &UnjustifiedGap) -> Result<JustificationPlan> {
    let gap_start = truncate_to_minute(gap.start);
    let entry_time = add_minutes(gap_start, GAP_BRACKET_MINUTES);
    let exit_time = truncate_to_minute(ctx.bounds.end);
    ensure_bracket_spans_forward(gap, entry_time, exit_time)?;

    let entry = entry_row(ctx, gap.date, entry_time);
    let exit = exit_row(ctx, gap.date, exit_time, Some((gap_start, exit_time)));
    let description = format!(
        "Early departure for {} on {}: {} from {} to {}",
        ctx.employee.name,
        gap.date,
        ctx.reason.description,
        gap_start.format("%H:%M"),
        exit_time.format("%H:%M")
    );

    Ok(JustificationPlan { entry, exit, description, key: ctx.key.clone() })
}

/// Interior hole: bracket it with a resume/pause pair one minute inside the
/// detected bounds so the original punches are never touched. Gaps the
/// classifier already aligned are bracketed at the exact bounds instead.
fn plan_interior(ctx: &RowContext<'_>, gap: &UnjustifiedGap) -> Result<JustificationPlan> {
    let gap_start = truncate_to_minute(gap.start);
    let gap_end = truncate_to_minute(gap.end);
    let entry_time = if gap.boundary_aligned {
        gap_start
    } else {
        add_minutes(gap_start, GAP_BRACKET_MINUTES)
    };
    let exit_time = sub_minutes(gap_end, GAP_BRACKET_MINUTES);
    ensure_bracket_spans_forward(gap, entry_time, exit_time)?;

    let entry = entry_row(ctx, gap.date, entry_time);
    let exit = exit_row(ctx, gap.date, exit_time, Some((gap_start, gap_end)));
    let description = format!(
        "Absence interval for {} on {}: {} from {} to {}",
        ctx.employee.name,
        gap.date,
        ctx.reason.description,
        gap_start.format("%H:%M"),
        gap_end.format("%H:%M")
    );

    Ok(JustificationPlan { entry, exit, description, key: ctx.key.clone() })
}

/// Full-day absence: one pair spanning the nominal shift. On shifts that
/// cross midnight the exit lands on the following calendar date.
fn plan_full_day(ctx: &RowContext<'_>, date: NaiveDate) -> Result<JustificationPlan> {
    let exit_date = if ctx.bounds.crosses_midnight() {
        date.succ_opt().ok_or_else(|| {
            ShiftLedgerError::Internal(format!("calendar overflow past {date}"))
        })?
    } else {
        date
    };

    let entry = entry_row(ctx, date, truncate_to_minute(ctx.bounds.start));
    let exit = exit_row(ctx, exit_date, truncate_to_minute(ctx.bounds.end), None);
    let description = format!(
        "Full-day absence for {} on {}: {}",
        ctx.employee.name, date, ctx.reason.description
    );

    Ok(JustificationPlan { entry, exit, description, key: ctx.key.clone() })
}

/// Shortfall without a locatable hole: a zero-duration pair anchored at the
/// shift end records the justification without altering measured totals.
///
/// Placeholder policy pending confirmation by the domain owners; the
/// anchor is isolated here so changing it stays a one-line edit.
fn plan_deviation(ctx: &RowContext<'_>, deviation: &WorkdayDeviation) -> Result<JustificationPlan> {
    let anchor = truncate_to_minute(ctx.bounds.end);

    let entry = entry_row(ctx, deviation.date, anchor);
    let exit = exit_row(ctx, deviation.date, anchor, None);
    let description = format!(
        "Workday shortfall for {} on {}: {} recorded at shift end ({:.2}h worked)",
        ctx.employee.name, deviation.date, ctx.reason.description, deviation.worked_hours
    );

    Ok(JustificationPlan { entry, exit, description, key: ctx.key.clone() })
}

/// Reject gaps too narrow to bracket. Wrapped gaps (possible only inside a
/// midnight-crossing shift) compare across days, so the forward check only
/// applies to same-day gaps.
fn ensure_bracket_spans_forward(
    gap: &UnjustifiedGap,
    entry_time: NaiveTime,
    exit_time: NaiveTime,
) -> Result<()> {
    let wrapped = truncate_to_minute(gap.end) <= truncate_to_minute(gap.start);
    if !wrapped && exit_time <= entry_time {
        return Err(ShiftLedgerError::InvalidAnomaly(format!(
            "gap on {} too narrow to bracket: {}-{}",
            gap.date,
            gap.start.format("%H:%M"),
            gap.end.format("%H:%M")
        )));
    }
    Ok(())
}

fn entry_row(ctx: &RowContext<'_>, date: NaiveDate, time: NaiveTime) -> ClockEvent {
    synthetic_row(ctx, "in", date, time, PunchDirection::Entry, None)
}

fn exit_row(
    ctx: &RowContext<'_>,
    date: NaiveDate,
    time: NaiveTime,
    reference: Option<(NaiveTime, NaiveTime)>,
) -> ClockEvent {
    synthetic_row(ctx, "out", date, time, PunchDirection::Exit, reference)
}

/// Generated entries resume counting (null reason, computable); generated
/// exits carry the justification reason and stay out of the totals.
fn synthetic_row(
    ctx: &RowContext<'_>,
    suffix: &str,
    date: NaiveDate,
    time: NaiveTime,
    direction: PunchDirection,
    reference: Option<(NaiveTime, NaiveTime)>,
) -> ClockEvent {
    let carries_reason = direction == PunchDirection::Exit;

    ClockEvent {
        id: format!("{}#{}", ctx.key, suffix),
        employee_id: ctx.employee.id.clone(),
        employee_name: ctx.employee.name.clone(),
        department: ctx.employee.department.clone(),
        date,
        time,
        direction,
        reason_code: carries_reason.then(|| ctx.reason.code.clone()),
        reason_description: carries_reason.then(|| ctx.reason.description.clone()),
        computable: !carries_reason,
        shift_type: ctx.shift.to_string(),
        ref_start: reference.map(|(start, _)| start),
        ref_end: reference.map(|(_, end)| end),
        app_generated: true,
    }
}
