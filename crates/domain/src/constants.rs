//! Domain constants
//!
//! Centralized location for the reason codes and reconciliation policies
//! shared by the engine components.

/// Reason code of the terminal "end of shift" exit. At most one such exit
/// may exist per employee per day.
pub const REASON_SHIFT_END: &str = "EOS";

/// Reason code of break/smoking exits. Break rows never participate in
/// leave grouping or absence-overlap checks.
pub const REASON_BREAK: &str = "BRK";

/// Maximum distance, in hours, between two absence rows that still belong
/// to the same leave range. 1.5 days absorbs single non-labour days in the
/// underlying schedule.
pub const LEAVE_CONTIGUITY_HOURS: i64 = 36;

/// Offset, in minutes, applied when bracketing a gap with a resume/pause
/// pair so the synthetic rows never collide with the original punches.
pub const GAP_BRACKET_MINUTES: i64 = 1;

/// Width, in minutes, assigned to zero-duration absence intervals during
/// overlap checks.
pub const ZERO_WIDTH_INTERVAL_MINUTES: i64 = 1;
