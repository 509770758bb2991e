//! Shift codes and their nominal boundaries
//!
//! Shift boundaries are fixed per code; the night shift crosses midnight,
//! which is the one case where an exit generated at the shift end lands on
//! the following calendar date.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::errors::ShiftLedgerError;

/// Nominal start/end of a shift, as times-of-day.
///
/// `end < start` means the shift crosses midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftBounds {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl ShiftBounds {
    pub fn crosses_midnight(&self) -> bool {
        self.end < self.start
    }
}

/// Shift assignment code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftCode {
    /// M, 07:00-15:00
    Morning,
    /// TN, 15:00-23:00
    Evening,
    /// N, 23:00-07:00 (crosses midnight)
    Night,
    /// C, 08:00-17:00
    Central,
}

impl ShiftCode {
    /// Nominal boundaries for this shift code.
    pub fn bounds(self) -> ShiftBounds {
        let (start, end) = match self {
            Self::Morning => (hm(7, 0), hm(15, 0)),
            Self::Evening => (hm(15, 0), hm(23, 0)),
            Self::Night => (hm(23, 0), hm(7, 0)),
            Self::Central => (hm(8, 0), hm(17, 0)),
        };
        ShiftBounds { start, end }
    }

    pub fn crosses_midnight(self) -> bool {
        self.bounds().crosses_midnight()
    }
}

impl Default for ShiftCode {
    fn default() -> Self {
        Self::Morning
    }
}

impl fmt::Display for ShiftCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Morning => "M",
            Self::Evening => "TN",
            Self::Night => "N",
            Self::Central => "C",
        };
        write!(f, "{label}")
    }
}

impl FromStr for ShiftCode {
    type Err = ShiftLedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "M" => Ok(Self::Morning),
            "TN" => Ok(Self::Evening),
            "N" => Ok(Self::Night),
            "C" => Ok(Self::Central),
            other => Err(ShiftLedgerError::UnknownShift(other.to_string())),
        }
    }
}

fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN)
}
