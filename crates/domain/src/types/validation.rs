//! Validation issues surfaced by the conflict validator
//!
//! Issues are transient: produced per validation call, surfaced to the
//! operator, and discarded. Errors block persistence; warnings require
//! explicit confirmation but never block.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::impl_domain_status_conversions;

/// Issue severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueSeverity {
    Error,
    Warning,
}

impl_domain_status_conversions!(IssueSeverity {
    Error => "error",
    Warning => "warning",
});

/// Issue category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCategory {
    PresenceConflict,
    DuplicateTerminal,
    FullOverlap,
    PartialOverlap,
    Other,
}

/// One conflict found while checking proposed rows against a day's records.
///
/// Every message names the employee and the date so an operator can locate
/// the conflict quickly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub severity: IssueSeverity,
    pub category: IssueCategory,
    pub message: String,
    pub employee_name: String,
    pub date: NaiveDate,
}

impl ValidationIssue {
    pub fn error(
        category: IssueCategory,
        employee_name: impl Into<String>,
        date: NaiveDate,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity: IssueSeverity::Error,
            category,
            message: message.into(),
            employee_name: employee_name.into(),
            date,
        }
    }

    pub fn warning(
        category: IssueCategory,
        employee_name: impl Into<String>,
        date: NaiveDate,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity: IssueSeverity::Warning,
            category,
            message: message.into(),
            employee_name: employee_name.into(),
            date,
        }
    }

    /// Whether the issue must stop the caller from persisting.
    pub fn is_blocking(&self) -> bool {
        self.severity == IssueSeverity::Error
    }
}
