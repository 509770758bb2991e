//! Attendance reconciliation engine
//!
//! Turns detected time-accounting anomalies into deterministic synthetic
//! punch pairs and validates them against the employee's existing day
//! records before anything is persisted. Every component here is a pure,
//! synchronous computation over caller-supplied snapshots; I/O lives
//! behind the port traits.

pub mod incident;
pub mod intervals;
pub mod justification;
pub mod leave_ranges;
pub mod ports;
pub mod service;
pub mod validation;
