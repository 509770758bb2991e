//! # ShiftLedger Domain
//!
//! Business domain types and models for ShiftLedger.
//!
//! This crate contains:
//! - Domain data types (ClockEvent, LeaveRange, etc.)
//! - Domain error types and Result definitions
//! - Reason codes and reconciliation policy constants
//! - Clock-time utilities shared by the reconciliation engine
//!
//! ## Architecture
//! - No dependencies on other ShiftLedger crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use errors::*;
pub use types::*;
// Re-export clock utilities
pub use utils::clock::{add_minutes, minutes_from_midnight, parse_clock, sub_minutes};
