//! Error types for the shift assignment validation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during assignment validation
//! and pattern expansion.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::Shift;

/// The main error type for the validation engine.
///
/// Conflict variants (`OverlapConflict`, `AvailabilityConflict`,
/// `WeeklyLimitExceeded`, `MonthlyLimitExceeded`) represent legitimate
/// business rejections: they abort a validation immediately and are
/// surfaced verbatim to the caller, never retried internally.
///
/// # Example
///
/// ```
/// use roster_engine::error::EngineError;
///
/// let error = EngineError::EmployeeNotFound {
///     employee_id: "emp_missing".to_string(),
/// };
/// assert_eq!(error.to_string(), "Employee not found: emp_missing");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The referenced employee does not exist.
    #[error("Employee not found: {employee_id}")]
    EmployeeNotFound {
        /// The employee identifier that was not found.
        employee_id: String,
    },

    /// The proposed interval collides with existing shifts.
    #[error("Proposed shift overlaps {} existing shift(s) for employee {employee_id}", conflicts.len())]
    OverlapConflict {
        /// The employee the proposal was for.
        employee_id: String,
        /// The existing shifts that intersect the proposed interval.
        conflicts: Vec<Shift>,
    },

    /// The proposed interval intersects a pending or approved absence.
    #[error("Employee {employee_id} is unavailable: absence from {absence_start} to {absence_end}")]
    AvailabilityConflict {
        /// The employee the proposal was for.
        employee_id: String,
        /// Start of the blocking absence window.
        absence_start: NaiveDateTime,
        /// End of the blocking absence window.
        absence_end: NaiveDateTime,
    },

    /// The proposal would push the ISO-week total past the agreement ceiling.
    #[error("Weekly hour limit exceeded: {projected}h projected against a {limit}h limit ({excess}h over)")]
    WeeklyLimitExceeded {
        /// Projected weekly total including the proposal, one decimal.
        projected: Decimal,
        /// The agreement's weekly ceiling.
        limit: Decimal,
        /// Hours over the ceiling, one decimal.
        excess: Decimal,
    },

    /// The proposal would push the payroll-cycle total past the employee ceiling.
    #[error("Monthly hour limit exceeded: {projected}h projected against a {limit}h limit ({excess}h over)")]
    MonthlyLimitExceeded {
        /// Projected cycle total including the proposal, one decimal.
        projected: Decimal,
        /// The employee's monthly ceiling.
        limit: Decimal,
        /// Hours over the ceiling, one decimal.
        excess: Decimal,
    },

    /// A proposed time range was malformed (end not after start).
    #[error("Invalid time range: {message}")]
    InvalidTimeRange {
        /// A description of what made the range invalid.
        message: String,
    },

    /// A timestamp arriving from an upstream layer could not be coerced.
    #[error("Invalid timestamp: {message}")]
    InvalidTimestamp {
        /// A description of the unparseable input.
        message: String,
    },

    /// A month number outside 1-12 was passed to pattern expansion.
    #[error("Invalid month: {month} (expected 1-12)")]
    InvalidMonth {
        /// The rejected month number.
        month: u32,
    },

    /// The agreement rule table could not be read or parsed.
    #[error("Failed to load agreement rule table '{path}': {message}")]
    RuleTableError {
        /// The path or source label of the table.
        path: String,
        /// A description of the load failure.
        message: String,
    },

    /// The backing store failed. Infrastructure fault, not a business rejection.
    #[error("Store error: {message}")]
    Store {
        /// A description of the storage failure.
        message: String,
    },
}

impl EngineError {
    /// True for the variants that represent business rejections of a proposal
    /// rather than infrastructure or input faults.
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            EngineError::OverlapConflict { .. }
                | EngineError::AvailabilityConflict { .. }
                | EngineError::WeeklyLimitExceeded { .. }
                | EngineError::MonthlyLimitExceeded { .. }
        )
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
