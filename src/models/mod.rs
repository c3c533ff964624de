//! Data models for the shift assignment validation engine.
//!
//! This module contains the domain types the engine reads from its external
//! collaborators (employees, shifts, absences, agreements, patterns) and the
//! result types it produces.

mod absence;
mod agreement;
mod breakdown;
mod employee;
mod pattern;
mod shift;
pub mod timestamp;

pub use absence::{Absence, AbsenceStatus};
pub use agreement::LaborAgreement;
pub use breakdown::{DurationBreakdown, HourSplit, HourUsage, SeedSummary, VacancyReport};
pub use employee::Employee;
pub use pattern::{ServicePattern, ShiftType};
pub use shift::{Assignee, Shift, ShiftStatus, VACANT_SENTINEL};
