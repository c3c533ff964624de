//! Shift validation checks.
//!
//! Each check is a pure function over already-fetched data; the
//! [`Engine`](crate::engine::Engine) is responsible for loading the
//! relevant shifts, absences and agreement rules from its store and
//! running the checks in order:
//!
//! 1. overlap against the employee's existing schedule;
//! 2. availability against approved and pending absences;
//! 3. weekly hour limit over the ISO week of the shift's start;
//! 4. monthly hour ceiling over the employee's payroll cycle.
//!
//! A shift that passes all four is then apportioned into surcharge
//! categories by [`compute_split`].

mod availability;
mod duration_split;
mod monthly_limit;
mod overlap;
mod payroll_cycle;
mod weekly_limit;

pub use availability::check_availability;
pub use duration_split::compute_split;
pub use monthly_limit::check_monthly_limit;
pub use overlap::find_overlaps;
pub use payroll_cycle::{cycle_bounds, iso_week_bounds, last_day_of_month};
pub use weekly_limit::check_weekly_limit;
