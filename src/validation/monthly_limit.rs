//! Monthly (payroll-cycle) hour-limit evaluation.
//!
//! The monthly ceiling is a soft block: Completed shifts are historical fact
//! and are excluded, so already-worked hours never prevent a future
//! assignment. Canceled shifts are excluded as everywhere else.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{HourUsage, Shift};

use super::payroll_cycle::cycle_bounds;
use super::weekly_limit::interval_hours;

/// Checks the proposal against the employee's monthly ceiling over their
/// payroll cycle.
///
/// The cycle containing the proposal's start date is derived from
/// `(cycle_start_day, cycle_end_day)` via [`cycle_bounds`]. Only shifts whose
/// `start_time` date falls inside the cycle and whose status is neither
/// Canceled nor Completed are counted, skipping `exclude_shift_id`.
///
/// On success returns the projected [`HourUsage`]; on exceedance fails with
/// [`EngineError::MonthlyLimitExceeded`] reporting projected total and excess
/// to one decimal.
pub fn check_monthly_limit(
    existing: &[Shift],
    start: NaiveDateTime,
    end: NaiveDateTime,
    exclude_shift_id: Option<&str>,
    cycle_days: (i32, i32),
    max_hours_monthly: Decimal,
) -> EngineResult<HourUsage> {
    let (cycle_start, cycle_end) = cycle_bounds(start.date(), cycle_days.0, cycle_days.1);

    let worked: Decimal = existing
        .iter()
        .filter(|s| s.status.counts_for_monthly_limit())
        .filter(|s| exclude_shift_id != Some(s.id.as_str()))
        .filter(|s| {
            let day = s.start_time.date();
            day >= cycle_start && day <= cycle_end
        })
        .map(Shift::duration_hours)
        .sum();

    let projected = worked + interval_hours(start, end);

    if projected > max_hours_monthly {
        return Err(EngineError::MonthlyLimitExceeded {
            projected: projected.round_dp(1),
            limit: max_hours_monthly,
            excess: (projected - max_hours_monthly).round_dp(1),
        });
    }

    Ok(HourUsage {
        worked,
        projected,
        limit: max_hours_monthly,
        remaining: max_hours_monthly - projected,
    })
}
