//! Weekly hour-limit evaluation.
//!
//! Sums the durations of an employee's non-Canceled shifts starting inside
//! the ISO week of the proposal, adds the proposal itself, and compares
//! against the agreement's weekly ceiling.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{HourUsage, Shift};

use super::payroll_cycle::iso_week_bounds;

/// Duration of `[start, end)` in hours.
pub(crate) fn interval_hours(start: NaiveDateTime, end: NaiveDateTime) -> Decimal {
    let minutes = (end - start).num_minutes();
    Decimal::new(minutes, 0) / Decimal::new(60, 0)
}

/// Checks the proposal against the agreement's weekly ceiling.
///
/// `existing` is the employee's loaded schedule around the proposal; only
/// non-Canceled shifts whose `start_time` falls inside the proposal's ISO
/// week are counted, and the shift identified by `exclude_shift_id` is
/// skipped (editing a shift must not double-count it).
///
/// On success returns the projected [`HourUsage`]; on exceedance fails with
/// [`EngineError::WeeklyLimitExceeded`] reporting projected total and excess
/// to one decimal.
pub fn check_weekly_limit(
    existing: &[Shift],
    start: NaiveDateTime,
    end: NaiveDateTime,
    exclude_shift_id: Option<&str>,
    max_hours_weekly: Decimal,
) -> EngineResult<HourUsage> {
    let (week_start, week_end) = iso_week_bounds(start);

    let worked: Decimal = existing
        .iter()
        .filter(|s| s.status.counts_for_schedule())
        .filter(|s| exclude_shift_id != Some(s.id.as_str()))
        .filter(|s| s.start_time >= week_start && s.start_time <= week_end)
        .map(Shift::duration_hours)
        .sum();

    let projected = worked + interval_hours(start, end);

    if projected > max_hours_weekly {
        return Err(EngineError::WeeklyLimitExceeded {
            projected: projected.round_dp(1),
            limit: max_hours_weekly,
            excess: (projected - max_hours_weekly).round_dp(1),
        });
    }

    Ok(HourUsage {
        worked,
        projected,
        limit: max_hours_weekly,
        remaining: max_hours_weekly - projected,
    })
}
