//! ISO week and payroll-cycle date arithmetic.
//!
//! The weekly limit uses the ISO week (Monday through Sunday) containing a
//! shift's start. The monthly limit uses an employee-specific payroll cycle
//! that need not align with the calendar month: a 21→20 configuration runs
//! from the 21st of one month to the 20th of the next.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};

/// Bounds of the ISO week containing `moment`: Monday 00:00:00 through
/// Sunday 23:59:59, both inclusive.
///
/// # Example
///
/// ```
/// use roster_engine::validation::iso_week_bounds;
/// use chrono::NaiveDateTime;
///
/// // 2026-03-11 is a Wednesday
/// let wednesday = NaiveDateTime::parse_from_str("2026-03-11 14:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let (start, end) = iso_week_bounds(wednesday);
/// assert_eq!(start.to_string(), "2026-03-09 00:00:00");
/// assert_eq!(end.to_string(), "2026-03-15 23:59:59");
/// ```
pub fn iso_week_bounds(moment: NaiveDateTime) -> (NaiveDateTime, NaiveDateTime) {
    let date = moment.date();
    let monday = date - Duration::days(date.weekday().num_days_from_monday() as i64);
    let sunday = monday + Duration::days(6);
    (
        monday.and_hms_opt(0, 0, 0).unwrap_or(moment),
        sunday.and_hms_opt(23, 59, 59).unwrap_or(moment),
    )
}

/// The last day number of a month (28-31).
pub fn last_day_of_month(year: i32, month: u32) -> u32 {
    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    first_of_next
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(31)
}

/// Builds a date in `year`/`month`, clamping the day to the month's length.
fn clamped_date(year: i32, month: u32, day: u32) -> NaiveDate {
    let day = day.min(last_day_of_month(year, month)).max(1);
    // Unreachable fallback: day is clamped into the valid range above.
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap_or(NaiveDate::MIN)
}

fn prev_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 { (year - 1, 12) } else { (year, month - 1) }
}

fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month == 12 { (year + 1, 1) } else { (year, month + 1) }
}

/// The payroll cycle containing `date` for the given cycle configuration.
///
/// Rules, in order:
/// - out-of-range days (start outside 1-31, end outside 0-31) fall back to
///   the calendar month of `date`;
/// - `end_day == 0` means "last day of month": the cycle is
///   `[start_day, end-of-month]` of `date`'s month;
/// - `start_day <= end_day`: `[start_day, end_day]` of `date`'s month;
/// - `start_day > end_day` (cycle spans a month boundary): when `date`'s
///   day-of-month is at or past `start_day` the cycle is
///   `[this month:start_day, next month:end_day]`, otherwise
///   `[previous month:start_day, this month:end_day]`.
///
/// End days past a month's length clamp to its last day.
///
/// # Example
///
/// ```
/// use roster_engine::validation::cycle_bounds;
/// use chrono::NaiveDate;
///
/// let date = |s: &str| NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap();
///
/// // 21 -> 20 cycle: the 15th of March belongs to [Feb 21, Mar 20] ...
/// assert_eq!(
///     cycle_bounds(date("2026-03-15"), 21, 20),
///     (date("2026-02-21"), date("2026-03-20"))
/// );
/// // ... and the 25th of March to [Mar 21, Apr 20].
/// assert_eq!(
///     cycle_bounds(date("2026-03-25"), 21, 20),
///     (date("2026-03-21"), date("2026-04-20"))
/// );
/// ```
pub fn cycle_bounds(date: NaiveDate, start_day: i32, end_day: i32) -> (NaiveDate, NaiveDate) {
    let (year, month) = (date.year(), date.month());

    let out_of_range = !(1..=31).contains(&start_day) || !(0..=31).contains(&end_day);
    if out_of_range {
        return (
            clamped_date(year, month, 1),
            clamped_date(year, month, last_day_of_month(year, month)),
        );
    }

    let start_day = start_day as u32;
    let end_day = end_day as u32;

    if end_day == 0 {
        return (
            clamped_date(year, month, start_day),
            clamped_date(year, month, last_day_of_month(year, month)),
        );
    }

    if start_day <= end_day {
        return (
            clamped_date(year, month, start_day),
            clamped_date(year, month, end_day),
        );
    }

    // Cycle spanning a month boundary (e.g. 21 -> 20).
    if date.day() >= start_day {
        let (ny, nm) = next_month(year, month);
        (clamped_date(year, month, start_day), clamped_date(ny, nm, end_day))
    } else {
        let (py, pm) = prev_month(year, month);
        (clamped_date(py, pm, start_day), clamped_date(year, month, end_day))
    }
}
