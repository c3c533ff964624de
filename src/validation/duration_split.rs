//! Duration breakdown into surcharge categories.
//!
//! A validated shift's hours are apportioned strictly pro-rata by minute
//! into four disjoint buckets:
//!
//! 1. `hundred` — weekend surcharge: Saturday at/after the agreement's
//!    cutoff hour, through the end of Sunday;
//! 2. `fifty` — daily overtime: minutes beyond `overtime_threshold_daily`
//!    hours accumulated within the same calendar day of the shift;
//! 3. `night` — minutes inside the agreement's (possibly midnight-wrapping)
//!    night window;
//! 4. `normal` — everything else.
//!
//! Each minute is classified exactly once, in that precedence order, so the
//! buckets always sum to the shift's total duration.

use std::collections::HashMap;

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Timelike, Weekday};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::models::{HourSplit, LaborAgreement};

fn minutes_to_hours(minutes: i64) -> Decimal {
    Decimal::new(minutes, 0) / Decimal::new(60, 0)
}

/// Apportions `[start, end)` into surcharge categories under an agreement.
///
/// # Example
///
/// ```
/// use roster_engine::models::LaborAgreement;
/// use roster_engine::validation::compute_split;
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let agreement = LaborAgreement::fallback();
/// // An ordinary weekday shift: Monday 2026-03-09, 08:00-16:00.
/// let start = NaiveDateTime::parse_from_str("2026-03-09 08:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let end = NaiveDateTime::parse_from_str("2026-03-09 16:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
///
/// let split = compute_split(start, end, &agreement);
/// assert_eq!(split.normal, Decimal::new(8, 0));
/// assert_eq!(split.total(), Decimal::new(8, 0));
/// ```
pub fn compute_split(
    start: NaiveDateTime,
    end: NaiveDateTime,
    agreement: &LaborAgreement,
) -> HourSplit {
    let threshold_minutes = (agreement.overtime_threshold_daily * Decimal::new(60, 0))
        .to_i64()
        .unwrap_or(i64::MAX);

    let mut normal: i64 = 0;
    let mut fifty: i64 = 0;
    let mut hundred: i64 = 0;
    let mut night: i64 = 0;
    let mut minutes_per_day: HashMap<NaiveDate, i64> = HashMap::new();

    let mut cursor = start;
    while cursor < end {
        let hour = cursor.hour();
        let weekday = cursor.weekday();
        let counted = minutes_per_day.entry(cursor.date()).or_insert(0);

        let weekend_surcharge = (weekday == Weekday::Sat
            && hour >= agreement.saturday_cutoff_hour)
            || weekday == Weekday::Sun;

        if weekend_surcharge {
            hundred += 1;
        } else if *counted >= threshold_minutes {
            fifty += 1;
        } else if agreement.night_window_contains(hour) {
            night += 1;
        } else {
            normal += 1;
        }

        *counted += 1;
        cursor += Duration::minutes(1);
    }

    HourSplit {
        normal: minutes_to_hours(normal),
        fifty: minutes_to_hours(fifty),
        hundred: minutes_to_hours(hundred),
        night: minutes_to_hours(night),
    }
}
