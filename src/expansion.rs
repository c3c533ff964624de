//! Service pattern expansion.
//!
//! Turns the recurrence rules attached to a contract into concrete vacancy
//! shifts for a target month. The expansion is a top-up: for each pattern and
//! matching day it only creates the difference between `quantity_per_day` and
//! the slots already present, so re-running it for the same month is
//! idempotent.

use chrono::NaiveDate;

use crate::error::{EngineError, EngineResult};
use crate::models::{Assignee, ServicePattern, Shift, ShiftStatus, ShiftType};
use crate::validation::last_day_of_month;

/// All days of the given month, in order.
///
/// Fails with [`EngineError::InvalidMonth`] when `month` is outside 1-12.
pub fn month_days(year: i32, month: u32) -> EngineResult<Vec<NaiveDate>> {
    if !(1..=12).contains(&month) {
        return Err(EngineError::InvalidMonth { month });
    }
    let last = last_day_of_month(year, month);
    let mut days = Vec::with_capacity(last as usize);
    for day in 1..=last {
        if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
            days.push(date);
        }
    }
    Ok(days)
}

/// Counts slots already covering a pattern's requirement on one day.
///
/// A slot counts when it is not canceled, carries the same shift type, and
/// starts on the given day. Both vacant and assigned shifts count: an
/// assignment fills a requirement just as well as an open vacancy does.
pub fn existing_slot_count(existing: &[Shift], shift_type_id: &str, date: NaiveDate) -> usize {
    existing
        .iter()
        .filter(|shift| shift.status.counts_for_schedule())
        .filter(|shift| shift.shift_type_id.as_deref() == Some(shift_type_id))
        .filter(|shift| shift.start_time.date() == date)
        .count()
}

/// Builds one unpersisted vacancy for a pattern on a given day.
///
/// The identifier is left empty; the store assigns one on insert.
pub fn vacancy_shift(pattern: &ServicePattern, shift_type: &ShiftType, date: NaiveDate) -> Shift {
    let (start_time, end_time) = shift_type.concrete_interval(date);
    Shift {
        id: String::new(),
        assignee: Assignee::Vacant,
        objective_id: pattern.objective_id.clone(),
        shift_type_id: Some(shift_type.id.clone()),
        start_time,
        end_time,
        status: ShiftStatus::Assigned,
        role: pattern.role.clone(),
        scheduler_id: None,
        updated_at: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDateTime, NaiveTime};

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    fn day_type() -> ShiftType {
        ShiftType {
            id: "st_day".to_string(),
            name: "Diurno".to_string(),
            start_time: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(16, 0, 0).unwrap(),
        }
    }

    fn pattern() -> ServicePattern {
        ServicePattern {
            id: "pat_001".to_string(),
            contract_id: "con_001".to_string(),
            objective_id: "obj_001".to_string(),
            shift_type_id: "st_day".to_string(),
            days_of_week: vec![1, 2, 3, 4, 5],
            quantity_per_day: 2,
            valid_from: make_date("2026-01-01"),
            valid_to: None,
            active: true,
            role: Some("vigilador".to_string()),
        }
    }

    #[test]
    fn test_month_days_spans_full_month() {
        let days = month_days(2026, 3).unwrap();
        assert_eq!(days.len(), 31);
        assert_eq!(days[0], make_date("2026-03-01"));
        assert_eq!(days[30], make_date("2026-03-31"));
    }

    #[test]
    fn test_month_days_handles_february() {
        assert_eq!(month_days(2026, 2).unwrap().len(), 28);
        assert_eq!(month_days(2028, 2).unwrap().len(), 29);
    }

    #[test]
    fn test_month_days_rejects_out_of_range_month() {
        assert!(matches!(
            month_days(2026, 0),
            Err(EngineError::InvalidMonth { month: 0 })
        ));
        assert!(matches!(
            month_days(2026, 13),
            Err(EngineError::InvalidMonth { month: 13 })
        ));
    }

    #[test]
    fn test_vacancy_shift_is_vacant_and_carries_pattern_fields() {
        let shift = vacancy_shift(&pattern(), &day_type(), make_date("2026-03-09"));
        assert!(shift.assignee.is_vacant());
        assert!(shift.id.is_empty());
        assert_eq!(shift.objective_id, "obj_001");
        assert_eq!(shift.shift_type_id.as_deref(), Some("st_day"));
        assert_eq!(shift.role.as_deref(), Some("vigilador"));
        assert_eq!(shift.start_time, make_datetime("2026-03-09", "08:00:00"));
        assert_eq!(shift.end_time, make_datetime("2026-03-09", "16:00:00"));
        assert_eq!(shift.status, ShiftStatus::Assigned);
    }

    #[test]
    fn test_slot_count_includes_vacant_and_assigned() {
        let mut filled = vacancy_shift(&pattern(), &day_type(), make_date("2026-03-09"));
        filled.assignee = Assignee::Assigned("emp_001".to_string());
        let vacant = vacancy_shift(&pattern(), &day_type(), make_date("2026-03-09"));
        let existing = vec![filled, vacant];
        assert_eq!(
            existing_slot_count(&existing, "st_day", make_date("2026-03-09")),
            2
        );
    }

    #[test]
    fn test_slot_count_skips_canceled_and_other_days() {
        let mut canceled = vacancy_shift(&pattern(), &day_type(), make_date("2026-03-09"));
        canceled.status = ShiftStatus::Canceled;
        let other_day = vacancy_shift(&pattern(), &day_type(), make_date("2026-03-10"));
        let other_type = {
            let mut s = vacancy_shift(&pattern(), &day_type(), make_date("2026-03-09"));
            s.shift_type_id = Some("st_night".to_string());
            s
        };
        let existing = vec![canceled, other_day, other_type];
        assert_eq!(
            existing_slot_count(&existing, "st_day", make_date("2026-03-09")),
            0
        );
    }
}
