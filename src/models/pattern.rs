//! Service pattern and shift type models.
//!
//! A pattern is a recurrence rule (days of week + quantity) tied to a
//! contract; the expander materializes it into vacancy shifts for a month.
//! The shift type supplies the concrete clock times for each vacancy.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// A recurring staffing requirement for a contract.
///
/// `days_of_week` follows the upstream convention: 0 = Sunday through
/// 6 = Saturday. Read-only input to the expander, never mutated by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServicePattern {
    /// Unique identifier for the pattern.
    pub id: String,
    /// The contract this pattern staffs.
    pub contract_id: String,
    /// The site generated vacancies belong to.
    pub objective_id: String,
    /// The shift type that defines the vacancy's clock times.
    pub shift_type_id: String,
    /// Days of week the pattern applies to (0 = Sunday ... 6 = Saturday).
    pub days_of_week: Vec<u32>,
    /// How many guards are required per matching day.
    pub quantity_per_day: u32,
    /// First day the pattern is in force.
    pub valid_from: NaiveDate,
    /// Last day the pattern is in force, if bounded.
    #[serde(default)]
    pub valid_to: Option<NaiveDate>,
    /// Inactive patterns are skipped by the expander.
    pub active: bool,
    /// Role required for the vacancy, when specified.
    #[serde(default)]
    pub role: Option<String>,
}

impl ServicePattern {
    /// Whether the pattern requires staffing on the given day.
    ///
    /// True when the pattern is active, the day falls inside the validity
    /// window (inclusive of both bounds), and the day's weekday appears in
    /// `days_of_week`.
    pub fn applies_on(&self, date: NaiveDate) -> bool {
        if !self.active {
            return false;
        }
        if date < self.valid_from {
            return false;
        }
        if let Some(valid_to) = self.valid_to {
            if date > valid_to {
                return false;
            }
        }
        self.days_of_week
            .contains(&date.weekday().num_days_from_sunday())
    }
}

/// A named shift template with fixed clock times.
///
/// When `end_time <= start_time` the shift crosses midnight and ends on the
/// following day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftType {
    /// Unique identifier for the shift type.
    pub id: String,
    /// Human-readable name (e.g. "Nocturno 22-06").
    pub name: String,
    /// Clock time the shift starts.
    pub start_time: NaiveTime,
    /// Clock time the shift ends.
    pub end_time: NaiveTime,
}

impl ShiftType {
    /// The absolute interval of this shift type on a given day.
    ///
    /// # Example
    ///
    /// ```
    /// use roster_engine::models::ShiftType;
    /// use chrono::{NaiveDate, NaiveTime};
    ///
    /// let night = ShiftType {
    ///     id: "st_night".to_string(),
    ///     name: "Nocturno".to_string(),
    ///     start_time: NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
    ///     end_time: NaiveTime::from_hms_opt(6, 0, 0).unwrap(),
    /// };
    /// let day = NaiveDate::from_ymd_opt(2026, 3, 9).unwrap();
    /// let (start, end) = night.concrete_interval(day);
    /// assert_eq!(start.to_string(), "2026-03-09 22:00:00");
    /// assert_eq!(end.to_string(), "2026-03-10 06:00:00");
    /// ```
    pub fn concrete_interval(&self, date: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
        let start = date.and_time(self.start_time);
        let end = if self.end_time > self.start_time {
            date.and_time(self.end_time)
        } else {
            (date + chrono::Duration::days(1)).and_time(self.end_time)
        };
        (start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn weekday_pattern() -> ServicePattern {
        ServicePattern {
            id: "pat_001".to_string(),
            contract_id: "con_001".to_string(),
            objective_id: "obj_001".to_string(),
            shift_type_id: "st_day".to_string(),
            days_of_week: vec![1, 2, 3, 4, 5], // Monday through Friday
            quantity_per_day: 2,
            valid_from: make_date("2026-01-01"),
            valid_to: None,
            active: true,
            role: None,
        }
    }

    #[test]
    fn test_applies_on_matching_weekday() {
        let pattern = weekday_pattern();
        // 2026-03-09 is a Monday
        assert!(pattern.applies_on(make_date("2026-03-09")));
    }

    #[test]
    fn test_does_not_apply_on_sunday() {
        let pattern = weekday_pattern();
        // 2026-03-15 is a Sunday, day 0 in upstream numbering
        assert!(!pattern.applies_on(make_date("2026-03-15")));
    }

    #[test]
    fn test_sunday_is_day_zero() {
        let mut pattern = weekday_pattern();
        pattern.days_of_week = vec![0];
        assert!(pattern.applies_on(make_date("2026-03-15")));
        assert!(!pattern.applies_on(make_date("2026-03-14"))); // Saturday
    }

    #[test]
    fn test_validity_window_is_inclusive() {
        let mut pattern = weekday_pattern();
        pattern.valid_from = make_date("2026-03-09");
        pattern.valid_to = Some(make_date("2026-03-13"));
        assert!(pattern.applies_on(make_date("2026-03-09")));
        assert!(pattern.applies_on(make_date("2026-03-13")));
        assert!(!pattern.applies_on(make_date("2026-03-06")));
        assert!(!pattern.applies_on(make_date("2026-03-16")));
    }

    #[test]
    fn test_inactive_pattern_never_applies() {
        let mut pattern = weekday_pattern();
        pattern.active = false;
        assert!(!pattern.applies_on(make_date("2026-03-09")));
    }

    #[test]
    fn test_day_shift_interval_same_day() {
        let day = ShiftType {
            id: "st_day".to_string(),
            name: "Diurno".to_string(),
            start_time: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(16, 0, 0).unwrap(),
        };
        let (start, end) = day.concrete_interval(make_date("2026-03-09"));
        assert_eq!(start.to_string(), "2026-03-09 08:00:00");
        assert_eq!(end.to_string(), "2026-03-09 16:00:00");
    }

    #[test]
    fn test_night_shift_interval_crosses_midnight() {
        let night = ShiftType {
            id: "st_night".to_string(),
            name: "Nocturno".to_string(),
            start_time: NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(6, 0, 0).unwrap(),
        };
        let (start, end) = night.concrete_interval(make_date("2026-03-09"));
        assert_eq!(start.to_string(), "2026-03-09 22:00:00");
        assert_eq!(end.to_string(), "2026-03-10 06:00:00");
    }
}
