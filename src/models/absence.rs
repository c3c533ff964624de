//! Absence model.
//!
//! Both pending and approved absences freeze an employee's calendar: an
//! absence request need not be finally approved to block new assignments.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::timestamp;

/// Review status of an absence request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbsenceStatus {
    /// Submitted, awaiting review. Blocks assignments (conservative policy).
    Pending,
    /// Approved. Blocks assignments.
    Approved,
    /// Rejected. Does not block.
    Rejected,
}

impl AbsenceStatus {
    /// Whether an absence in this status blocks new assignments.
    pub fn blocks_assignment(self) -> bool {
        matches!(self, AbsenceStatus::Pending | AbsenceStatus::Approved)
    }
}

/// A requested or approved absence window for an employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Absence {
    /// Unique identifier for the absence.
    pub id: String,
    /// The employee the absence belongs to.
    pub employee_id: String,
    /// Start of the absence window.
    #[serde(deserialize_with = "timestamp::deserialize_flexible")]
    pub start_date: NaiveDateTime,
    /// End of the absence window.
    #[serde(deserialize_with = "timestamp::deserialize_flexible")]
    pub end_date: NaiveDateTime,
    /// Review status.
    pub status: AbsenceStatus,
    /// Kind of absence (e.g. "vacation", "medical").
    #[serde(rename = "type", default)]
    pub absence_type: Option<String>,
}

impl Absence {
    /// Whether this absence blocks a proposed `[start, end)` interval.
    ///
    /// Standard interval intersection: the proposal is blocked when it starts
    /// before the absence ends and ends after the absence starts, and the
    /// absence is in a blocking status.
    pub fn blocks(&self, start: NaiveDateTime, end: NaiveDateTime) -> bool {
        self.status.blocks_assignment() && start < self.end_date && end > self.start_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    fn make_absence(status: AbsenceStatus) -> Absence {
        Absence {
            id: "abs_001".to_string(),
            employee_id: "emp_001".to_string(),
            start_date: make_datetime("2026-03-10", "00:00:00"),
            end_date: make_datetime("2026-03-12", "23:59:59"),
            status,
            absence_type: Some("vacation".to_string()),
        }
    }

    #[test]
    fn test_pending_and_approved_block() {
        assert!(AbsenceStatus::Pending.blocks_assignment());
        assert!(AbsenceStatus::Approved.blocks_assignment());
        assert!(!AbsenceStatus::Rejected.blocks_assignment());
    }

    #[test]
    fn test_shift_inside_absence_is_blocked() {
        let absence = make_absence(AbsenceStatus::Approved);
        assert!(absence.blocks(
            make_datetime("2026-03-11", "08:00:00"),
            make_datetime("2026-03-11", "16:00:00"),
        ));
    }

    #[test]
    fn test_shift_after_absence_is_allowed() {
        let absence = make_absence(AbsenceStatus::Approved);
        assert!(!absence.blocks(
            make_datetime("2026-03-13", "08:00:00"),
            make_datetime("2026-03-13", "16:00:00"),
        ));
    }

    #[test]
    fn test_rejected_absence_never_blocks() {
        let absence = make_absence(AbsenceStatus::Rejected);
        assert!(!absence.blocks(
            make_datetime("2026-03-11", "08:00:00"),
            make_datetime("2026-03-11", "16:00:00"),
        ));
    }

    #[test]
    fn test_partial_intersection_is_blocked() {
        let absence = make_absence(AbsenceStatus::Pending);
        assert!(absence.blocks(
            make_datetime("2026-03-09", "20:00:00"),
            make_datetime("2026-03-10", "04:00:00"),
        ));
    }

    #[test]
    fn test_deserialize_with_epoch_dates() {
        let json = r#"{
            "id": "abs_001",
            "employee_id": "emp_001",
            "start_date": 1773532800,
            "end_date": "2026-03-20T00:00:00",
            "status": "pending",
            "type": "medical"
        }"#;
        let absence: Absence = serde_json::from_str(json).unwrap();
        assert_eq!(absence.start_date, make_datetime("2026-03-15", "00:00:00"));
        assert_eq!(absence.absence_type.as_deref(), Some("medical"));
    }
}
