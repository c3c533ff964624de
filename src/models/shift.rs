//! Shift model and related types.
//!
//! This module defines the [`Shift`] struct together with its status machine
//! and the [`Assignee`] type that replaces the document store's `"VACANTE"`
//! sentinel with a tagged variant.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::timestamp;

/// The wire sentinel the surrounding document store uses for unfilled shifts.
pub const VACANT_SENTINEL: &str = "VACANTE";

/// Who a shift belongs to: a concrete employee, or nobody yet.
///
/// On the wire this is a plain string (`"VACANTE"` for unfilled slots), but
/// inside the engine it is a tagged variant so vacancy checks can never be
/// confused with employee-id comparisons.
///
/// # Example
///
/// ```
/// use roster_engine::models::Assignee;
///
/// let vacant: Assignee = serde_json::from_str("\"VACANTE\"").unwrap();
/// assert!(vacant.is_vacant());
///
/// let filled: Assignee = serde_json::from_str("\"emp_001\"").unwrap();
/// assert_eq!(filled.employee_id(), Some("emp_001"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Assignee {
    /// The shift is an unfilled vacancy.
    Vacant,
    /// The shift is assigned to the employee with this identifier.
    Assigned(String),
}

impl Assignee {
    /// True if the shift has no employee.
    pub fn is_vacant(&self) -> bool {
        matches!(self, Assignee::Vacant)
    }

    /// The assigned employee's identifier, if any.
    pub fn employee_id(&self) -> Option<&str> {
        match self {
            Assignee::Vacant => None,
            Assignee::Assigned(id) => Some(id.as_str()),
        }
    }
}

impl Serialize for Assignee {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Assignee::Vacant => serializer.serialize_str(VACANT_SENTINEL),
            Assignee::Assigned(id) => serializer.serialize_str(id),
        }
    }
}

impl<'de> Deserialize<'de> for Assignee {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if raw == VACANT_SENTINEL {
            Ok(Assignee::Vacant)
        } else {
            Ok(Assignee::Assigned(raw))
        }
    }
}

/// Lifecycle status of a shift.
///
/// Transitions are linear (`Assigned → Confirmed → InProgress → Completed`)
/// except `Canceled`, which is reachable from any non-terminal state and is
/// itself terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftStatus {
    /// Created and assigned (or generated as a vacancy), not yet confirmed.
    Assigned,
    /// Confirmed by the employee or scheduler.
    Confirmed,
    /// Currently being worked.
    InProgress,
    /// Worked to completion. Terminal.
    Completed,
    /// Canceled. Terminal; never counts toward hour totals or overlap checks.
    Canceled,
}

impl ShiftStatus {
    /// True for the two states no transition can leave.
    pub fn is_terminal(self) -> bool {
        matches!(self, ShiftStatus::Completed | ShiftStatus::Canceled)
    }

    /// Whether moving from `self` to `next` is a legal transition.
    pub fn can_transition_to(self, next: ShiftStatus) -> bool {
        if self.is_terminal() {
            return false;
        }
        match next {
            ShiftStatus::Canceled => true,
            ShiftStatus::Confirmed => self == ShiftStatus::Assigned,
            ShiftStatus::InProgress => self == ShiftStatus::Confirmed,
            ShiftStatus::Completed => self == ShiftStatus::InProgress,
            ShiftStatus::Assigned => false,
        }
    }

    /// Whether a shift in this status blocks other shifts (overlap checks)
    /// and counts toward weekly hour totals.
    pub fn counts_for_schedule(self) -> bool {
        self != ShiftStatus::Canceled
    }

    /// Whether a shift in this status counts toward the monthly soft block.
    ///
    /// Completed work is historical fact: it is excluded so already-worked
    /// hours never block a future assignment.
    pub fn counts_for_monthly_limit(self) -> bool {
        !matches!(self, ShiftStatus::Canceled | ShiftStatus::Completed)
    }
}

/// A scheduled (or vacant) work shift at a site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shift {
    /// Unique identifier for the shift.
    pub id: String,
    /// The employee working the shift, or [`Assignee::Vacant`].
    #[serde(rename = "employee_id")]
    pub assignee: Assignee,
    /// The site (objective) the shift is worked at.
    pub objective_id: String,
    /// The shift type this record was scheduled from, when known.
    #[serde(default)]
    pub shift_type_id: Option<String>,
    /// Absolute start of the shift.
    #[serde(deserialize_with = "timestamp::deserialize_flexible")]
    pub start_time: NaiveDateTime,
    /// Absolute end of the shift. Always after `start_time`.
    #[serde(deserialize_with = "timestamp::deserialize_flexible")]
    pub end_time: NaiveDateTime,
    /// Lifecycle status.
    pub status: ShiftStatus,
    /// The role worked during the shift (e.g. "vigilador").
    #[serde(default)]
    pub role: Option<String>,
    /// The scheduler who created the record.
    #[serde(default)]
    pub scheduler_id: Option<String>,
    /// Last modification time, when the upstream layer tracks it.
    #[serde(default, deserialize_with = "timestamp::deserialize_flexible_opt")]
    pub updated_at: Option<NaiveDateTime>,
}

impl Shift {
    /// The shift's duration in hours.
    ///
    /// # Example
    ///
    /// ```
    /// use roster_engine::models::{Assignee, Shift, ShiftStatus};
    /// use chrono::NaiveDateTime;
    /// use rust_decimal::Decimal;
    ///
    /// let shift = Shift {
    ///     id: "shift_001".to_string(),
    ///     assignee: Assignee::Assigned("emp_001".to_string()),
    ///     objective_id: "obj_001".to_string(),
    ///     shift_type_id: None,
    ///     start_time: NaiveDateTime::parse_from_str("2026-03-09 08:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
    ///     end_time: NaiveDateTime::parse_from_str("2026-03-09 16:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
    ///     status: ShiftStatus::Assigned,
    ///     role: None,
    ///     scheduler_id: None,
    ///     updated_at: None,
    /// };
    /// assert_eq!(shift.duration_hours(), Decimal::new(80, 1)); // 8.0 hours
    /// ```
    pub fn duration_hours(&self) -> Decimal {
        let minutes = (self.end_time - self.start_time).num_minutes();
        Decimal::new(minutes, 0) / Decimal::new(60, 0)
    }

    /// Half-open interval intersection with `[start, end)`.
    ///
    /// A shift ending exactly when the proposed interval starts (or starting
    /// exactly when it ends) does not overlap.
    pub fn overlaps(&self, start: NaiveDateTime, end: NaiveDateTime) -> bool {
        self.start_time < end && self.end_time > start
    }

    /// True when the shift belongs to the given employee.
    pub fn belongs_to(&self, employee_id: &str) -> bool {
        self.assignee.employee_id() == Some(employee_id)
    }
}
