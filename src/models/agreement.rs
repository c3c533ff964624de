//! Labor agreement (CCT) model.
//!
//! An agreement bounds weekly/monthly hours and defines the daily overtime
//! threshold, the Saturday surcharge cutoff, and the night-shift window used
//! for duration breakdowns.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::{
    FALLBACK_MAX_HOURS_MONTHLY, FALLBACK_MAX_HOURS_WEEKLY, FALLBACK_NIGHT_SHIFT_END,
    FALLBACK_NIGHT_SHIFT_START, FALLBACK_OVERTIME_THRESHOLD_DAILY,
    FALLBACK_SATURDAY_CUTOFF_HOUR,
};

/// A named collective-bargaining rule set.
///
/// Immutable during a validation call; created and updated by configuration
/// management outside the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaborAgreement {
    /// Store identifier, assigned on insert.
    #[serde(default)]
    pub id: Option<String>,
    /// Unique agreement code (e.g. "SUVICO").
    pub code: String,
    /// Human-readable name.
    #[serde(default)]
    pub name: Option<String>,
    /// Weekly hour ceiling.
    pub max_hours_weekly: Decimal,
    /// Monthly hour ceiling.
    pub max_hours_monthly: Decimal,
    /// Hours per calendar day before the 50% overtime surcharge applies.
    pub overtime_threshold_daily: Decimal,
    /// Hour of day (0-24) from which Saturday work is surcharged.
    pub saturday_cutoff_hour: u32,
    /// Hour of day the night window opens (window may wrap midnight).
    pub night_shift_start: u32,
    /// Hour of day the night window closes.
    pub night_shift_end: u32,
    /// Inactive agreements are ignored by lookups.
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl LaborAgreement {
    /// The degrade-gracefully default applied when no active agreement
    /// matches an employee's code. Deliberate policy, not an error: the
    /// scheduling UI stays usable with incomplete configuration.
    pub fn fallback() -> Self {
        Self {
            id: None,
            code: "DEFAULT".to_string(),
            name: Some("Default fallback rules".to_string()),
            max_hours_weekly: FALLBACK_MAX_HOURS_WEEKLY,
            max_hours_monthly: FALLBACK_MAX_HOURS_MONTHLY,
            overtime_threshold_daily: FALLBACK_OVERTIME_THRESHOLD_DAILY,
            saturday_cutoff_hour: FALLBACK_SATURDAY_CUTOFF_HOUR,
            night_shift_start: FALLBACK_NIGHT_SHIFT_START,
            night_shift_end: FALLBACK_NIGHT_SHIFT_END,
            is_active: true,
        }
    }

    /// Whether an hour of day falls inside the night window.
    ///
    /// The window wraps midnight when `night_shift_start > night_shift_end`
    /// (e.g. 21 → 6 covers 21:00-23:59 and 00:00-05:59). The closing hour is
    /// exclusive. A degenerate window (`start == end`) matches nothing.
    ///
    /// # Example
    ///
    /// ```
    /// use roster_engine::models::LaborAgreement;
    ///
    /// let agreement = LaborAgreement::fallback(); // night window 21 -> 6
    /// assert!(agreement.night_window_contains(23));
    /// assert!(agreement.night_window_contains(2));
    /// assert!(!agreement.night_window_contains(6));
    /// assert!(!agreement.night_window_contains(12));
    /// ```
    pub fn night_window_contains(&self, hour: u32) -> bool {
        let (start, end) = (self.night_shift_start, self.night_shift_end);
        if start == end {
            false
        } else if start < end {
            hour >= start && hour < end
        } else {
            hour >= start || hour < end
        }
    }
}
