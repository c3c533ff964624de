//! Shift overlap detection.
//!
//! Conflict rule: an existing non-Canceled shift for the same employee
//! conflicts with a proposed `[start, end)` interval under standard
//! half-open intersection. Touching boundaries (one shift ending exactly
//! when the next starts) never conflict.

use chrono::NaiveDateTime;

use crate::models::Shift;

/// Returns the shifts that conflict with a proposed interval.
///
/// Canceled shifts never conflict. The shift identified by
/// `exclude_shift_id` is skipped, so editing an existing shift does not
/// collide with itself.
///
/// `existing` is the employee's loaded schedule; callers typically pass the
/// result of a store query pre-filtered to the relevant window.
pub fn find_overlaps(
    existing: &[Shift],
    start: NaiveDateTime,
    end: NaiveDateTime,
    exclude_shift_id: Option<&str>,
) -> Vec<Shift> {
    existing
        .iter()
        .filter(|s| s.status.counts_for_schedule())
        .filter(|s| exclude_shift_id != Some(s.id.as_str()))
        .filter(|s| s.overlaps(start, end))
        .cloned()
        .collect()
}
