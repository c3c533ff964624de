//! Absence-based availability checking.
//!
//! A proposed interval is blocked when it intersects any pending or approved
//! absence for the employee. This check raises before any mutation occurs,
//! so no rollback is ever needed.

use chrono::NaiveDateTime;

use crate::error::{EngineError, EngineResult};
use crate::models::Absence;

/// Fails with [`EngineError::AvailabilityConflict`] if any loaded absence
/// blocks the proposed `[start, end)` interval.
///
/// The first blocking absence (by start date) is reported; the caller only
/// needs one concrete window to render a precise rejection message.
pub fn check_availability(
    absences: &[Absence],
    employee_id: &str,
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> EngineResult<()> {
    let blocking = absences
        .iter()
        .filter(|a| a.blocks(start, end))
        .min_by_key(|a| a.start_date);

    match blocking {
        Some(absence) => Err(EngineError::AvailabilityConflict {
            employee_id: employee_id.to_string(),
            absence_start: absence.start_date,
            absence_end: absence.end_date,
        }),
        None => Ok(()),
    }
}
