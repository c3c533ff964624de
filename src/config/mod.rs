//! Configuration for the validation engine.
//!
//! This module provides the named defaults of the surrounding scheduling
//! system, the [`EngineConfig`] value they are threaded through, and the
//! loader for the static agreement rule table.

mod loader;
mod types;

pub use loader::RuleTableLoader;
pub use types::{
    DEFAULT_AGREEMENT_CODE, DEFAULT_MAX_HOURS_PER_MONTH, EngineConfig,
    FALLBACK_MAX_HOURS_MONTHLY, FALLBACK_MAX_HOURS_WEEKLY, FALLBACK_NIGHT_SHIFT_END,
    FALLBACK_NIGHT_SHIFT_START, FALLBACK_OVERTIME_THRESHOLD_DAILY,
    FALLBACK_SATURDAY_CUTOFF_HOUR, GEOFENCE_RADIUS_KM, RuleTable,
};
