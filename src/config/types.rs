//! Configuration types and named defaults for the validation engine.
//!
//! The implicit global defaults of the surrounding scheduling system
//! (agreement code, monthly ceiling, fallback rules, geofence radius) live
//! here as named constants, threaded through [`EngineConfig`] so tests can
//! override them.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::LaborAgreement;

/// Agreement code applied when an employee record carries none.
pub const DEFAULT_AGREEMENT_CODE: &str = "SUVICO";

/// Monthly hour ceiling applied when an employee record carries none.
pub const DEFAULT_MAX_HOURS_PER_MONTH: Decimal = Decimal::from_parts(176, 0, 0, false, 0);

/// Weekly ceiling of the fallback rules used when no active agreement
/// matches an employee's code.
pub const FALLBACK_MAX_HOURS_WEEKLY: Decimal = Decimal::from_parts(48, 0, 0, false, 0);

/// Monthly ceiling of the fallback rules.
pub const FALLBACK_MAX_HOURS_MONTHLY: Decimal = Decimal::from_parts(200, 0, 0, false, 0);

/// Daily overtime threshold of the fallback rules, in hours.
pub const FALLBACK_OVERTIME_THRESHOLD_DAILY: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// Saturday surcharge cutoff hour of the fallback rules.
pub const FALLBACK_SATURDAY_CUTOFF_HOUR: u32 = 13;

/// Opening hour of the fallback night window.
pub const FALLBACK_NIGHT_SHIFT_START: u32 = 21;

/// Closing hour of the fallback night window.
pub const FALLBACK_NIGHT_SHIFT_END: u32 = 6;

/// Geofence radius for on-site check-in validation, in kilometers (100 m).
pub const GEOFENCE_RADIUS_KM: f64 = 0.1;

/// Tunable defaults for an [`Engine`](crate::engine::Engine) instance.
///
/// # Example
///
/// ```
/// use roster_engine::config::EngineConfig;
/// use rust_decimal::Decimal;
///
/// let config = EngineConfig::default();
/// assert_eq!(config.default_agreement_code, "SUVICO");
/// assert_eq!(config.default_max_hours_per_month, Decimal::new(176, 0));
/// ```
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Agreement code assumed for employees without one.
    pub default_agreement_code: String,
    /// Monthly ceiling assumed for employees without one.
    pub default_max_hours_per_month: Decimal,
    /// Radius used by check-in geofence validation, in kilometers.
    pub geofence_radius_km: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_agreement_code: DEFAULT_AGREEMENT_CODE.to_string(),
            default_max_hours_per_month: DEFAULT_MAX_HOURS_PER_MONTH,
            geofence_radius_km: GEOFENCE_RADIUS_KM,
        }
    }
}

/// The static agreement rule table, as parsed from `agreements.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct RuleTable {
    /// The default agreements, in catalog order.
    pub agreements: Vec<LaborAgreement>,
}
