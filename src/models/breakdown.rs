//! Result types returned by the validation engine.
//!
//! This module contains the [`DurationBreakdown`] produced by a successful
//! assignment validation, the [`HourUsage`] returned by the standalone limit
//! checks, and the report types for pattern expansion and catalog seeding.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Hours of a validated shift split into surcharge categories.
///
/// The categories are disjoint and sum to the shift's total duration; every
/// minute of the shift is classified exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourSplit {
    /// Ordinary hours without surcharge.
    pub normal: Decimal,
    /// Hours with a 50% surcharge (daily overtime).
    pub fifty: Decimal,
    /// Hours with a 100% surcharge (Saturday after cutoff through Sunday).
    pub hundred: Decimal,
    /// Hours inside the agreement's night window.
    pub night: Decimal,
}

impl HourSplit {
    /// A split with all categories at zero.
    pub fn zero() -> Self {
        Self {
            normal: Decimal::ZERO,
            fifty: Decimal::ZERO,
            hundred: Decimal::ZERO,
            night: Decimal::ZERO,
        }
    }

    /// Sum of all categories.
    pub fn total(&self) -> Decimal {
        self.normal + self.fifty + self.hundred + self.night
    }
}

/// The successful outcome of validating a proposed assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationBreakdown {
    /// Total duration of the proposed shift in hours.
    pub total_hours: Decimal,
    /// The total apportioned into surcharge categories.
    pub breakdown: HourSplit,
    /// The agreement code the rules came from ("DEFAULT" when the fallback
    /// rules were applied).
    pub agreement_code: String,
}

/// Projected hour usage returned by the standalone weekly/monthly checks.
///
/// Useful for UI-side pre-flight warnings: a check that passes still tells
/// the caller how close to the ceiling the employee would land.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourUsage {
    /// Hours already accumulated in the window, before the proposal.
    pub worked: Decimal,
    /// Accumulated hours plus the proposal.
    pub projected: Decimal,
    /// The applicable ceiling.
    pub limit: Decimal,
    /// Hours left under the ceiling after the proposal.
    pub remaining: Decimal,
}

/// Outcome of a pattern-expansion run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacancyReport {
    /// Number of vacancy shifts persisted by this run.
    pub created: u32,
    /// Human-readable summary.
    pub message: String,
}

/// Outcome of seeding the agreement catalog with default rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedSummary {
    /// Agreements inserted by this run.
    pub created: u32,
    /// Agreements already present and left untouched.
    pub existing: u32,
}

impl std::fmt::Display for SeedSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "seeded {} agreement(s), {} already present",
            self.created, self.existing
        )
    }
}
