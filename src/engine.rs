//! The assignment validation engine.
//!
//! [`Engine`] ties the stateless validation checks to a [`ScheduleStore`]:
//! it loads the employee, their agreement rules and the relevant slice of
//! their schedule, runs the checks in a fixed order, and either rejects the
//! proposal with the first conflict or returns its surcharge breakdown.
//!
//! Check order is part of the contract: time-range sanity, employee
//! existence, overlap, availability, weekly limit, monthly limit. Callers
//! relying on "overlap is reported before the weekly limit" get that
//! guarantee.

use chrono::{Duration, NaiveDateTime, NaiveTime};
use tracing::{debug, info, warn};

use crate::config::{EngineConfig, RuleTableLoader};
use crate::error::{EngineError, EngineResult};
use crate::expansion::{existing_slot_count, month_days, vacancy_shift};
use crate::models::{
    AbsenceStatus, Assignee, DurationBreakdown, Employee, HourUsage, LaborAgreement, SeedSummary,
    Shift, VacancyReport,
};
use crate::store::ScheduleStore;
use crate::validation::{
    check_availability, check_monthly_limit, check_weekly_limit, compute_split, cycle_bounds,
    find_overlaps, iso_week_bounds,
};

/// Absence statuses that block an assignment.
const BLOCKING_ABSENCE_STATUSES: [AbsenceStatus; 2] =
    [AbsenceStatus::Pending, AbsenceStatus::Approved];

/// Validation and expansion facade over a [`ScheduleStore`].
///
/// # Example
///
/// ```
/// use roster_engine::engine::Engine;
/// use roster_engine::store::MemoryStore;
///
/// let engine = Engine::new(MemoryStore::new());
/// let seeded = engine.initialize_defaults().unwrap();
/// assert!(seeded.created >= 2);
/// ```
pub struct Engine<S: ScheduleStore> {
    store: S,
    config: EngineConfig,
}

impl<S: ScheduleStore> Engine<S> {
    /// Creates an engine with the default configuration.
    pub fn new(store: S) -> Self {
        Self::with_config(store, EngineConfig::default())
    }

    /// Creates an engine with explicit configuration.
    pub fn with_config(store: S, config: EngineConfig) -> Self {
        Self { store, config }
    }

    /// The backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The effective agreement rules for an employee.
    ///
    /// Resolves the employee's code (or the configured default) against the
    /// store; when no active agreement matches, falls back to
    /// [`LaborAgreement::fallback`] so validation still proceeds with a
    /// known rule set.
    pub fn agreement_for(&self, employee: &Employee) -> EngineResult<LaborAgreement> {
        let code = employee.agreement_code(&self.config.default_agreement_code);
        match self.store.agreement_by_code(code)? {
            Some(agreement) => Ok(agreement),
            None => {
                warn!(
                    employee_id = %employee.id,
                    agreement_code = %code,
                    "no active agreement for code, using fallback rules"
                );
                Ok(LaborAgreement::fallback())
            }
        }
    }

    /// Active agreement by code, straight from the store.
    pub fn agreement_by_code(&self, code: &str) -> EngineResult<Option<LaborAgreement>> {
        self.store.agreement_by_code(code)
    }

    /// Runs the full validation pipeline for a proposed assignment.
    ///
    /// `exclude_shift_id` carries the shift being edited, if any, so it does
    /// not conflict with or double-count itself. On success returns the
    /// proposal's surcharge breakdown under the employee's agreement.
    pub fn validate_assignment(
        &self,
        employee_id: &str,
        start: NaiveDateTime,
        end: NaiveDateTime,
        exclude_shift_id: Option<&str>,
    ) -> EngineResult<DurationBreakdown> {
        ensure_valid_range(start, end)?;

        let employee = self.require_employee(employee_id)?;
        let agreement = self.agreement_for(&employee)?;

        let cycle_days = employee.payroll_cycle_days();
        let (window_from, window_to) = schedule_window(start, end, cycle_days);
        let existing = self
            .store
            .shifts_for_employee(employee_id, window_from, window_to)?;

        let conflicts = find_overlaps(&existing, start, end, exclude_shift_id);
        if !conflicts.is_empty() {
            return Err(EngineError::OverlapConflict {
                employee_id: employee_id.to_string(),
                conflicts,
            });
        }

        let absences = self
            .store
            .absences_for_employee(employee_id, &BLOCKING_ABSENCE_STATUSES)?;
        check_availability(&absences, employee_id, start, end)?;

        check_weekly_limit(&existing, start, end, exclude_shift_id, agreement.max_hours_weekly)?;

        let ceiling = employee.monthly_ceiling(self.config.default_max_hours_per_month);
        check_monthly_limit(&existing, start, end, exclude_shift_id, cycle_days, ceiling)?;

        let split = compute_split(start, end, &agreement);
        debug!(
            employee_id = %employee.id,
            agreement_code = %agreement.code,
            total_hours = %split.total(),
            "assignment validated"
        );
        Ok(DurationBreakdown {
            total_hours: split.total(),
            breakdown: split,
            agreement_code: agreement.code,
        })
    }

    /// Validates a proposal and persists it as an assigned shift.
    ///
    /// The overlap check is re-run against a fresh read immediately before
    /// the insert, narrowing the race window between validation and write.
    /// Returns the stored shift and its breakdown.
    pub fn validate_and_assign(
        &self,
        employee_id: &str,
        mut shift: Shift,
    ) -> EngineResult<(Shift, DurationBreakdown)> {
        let exclude = (!shift.id.is_empty()).then_some(shift.id.as_str());
        let breakdown =
            self.validate_assignment(employee_id, shift.start_time, shift.end_time, exclude)?;

        let fresh = self
            .store
            .shifts_for_employee(employee_id, shift.start_time, shift.end_time)?;
        let conflicts = find_overlaps(&fresh, shift.start_time, shift.end_time, exclude);
        if !conflicts.is_empty() {
            return Err(EngineError::OverlapConflict {
                employee_id: employee_id.to_string(),
                conflicts,
            });
        }

        shift.assignee = Assignee::Assigned(employee_id.to_string());
        let stored = self.store.insert_shift(shift)?;
        info!(
            employee_id = %employee_id,
            shift_id = %stored.id,
            "shift assigned"
        );
        Ok((stored, breakdown))
    }

    /// Overlap pre-flight: fails with the conflicting shifts, succeeds silently.
    pub fn check_shift_overlap(
        &self,
        employee_id: &str,
        start: NaiveDateTime,
        end: NaiveDateTime,
        exclude_shift_id: Option<&str>,
    ) -> EngineResult<()> {
        ensure_valid_range(start, end)?;
        let existing = self.store.shifts_for_employee(employee_id, start, end)?;
        let conflicts = find_overlaps(&existing, start, end, exclude_shift_id);
        if conflicts.is_empty() {
            Ok(())
        } else {
            Err(EngineError::OverlapConflict {
                employee_id: employee_id.to_string(),
                conflicts,
            })
        }
    }

    /// Availability pre-flight against pending and approved absences.
    pub fn check_availability(
        &self,
        employee_id: &str,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> EngineResult<()> {
        ensure_valid_range(start, end)?;
        let absences = self
            .store
            .absences_for_employee(employee_id, &BLOCKING_ABSENCE_STATUSES)?;
        check_availability(&absences, employee_id, start, end)
    }

    /// Weekly-limit pre-flight; returns projected usage on success.
    pub fn check_weekly_limit(
        &self,
        employee_id: &str,
        start: NaiveDateTime,
        end: NaiveDateTime,
        exclude_shift_id: Option<&str>,
    ) -> EngineResult<HourUsage> {
        ensure_valid_range(start, end)?;
        let employee = self.require_employee(employee_id)?;
        let agreement = self.agreement_for(&employee)?;
        let (week_start, week_end) = iso_week_bounds(start);
        let existing = self
            .store
            .shifts_for_employee(employee_id, week_start, week_end)?;
        check_weekly_limit(&existing, start, end, exclude_shift_id, agreement.max_hours_weekly)
    }

    /// Monthly-limit pre-flight over the employee's payroll cycle.
    pub fn check_monthly_limit(
        &self,
        employee_id: &str,
        start: NaiveDateTime,
        end: NaiveDateTime,
        exclude_shift_id: Option<&str>,
    ) -> EngineResult<HourUsage> {
        ensure_valid_range(start, end)?;
        let employee = self.require_employee(employee_id)?;
        let cycle_days = employee.payroll_cycle_days();
        let (cycle_start, cycle_end) = cycle_bounds(start.date(), cycle_days.0, cycle_days.1);
        let existing = self.store.shifts_for_employee(
            employee_id,
            cycle_start.and_time(NaiveTime::MIN),
            cycle_end.and_time(NaiveTime::MIN) + Duration::days(1),
        )?;
        let ceiling = employee.monthly_ceiling(self.config.default_max_hours_per_month);
        check_monthly_limit(&existing, start, end, exclude_shift_id, cycle_days, ceiling)
    }

    /// Surcharge breakdown of an interval under an employee's agreement,
    /// without running the limit checks.
    pub fn duration_breakdown(
        &self,
        employee_id: &str,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> EngineResult<DurationBreakdown> {
        ensure_valid_range(start, end)?;
        let employee = self.require_employee(employee_id)?;
        let agreement = self.agreement_for(&employee)?;
        let split = compute_split(start, end, &agreement);
        Ok(DurationBreakdown {
            total_hours: split.total(),
            breakdown: split,
            agreement_code: agreement.code,
        })
    }

    /// Expands a contract's service patterns into vacancies for one month.
    ///
    /// Persists only the difference between each pattern's requirement and
    /// the non-canceled slots already present, so the operation is
    /// idempotent. Patterns referencing an unknown shift type are skipped
    /// with a warning rather than failing the whole expansion.
    pub fn generate_vacancies(
        &self,
        contract_id: &str,
        year: i32,
        month: u32,
    ) -> EngineResult<VacancyReport> {
        let days = month_days(year, month)?;
        let patterns = self.store.patterns_for_contract(contract_id)?;
        if patterns.is_empty() {
            return Ok(VacancyReport {
                created: 0,
                message: format!("no patterns defined for contract {contract_id}"),
            });
        }

        let month_from = days[0].and_time(NaiveTime::MIN);
        let month_to = days[days.len() - 1].and_time(NaiveTime::MIN) + Duration::days(1);

        let mut created: u32 = 0;
        for pattern in &patterns {
            let Some(shift_type) = self.store.shift_type_by_id(&pattern.shift_type_id)? else {
                warn!(
                    pattern_id = %pattern.id,
                    shift_type_id = %pattern.shift_type_id,
                    "pattern references unknown shift type, skipping"
                );
                continue;
            };

            let mut existing =
                self.store
                    .shifts_for_objective(&pattern.objective_id, month_from, month_to)?;

            for day in &days {
                if !pattern.applies_on(*day) {
                    continue;
                }
                let present = existing_slot_count(&existing, &shift_type.id, *day);
                let missing = (pattern.quantity_per_day as usize).saturating_sub(present);
                for _ in 0..missing {
                    let stored = self
                        .store
                        .insert_shift(vacancy_shift(pattern, &shift_type, *day))?;
                    existing.push(stored);
                    created += 1;
                }
            }
        }

        info!(
            contract_id = %contract_id,
            year,
            month,
            created,
            "pattern expansion finished"
        );
        Ok(VacancyReport {
            created,
            message: format!("created {created} vacancies for contract {contract_id} in {year}-{month:02}"),
        })
    }

    /// Seeds the built-in agreement rule table into the store.
    ///
    /// Codes that already resolve to an active agreement are left untouched.
    /// A failure to insert one agreement is logged and skipped so one bad
    /// row cannot abort the rest of the seeding.
    pub fn initialize_defaults(&self) -> EngineResult<SeedSummary> {
        let loader = RuleTableLoader::builtin()?;
        let mut created: u32 = 0;
        let mut existing: u32 = 0;

        for rule in loader.rules() {
            if self.store.agreement_by_code(&rule.code)?.is_some() {
                existing += 1;
                continue;
            }
            match self.store.insert_agreement(rule.clone()) {
                Ok(_) => created += 1,
                Err(error) => {
                    warn!(
                        agreement_code = %rule.code,
                        %error,
                        "failed to seed agreement, skipping"
                    );
                }
            }
        }

        let summary = SeedSummary { created, existing };
        info!(created, existing, "agreement seeding finished");
        Ok(summary)
    }

    fn require_employee(&self, employee_id: &str) -> EngineResult<Employee> {
        self.store
            .employee_by_id(employee_id)?
            .ok_or_else(|| EngineError::EmployeeNotFound {
                employee_id: employee_id.to_string(),
            })
    }
}

fn ensure_valid_range(start: NaiveDateTime, end: NaiveDateTime) -> EngineResult<()> {
    if end <= start {
        return Err(EngineError::InvalidTimeRange {
            message: format!("end {end} is not after start {start}"),
        });
    }
    Ok(())
}

/// The window of schedule the full pipeline needs: the union of the
/// proposal's ISO week and payroll cycle, extended to cover the proposal
/// itself.
fn schedule_window(
    start: NaiveDateTime,
    end: NaiveDateTime,
    cycle_days: (i32, i32),
) -> (NaiveDateTime, NaiveDateTime) {
    let (week_start, week_end) = iso_week_bounds(start);
    let (cycle_start, cycle_end) = cycle_bounds(start.date(), cycle_days.0, cycle_days.1);
    let cycle_from = cycle_start.and_time(NaiveTime::MIN);
    let cycle_to = cycle_end.and_time(NaiveTime::MIN) + Duration::days(1);

    let from = week_start.min(cycle_from).min(start);
    let to = week_end.max(cycle_to).max(end);
    (from, to)
}
