//! Storage seam between the engine and its external collaborators.
//!
//! The engine is stateless per call: every validation or expansion request
//! reads a consistent snapshot through [`ScheduleStore`] and produces a
//! decision. [`MemoryStore`] is the in-process implementation used by tests
//! and small deployments; production callers adapt their document store to
//! the same trait.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use chrono::NaiveDateTime;
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    Absence, AbsenceStatus, Employee, LaborAgreement, ServicePattern, Shift, ShiftType,
};

/// Read and write operations the engine needs from the surrounding system.
///
/// All reads are snapshot reads; the only writes are inserting validated
/// shifts / generated vacancies and seeding agreements. Implementations must
/// assign a unique identifier on shift insert.
pub trait ScheduleStore: Send + Sync {
    /// Employee by identifier, or `None` if unknown.
    fn employee_by_id(&self, employee_id: &str) -> EngineResult<Option<Employee>>;

    /// Shifts for an employee whose interval intersects `[from, to)`.
    fn shifts_for_employee(
        &self,
        employee_id: &str,
        from: NaiveDateTime,
        to: NaiveDateTime,
    ) -> EngineResult<Vec<Shift>>;

    /// Shifts at an objective whose interval intersects `[from, to)`,
    /// vacancies included.
    fn shifts_for_objective(
        &self,
        objective_id: &str,
        from: NaiveDateTime,
        to: NaiveDateTime,
    ) -> EngineResult<Vec<Shift>>;

    /// Absences for an employee in any of the given statuses.
    fn absences_for_employee(
        &self,
        employee_id: &str,
        statuses: &[AbsenceStatus],
    ) -> EngineResult<Vec<Absence>>;

    /// Active agreement by code, or `None`.
    fn agreement_by_code(&self, code: &str) -> EngineResult<Option<LaborAgreement>>;

    /// All active agreements.
    fn active_agreements(&self) -> EngineResult<Vec<LaborAgreement>>;

    /// Active service patterns for a contract.
    fn patterns_for_contract(&self, contract_id: &str) -> EngineResult<Vec<ServicePattern>>;

    /// Shift type by identifier, or `None`.
    fn shift_type_by_id(&self, shift_type_id: &str) -> EngineResult<Option<ShiftType>>;

    /// Persists a shift, assigning its identifier. Returns the stored record.
    fn insert_shift(&self, shift: Shift) -> EngineResult<Shift>;

    /// Persists an agreement, assigning its identifier.
    fn insert_agreement(&self, agreement: LaborAgreement) -> EngineResult<LaborAgreement>;
}

/// In-memory [`ScheduleStore`] backed by `RwLock`'d maps.
///
/// Identifier assignment uses UUID v4, mirroring the unique-id-on-creation
/// contract of the production document store.
#[derive(Default)]
pub struct MemoryStore {
    employees: RwLock<HashMap<String, Employee>>,
    shifts: RwLock<HashMap<String, Shift>>,
    absences: RwLock<HashMap<String, Absence>>,
    agreements: RwLock<HashMap<String, LaborAgreement>>,
    patterns: RwLock<HashMap<String, ServicePattern>>,
    shift_types: RwLock<HashMap<String, ShiftType>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an employee record (test/fixture helper).
    pub fn add_employee(&self, employee: Employee) {
        self.employees
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(employee.id.clone(), employee);
    }

    /// Adds an absence record.
    pub fn add_absence(&self, absence: Absence) {
        self.absences
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(absence.id.clone(), absence);
    }

    /// Adds a service pattern.
    pub fn add_pattern(&self, pattern: ServicePattern) {
        self.patterns
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(pattern.id.clone(), pattern);
    }

    /// Adds a shift type.
    pub fn add_shift_type(&self, shift_type: ShiftType) {
        self.shift_types
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(shift_type.id.clone(), shift_type);
    }

    /// Number of stored shifts (test helper).
    pub fn shift_count(&self) -> usize {
        self.shifts.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// All stored shifts (test helper).
    pub fn all_shifts(&self) -> Vec<Shift> {
        self.shifts
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .cloned()
            .collect()
    }
}

impl ScheduleStore for MemoryStore {
    fn employee_by_id(&self, employee_id: &str) -> EngineResult<Option<Employee>> {
        Ok(self
            .employees
            .read()
            .map_err(lock_error)?
            .get(employee_id)
            .cloned())
    }

    fn shifts_for_employee(
        &self,
        employee_id: &str,
        from: NaiveDateTime,
        to: NaiveDateTime,
    ) -> EngineResult<Vec<Shift>> {
        Ok(self
            .shifts
            .read()
            .map_err(lock_error)?
            .values()
            .filter(|s| s.belongs_to(employee_id) && s.overlaps(from, to))
            .cloned()
            .collect())
    }

    fn shifts_for_objective(
        &self,
        objective_id: &str,
        from: NaiveDateTime,
        to: NaiveDateTime,
    ) -> EngineResult<Vec<Shift>> {
        Ok(self
            .shifts
            .read()
            .map_err(lock_error)?
            .values()
            .filter(|s| s.objective_id == objective_id && s.overlaps(from, to))
            .cloned()
            .collect())
    }

    fn absences_for_employee(
        &self,
        employee_id: &str,
        statuses: &[AbsenceStatus],
    ) -> EngineResult<Vec<Absence>> {
        Ok(self
            .absences
            .read()
            .map_err(lock_error)?
            .values()
            .filter(|a| a.employee_id == employee_id && statuses.contains(&a.status))
            .cloned()
            .collect())
    }

    fn agreement_by_code(&self, code: &str) -> EngineResult<Option<LaborAgreement>> {
        Ok(self
            .agreements
            .read()
            .map_err(lock_error)?
            .values()
            .find(|a| a.code == code && a.is_active)
            .cloned())
    }

    fn active_agreements(&self) -> EngineResult<Vec<LaborAgreement>> {
        Ok(self
            .agreements
            .read()
            .map_err(lock_error)?
            .values()
            .filter(|a| a.is_active)
            .cloned()
            .collect())
    }

    fn patterns_for_contract(&self, contract_id: &str) -> EngineResult<Vec<ServicePattern>> {
        Ok(self
            .patterns
            .read()
            .map_err(lock_error)?
            .values()
            .filter(|p| p.contract_id == contract_id && p.active)
            .cloned()
            .collect())
    }

    fn shift_type_by_id(&self, shift_type_id: &str) -> EngineResult<Option<ShiftType>> {
        Ok(self
            .shift_types
            .read()
            .map_err(lock_error)?
            .get(shift_type_id)
            .cloned())
    }

    fn insert_shift(&self, mut shift: Shift) -> EngineResult<Shift> {
        if shift.id.is_empty() {
            shift.id = Uuid::new_v4().to_string();
        }
        self.shifts
            .write()
            .map_err(lock_error)?
            .insert(shift.id.clone(), shift.clone());
        Ok(shift)
    }

    fn insert_agreement(&self, mut agreement: LaborAgreement) -> EngineResult<LaborAgreement> {
        if agreement.id.is_none() {
            agreement.id = Some(Uuid::new_v4().to_string());
        }
        self.agreements
            .write()
            .map_err(lock_error)?
            .insert(agreement.code.clone(), agreement.clone());
        Ok(agreement)
    }
}

fn lock_error<T>(_: std::sync::PoisonError<T>) -> EngineError {
    EngineError::Store {
        message: "memory store lock poisoned".to_string(),
    }
}
