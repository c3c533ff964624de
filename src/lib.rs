//! # Roster Engine
//!
//! Shift assignment validation and labor-compliance engine for security-guard
//! workforce scheduling.
//!
//! Before a scheduler assigns a guard to a shift, the engine answers one
//! question: is this assignment legal and safe to persist? It checks the
//! proposal against the guard's existing schedule (overlaps), their approved
//! and pending absences, and the hour ceilings of their labor agreement
//! (weekly and per payroll cycle), then apportions the shift's hours into
//! surcharge categories for payroll. It also expands a contract's recurring
//! service patterns into concrete vacancy shifts for a month, and validates
//! on-site check-ins against a geofence.
//!
//! ## Example
//!
//! ```
//! use chrono::NaiveDateTime;
//! use roster_engine::engine::Engine;
//! use roster_engine::models::Employee;
//! use roster_engine::store::MemoryStore;
//!
//! let store = MemoryStore::new();
//! store.add_employee(Employee {
//!     id: "emp_001".to_string(),
//!     name: "Carlos Medina".to_string(),
//!     labor_agreement_code: Some("SUVICO".to_string()),
//!     max_hours_per_month: None,
//!     payroll_cycle_start_day: None,
//!     payroll_cycle_end_day: None,
//! });
//!
//! let engine = Engine::new(store);
//! engine.initialize_defaults().unwrap();
//!
//! let start = NaiveDateTime::parse_from_str("2026-03-09 08:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
//! let end = NaiveDateTime::parse_from_str("2026-03-09 16:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
//!
//! let breakdown = engine.validate_assignment("emp_001", start, end, None).unwrap();
//! assert_eq!(breakdown.agreement_code, "SUVICO");
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod engine;
pub mod error;
pub mod expansion;
pub mod geofence;
pub mod models;
pub mod store;
pub mod validation;

pub use engine::Engine;
pub use error::{EngineError, EngineResult};
