//! Employee model.
//!
//! Employee records are owned by HR management and read-only to the engine.
//! Several fields arrive optional or loosely typed from the upstream document
//! store; accessors apply the configured defaults so business logic never
//! sees a missing value.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

/// Represents an employee subject to assignment validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Key into the labor-agreement catalog (e.g. "SUVICO", "COMERCIO").
    #[serde(default)]
    pub labor_agreement_code: Option<String>,
    /// Monthly hour ceiling. Upstream sometimes stores this as a string or
    /// garbage; anything non-numeric deserializes to `None`.
    #[serde(default, deserialize_with = "lenient_decimal_opt")]
    pub max_hours_per_month: Option<Decimal>,
    /// First day of the employee's payroll cycle (1-31).
    #[serde(default)]
    pub payroll_cycle_start_day: Option<i32>,
    /// Last day of the payroll cycle (1-31, or 0 for "last day of month").
    #[serde(default)]
    pub payroll_cycle_end_day: Option<i32>,
}

impl Employee {
    /// The employee's agreement code, or `default_code` when unset.
    pub fn agreement_code<'a>(&'a self, default_code: &'a str) -> &'a str {
        self.labor_agreement_code
            .as_deref()
            .filter(|code| !code.is_empty())
            .unwrap_or(default_code)
    }

    /// The employee's monthly hour ceiling, or `default` when unset.
    pub fn monthly_ceiling(&self, default: Decimal) -> Decimal {
        self.max_hours_per_month.unwrap_or(default)
    }

    /// The payroll cycle's (start day, end day), defaulting to the calendar
    /// month (`(1, 0)`).
    pub fn payroll_cycle_days(&self) -> (i32, i32) {
        (
            self.payroll_cycle_start_day.unwrap_or(1),
            self.payroll_cycle_end_day.unwrap_or(0),
        )
    }
}

/// Tolerates numbers, numeric strings, and garbage for an optional Decimal.
///
/// Upstream HR tooling has been observed writing `"176"`, `176`, `176.0` and
/// the occasional empty string into the same field.
fn lenient_decimal_opt<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(Decimal),
        Text(String),
        Other(serde::de::IgnoredAny),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Num(d)) => Some(d),
        Some(Raw::Text(s)) => Decimal::from_str(s.trim()).ok(),
        Some(Raw::Other(_)) | None => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn base_employee() -> Employee {
        Employee {
            id: "emp_001".to_string(),
            name: "Carlos Medina".to_string(),
            labor_agreement_code: Some("SUVICO".to_string()),
            max_hours_per_month: Some(Decimal::new(176, 0)),
            payroll_cycle_start_day: None,
            payroll_cycle_end_day: None,
        }
    }

    #[test]
    fn test_agreement_code_uses_own_code() {
        let employee = base_employee();
        assert_eq!(employee.agreement_code("SUVICO"), "SUVICO");
    }

    #[test]
    fn test_agreement_code_falls_back_when_unset() {
        let mut employee = base_employee();
        employee.labor_agreement_code = None;
        assert_eq!(employee.agreement_code("SUVICO"), "SUVICO");

        employee.labor_agreement_code = Some(String::new());
        assert_eq!(employee.agreement_code("SUVICO"), "SUVICO");
    }

    #[test]
    fn test_monthly_ceiling_default() {
        let mut employee = base_employee();
        employee.max_hours_per_month = None;
        assert_eq!(
            employee.monthly_ceiling(Decimal::new(176, 0)),
            Decimal::new(176, 0)
        );
    }

    #[test]
    fn test_payroll_cycle_defaults_to_calendar_month() {
        let employee = base_employee();
        assert_eq!(employee.payroll_cycle_days(), (1, 0));
    }

    #[test]
    fn test_payroll_cycle_spanning_month_boundary() {
        let mut employee = base_employee();
        employee.payroll_cycle_start_day = Some(21);
        employee.payroll_cycle_end_day = Some(20);
        assert_eq!(employee.payroll_cycle_days(), (21, 20));
    }

    #[test]
    fn test_deserialize_numeric_max_hours() {
        let employee: Employee = serde_json::from_value(json!({
            "id": "emp_001",
            "name": "Carlos Medina",
            "max_hours_per_month": 160
        }))
        .unwrap();
        assert_eq!(employee.max_hours_per_month, Some(Decimal::new(160, 0)));
    }

    #[test]
    fn test_deserialize_string_max_hours() {
        let employee: Employee = serde_json::from_value(json!({
            "id": "emp_001",
            "name": "Carlos Medina",
            "max_hours_per_month": "176.5"
        }))
        .unwrap();
        assert_eq!(employee.max_hours_per_month, Some(Decimal::new(1765, 1)));
    }

    #[test]
    fn test_deserialize_garbage_max_hours_becomes_none() {
        for garbage in [json!("many"), json!(true), json!([1])] {
            let employee: Employee = serde_json::from_value(json!({
                "id": "emp_001",
                "name": "Carlos Medina",
                "max_hours_per_month": garbage
            }))
            .unwrap();
            assert_eq!(employee.max_hours_per_month, None);
        }
    }

    #[test]
    fn test_deserialize_minimal_record() {
        let employee: Employee = serde_json::from_value(json!({
            "id": "emp_001",
            "name": "Carlos Medina"
        }))
        .unwrap();
        assert!(employee.labor_agreement_code.is_none());
        assert!(employee.max_hours_per_month.is_none());
        assert_eq!(employee.payroll_cycle_days(), (1, 0));
    }
}
