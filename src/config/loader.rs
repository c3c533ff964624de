//! Agreement rule-table loading.
//!
//! This module provides the [`RuleTableLoader`] for reading the static
//! agreement rule table, either from the copy embedded in the crate or from
//! a YAML file maintained by operations.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::LaborAgreement;

use super::types::RuleTable;

/// The rule table shipped with the crate.
const BUILTIN_RULE_TABLE: &str = include_str!("../../config/agreements.yaml");

/// Loads and provides access to the agreement rule table.
///
/// # Example
///
/// ```
/// use roster_engine::config::RuleTableLoader;
///
/// let loader = RuleTableLoader::builtin().unwrap();
/// assert!(loader.rules().iter().any(|a| a.code == "SUVICO"));
/// ```
#[derive(Debug, Clone)]
pub struct RuleTableLoader {
    table: RuleTable,
}

impl RuleTableLoader {
    /// Parses the rule table embedded in the crate.
    pub fn builtin() -> EngineResult<Self> {
        Self::parse(BUILTIN_RULE_TABLE, "<builtin>")
    }

    /// Loads a rule table from a YAML file.
    ///
    /// Operations can maintain a site-specific table; the file uses the same
    /// layout as the embedded `config/agreements.yaml`.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();
        let content = fs::read_to_string(path).map_err(|e| EngineError::RuleTableError {
            path: path_str.clone(),
            message: e.to_string(),
        })?;
        Self::parse(&content, &path_str)
    }

    fn parse(content: &str, source: &str) -> EngineResult<Self> {
        let table: RuleTable =
            serde_yaml::from_str(content).map_err(|e| EngineError::RuleTableError {
                path: source.to_string(),
                message: e.to_string(),
            })?;
        Ok(Self { table })
    }

    /// The agreements in the table, in catalog order.
    pub fn rules(&self) -> &[LaborAgreement] {
        &self.table.agreements
    }

    /// Looks up a rule by agreement code.
    pub fn rule_by_code(&self, code: &str) -> Option<&LaborAgreement> {
        self.table.agreements.iter().find(|a| a.code == code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_builtin_table_parses() {
        let loader = RuleTableLoader::builtin().unwrap();
        assert!(loader.rules().len() >= 2);
    }

    #[test]
    fn test_builtin_table_has_suvico_and_comercio() {
        let loader = RuleTableLoader::builtin().unwrap();
        let suvico = loader.rule_by_code("SUVICO").unwrap();
        assert_eq!(suvico.max_hours_weekly, Decimal::new(48, 0));
        assert!(loader.rule_by_code("COMERCIO").is_some());
    }

    #[test]
    fn test_builtin_rules_are_active() {
        let loader = RuleTableLoader::builtin().unwrap();
        assert!(loader.rules().iter().all(|a| a.is_active));
    }

    #[test]
    fn test_unknown_code_is_none() {
        let loader = RuleTableLoader::builtin().unwrap();
        assert!(loader.rule_by_code("UNKNOWN").is_none());
    }

    #[test]
    fn test_load_missing_file_fails() {
        let result = RuleTableLoader::load("/nonexistent/agreements.yaml");
        assert!(matches!(result, Err(EngineError::RuleTableError { .. })));
    }

    #[test]
    fn test_parse_rejects_malformed_yaml() {
        let result = RuleTableLoader::parse("agreements: [not a table", "<test>");
        assert!(matches!(result, Err(EngineError::RuleTableError { .. })));
    }
}
