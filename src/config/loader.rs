//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll
//! tables and the employee registry from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::Employee;
use crate::registry::EmployeeRegistry;

use super::types::{
    CurrenciesFile, CurrencyTable, EmployeesFile, PayrollConfig, PayrollMetadata,
    TaxBracketsFile, TaxTable,
};

/// Loads and provides access to payroll configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory,
/// validates every table, and hands out the resulting [`PayrollConfig`]
/// and [`EmployeeRegistry`].
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/victoria/
/// ├── payroll.yaml        # Schedule metadata
/// ├── tax_brackets.yaml   # Marginal tax brackets
/// ├── currencies.yaml     # Currency conversion rates by country
/// └── employees.yaml      # Employee registry
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/victoria").unwrap();
/// println!("Loaded schedule: {}", loader.metadata().name);
/// println!("Employees: {}", loader.registry().len());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PayrollConfig,
    registry: EmployeeRegistry,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/victoria")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - The tax, currency or employee tables break their invariants
    ///
    /// # Example
    ///
    /// ```no_run
    /// use payroll_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/victoria")?;
    /// # Ok::<(), payroll_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<PayrollMetadata>(&path.join("payroll.yaml"))?;

        let brackets = Self::load_yaml::<TaxBracketsFile>(&path.join("tax_brackets.yaml"))?;
        let tax_table = TaxTable::new(brackets.brackets)?;

        let currencies = Self::load_yaml::<CurrenciesFile>(&path.join("currencies.yaml"))?;
        let currency_table = CurrencyTable::new(currencies.currencies)?;

        let employees = Self::load_yaml::<EmployeesFile>(&path.join("employees.yaml"))?;
        let registry = EmployeeRegistry::new(employees.employees)?;

        debug!(
            schedule = %metadata.name,
            brackets = tax_table.brackets().len(),
            currencies = currency_table.rates().len(),
            employees = registry.len(),
            "Payroll configuration loaded"
        );

        Ok(Self {
            config: PayrollConfig::new(metadata, tax_table, currency_table),
            registry,
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the payroll tables.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Returns the schedule metadata.
    pub fn metadata(&self) -> &PayrollMetadata {
        self.config.metadata()
    }

    /// Returns the employee registry.
    pub fn registry(&self) -> &EmployeeRegistry {
        &self.registry
    }

    /// Looks up a single employee record.
    pub fn employee(&self, employee_id: u32) -> EngineResult<&Employee> {
        self.registry.find(employee_id)
    }

    /// Splits the loader into its tables and registry.
    pub fn into_parts(self) -> (PayrollConfig, EmployeeRegistry) {
        (self.config, self.registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config/victoria"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.metadata().jurisdiction, "Victoria, Australia");
        assert_eq!(loader.metadata().base_currency, "AUD");
    }

    #[test]
    fn test_tax_brackets_loaded_sorted() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let brackets = loader.config().tax_table().brackets();

        assert_eq!(brackets.len(), 5);
        assert_eq!(brackets[0].min_income, dec("0"));
        assert_eq!(brackets[0].max_income, Some(dec("18200")));
        assert_eq!(brackets[1].rate_percent, dec("19.0"));
        assert_eq!(brackets[4].min_income, dec("180001"));
        assert!(brackets[4].is_unbounded());
    }

    #[test]
    fn test_currencies_loaded() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let currencies = loader.config().currency_table();

        assert_eq!(currencies.rates().len(), 6);
        let vietnam = currencies.lookup("vietnam").unwrap();
        assert_eq!(vietnam.currency_code, "VND");
        assert_eq!(vietnam.rate_to_base, dec("16000.0"));
    }

    #[test]
    fn test_employees_loaded() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        assert_eq!(loader.registry().len(), 21);
        let employee = loader.employee(100001).unwrap();
        assert_eq!(employee.full_name, "John Doe");
        assert_eq!(employee.base_yearly_salary, dec("80000.23"));
        assert_eq!(employee.country, "Australia");
    }

    #[test]
    fn test_unknown_employee_returns_error() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        match loader.employee(999999) {
            Err(EngineError::EmployeeNotFound { employee_id }) => {
                assert_eq!(employee_id, 999999);
            }
            other => panic!("Expected EmployeeNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("payroll.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_into_parts_keeps_tables() {
        let (config, registry) = ConfigLoader::load(config_path()).unwrap().into_parts();
        assert_eq!(config.tax_table().brackets().len(), 5);
        assert!(registry.get(100000).is_some());
    }
}
