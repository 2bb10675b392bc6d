//! Configuration loading and management for the Payroll Engine.
//!
//! This module provides functionality to load payroll configuration from YAML
//! files, including the marginal tax schedule, currency conversion rates and
//! the employee registry.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/victoria").unwrap();
//! println!("Loaded schedule: {}", config.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    CurrenciesFile, CurrencyRate, CurrencyTable, EmployeesFile, PayrollConfig, PayrollMetadata,
    TaxBracket, TaxBracketsFile, TaxTable,
};
