//! Error types for the Payroll Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading payroll tables
//! and producing payslips.

use thiserror::Error;

/// The main error type for the Payroll Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::EmployeeNotFound { employee_id: 999999 };
/// assert_eq!(error.to_string(), "Employee not found: 999999");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Caller input could not be interpreted (e.g. a non-numeric employee ID).
    #[error("Invalid input '{input}': {message}")]
    InvalidInput {
        /// The raw input that was rejected.
        input: String,
        /// Why the input was rejected.
        message: String,
    },

    /// No employee with the given ID exists in the registry.
    #[error("Employee not found: {employee_id}")]
    EmployeeNotFound {
        /// The employee ID that was looked up.
        employee_id: u32,
    },

    /// The currency table has no entry for the given country.
    #[error("No currency conversion rate for country '{country}'")]
    CurrencyNotFound {
        /// The country that was looked up.
        country: String,
    },

    /// The currency table has no entry with the given currency code.
    #[error("Currency code not found: {currency_code}")]
    CurrencyCodeNotFound {
        /// The currency code that was looked up.
        currency_code: String,
    },

    /// No payslip with the given ID exists in the store.
    #[error("Payslip not found: {id}")]
    PayslipNotFound {
        /// The payslip ID that was looked up.
        id: u64,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The tax bracket schedule breaks one of its invariants.
    #[error("Invalid tax table: {message}")]
    InvalidTaxTable {
        /// A description of the violated invariant.
        message: String,
    },

    /// The currency table breaks one of its invariants.
    #[error("Invalid currency table: {message}")]
    InvalidCurrencyTable {
        /// A description of the violated invariant.
        message: String,
    },

    /// An employee record was invalid or contained inconsistent data.
    #[error("Invalid employee {employee_id} field '{field}': {message}")]
    InvalidEmployee {
        /// The ID of the offending employee record.
        employee_id: u32,
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
