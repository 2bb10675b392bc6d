//! Combined salary calculation.
//!
//! This module ties income tax, superannuation and currency conversion
//! together into the figures printed on a payslip.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::PayrollConfig;
use crate::error::{EngineError, EngineResult};
use crate::formatting::format_money;

use super::{calculate_superannuation, calculate_tax, currency_conversion};

/// Numeric salary figures for one gross salary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalaryBreakdown {
    /// The gross salary the figures were computed from.
    pub gross_salary: Decimal,
    /// Income tax, rounded to cents.
    pub tax: Decimal,
    /// `gross_salary - tax`, exactly.
    pub net_salary: Decimal,
    /// Superannuation on the gross salary, unrounded.
    pub superannuation: Decimal,
    /// Net salary in local currency, unrounded.
    pub converted_net_salary: Decimal,
    /// Local currency code.
    pub currency_code: String,
}

impl SalaryBreakdown {
    /// Formats every amount with two decimal places.
    pub fn formatted(&self) -> FormattedSalary {
        FormattedSalary {
            tax: format_money(self.tax),
            superannuation: format_money(self.superannuation),
            net_salary: format_money(self.net_salary),
            converted_salary: format_money(self.converted_net_salary),
            currency_code: self.currency_code.clone(),
        }
    }
}

/// Salary figures as two-decimal strings, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedSalary {
    /// Income tax.
    pub tax: String,
    /// Superannuation contribution.
    pub superannuation: String,
    /// Net salary in the base currency.
    pub net_salary: String,
    /// Net salary in local currency, without the currency code.
    pub converted_salary: String,
    /// Local currency code.
    pub currency_code: String,
}

impl FormattedSalary {
    /// Returns the converted net salary as `"<code> <amount>"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::calculation::FormattedSalary;
    ///
    /// let formatted = FormattedSalary {
    ///     tax: "16466.56".to_string(),
    ///     superannuation: "7600.02".to_string(),
    ///     net_salary: "63533.67".to_string(),
    ///     converted_salary: "63533.67".to_string(),
    ///     currency_code: "AUD".to_string(),
    /// };
    /// assert_eq!(formatted.converted_display(), "AUD 63533.67");
    /// ```
    pub fn converted_display(&self) -> String {
        format!("{} {}", self.currency_code, self.converted_salary)
    }
}

/// Calculates tax, net salary, superannuation and converted net salary.
///
/// Net salary, not gross, is the amount converted into local currency.
///
/// # Returns
///
/// Returns an error if:
/// - The gross salary is negative (`InvalidInput`)
/// - The figures overflow a `Decimal` (`InvalidInput`)
/// - The country has no conversion rate (`CurrencyNotFound`)
pub fn calculate_salary(
    gross_salary: Decimal,
    country: &str,
    config: &PayrollConfig,
) -> EngineResult<SalaryBreakdown> {
    if gross_salary < Decimal::ZERO {
        return Err(EngineError::InvalidInput {
            input: gross_salary.to_string(),
            message: "gross salary cannot be negative".to_string(),
        });
    }

    let tax = calculate_tax(gross_salary, config.tax_table())?;
    let net_salary = gross_salary - tax;
    let superannuation = calculate_superannuation(gross_salary);
    let conversion = currency_conversion(net_salary, country, config.currency_table())?;

    Ok(SalaryBreakdown {
        gross_salary,
        tax,
        net_salary,
        superannuation,
        converted_net_salary: conversion.converted_amount,
        currency_code: conversion.currency_code,
    })
}

/// Calculates the salary figures and formats them with two decimal places.
///
/// # Examples
///
/// ```no_run
/// use payroll_engine::calculation::calculate_and_format_salary;
/// use payroll_engine::config::ConfigLoader;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let loader = ConfigLoader::load("./config/victoria")?;
/// let gross = Decimal::from_str("80000.23").unwrap();
/// let formatted = calculate_and_format_salary(gross, "Australia", loader.config())?;
/// assert_eq!(formatted.converted_display(), "AUD 63533.67");
/// # Ok::<(), payroll_engine::error::EngineError>(())
/// ```
pub fn calculate_and_format_salary(
    gross_salary: Decimal,
    country: &str,
    config: &PayrollConfig,
) -> EngineResult<FormattedSalary> {
    calculate_salary(gross_salary, country, config).map(|breakdown| breakdown.formatted())
}
