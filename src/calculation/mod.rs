//! Calculation logic for the Payroll Engine.
//!
//! This module contains the pure payroll computations: marginal income tax
//! over a bracket schedule, superannuation on gross salary, conversion of net
//! salary into local currency, and the combined, formatted salary figures
//! that make up a payslip.

use rust_decimal::Decimal;

use crate::error::EngineError;

mod currency_conversion;
mod income_tax;
mod salary;
mod superannuation;

pub use currency_conversion::{CurrencyConversion, currency_conversion};
pub use income_tax::{BracketPortion, TaxCalculation, calculate_tax, calculate_tax_breakdown};
pub use salary::{FormattedSalary, SalaryBreakdown, calculate_and_format_salary, calculate_salary};
pub use superannuation::{calculate_superannuation, superannuation_rate};

/// Error for amounts whose products no longer fit in a `Decimal`.
fn out_of_range(amount: Decimal) -> EngineError {
    EngineError::InvalidInput {
        input: amount.to_string(),
        message: "amount out of range".to_string(),
    }
}
