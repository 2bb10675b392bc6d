//! Superannuation contribution calculation.

use rust_decimal::Decimal;

/// Returns the superannuation guarantee rate.
///
/// The rate is 0.095 (9.5% of gross salary).
pub fn superannuation_rate() -> Decimal {
    Decimal::new(95, 3)
}

/// Calculates the superannuation contribution on a gross salary.
///
/// The result is not rounded; rounding happens when the payslip is formatted.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_superannuation;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let amount = calculate_superannuation(Decimal::from_str("80000.23").unwrap());
/// assert_eq!(amount, Decimal::from_str("7600.02185").unwrap());
/// ```
pub fn calculate_superannuation(gross_salary: Decimal) -> Decimal {
    gross_salary * superannuation_rate()
}
