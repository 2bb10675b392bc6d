//! Marginal income tax calculation.
//!
//! Tax is accrued bracket by bracket: each bracket's rate applies only to the
//! part of the salary that falls inside that bracket.

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use crate::config::TaxTable;
use crate::error::EngineResult;
use crate::formatting::round_money;

use super::out_of_range;

/// The tax accrued inside a single bracket.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BracketPortion {
    /// Lower bound of the bracket.
    pub min_income: Decimal,
    /// Upper bound of the bracket, `None` for the top bracket.
    pub max_income: Option<Decimal>,
    /// Marginal rate as a percentage.
    pub rate_percent: Decimal,
    /// The part of the salary taxed at this rate.
    pub taxable_amount: Decimal,
    /// Unrounded tax accrued in this bracket.
    pub tax: Decimal,
}

/// The result of a marginal tax calculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaxCalculation {
    /// The salary the tax was computed on.
    pub gross_salary: Decimal,
    /// Total tax, rounded to cents.
    pub tax: Decimal,
    /// The brackets the salary reached, lowest first.
    pub portions: Vec<BracketPortion>,
}

/// Calculates marginal income tax and records how each bracket contributed.
///
/// Brackets are walked in ascending order. A bracket contributes only when the
/// salary exceeds its `min_income`; if the salary also exceeds its
/// `max_income` the full bracket width is taxed and the walk continues,
/// otherwise the remainder above `min_income` is taxed and the walk stops.
///
/// # Returns
///
/// Returns `InvalidInput` if the salary is so large that the accrued tax
/// no longer fits in a `Decimal`.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_tax_breakdown;
/// use payroll_engine::config::{TaxBracket, TaxTable};
/// use rust_decimal::Decimal;
///
/// let table = TaxTable::new(vec![
///     TaxBracket {
///         min_income: Decimal::ZERO,
///         max_income: Some(Decimal::new(18200, 0)),
///         rate_percent: Decimal::ZERO,
///     },
///     TaxBracket {
///         min_income: Decimal::new(18201, 0),
///         max_income: None,
///         rate_percent: Decimal::new(19, 0),
///     },
/// ])
/// .unwrap();
///
/// let result = calculate_tax_breakdown(Decimal::new(28201, 0), &table).unwrap();
/// assert_eq!(result.tax, Decimal::new(190000, 2));
/// assert_eq!(result.portions.len(), 2);
/// ```
pub fn calculate_tax_breakdown(
    gross_salary: Decimal,
    tax_table: &TaxTable,
) -> EngineResult<TaxCalculation> {
    let mut portions = Vec::new();
    let mut total = Decimal::ZERO;

    for bracket in tax_table.brackets() {
        if gross_salary <= bracket.min_income {
            break;
        }

        let (taxable_amount, reached_top) = match bracket.max_income {
            Some(max) if gross_salary > max => (max - bracket.min_income, false),
            _ => (gross_salary - bracket.min_income, true),
        };
        let tax = taxable_amount
            .checked_mul(bracket.rate_percent)
            .map(|amount| amount / Decimal::ONE_HUNDRED)
            .ok_or_else(|| out_of_range(gross_salary))?;
        total = total
            .checked_add(tax)
            .ok_or_else(|| out_of_range(gross_salary))?;

        debug!(
            min_income = %bracket.min_income,
            rate_percent = %bracket.rate_percent,
            taxable_amount = %taxable_amount,
            tax = %tax,
            "Bracket applied"
        );

        portions.push(BracketPortion {
            min_income: bracket.min_income,
            max_income: bracket.max_income,
            rate_percent: bracket.rate_percent,
            taxable_amount,
            tax,
        });

        if reached_top {
            break;
        }
    }

    Ok(TaxCalculation {
        gross_salary,
        tax: round_money(total).abs(),
        portions,
    })
}

/// Calculates marginal income tax on a gross salary, rounded to cents.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_tax;
/// use payroll_engine::config::{TaxBracket, TaxTable};
/// use rust_decimal::Decimal;
///
/// let table = TaxTable::new(vec![TaxBracket {
///     min_income: Decimal::ZERO,
///     max_income: None,
///     rate_percent: Decimal::new(10, 0),
/// }])
/// .unwrap();
///
/// assert_eq!(
///     calculate_tax(Decimal::new(1000, 0), &table).unwrap(),
///     Decimal::new(10000, 2)
/// );
/// ```
pub fn calculate_tax(gross_salary: Decimal, tax_table: &TaxTable) -> EngineResult<Decimal> {
    calculate_tax_breakdown(gross_salary, tax_table).map(|result| result.tax)
}
