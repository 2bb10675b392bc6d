//! Conversion of base-currency amounts into an employee's local currency.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::config::CurrencyTable;
use crate::error::{EngineError, EngineResult};

use super::out_of_range;

/// An amount converted into a local currency.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrencyConversion {
    /// The converted amount, unrounded.
    pub converted_amount: Decimal,
    /// The three letter code of the local currency.
    pub currency_code: String,
}

/// Converts an amount into the currency of the given country.
///
/// The country is matched case-insensitively against the table.
///
/// # Returns
///
/// Returns `CurrencyNotFound` when the table has no entry for the country;
/// no default rate is ever substituted. Returns `InvalidInput` when the
/// converted amount does not fit in a `Decimal`.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::currency_conversion;
/// use payroll_engine::config::{CurrencyRate, CurrencyTable};
/// use rust_decimal::Decimal;
///
/// let table = CurrencyTable::new(vec![CurrencyRate {
///     country: "Malaysia".to_string(),
///     currency_code: "MYR".to_string(),
///     rate_to_base: Decimal::new(32, 1),
/// }])
/// .unwrap();
///
/// let conversion = currency_conversion(Decimal::new(100, 0), "malaysia", &table).unwrap();
/// assert_eq!(conversion.converted_amount, Decimal::new(320, 0));
/// assert_eq!(conversion.currency_code, "MYR");
/// ```
pub fn currency_conversion(
    amount: Decimal,
    country: &str,
    currency_table: &CurrencyTable,
) -> EngineResult<CurrencyConversion> {
    let rate = currency_table
        .lookup(country)
        .ok_or_else(|| EngineError::CurrencyNotFound {
            country: country.to_string(),
        })?;

    let converted_amount = amount
        .checked_mul(rate.rate_to_base)
        .ok_or_else(|| out_of_range(amount))?;

    Ok(CurrencyConversion {
        converted_amount,
        currency_code: rate.currency_code.clone(),
    })
}
