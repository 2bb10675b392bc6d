//! Configuration types for payroll calculation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files, together with the
//! validated tables the payroll engine computes against.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::Employee;

/// Metadata about the payroll schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollMetadata {
    /// The human-readable name of the schedule.
    pub name: String,
    /// The jurisdiction whose tax rules the schedule models.
    pub jurisdiction: String,
    /// The currency salaries are recorded in.
    pub base_currency: String,
    /// The version or effective date of the schedule.
    pub version: String,
}

/// A single marginal tax bracket.
///
/// The rate applies only to the portion of income that falls between
/// `min_income` and `max_income`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// Income above which this bracket starts to apply.
    pub min_income: Decimal,
    /// Upper bound of the bracket, or `None` for the top bracket.
    #[serde(default)]
    pub max_income: Option<Decimal>,
    /// Marginal rate as a percentage (19.0 means 19%).
    pub rate_percent: Decimal,
}

impl TaxBracket {
    /// Returns true if this is the unbounded top bracket.
    pub fn is_unbounded(&self) -> bool {
        self.max_income.is_none()
    }
}

/// A validated marginal tax schedule, sorted by `min_income`.
///
/// # Example
///
/// ```
/// use payroll_engine::config::{TaxBracket, TaxTable};
/// use rust_decimal::Decimal;
///
/// // Brackets may be supplied in any order.
/// let table = TaxTable::new(vec![
///     TaxBracket {
///         min_income: Decimal::new(18201, 0),
///         max_income: None,
///         rate_percent: Decimal::new(19, 0),
///     },
///     TaxBracket {
///         min_income: Decimal::ZERO,
///         max_income: Some(Decimal::new(18200, 0)),
///         rate_percent: Decimal::ZERO,
///     },
/// ])
/// .unwrap();
///
/// assert_eq!(table.brackets()[0].min_income, Decimal::ZERO);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TaxTable {
    brackets: Vec<TaxBracket>,
}

impl TaxTable {
    /// Sorts and validates a set of brackets.
    ///
    /// # Returns
    ///
    /// Returns `InvalidTaxTable` if:
    /// - No brackets are given
    /// - A bracket has a negative bound or rate, or `max_income <= min_income`
    /// - There is not exactly one unbounded bracket, or it is not the highest
    /// - Two brackets overlap
    pub fn new(brackets: Vec<TaxBracket>) -> EngineResult<Self> {
        if brackets.is_empty() {
            return Err(invalid_tax_table("at least one bracket is required"));
        }

        let mut brackets = brackets;
        brackets.sort_by(|a, b| a.min_income.cmp(&b.min_income));

        for bracket in &brackets {
            if bracket.min_income < Decimal::ZERO {
                return Err(invalid_tax_table(format!(
                    "bracket starting at {} has a negative minimum income",
                    bracket.min_income
                )));
            }
            if bracket.rate_percent < Decimal::ZERO {
                return Err(invalid_tax_table(format!(
                    "bracket starting at {} has a negative rate",
                    bracket.min_income
                )));
            }
            if let Some(max) = bracket.max_income {
                if max <= bracket.min_income {
                    return Err(invalid_tax_table(format!(
                        "bracket starting at {} ends at {}, which is not above its start",
                        bracket.min_income, max
                    )));
                }
            }
        }

        let unbounded = brackets.iter().filter(|b| b.is_unbounded()).count();
        if unbounded != 1 {
            return Err(invalid_tax_table(format!(
                "exactly one unbounded bracket is required, found {}",
                unbounded
            )));
        }
        if brackets.last().is_some_and(|b| !b.is_unbounded()) {
            return Err(invalid_tax_table(
                "the unbounded bracket must be the highest bracket",
            ));
        }

        for pair in brackets.windows(2) {
            let (lower, upper) = (&pair[0], &pair[1]);
            if let Some(lower_max) = lower.max_income {
                if upper.min_income <= lower_max {
                    return Err(invalid_tax_table(format!(
                        "bracket starting at {} overlaps bracket ending at {}",
                        upper.min_income, lower_max
                    )));
                }
            }
        }

        Ok(Self { brackets })
    }

    /// Returns the brackets in ascending `min_income` order.
    pub fn brackets(&self) -> &[TaxBracket] {
        &self.brackets
    }
}

fn invalid_tax_table(message: impl Into<String>) -> EngineError {
    EngineError::InvalidTaxTable {
        message: message.into(),
    }
}

/// Conversion rate from the base currency into a country's currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyRate {
    /// The country name, matched case-insensitively.
    pub country: String,
    /// ISO-style three letter currency code (e.g. "AUD").
    pub currency_code: String,
    /// Units of local currency per unit of base currency.
    pub rate_to_base: Decimal,
}

/// A validated currency conversion table keyed by country.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CurrencyTable {
    rates: Vec<CurrencyRate>,
}

impl CurrencyTable {
    /// Validates a set of currency rates.
    ///
    /// Every currency code must be three uppercase ASCII letters, every rate
    /// strictly positive, and no country may appear twice (ignoring case).
    pub fn new(rates: Vec<CurrencyRate>) -> EngineResult<Self> {
        for (index, rate) in rates.iter().enumerate() {
            if rate.country.trim().is_empty() {
                return Err(invalid_currency_table(format!(
                    "entry {} has an empty country",
                    index
                )));
            }
            if rate.currency_code.len() != 3
                || !rate.currency_code.chars().all(|c| c.is_ascii_uppercase())
            {
                return Err(invalid_currency_table(format!(
                    "'{}' has malformed currency code '{}'",
                    rate.country, rate.currency_code
                )));
            }
            if rate.rate_to_base <= Decimal::ZERO {
                return Err(invalid_currency_table(format!(
                    "'{}' has non-positive rate {}",
                    rate.country, rate.rate_to_base
                )));
            }
            let key = rate.country.to_lowercase();
            if rates[..index]
                .iter()
                .any(|other| other.country.to_lowercase() == key)
            {
                return Err(invalid_currency_table(format!(
                    "country '{}' is listed more than once",
                    rate.country
                )));
            }
        }

        Ok(Self { rates })
    }

    /// Finds the rate for a country, ignoring case.
    pub fn lookup(&self, country: &str) -> Option<&CurrencyRate> {
        let key = country.to_lowercase();
        self.rates.iter().find(|r| r.country.to_lowercase() == key)
    }

    /// Returns all rates in configuration order.
    pub fn rates(&self) -> &[CurrencyRate] {
        &self.rates
    }

    /// Replaces the rate of a currency, matched by code.
    ///
    /// The code is trimmed and uppercased before matching. Every country
    /// using the currency gets the new rate.
    ///
    /// # Returns
    ///
    /// Returns the first updated entry, or an error if:
    /// - The code is empty or contains anything but ASCII letters (`InvalidInput`)
    /// - The rate is zero or negative (`InvalidInput`)
    /// - No entry uses the code (`CurrencyCodeNotFound`)
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::config::{CurrencyRate, CurrencyTable};
    /// use rust_decimal::Decimal;
    ///
    /// let mut table = CurrencyTable::new(vec![CurrencyRate {
    ///     country: "Hong Kong".to_string(),
    ///     currency_code: "HKD".to_string(),
    ///     rate_to_base: Decimal::new(56, 1),
    /// }])
    /// .unwrap();
    ///
    /// let updated = table.update_rate("hkd", Decimal::new(52, 1)).unwrap();
    /// assert_eq!(updated.rate_to_base, Decimal::new(52, 1));
    /// ```
    pub fn update_rate(
        &mut self,
        currency_code: &str,
        rate_to_base: Decimal,
    ) -> EngineResult<&CurrencyRate> {
        let code = currency_code.trim().to_uppercase();
        if code.is_empty() || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(EngineError::InvalidInput {
                input: currency_code.to_string(),
                message: "currency code must contain only letters".to_string(),
            });
        }
        if rate_to_base <= Decimal::ZERO {
            return Err(EngineError::InvalidInput {
                input: rate_to_base.to_string(),
                message: "rate must be greater than zero".to_string(),
            });
        }

        let mut first = None;
        for (index, entry) in self.rates.iter_mut().enumerate() {
            if entry.currency_code == code {
                entry.rate_to_base = rate_to_base;
                first.get_or_insert(index);
            }
        }

        match first {
            Some(index) => Ok(&self.rates[index]),
            None => Err(EngineError::CurrencyCodeNotFound {
                currency_code: code,
            }),
        }
    }
}

fn invalid_currency_table(message: impl Into<String>) -> EngineError {
    EngineError::InvalidCurrencyTable {
        message: message.into(),
    }
}

/// Tax brackets configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct TaxBracketsFile {
    /// The brackets, in any order.
    pub brackets: Vec<TaxBracket>,
}

/// Currencies configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrenciesFile {
    /// Conversion rates by country.
    pub currencies: Vec<CurrencyRate>,
}

/// Employees configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct EmployeesFile {
    /// The employee records.
    pub employees: Vec<Employee>,
}

/// The tables the payroll engine computes against.
///
/// This struct aggregates the validated tax and currency tables so they can
/// be handed to the calculation functions as one explicit context.
#[derive(Debug, Clone)]
pub struct PayrollConfig {
    /// Schedule metadata.
    metadata: PayrollMetadata,
    /// Marginal tax schedule.
    tax_table: TaxTable,
    /// Currency conversion rates.
    currency_table: CurrencyTable,
}

impl PayrollConfig {
    /// Creates a new PayrollConfig from its component parts.
    pub fn new(
        metadata: PayrollMetadata,
        tax_table: TaxTable,
        currency_table: CurrencyTable,
    ) -> Self {
        Self {
            metadata,
            tax_table,
            currency_table,
        }
    }

    /// Returns the schedule metadata.
    pub fn metadata(&self) -> &PayrollMetadata {
        &self.metadata
    }

    /// Returns the tax table.
    pub fn tax_table(&self) -> &TaxTable {
        &self.tax_table
    }

    /// Returns the currency table.
    pub fn currency_table(&self) -> &CurrencyTable {
        &self.currency_table
    }

    /// Returns the currency table for rate updates.
    pub fn currency_table_mut(&mut self) -> &mut CurrencyTable {
        &mut self.currency_table
    }
}
