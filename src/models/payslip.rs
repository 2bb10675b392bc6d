//! Payslip models.
//!
//! This module contains the [`Payslip`] record produced by the payslip
//! service and the [`PayslipId`] under which the store keeps it.

use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Identifier of a payslip within the payslip store.
///
/// Ids are handed out by the store in strictly increasing order, starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PayslipId(pub u64);

impl fmt::Display for PayslipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A computed payslip for one employee.
///
/// Monetary amounts are in the base currency and carry exactly two decimal
/// places, except `gross_salary` which is the employee's salary as recorded.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{Payslip, PayslipId};
/// use rust_decimal::Decimal;
/// use chrono::Utc;
///
/// let payslip = Payslip {
///     id: PayslipId(1),
///     employee_id: 100001,
///     full_name: "John Doe".to_string(),
///     department: "IT Department".to_string(),
///     title: "System Administrator".to_string(),
///     gross_salary: Decimal::new(8000023, 2),
///     tax: Decimal::new(1646656, 2),
///     net_salary: Decimal::new(6353367, 2),
///     superannuation: Decimal::new(760002, 2),
///     converted_net_salary: "AUD 63533.67".to_string(),
///     currency_code: "AUD".to_string(),
///     created_at: Utc::now(),
/// };
/// assert_eq!(payslip.id.to_string(), "1");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payslip {
    /// Store-assigned identifier.
    pub id: PayslipId,
    /// The employee this payslip was produced for.
    pub employee_id: u32,
    /// The employee's name, title-cased.
    pub full_name: String,
    /// The employee's department.
    pub department: String,
    /// The employee's job title.
    pub title: String,
    /// Gross yearly salary.
    pub gross_salary: Decimal,
    /// Income tax owed.
    pub tax: Decimal,
    /// Gross salary less tax.
    pub net_salary: Decimal,
    /// Superannuation contribution on the gross salary.
    pub superannuation: Decimal,
    /// Net salary in local currency, formatted as `"<code> <amount>"`.
    pub converted_net_salary: String,
    /// The local currency code used for the conversion.
    pub currency_code: String,
    /// When the payslip was computed.
    pub created_at: DateTime<Utc>,
}
