//! Request types for the Payroll Engine API.
//!
//! This module defines the JSON request bodies accepted by the API.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Request body for `POST /payslips`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePayslipRequest {
    /// The employee to produce a payslip for.
    pub employee_id: EmployeeIdInput,
}

/// An employee ID as sent by a client: a JSON number or a string.
///
/// Any number or string is accepted here and validated by the payslip
/// service, so a fractional, negative or non-numeric ID is reported as
/// invalid input rather than as malformed JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EmployeeIdInput {
    /// A numeric ID, integral or not.
    Number(serde_json::Number),
    /// A textual ID, parsed by the service.
    Text(String),
}

impl EmployeeIdInput {
    /// Returns the ID as the text the service parses.
    pub fn as_input(&self) -> String {
        match self {
            EmployeeIdInput::Number(n) => n.to_string(),
            EmployeeIdInput::Text(s) => s.clone(),
        }
    }
}

/// Request body for `PUT /currencies/:code`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateCurrencyRateRequest {
    /// Units of local currency per unit of base currency.
    pub rate_to_base: Decimal,
}

/// Request body for `POST /salary`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryRequest {
    /// Gross yearly salary in the base currency.
    pub gross_salary: Decimal,
    /// Country whose currency the net salary is converted into.
    pub country: String,
}
