//! Employee model and related types.
//!
//! This module defines the Employee struct and AccessLevel enum
//! for representing staff held in the employee registry.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Represents the system access level granted to an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessLevel {
    /// Administrative access.
    Admin,
    /// Regular user access.
    User,
}

/// Represents an employee whose payslip can be produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique numeric identifier for the employee.
    pub employee_id: u32,
    /// The employee's full name as recorded.
    pub full_name: String,
    /// The department the employee belongs to.
    pub department: String,
    /// The employee's job title.
    pub title: String,
    /// Base yearly salary in the base currency.
    pub base_yearly_salary: Decimal,
    /// Country the employee is paid in, used for currency conversion.
    pub country: String,
    /// The employee's system access level.
    pub access_level: AccessLevel,
    /// Workstation assigned to the employee, if any.
    #[serde(default)]
    pub workstation_name: Option<String>,
}

impl Employee {
    /// Returns true if the employee has administrative access.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::{AccessLevel, Employee};
    /// use rust_decimal::Decimal;
    ///
    /// let admin = Employee {
    ///     employee_id: 100000,
    ///     full_name: "Admin User".to_string(),
    ///     department: "Administration".to_string(),
    ///     title: "Administrator".to_string(),
    ///     base_yearly_salary: Decimal::new(150000, 0),
    ///     country: "Australia".to_string(),
    ///     access_level: AccessLevel::Admin,
    ///     workstation_name: None,
    /// };
    /// assert!(admin.is_admin());
    /// ```
    pub fn is_admin(&self) -> bool {
        self.access_level == AccessLevel::Admin
    }

    /// Checks the record's field-level invariants.
    pub fn validate(&self) -> EngineResult<()> {
        if self.employee_id == 0 {
            return Err(self.invalid("employee_id", "must be a positive integer"));
        }
        if self.full_name.trim().is_empty() {
            return Err(self.invalid("full_name", "cannot be empty"));
        }
        if self.country.trim().is_empty() {
            return Err(self.invalid("country", "cannot be empty"));
        }
        if self.base_yearly_salary < Decimal::ZERO {
            return Err(self.invalid("base_yearly_salary", "cannot be negative"));
        }
        Ok(())
    }

    fn invalid(&self, field: &str, message: &str) -> EngineError {
        EngineError::InvalidEmployee {
            employee_id: self.employee_id,
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}
