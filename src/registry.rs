//! The employee registry payslips are computed from.
//!
//! The registry is read-only once built: the payroll core looks employees
//! up but never changes them.

use std::collections::BTreeMap;

use crate::error::{EngineError, EngineResult};
use crate::models::Employee;

/// Validated employee records keyed by employee ID.
#[derive(Debug, Clone, Default)]
pub struct EmployeeRegistry {
    employees: BTreeMap<u32, Employee>,
}

impl EmployeeRegistry {
    /// Builds a registry, validating every record.
    ///
    /// # Returns
    ///
    /// Returns `InvalidEmployee` if a record fails [`Employee::validate`] or
    /// if two records share an employee ID.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::{AccessLevel, Employee};
    /// use payroll_engine::registry::EmployeeRegistry;
    /// use rust_decimal::Decimal;
    ///
    /// let registry = EmployeeRegistry::new(vec![Employee {
    ///     employee_id: 100005,
    ///     full_name: "Michael Davis".to_string(),
    ///     department: "Sales Department".to_string(),
    ///     title: "Sales Executive".to_string(),
    ///     base_yearly_salary: Decimal::new(85000, 0),
    ///     country: "Australia".to_string(),
    ///     access_level: AccessLevel::User,
    ///     workstation_name: None,
    /// }])
    /// .unwrap();
    ///
    /// assert!(registry.get(100005).is_some());
    /// ```
    pub fn new(employees: Vec<Employee>) -> EngineResult<Self> {
        let mut by_id = BTreeMap::new();

        for employee in employees {
            employee.validate()?;
            let employee_id = employee.employee_id;
            if by_id.insert(employee_id, employee).is_some() {
                return Err(EngineError::InvalidEmployee {
                    employee_id,
                    field: "employee_id".to_string(),
                    message: "duplicate employee ID".to_string(),
                });
            }
        }

        Ok(Self { employees: by_id })
    }

    /// Returns the employee with the given ID, if any.
    pub fn get(&self, employee_id: u32) -> Option<&Employee> {
        self.employees.get(&employee_id)
    }

    /// Returns the employee with the given ID or `EmployeeNotFound`.
    pub fn find(&self, employee_id: u32) -> EngineResult<&Employee> {
        self.get(employee_id)
            .ok_or(EngineError::EmployeeNotFound { employee_id })
    }

    /// Iterates over employees in ascending ID order.
    pub fn iter(&self) -> impl Iterator<Item = &Employee> {
        self.employees.values()
    }

    /// Returns the number of employees.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Returns true if the registry holds no employees.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Returns the employee with the highest base salary.
    ///
    /// Ties go to the lowest employee ID.
    pub fn highest_paid(&self) -> Option<&Employee> {
        self.iter().fold(None, |best: Option<&Employee>, e| match best {
            Some(b) if b.base_yearly_salary >= e.base_yearly_salary => Some(b),
            _ => Some(e),
        })
    }

    /// Returns the employee with the lowest base salary.
    ///
    /// Ties go to the lowest employee ID.
    pub fn lowest_paid(&self) -> Option<&Employee> {
        self.iter().fold(None, |best: Option<&Employee>, e| match best {
            Some(b) if b.base_yearly_salary <= e.base_yearly_salary => Some(b),
            _ => Some(e),
        })
    }
}
