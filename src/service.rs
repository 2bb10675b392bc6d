//! Payslip creation.
//!
//! [`PayslipService`] looks employees up in the registry, runs the payroll
//! calculation and commits the result to the payslip store, keeping one
//! current payslip per employee.

use std::path::Path;

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::calculation::calculate_salary;
use crate::config::{ConfigLoader, CurrencyRate, PayrollConfig};
use crate::error::{EngineError, EngineResult};
use crate::formatting::{round_money, title_case};
use crate::models::{Payslip, PayslipId};
use crate::registry::EmployeeRegistry;
use crate::store::PayslipStore;

/// Produces payslips and owns the store they are kept in.
///
/// # Example
///
/// ```no_run
/// use payroll_engine::service::PayslipService;
///
/// let mut service = PayslipService::load("./config/victoria")?;
/// let payslip = service.create_payslip(100001)?;
/// assert_eq!(payslip.converted_net_salary, "AUD 63533.67");
/// # Ok::<(), payroll_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PayslipService {
    config: PayrollConfig,
    registry: EmployeeRegistry,
    store: PayslipStore,
}

impl PayslipService {
    /// Creates a service with an empty payslip store.
    pub fn new(config: PayrollConfig, registry: EmployeeRegistry) -> Self {
        Self {
            config,
            registry,
            store: PayslipStore::new(),
        }
    }

    /// Loads the tables and registry from a configuration directory.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let (config, registry) = ConfigLoader::load(path)?.into_parts();
        Ok(Self::new(config, registry))
    }

    /// Computes and stores a payslip for an employee.
    ///
    /// Any existing payslip for the same employee is replaced wholesale. The
    /// salary is computed before the store is touched, so a failure leaves
    /// the store exactly as it was.
    ///
    /// # Returns
    ///
    /// Returns the new payslip, or an error if:
    /// - `employee_id` is zero (`InvalidInput`)
    /// - No employee has that ID (`EmployeeNotFound`)
    /// - The employee's country has no conversion rate (`CurrencyNotFound`)
    pub fn create_payslip(&mut self, employee_id: u32) -> EngineResult<Payslip> {
        if employee_id == 0 {
            return Err(EngineError::InvalidInput {
                input: employee_id.to_string(),
                message: "employee ID must be a positive integer".to_string(),
            });
        }

        let employee = self.registry.find(employee_id).inspect_err(|_| {
            warn!(employee_id, "Employee not found");
        })?;

        let breakdown = calculate_salary(
            employee.base_yearly_salary,
            &employee.country,
            &self.config,
        )
        .inspect_err(|err| {
            warn!(employee_id, error = %err, "Salary calculation failed");
        })?;

        let payslip = Payslip {
            id: self.store.next_id(),
            employee_id,
            full_name: title_case(&employee.full_name),
            department: employee.department.clone(),
            title: employee.title.clone(),
            gross_salary: breakdown.gross_salary,
            tax: round_money(breakdown.tax),
            net_salary: round_money(breakdown.net_salary),
            superannuation: round_money(breakdown.superannuation),
            converted_net_salary: breakdown.formatted().converted_display(),
            currency_code: breakdown.currency_code,
            created_at: Utc::now(),
        };

        if let Some(replaced) = self.store.upsert(payslip.clone()) {
            warn!(
                employee_id,
                replaced_id = %replaced.id,
                new_id = %payslip.id,
                "Replacing existing payslip"
            );
        }

        info!(
            employee_id,
            payslip_id = %payslip.id,
            net_salary = %payslip.net_salary,
            "Payslip created"
        );

        Ok(payslip)
    }

    /// Parses a textual employee ID and creates its payslip.
    ///
    /// Surrounding whitespace is ignored. Anything that is not a positive
    /// integer is rejected with `InvalidInput` and nothing is stored.
    pub fn create_payslip_from_input(&mut self, input: &str) -> EngineResult<Payslip> {
        let trimmed = input.trim();
        let employee_id = trimmed
            .parse::<u32>()
            .map_err(|_| EngineError::InvalidInput {
                input: trimmed.to_string(),
                message: "employee ID must be a positive integer".to_string(),
            })?;

        self.create_payslip(employee_id)
    }

    /// Sets a new conversion rate for a currency code.
    ///
    /// Payslips created afterwards use the new rate; stored payslips keep
    /// the amounts they were created with.
    pub fn update_currency_rate(
        &mut self,
        currency_code: &str,
        rate_to_base: Decimal,
    ) -> EngineResult<CurrencyRate> {
        let updated = self
            .config
            .currency_table_mut()
            .update_rate(currency_code, rate_to_base)
            .inspect_err(|err| {
                warn!(currency_code, error = %err, "Currency rate update rejected");
            })?
            .clone();

        info!(
            currency_code = %updated.currency_code,
            rate_to_base = %updated.rate_to_base,
            "Currency rate updated"
        );

        Ok(updated)
    }

    /// Iterates over stored payslips, most recently created first.
    pub fn payslips(&self) -> impl Iterator<Item = &Payslip> {
        self.store.latest_first()
    }

    /// Returns the payslip with the given id or `PayslipNotFound`.
    pub fn find_payslip(&self, id: PayslipId) -> EngineResult<&Payslip> {
        self.store
            .find_by_id(id)
            .ok_or(EngineError::PayslipNotFound { id: id.0 })
    }

    /// Returns the payslip store.
    pub fn store(&self) -> &PayslipStore {
        &self.store
    }

    /// Returns the employee registry.
    pub fn registry(&self) -> &EmployeeRegistry {
        &self.registry
    }

    /// Returns the payroll tables.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }
}
