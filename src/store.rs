//! In-memory payslip store.
//!
//! Payslips are kept in creation order. There is at most one payslip per
//! employee: storing a new one removes the previous record for that employee.

use crate::models::{Payslip, PayslipId};

/// Append-ordered collection of payslips.
#[derive(Debug, Clone)]
pub struct PayslipStore {
    payslips: Vec<Payslip>,
    next_id: u64,
}

impl Default for PayslipStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PayslipStore {
    /// Creates an empty store whose first id will be 1.
    pub fn new() -> Self {
        Self {
            payslips: Vec::new(),
            next_id: 1,
        }
    }

    /// Reserves the next payslip id.
    pub fn next_id(&mut self) -> PayslipId {
        let id = PayslipId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Stores a payslip, replacing any payslip for the same employee.
    ///
    /// The new payslip goes to the end of the creation order. Returns the
    /// payslip it replaced, if there was one.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::{Payslip, PayslipId};
    /// use payroll_engine::store::PayslipStore;
    /// use rust_decimal::Decimal;
    /// use chrono::Utc;
    ///
    /// let mut store = PayslipStore::new();
    /// let payslip = Payslip {
    ///     id: store.next_id(),
    ///     employee_id: 100005,
    ///     full_name: "Michael Davis".to_string(),
    ///     department: "Sales Department".to_string(),
    ///     title: "Sales Executive".to_string(),
    ///     gross_salary: Decimal::new(85000, 0),
    ///     tax: Decimal::new(1809149, 2),
    ///     net_salary: Decimal::new(6690851, 2),
    ///     superannuation: Decimal::new(807500, 2),
    ///     converted_net_salary: "AUD 66908.51".to_string(),
    ///     currency_code: "AUD".to_string(),
    ///     created_at: Utc::now(),
    /// };
    ///
    /// assert!(store.upsert(payslip.clone()).is_none());
    /// let id = store.next_id();
    /// let replaced = store.upsert(Payslip { id, ..payslip });
    /// assert_eq!(replaced.unwrap().id, PayslipId(1));
    /// assert_eq!(store.len(), 1);
    /// ```
    pub fn upsert(&mut self, payslip: Payslip) -> Option<Payslip> {
        let existing = self
            .payslips
            .iter()
            .position(|p| p.employee_id == payslip.employee_id);
        let replaced = existing.map(|index| self.payslips.remove(index));
        self.payslips.push(payslip);
        replaced
    }

    /// Returns all payslips in creation order.
    pub fn all(&self) -> &[Payslip] {
        &self.payslips
    }

    /// Iterates over payslips, most recently created first.
    pub fn latest_first(&self) -> impl Iterator<Item = &Payslip> {
        self.payslips.iter().rev()
    }

    /// Finds a payslip by its id.
    pub fn find_by_id(&self, id: PayslipId) -> Option<&Payslip> {
        self.payslips.iter().find(|p| p.id == id)
    }

    /// Finds the current payslip of an employee.
    pub fn find_by_employee(&self, employee_id: u32) -> Option<&Payslip> {
        self.payslips.iter().find(|p| p.employee_id == employee_id)
    }

    /// Returns the number of stored payslips.
    pub fn len(&self) -> usize {
        self.payslips.len()
    }

    /// Returns true if no payslips are stored.
    pub fn is_empty(&self) -> bool {
        self.payslips.is_empty()
    }
}
