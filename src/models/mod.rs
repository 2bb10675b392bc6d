//! Core data models for the Payroll Engine.
//!
//! This module contains the employee and payslip records shared by the
//! registry, the payslip store and the HTTP layer.

mod employee;
mod payslip;

pub use employee::{AccessLevel, Employee};
pub use payslip::{Payslip, PayslipId};
