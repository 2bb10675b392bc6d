//! Payroll Engine
//!
//! This crate computes payslips for a registry of employees: marginal income
//! tax over a bracket schedule, superannuation on gross salary, and net
//! salary converted into each employee's local currency. Payslips are kept
//! in memory, one current payslip per employee.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod formatting;
pub mod models;
pub mod registry;
pub mod service;
pub mod store;
