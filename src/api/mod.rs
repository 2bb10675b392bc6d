//! HTTP API module for the Payroll Engine.
//!
//! This module provides the REST API endpoints for creating and viewing
//! payslips, for inspecting the payroll tables and for updating currency
//! conversion rates.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    CreatePayslipRequest, EmployeeIdInput, SalaryRequest, UpdateCurrencyRateRequest,
};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
