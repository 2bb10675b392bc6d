//! Application state for the Payroll Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::service::PayslipService;

/// Shared application state.
///
/// Holds the payslip service behind a mutex so that the lookup, replace and
/// insert steps of payslip creation run as one unit per request.
#[derive(Clone)]
pub struct AppState {
    service: Arc<Mutex<PayslipService>>,
}

impl AppState {
    /// Creates a new application state around the given service.
    pub fn new(service: PayslipService) -> Self {
        Self {
            service: Arc::new(Mutex::new(service)),
        }
    }

    /// Returns the shared payslip service.
    pub fn service(&self) -> &Mutex<PayslipService> {
        &self.service
    }
}
