//! HTTP request handlers for the Payroll Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::calculate_and_format_salary;
use crate::models::{Payslip, PayslipId};

use super::request::{CreatePayslipRequest, SalaryRequest, UpdateCurrencyRateRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/payslips", post(create_payslip_handler).get(list_payslips_handler))
        .route("/payslips/:id", get(get_payslip_handler))
        .route("/salary", post(salary_handler))
        .route("/tax-brackets", get(tax_brackets_handler))
        .route("/currencies", get(currencies_handler))
        .route("/currencies/:code", put(update_currency_rate_handler))
        .with_state(state)
}

/// Handler for POST /payslips.
///
/// Creates (or replaces) the payslip of the requested employee.
async fn create_payslip_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreatePayslipRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payslip request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let start_time = Instant::now();
    let mut service = state.service().lock().await;
    match service.create_payslip_from_input(&request.employee_id.as_input()) {
        Ok(payslip) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = payslip.employee_id,
                payslip_id = %payslip.id,
                duration_us = start_time.elapsed().as_micros(),
                "Payslip request completed"
            );
            (StatusCode::CREATED, Json(payslip)).into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Payslip request failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /payslips.
///
/// Lists payslips with the most recently created first.
async fn list_payslips_handler(State(state): State<AppState>) -> Json<Vec<Payslip>> {
    let service = state.service().lock().await;
    Json(service.payslips().cloned().collect())
}

/// Handler for GET /payslips/:id.
async fn get_payslip_handler(State(state): State<AppState>, Path(id): Path<u64>) -> Response {
    let service = state.service().lock().await;
    match service.find_payslip(PayslipId(id)) {
        Ok(payslip) => Json(payslip.clone()).into_response(),
        Err(err) => ApiErrorResponse::from(err).into_response(),
    }
}

/// Handler for POST /salary.
///
/// Computes formatted salary figures without storing a payslip.
async fn salary_handler(
    State(state): State<AppState>,
    payload: Result<Json<SalaryRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let service = state.service().lock().await;
    match calculate_and_format_salary(request.gross_salary, &request.country, service.config()) {
        Ok(formatted) => Json(formatted).into_response(),
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Salary calculation failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /tax-brackets.
async fn tax_brackets_handler(State(state): State<AppState>) -> Response {
    let service = state.service().lock().await;
    Json(service.config().tax_table()).into_response()
}

/// Handler for GET /currencies.
async fn currencies_handler(State(state): State<AppState>) -> Response {
    let service = state.service().lock().await;
    Json(service.config().currency_table()).into_response()
}

/// Handler for PUT /currencies/:code.
///
/// Replaces the conversion rate of a currency. Only payslips created
/// afterwards see the new rate.
async fn update_currency_rate_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
    payload: Result<Json<UpdateCurrencyRateRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, currency_code = %code, "Processing rate update");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let mut service = state.service().lock().await;
    match service.update_currency_rate(&code, request.rate_to_base) {
        Ok(updated) => Json(updated).into_response(),
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Rate update failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Turns a JSON extraction failure into a 400 response.
fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    (StatusCode::BAD_REQUEST, Json(error)).into_response()
}
