//! HTTP request handlers for the leave entitlement engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::compute_entitlement;
use crate::models::{AbsenceRecord, EntitlementResult};

use super::request::EntitlementRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/entitlement", post(entitlement_handler))
        .with_state(state)
}

/// Handler for POST /entitlement endpoint.
///
/// Accepts an entitlement request and returns the computed report.
async fn entitlement_handler(
    State(state): State<AppState>,
    payload: Result<Json<EntitlementRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing entitlement request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // Get the body text which contains the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    // Check if it's a missing field error
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
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    // Convert request types to domain types
    let employee_id = request.employee.id;
    let hire_date = request.employee.hire_date;
    let absences: Vec<AbsenceRecord> = request.absences.into_iter().map(Into::into).collect();
    let as_of = request.as_of.unwrap_or_else(|| Utc::now().date_naive());

    let config = state.config();

    // Perform the computation
    let start_time = Instant::now();
    match compute_entitlement(
        hire_date,
        &absences,
        config.calendar(),
        config.policy(),
        Some(as_of),
    ) {
        Ok(report) => {
            let duration = start_time.elapsed();
            info!(
                correlation_id = %correlation_id,
                employee_id = %employee_id,
                absences_count = absences.len(),
                total_remaining = %report.total_remaining_days,
                duration_us = duration.as_micros(),
                "Entitlement computed successfully"
            );
            let result = EntitlementResult {
                report_id: Uuid::new_v4(),
                timestamp: Utc::now(),
                engine_version: env!("CARGO_PKG_VERSION").to_string(),
                employee_id,
                as_of,
                report,
            };
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(result),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                employee_id = %employee_id,
                error = %err,
                "Entitlement computation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}
