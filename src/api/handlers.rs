//! HTTP request handlers for the statistics API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{HolidayCalendar, build_period, holidays_for_year};
use crate::error::EngineResult;
use crate::export::build_export;
use crate::models::{Employee, Period, ShiftRecord};

use super::request::StatisticsRequest;
use super::response::{ApiError, ApiErrorResponse, StatisticsResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/statistics", post(statistics_handler))
        .route("/holidays/:year", get(holidays_handler))
        .with_state(state)
}

/// Handler for the POST /statistics endpoint.
///
/// Accepts a team/period snapshot and returns the aggregated statistics
/// and export bundle.
async fn statistics_handler(
    State(state): State<AppState>,
    payload: Result<Json<StatisticsRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let request_id = Uuid::new_v4();
    info!(request_id = %request_id, "Processing statistics request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(request_id = %request_id, error = %body_text, "JSON data error");
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(request_id = %request_id, error = %err, "JSON syntax error");
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

    if request.period.end_date < request.period.start_date {
        warn!(
            request_id = %request_id,
            start = %request.period.start_date,
            end = %request.period.end_date,
            "Period end before start"
        );
        return ApiErrorResponse {
            status: StatusCode::BAD_REQUEST,
            error: ApiError::validation_error("period end_date is before start_date"),
        }
        .into_response();
    }

    let start_time = Instant::now();
    match compute_statistics(&state, request, request_id) {
        Ok(response) => {
            let duration = start_time.elapsed();
            info!(
                request_id = %request_id,
                employees = response.export.per_employee.len(),
                entries = response.export.rows.len(),
                total_hours = %response.export.totals.total_hours,
                duration_us = duration.as_micros(),
                "Statistics computed successfully"
            );
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => {
            warn!(request_id = %request_id, error = %err, "Statistics request failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Runs the aggregation pipeline for one request.
fn compute_statistics(
    state: &AppState,
    request: StatisticsRequest,
    request_id: Uuid,
) -> EngineResult<StatisticsResponse> {
    let template_name = request.template.as_deref().unwrap_or("standard");
    let template = state.config().template(template_name)?;

    let period: Period = request.period.into();
    let employees: Vec<Employee> = request.employees.into_iter().map(Employee::from).collect();
    let shifts: Vec<ShiftRecord> = request
        .shifts
        .into_iter()
        .map(|shift| shift.into_record())
        .collect::<EngineResult<_>>()?;

    // Mirror the canonical store read: only records inside the period
    // contribute to the statistics.
    let shifts: Vec<ShiftRecord> = shifts
        .into_iter()
        .filter(|s| period.contains_date(s.date))
        .collect();

    let calendar = HolidayCalendar::for_period(&period);
    let statistics = build_period(&employees, &shifts, state.config().config(), &calendar);
    let export = build_export(&statistics, &employees, &template);

    Ok(StatisticsResponse {
        request_id,
        calculated_at: Utc::now(),
        period: request.period,
        export,
    })
}

/// Handler for the GET /holidays/:year endpoint.
///
/// Returns the computed North Rhine-Westphalia holiday set for a year.
async fn holidays_handler(Path(year): Path<i32>) -> Response {
    if !(1583..=9999).contains(&year) {
        return ApiErrorResponse {
            status: StatusCode::BAD_REQUEST,
            error: ApiError::validation_error(format!(
                "year {} is outside the Gregorian calendar range",
                year
            )),
        }
        .into_response();
    }
    Json(holidays_for_year(year)).into_response()
}
