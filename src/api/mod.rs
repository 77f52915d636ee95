//! HTTP API module for the shift calculation engine.
//!
//! This module provides the REST API endpoints for computing per-employee
//! and combined statistics from a shift snapshot.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{EmployeeRequest, PeriodRequest, ShiftRequest, StatisticsRequest};
pub use response::{ApiError, StatisticsResponse};
pub use state::AppState;
