//! Request types for the statistics API.
//!
//! This module defines the JSON request structures for the `/statistics`
//! endpoint. Wall-clock times arrive as raw `HH:MM` strings and are parsed
//! here, at the boundary, so malformed input fails with a validation error
//! before any classification runs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::{AbsenceType, Employee, Period, ShiftRecord, ShiftStatus, parse_hhmm};

/// Request body for the `/statistics` endpoint.
///
/// Carries a full snapshot of the team and period to aggregate; the
/// endpoint is stateless and computes everything from this payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatisticsRequest {
    /// The employees of the team.
    pub employees: Vec<EmployeeRequest>,
    /// The period to aggregate.
    pub period: PeriodRequest,
    /// The shift records within the period.
    pub shifts: Vec<ShiftRequest>,
    /// The export template to resolve; defaults to "standard".
    #[serde(default)]
    pub template: Option<String>,
}

/// Employee information in a statistics request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// Unique identifier for the employee.
    pub id: String,
    /// Display name.
    pub name: String,
}

impl From<EmployeeRequest> for Employee {
    fn from(request: EmployeeRequest) -> Self {
        Employee {
            id: request.id,
            name: request.name,
        }
    }
}

/// Period information in a statistics request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PeriodRequest {
    /// The start date of the period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the period (inclusive).
    pub end_date: NaiveDate,
}

impl From<PeriodRequest> for Period {
    fn from(request: PeriodRequest) -> Self {
        Period {
            start_date: request.start_date,
            end_date: request.end_date,
        }
    }
}

/// Shift information in a statistics request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftRequest {
    /// Unique identifier for the shift.
    pub id: String,
    /// The employee this shift belongs to.
    pub employee_id: String,
    /// The calendar date the shift starts on.
    pub date: NaiveDate,
    /// The planned start time as `HH:MM`.
    pub planned_start: String,
    /// The planned end time as `HH:MM`; before the start means overnight.
    pub planned_end: String,
    /// The actual start time as `HH:MM`, if confirmed.
    #[serde(default)]
    pub actual_start: Option<String>,
    /// The actual end time as `HH:MM`, if confirmed.
    #[serde(default)]
    pub actual_end: Option<String>,
    /// The lifecycle status.
    pub status: ShiftStatus,
    /// Absence marking, if any.
    #[serde(default)]
    pub absence_type: Option<AbsenceType>,
    /// The nominated stand-in for an absent shift.
    #[serde(default)]
    pub backup_employee_id: Option<String>,
    /// Free-text note.
    #[serde(default)]
    pub note: Option<String>,
}

impl ShiftRequest {
    /// Parses the request into a domain record.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidTime`](crate::error::EngineError) for
    /// any malformed `HH:MM` value.
    pub fn into_record(self) -> EngineResult<ShiftRecord> {
        let planned_start = parse_hhmm(&self.planned_start)?;
        let planned_end = parse_hhmm(&self.planned_end)?;
        let actual_start = self.actual_start.as_deref().map(parse_hhmm).transpose()?;
        let actual_end = self.actual_end.as_deref().map(parse_hhmm).transpose()?;

        Ok(ShiftRecord {
            id: self.id,
            employee_id: self.employee_id,
            date: self.date,
            planned_start,
            planned_end,
            actual_start,
            actual_end,
            status: self.status,
            absence: self.absence_type,
            backup_employee_id: self.backup_employee_id,
            note: self.note,
        })
    }
}
