//! Shift record model and related types.
//!
//! This module defines the [`ShiftRecord`] struct together with the closed
//! [`ShiftStatus`] and [`AbsenceType`] enums. The source system carried
//! status and absence as free strings; here they are exhaustive enums so a
//! new status can never silently fall through to "normal worked"
//! classification.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::timefmt::{hhmm, hhmm_opt};

/// Note marker identifying a shift that exists because its employee stood
/// in for an absent colleague ("Eingesprungen für ...").
///
/// The persistent store has no structured field for this; the marker is a
/// substring convention inside the free-text note. All matching goes
/// through [`ShiftRecord::is_backup_coverage`] so the convention can be
/// replaced by a structural flag in one place.
pub const BACKUP_NOTE_MARKER: &str = "Eingesprungen";

/// Lifecycle status of a shift record.
///
/// Only [`ShiftStatus::Planned`] leaves worked totals uncounted; every
/// other status confirms the shift and makes its hours count.
///
/// # Example
///
/// ```
/// use dienstplan_engine::models::ShiftStatus;
///
/// assert!(ShiftStatus::Planned.can_transition_to(ShiftStatus::Confirmed));
/// assert!(!ShiftStatus::Completed.can_transition_to(ShiftStatus::Planned));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShiftStatus {
    /// Scheduled but not yet confirmed by the employee.
    Planned,
    /// Confirmed by the employee with the planned times.
    Confirmed,
    /// Confirmed by the employee with changed actual times.
    Changed,
    /// Submitted for sign-off.
    Submitted,
    /// Signed off and closed.
    Completed,
}

impl ShiftStatus {
    /// The canonical status set read for aggregation and export.
    ///
    /// Records outside this set (should any exist in a foreign store) are
    /// excluded from all statistics.
    pub const CANONICAL: [ShiftStatus; 5] = [
        ShiftStatus::Planned,
        ShiftStatus::Confirmed,
        ShiftStatus::Changed,
        ShiftStatus::Submitted,
        ShiftStatus::Completed,
    ];

    /// Returns true if this status confirms the shift, i.e. its hours
    /// count toward worked totals.
    pub fn is_confirmed(self) -> bool {
        match self {
            ShiftStatus::Planned => false,
            ShiftStatus::Confirmed
            | ShiftStatus::Changed
            | ShiftStatus::Submitted
            | ShiftStatus::Completed => true,
        }
    }

    /// Returns true if the lifecycle permits moving from this status to
    /// `next`.
    ///
    /// A planned shift may move to any confirmed status; confirmed
    /// statuses only move forward along the confirmation path.
    pub fn can_transition_to(self, next: ShiftStatus) -> bool {
        match self {
            ShiftStatus::Planned => next != ShiftStatus::Planned,
            ShiftStatus::Confirmed => matches!(
                next,
                ShiftStatus::Changed | ShiftStatus::Submitted | ShiftStatus::Completed
            ),
            ShiftStatus::Changed => {
                matches!(next, ShiftStatus::Submitted | ShiftStatus::Completed)
            }
            ShiftStatus::Submitted => next == ShiftStatus::Completed,
            ShiftStatus::Completed => false,
        }
    }
}

impl std::fmt::Display for ShiftStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShiftStatus::Planned => write!(f, "PLANNED"),
            ShiftStatus::Confirmed => write!(f, "CONFIRMED"),
            ShiftStatus::Changed => write!(f, "CHANGED"),
            ShiftStatus::Submitted => write!(f, "SUBMITTED"),
            ShiftStatus::Completed => write!(f, "COMPLETED"),
        }
    }
}

/// The kind of absence recorded on a shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AbsenceType {
    /// Sick leave; counts a sick day and the planned hours as sick hours.
    Sick,
    /// Vacation; counts a vacation day and the planned hours as vacation hours.
    Vacation,
}

/// One planned or worked unit of time for one employee on one calendar date.
///
/// `planned_end` may be numerically before `planned_start` to denote an
/// overnight span ending on the following day; equal times denote a full
/// 24-hour day. Actual times stay `None` until the employee confirms.
///
/// # Example
///
/// ```
/// use dienstplan_engine::models::{ShiftRecord, ShiftStatus};
/// use chrono::{NaiveDate, NaiveTime};
///
/// let shift = ShiftRecord {
///     id: "shift_001".to_string(),
///     employee_id: "emp_001".to_string(),
///     date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
///     planned_start: NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
///     planned_end: NaiveTime::from_hms_opt(6, 0, 0).unwrap(),
///     actual_start: None,
///     actual_end: None,
///     status: ShiftStatus::Planned,
///     absence: None,
///     backup_employee_id: None,
///     note: None,
/// };
/// assert!(!shift.is_backup_coverage());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftRecord {
    /// Unique identifier for the shift.
    pub id: String,
    /// The employee this shift belongs to.
    pub employee_id: String,
    /// The calendar date the shift starts on (timezone-naive).
    pub date: NaiveDate,
    /// The planned start time (`HH:MM` wall clock).
    #[serde(with = "hhmm")]
    pub planned_start: NaiveTime,
    /// The planned end time; before the start means an overnight span.
    #[serde(with = "hhmm")]
    pub planned_end: NaiveTime,
    /// The actual start time, `None` until confirmed.
    #[serde(default, with = "hhmm_opt")]
    pub actual_start: Option<NaiveTime>,
    /// The actual end time, `None` until confirmed.
    #[serde(default, with = "hhmm_opt")]
    pub actual_end: Option<NaiveTime>,
    /// The lifecycle status.
    pub status: ShiftStatus,
    /// Absence marking, if any. An absent shift contributes only to
    /// absence counts, never to worked totals.
    #[serde(default)]
    pub absence: Option<AbsenceType>,
    /// The stand-in employee nominated to cover this shift. Set on the
    /// *primary* (absent) employee's record; the stand-in's own coverage
    /// is a separate record.
    #[serde(default)]
    pub backup_employee_id: Option<String>,
    /// Free text, may carry the [`BACKUP_NOTE_MARKER`].
    #[serde(default)]
    pub note: Option<String>,
}

impl ShiftRecord {
    /// The span actually used for worked-hour classification: actual
    /// times when both are present, the planned times otherwise.
    pub fn effective_span(&self) -> (NaiveTime, NaiveTime) {
        match (self.actual_start, self.actual_end) {
            (Some(start), Some(end)) => (start, end),
            _ => (self.planned_start, self.planned_end),
        }
    }

    /// The planned span. Absence credit always uses this, never actual
    /// times.
    pub fn planned_span(&self) -> (NaiveTime, NaiveTime) {
        (self.planned_start, self.planned_end)
    }

    /// Returns true if this record exists because its employee stood in
    /// for someone else (note carries the "Eingesprungen" marker).
    pub fn is_backup_coverage(&self) -> bool {
        self.note
            .as_deref()
            .is_some_and(|n| n.contains(BACKUP_NOTE_MARKER))
    }
}
