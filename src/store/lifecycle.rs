//! Shift lifecycle operations.
//!
//! The state machine governing status transitions lives on
//! [`ShiftStatus`](crate::models::ShiftStatus); this module applies it to
//! records in a store, together with absence marking (including the
//! auto-delete rule for stand-in coverage records) and shift duplication.

use chrono::{NaiveDate, NaiveTime};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{AbsenceType, BACKUP_NOTE_MARKER, ShiftRecord, ShiftStatus};

use super::ShiftStore;

/// The result of marking a shift absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AbsenceOutcome {
    /// The absence was recorded on the shift.
    Marked {
        /// The id of the coverage record created for the nominated backup,
        /// if one was nominated.
        coverage_shift_id: Option<String>,
    },
    /// The shift was a stand-in coverage record and was deleted instead of
    /// being marked absent.
    Deleted,
}

/// Marks a shift absent, optionally nominating a backup.
///
/// A stand-in's own coverage record marked sick is not converted into an
/// absence: the record is deleted outright, and [`AbsenceOutcome::Deleted`]
/// tells the caller that the coverage fell through. For every other record
/// the absence is stored and, when a backup is nominated, the backup's own
/// coverage record is created on the same date with the same planned span.
///
/// # Errors
///
/// Returns [`EngineError::ShiftNotFound`] for unknown or already-deleted
/// ids.
pub fn mark_absent<S: ShiftStore>(
    store: &mut S,
    shift_id: &str,
    absence: AbsenceType,
    backup_employee_id: Option<&str>,
) -> EngineResult<AbsenceOutcome> {
    let mut shift = store.get(shift_id).ok_or_else(|| EngineError::ShiftNotFound {
        shift_id: shift_id.to_string(),
    })?;

    // A sick stand-in has no "coverage of a coverage"; removing the record
    // is the signal that the coverage fell through.
    if shift.is_backup_coverage() && absence == AbsenceType::Sick {
        store.delete(shift_id)?;
        return Ok(AbsenceOutcome::Deleted);
    }

    shift.absence = Some(absence);
    shift.backup_employee_id = backup_employee_id.map(str::to_string);

    let coverage_shift_id = match backup_employee_id {
        Some(backup_id) => {
            let coverage = ShiftRecord {
                id: Uuid::new_v4().to_string(),
                employee_id: backup_id.to_string(),
                date: shift.date,
                planned_start: shift.planned_start,
                planned_end: shift.planned_end,
                actual_start: None,
                actual_end: None,
                status: ShiftStatus::Planned,
                absence: None,
                backup_employee_id: None,
                note: Some(format!("{} für {}", BACKUP_NOTE_MARKER, shift.employee_id)),
            };
            let id = coverage.id.clone();
            store.insert(coverage)?;
            Some(id)
        }
        None => None,
    };

    store.update(shift)?;
    Ok(AbsenceOutcome::Marked { coverage_shift_id })
}

/// Records actual times on a shift and advances its status.
///
/// # Errors
///
/// Returns [`EngineError::ShiftNotFound`] for unknown ids and
/// [`EngineError::InvalidTransition`] when the lifecycle forbids the move.
pub fn confirm<S: ShiftStore>(
    store: &mut S,
    shift_id: &str,
    actual_start: NaiveTime,
    actual_end: NaiveTime,
    status: ShiftStatus,
) -> EngineResult<ShiftRecord> {
    let mut shift = store.get(shift_id).ok_or_else(|| EngineError::ShiftNotFound {
        shift_id: shift_id.to_string(),
    })?;

    if !shift.status.can_transition_to(status) {
        return Err(EngineError::InvalidTransition {
            shift_id: shift_id.to_string(),
            from: shift.status,
            to: status,
        });
    }

    shift.actual_start = Some(actual_start);
    shift.actual_end = Some(actual_end);
    shift.status = status;
    store.update(shift.clone())?;
    Ok(shift)
}

/// Copies a shift onto a target date.
///
/// The new record keeps the employee, the planned span, the backup
/// reference and the note, and starts its own lifecycle as `PLANNED`
/// without actual times.
///
/// # Errors
///
/// Returns [`EngineError::ShiftNotFound`] for unknown ids.
pub fn duplicate<S: ShiftStore>(
    store: &mut S,
    shift_id: &str,
    target_date: NaiveDate,
) -> EngineResult<ShiftRecord> {
    let source = store.get(shift_id).ok_or_else(|| EngineError::ShiftNotFound {
        shift_id: shift_id.to_string(),
    })?;

    let copy = ShiftRecord {
        id: Uuid::new_v4().to_string(),
        employee_id: source.employee_id.clone(),
        date: target_date,
        planned_start: source.planned_start,
        planned_end: source.planned_end,
        actual_start: None,
        actual_end: None,
        status: ShiftStatus::Planned,
        absence: None,
        backup_employee_id: source.backup_employee_id.clone(),
        note: source.note.clone(),
    };
    store.insert(copy.clone())?;
    Ok(copy)
}
