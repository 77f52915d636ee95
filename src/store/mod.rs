//! The persistent shift store boundary.
//!
//! Persistence itself is a collaborator concern; the engine only needs the
//! narrow read/write contract defined by [`ShiftStore`]. The bundled
//! [`MemoryShiftStore`] backs tests and embedded use. All mutations are
//! scoped to a single record and are last-write-wins; the engine requires
//! no cross-record transactions.

mod lifecycle;

pub use lifecycle::{AbsenceOutcome, confirm, duplicate, mark_absent};

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::error::{EngineError, EngineResult};
use crate::models::{ShiftRecord, ShiftStatus};

/// Filter for reading shift records.
///
/// The canonical filter used when reading for aggregation and export is
/// the full lifecycle status set ([`ShiftStatus::CANONICAL`]); records
/// outside it are excluded from all statistics.
#[derive(Debug, Clone, Default)]
pub struct ShiftQuery {
    /// Restrict to one employee.
    pub employee_id: Option<String>,
    /// Earliest date, inclusive.
    pub from: Option<NaiveDate>,
    /// Latest date, inclusive.
    pub to: Option<NaiveDate>,
    /// Restrict to these statuses; `None` means no status filter.
    pub statuses: Option<Vec<ShiftStatus>>,
}

impl ShiftQuery {
    /// A query over one inclusive date range with the canonical status set.
    pub fn period(from: NaiveDate, to: NaiveDate) -> Self {
        Self {
            employee_id: None,
            from: Some(from),
            to: Some(to),
            statuses: Some(ShiftStatus::CANONICAL.to_vec()),
        }
    }

    fn matches(&self, shift: &ShiftRecord) -> bool {
        if let Some(employee_id) = &self.employee_id {
            if &shift.employee_id != employee_id {
                return false;
            }
        }
        if let Some(from) = self.from {
            if shift.date < from {
                return false;
            }
        }
        if let Some(to) = self.to {
            if shift.date > to {
                return false;
            }
        }
        if let Some(statuses) = &self.statuses {
            if !statuses.contains(&shift.status) {
                return false;
            }
        }
        true
    }
}

/// Create/read/update/delete access to shift records.
pub trait ShiftStore {
    /// Fetches one record by id.
    fn get(&self, id: &str) -> Option<ShiftRecord>;

    /// Inserts a new record.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidShift`] if a record with the same id
    /// already exists.
    fn insert(&mut self, shift: ShiftRecord) -> EngineResult<()>;

    /// Replaces an existing record, matched by id.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ShiftNotFound`] for unknown ids.
    fn update(&mut self, shift: ShiftRecord) -> EngineResult<()>;

    /// Deletes a record by id.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ShiftNotFound`] for unknown ids.
    fn delete(&mut self, id: &str) -> EngineResult<()>;

    /// Returns all matching records ordered by date, start time, and id.
    fn query(&self, query: &ShiftQuery) -> Vec<ShiftRecord>;
}

/// An in-memory shift store.
///
/// # Example
///
/// ```
/// use dienstplan_engine::store::{MemoryShiftStore, ShiftStore, ShiftQuery};
///
/// let store = MemoryShiftStore::new();
/// assert!(store.query(&ShiftQuery::default()).is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryShiftStore {
    shifts: HashMap<String, ShiftRecord>,
}

impl MemoryShiftStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ShiftStore for MemoryShiftStore {
    fn get(&self, id: &str) -> Option<ShiftRecord> {
        self.shifts.get(id).cloned()
    }

    fn insert(&mut self, shift: ShiftRecord) -> EngineResult<()> {
        if self.shifts.contains_key(&shift.id) {
            return Err(EngineError::InvalidShift {
                shift_id: shift.id,
                message: "a shift with this id already exists".to_string(),
            });
        }
        self.shifts.insert(shift.id.clone(), shift);
        Ok(())
    }

    fn update(&mut self, shift: ShiftRecord) -> EngineResult<()> {
        if !self.shifts.contains_key(&shift.id) {
            return Err(EngineError::ShiftNotFound { shift_id: shift.id });
        }
        self.shifts.insert(shift.id.clone(), shift);
        Ok(())
    }

    fn delete(&mut self, id: &str) -> EngineResult<()> {
        self.shifts
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| EngineError::ShiftNotFound {
                shift_id: id.to_string(),
            })
    }

    fn query(&self, query: &ShiftQuery) -> Vec<ShiftRecord> {
        let mut result: Vec<ShiftRecord> = self
            .shifts
            .values()
            .filter(|s| query.matches(s))
            .cloned()
            .collect();
        result.sort_by(|a, b| {
            a.date
                .cmp(&b.date)
                .then_with(|| a.planned_start.cmp(&b.planned_start))
                .then_with(|| a.id.cmp(&b.id))
        });
        result
    }
}
