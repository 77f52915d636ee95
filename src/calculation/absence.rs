//! Sick and vacation tallies.
//!
//! Absence credit always uses the planned span of a shift, never actual
//! times; an absent employee has no actual times to begin with.

use crate::models::{AbsenceType, ShiftRecord};

use super::interval_overlap::span_minutes;

/// Accumulated absence figures for one employee.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AbsenceTally {
    /// Number of shifts marked sick.
    pub sick_days: u32,
    /// Planned minutes of shifts marked sick.
    pub sick_minutes: i64,
    /// Number of shifts marked vacation.
    pub vacation_days: u32,
    /// Planned minutes of shifts marked vacation.
    pub vacation_minutes: i64,
}

impl AbsenceTally {
    /// Folds one shift into the tally.
    ///
    /// A shift without an absence marking contributes nothing. A shift can
    /// only carry one absence type, so a record never counts as both sick
    /// and vacation.
    pub fn accumulate(&mut self, shift: &ShiftRecord) {
        let Some(absence) = shift.absence else {
            return;
        };
        let planned = span_minutes(shift.date, shift.planned_start, shift.planned_end);
        match absence {
            AbsenceType::Sick => {
                self.sick_days += 1;
                self.sick_minutes += planned;
            }
            AbsenceType::Vacation => {
                self.vacation_days += 1;
                self.vacation_minutes += planned;
            }
        }
    }
}
