//! Core data models for the shift calculation engine.
//!
//! This module contains all the domain models used throughout the engine.

mod employee;
mod period;
mod shift;
mod statistics;
mod timefmt;

pub use employee::Employee;
pub use period::{HolidayEntry, Period};
pub use shift::{AbsenceType, BACKUP_NOTE_MARKER, ShiftRecord, ShiftStatus};
pub use statistics::{ClassificationRow, EmployeeStatistics, PeriodStatistics};
pub use timefmt::{HHMM_FORMAT, format_hhmm, hhmm, hhmm_opt, parse_hhmm};
