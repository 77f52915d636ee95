//! Calculation logic for the shift calculation engine.
//!
//! This module contains the pure calculation core: public holiday
//! computation for North Rhine-Westphalia, overlap between shift spans and
//! recurring premium windows, per-shift classification, absence tallies,
//! stand-in crediting, and period aggregation.

mod absence;
mod aggregation;
mod backup_credit;
mod classifier;
mod holiday_calendar;
mod interval_overlap;

pub use absence::AbsenceTally;
pub use aggregation::{build_period, minutes_to_hours};
pub use backup_credit::apply_backup_credit;
pub use classifier::{MinuteBreakdown, classify, classify_as_worked};
pub use holiday_calendar::{HolidayCalendar, easter_sunday, holidays_for_year};
pub use interval_overlap::{overlap_minutes, shift_span, span_minutes};
