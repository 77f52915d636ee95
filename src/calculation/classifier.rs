//! Per-shift premium classification.
//!
//! Produces the minute breakdown of one shift record: total worked
//! minutes, night-window minutes, Sunday minutes, holiday minutes, and the
//! separately tracked planned minutes. All rounding to hours happens at
//! aggregation, never here.

use chrono::{Datelike, Weekday};

use crate::config::EngineConfig;
use crate::models::ShiftRecord;

use super::holiday_calendar::HolidayCalendar;
use super::interval_overlap::{overlap_minutes, span_minutes};

/// The minute breakdown of a single shift.
///
/// Sunday and holiday minutes are attributed at whole-shift granularity,
/// keyed off the record's calendar date: a midnight-crossing Sunday shift
/// credits its full span to the Sunday pool even though part of it falls on
/// Monday. Downstream payroll numbers assume this behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinuteBreakdown {
    /// Confirmed worked minutes.
    pub total: i64,
    /// Worked minutes inside the night window.
    pub night: i64,
    /// Worked minutes credited to the Sunday pool.
    pub sunday: i64,
    /// Worked minutes credited to the holiday pool.
    pub holiday: i64,
    /// Planned minutes, tracked for plan-vs-actual comparison.
    pub planned: i64,
}

impl MinuteBreakdown {
    /// Additively credits another breakdown's worked figures onto this one.
    ///
    /// Planned minutes are not credited; a stand-in's plan is their own.
    pub fn credit(&mut self, other: &MinuteBreakdown) {
        self.total += other.total;
        self.night += other.night;
        self.sunday += other.sunday;
        self.holiday += other.holiday;
    }
}

/// Classifies one shift record against the premium windows.
///
/// Rules:
/// - an absent shift produces no worked or planned minutes here; it feeds
///   the absence tally instead, from its planned span;
/// - a shift still in `PLANNED` status contributes only planned minutes;
/// - a confirmed shift is classified over its actual span when both actual
///   times are present, over the planned span otherwise.
///
/// # Example
///
/// ```
/// use dienstplan_engine::calculation::{HolidayCalendar, classify};
/// use dienstplan_engine::config::EngineConfig;
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
///     status: ShiftStatus::Confirmed,
///     absence: None,
///     backup_employee_id: None,
///     note: None,
/// };
///
/// let config = EngineConfig::default();
/// let calendar = HolidayCalendar::for_years(&[2026]);
/// let breakdown = classify(&shift, &config, &calendar);
/// assert_eq!(breakdown.total, 480);
/// assert_eq!(breakdown.night, 420);
/// ```
pub fn classify(
    shift: &ShiftRecord,
    config: &EngineConfig,
    calendar: &HolidayCalendar,
) -> MinuteBreakdown {
    if shift.absence.is_some() {
        return MinuteBreakdown::default();
    }

    let planned = span_minutes(shift.date, shift.planned_start, shift.planned_end);
    if !shift.status.is_confirmed() {
        return MinuteBreakdown {
            planned,
            ..MinuteBreakdown::default()
        };
    }

    let (start, end) = shift.effective_span();
    let mut breakdown = classify_span(shift, start, end, config, calendar);
    breakdown.planned = planned;
    breakdown
}

/// Classifies a shift as if it had been worked, ignoring its absence flag
/// and confirmation status.
///
/// Used by backup crediting to compute the would-have-been classification
/// of an absent primary shift.
pub fn classify_as_worked(
    shift: &ShiftRecord,
    config: &EngineConfig,
    calendar: &HolidayCalendar,
) -> MinuteBreakdown {
    let (start, end) = shift.effective_span();
    classify_span(shift, start, end, config, calendar)
}

fn classify_span(
    shift: &ShiftRecord,
    start: chrono::NaiveTime,
    end: chrono::NaiveTime,
    config: &EngineConfig,
    calendar: &HolidayCalendar,
) -> MinuteBreakdown {
    let total = span_minutes(shift.date, start, end);
    let night = overlap_minutes(
        shift.date,
        start,
        end,
        config.night_window.start,
        config.night_window.end,
    );
    let sunday = if shift.date.weekday() == Weekday::Sun {
        total
    } else {
        0
    };
    let holiday = if calendar.is_holiday(shift.date) {
        total
    } else {
        0
    };

    MinuteBreakdown {
        total,
        night,
        sunday,
        holiday,
        planned: 0,
    }
}
