//! Stand-in (backup) crediting.
//!
//! When a primary employee's shift is marked absent with a nominated
//! backup, the backup's own coverage shift on the same date is credited
//! with the primary shift's would-have-been classification on top of the
//! backup's own worked hours. The crediting runs as a second pass over the
//! period snapshot: pass 1 classifies every record in isolation, pass 2
//! performs a keyed lookup by date and employee. Missing linkage is not an
//! error; the credit is simply not produced.

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;

use crate::config::EngineConfig;
use crate::models::ShiftRecord;

use super::classifier::{MinuteBreakdown, classify_as_worked};
use super::holiday_calendar::HolidayCalendar;

/// Applies backup credit to a period snapshot.
///
/// `breakdowns` runs parallel to `shifts`: `breakdowns[i]` is the pass-1
/// classification of `shifts[i]`. For every absent shift with a nominated
/// backup, the backup's coverage record (same date, marked with the
/// stand-in note) receives the primary's would-have-been breakdown
/// additively.
///
/// Returns the number of covered dates per backup employee. This is the
/// `backup_days` count, which is separate from and does not replace the
/// hour credit.
pub fn apply_backup_credit(
    shifts: &[ShiftRecord],
    breakdowns: &mut [MinuteBreakdown],
    config: &EngineConfig,
    calendar: &HolidayCalendar,
) -> HashMap<String, u32> {
    debug_assert_eq!(shifts.len(), breakdowns.len());

    // Index of coverage records: (date, employee) -> position. First match
    // wins should a store ever hold duplicates.
    let mut coverage_index: HashMap<(NaiveDate, &str), usize> = HashMap::new();
    for (idx, shift) in shifts.iter().enumerate() {
        if shift.is_backup_coverage() {
            coverage_index
                .entry((shift.date, shift.employee_id.as_str()))
                .or_insert(idx);
        }
    }

    let mut covered_dates: HashSet<(String, NaiveDate)> = HashSet::new();
    for shift in shifts {
        if shift.absence.is_none() {
            continue;
        }
        let Some(backup_id) = shift.backup_employee_id.as_deref() else {
            continue;
        };
        let Some(&coverage_idx) = coverage_index.get(&(shift.date, backup_id)) else {
            // No coverage record found for the date: degrade gracefully.
            continue;
        };

        let would_have_been = classify_as_worked(shift, config, calendar);
        breakdowns[coverage_idx].credit(&would_have_been);
        covered_dates.insert((backup_id.to_string(), shift.date));
    }

    let mut backup_days: HashMap<String, u32> = HashMap::new();
    for (employee_id, _) in covered_dates {
        *backup_days.entry(employee_id).or_insert(0) += 1;
    }
    backup_days
}
