//! Period aggregation.
//!
//! Combines per-shift classifications, absence tallies, and backup credit
//! into the per-employee and combined statistics consumed by the export
//! renderer. This is the single place where minutes become hour figures
//! (two decimals); summing happens at minute level so per-shift rounding
//! error cannot compound across a month.

use std::collections::{BTreeMap, HashMap};

use rust_decimal::Decimal;

use crate::config::EngineConfig;
use crate::models::{
    ClassificationRow, Employee, EmployeeStatistics, PeriodStatistics, ShiftRecord,
};

use super::absence::AbsenceTally;
use super::backup_credit::apply_backup_credit;
use super::classifier::{MinuteBreakdown, classify};
use super::holiday_calendar::HolidayCalendar;

/// Converts whole minutes to an hour figure rounded to two decimals.
///
/// # Example
///
/// ```
/// use dienstplan_engine::calculation::minutes_to_hours;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(minutes_to_hours(480), Decimal::from_str("8").unwrap());
/// assert_eq!(minutes_to_hours(50), Decimal::from_str("0.83").unwrap());
/// ```
pub fn minutes_to_hours(minutes: i64) -> Decimal {
    (Decimal::new(minutes, 0) / Decimal::new(60, 0)).round_dp(2)
}

/// Builds the complete statistics for a team and period.
///
/// A pure function of the snapshot: identical input yields identical
/// output, with no side effects on repeat calls. Every employee passed in
/// appears in the result, including those without any shifts; employees
/// appearing only through shift records are included as well.
///
/// The flat entry list covers every shift in the snapshot (absent shifts
/// carry zero worked hours), sorted by date ascending with ties broken by
/// case-insensitive employee name.
pub fn build_period(
    employees: &[Employee],
    shifts: &[ShiftRecord],
    config: &EngineConfig,
    calendar: &HolidayCalendar,
) -> PeriodStatistics {
    let names: HashMap<&str, &str> = employees
        .iter()
        .map(|e| (e.id.as_str(), e.name.as_str()))
        .collect();

    // Pass 1: classify every record independently and in isolation.
    let mut breakdowns: Vec<MinuteBreakdown> =
        shifts.iter().map(|s| classify(s, config, calendar)).collect();

    // Pass 2: keyed lookup applies backup credit onto coverage rows.
    let backup_days = apply_backup_credit(shifts, &mut breakdowns, config, calendar);

    // Fold per employee.
    let mut minute_sums: BTreeMap<String, MinuteBreakdown> = BTreeMap::new();
    let mut tallies: BTreeMap<String, AbsenceTally> = BTreeMap::new();
    for employee in employees {
        minute_sums.entry(employee.id.clone()).or_default();
    }
    for (shift, breakdown) in shifts.iter().zip(&breakdowns) {
        let sum = minute_sums.entry(shift.employee_id.clone()).or_default();
        sum.total += breakdown.total;
        sum.night += breakdown.night;
        sum.sunday += breakdown.sunday;
        sum.holiday += breakdown.holiday;
        sum.planned += breakdown.planned;

        tallies
            .entry(shift.employee_id.clone())
            .or_default()
            .accumulate(shift);
    }

    let mut per_employee: BTreeMap<String, EmployeeStatistics> = BTreeMap::new();
    let mut total_sum = MinuteBreakdown::default();
    let mut total_tally = AbsenceTally::default();
    let mut total_backup_days = 0;
    for (employee_id, sum) in minute_sums {
        let tally = tallies.get(&employee_id).copied().unwrap_or_default();
        let days = backup_days.get(&employee_id).copied().unwrap_or(0);

        total_sum.total += sum.total;
        total_sum.night += sum.night;
        total_sum.sunday += sum.sunday;
        total_sum.holiday += sum.holiday;
        total_sum.planned += sum.planned;
        total_tally.sick_days += tally.sick_days;
        total_tally.sick_minutes += tally.sick_minutes;
        total_tally.vacation_days += tally.vacation_days;
        total_tally.vacation_minutes += tally.vacation_minutes;
        total_backup_days += days;

        per_employee.insert(employee_id, into_statistics(&sum, &tally, days));
    }
    let totals = into_statistics(&total_sum, &total_tally, total_backup_days);

    // Combined flat list for multi-employee exports.
    let mut entries: Vec<ClassificationRow> = shifts
        .iter()
        .zip(&breakdowns)
        .map(|(shift, breakdown)| ClassificationRow {
            shift_id: shift.id.clone(),
            employee_id: shift.employee_id.clone(),
            employee_name: names
                .get(shift.employee_id.as_str())
                .map(|n| n.to_string())
                .unwrap_or_else(|| shift.employee_id.clone()),
            date: shift.date,
            total_hours: minutes_to_hours(breakdown.total),
            night_hours: minutes_to_hours(breakdown.night),
            sunday_hours: minutes_to_hours(breakdown.sunday),
            holiday_hours: minutes_to_hours(breakdown.holiday),
            note: shift.note.clone(),
        })
        .collect();
    entries.sort_by(|a, b| {
        a.date
            .cmp(&b.date)
            .then_with(|| a.employee_name.to_lowercase().cmp(&b.employee_name.to_lowercase()))
            .then_with(|| a.shift_id.cmp(&b.shift_id))
    });

    PeriodStatistics {
        per_employee,
        entries,
        totals,
    }
}

fn into_statistics(sum: &MinuteBreakdown, tally: &AbsenceTally, backup_days: u32) -> EmployeeStatistics {
    EmployeeStatistics {
        total_hours: minutes_to_hours(sum.total),
        night_hours: minutes_to_hours(sum.night),
        sunday_hours: minutes_to_hours(sum.sunday),
        holiday_hours: minutes_to_hours(sum.holiday),
        planned_hours: minutes_to_hours(sum.planned),
        sick_days: tally.sick_days,
        sick_hours: minutes_to_hours(tally.sick_minutes),
        vacation_days: tally.vacation_days,
        vacation_hours: minutes_to_hours(tally.vacation_minutes),
        backup_days,
    }
}
