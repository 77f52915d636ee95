//! Derived statistics models.
//!
//! These types capture the output of period aggregation: per-employee
//! statistics, the combined flat classification list, and period totals.
//! They are computed fresh from shift records on every request and never
//! independently mutated.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Payroll-relevant statistics for one employee over one period.
///
/// Hour figures are rounded to two decimals once, at aggregation; the
/// underlying arithmetic is whole minutes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeStatistics {
    /// Confirmed worked hours.
    pub total_hours: Decimal,
    /// Worked hours inside the night window.
    pub night_hours: Decimal,
    /// Worked hours credited to the Sunday premium pool.
    pub sunday_hours: Decimal,
    /// Worked hours credited to the public-holiday premium pool.
    pub holiday_hours: Decimal,
    /// Planned hours, tracked for plan-vs-actual comparison.
    pub planned_hours: Decimal,
    /// Number of shifts marked sick.
    pub sick_days: u32,
    /// Planned hours of shifts marked sick.
    pub sick_hours: Decimal,
    /// Number of shifts marked vacation.
    pub vacation_days: u32,
    /// Planned hours of shifts marked vacation.
    pub vacation_hours: Decimal,
    /// Number of dates on which this employee covered for someone else.
    pub backup_days: u32,
}

/// One per-shift classification entry in the combined flat export list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationRow {
    /// The shift this row was computed from.
    pub shift_id: String,
    /// The employee the hours belong to.
    pub employee_id: String,
    /// The employee's display name (anonymized in invoice exports).
    pub employee_name: String,
    /// The calendar date of the shift.
    pub date: NaiveDate,
    /// Worked hours for this shift, including any backup credit.
    pub total_hours: Decimal,
    /// Night-window hours for this shift, including any backup credit.
    pub night_hours: Decimal,
    /// Sunday hours for this shift, including any backup credit.
    pub sunday_hours: Decimal,
    /// Holiday hours for this shift, including any backup credit.
    pub holiday_hours: Decimal,
    /// The shift's free-text note (scrubbed in invoice exports).
    #[serde(default)]
    pub note: Option<String>,
}

/// The complete aggregation output for a team and period.
///
/// Recomputing this over an unchanged snapshot of shift records yields an
/// identical value; the builder is a pure function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodStatistics {
    /// Statistics per employee, keyed by employee id.
    pub per_employee: BTreeMap<String, EmployeeStatistics>,
    /// The combined, date-sorted flat list of per-shift entries across all
    /// employees.
    pub entries: Vec<ClassificationRow>,
    /// Combined totals across all employees, summed at minute level.
    pub totals: EmployeeStatistics,
}
