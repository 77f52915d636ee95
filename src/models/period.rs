//! Aggregation period and public holiday models.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A single regional public holiday.
///
/// Holiday entries are derived per year from a fixed ruleset and never
/// persisted.
///
/// # Example
///
/// ```
/// use dienstplan_engine::models::HolidayEntry;
/// use chrono::NaiveDate;
///
/// let holiday = HolidayEntry {
///     date: NaiveDate::from_ymd_opt(2026, 5, 1).unwrap(),
///     name: "Tag der Arbeit".to_string(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayEntry {
    /// The exact date of the holiday.
    pub date: NaiveDate,
    /// The name of the holiday (e.g., "Fronleichnam").
    pub name: String,
}

/// An inclusive calendar date range, typically one month.
///
/// # Example
///
/// ```
/// use dienstplan_engine::models::Period;
/// use chrono::NaiveDate;
///
/// let period = Period {
///     start_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
/// };
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    /// The start date of the period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the period (inclusive).
    pub end_date: NaiveDate,
}

impl Period {
    /// Checks if a given date falls within this period, inclusive of both
    /// bounds.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// The calendar years this period touches, in ascending order.
    ///
    /// Holiday computation needs every year a period spans; a December to
    /// January export touches two.
    pub fn years(&self) -> Vec<i32> {
        (self.start_date.year()..=self.end_date.year()).collect()
    }
}
