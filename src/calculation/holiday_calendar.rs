//! Public holiday computation for North Rhine-Westphalia.
//!
//! Holidays are a pure function of the year: fixed dates plus the movable
//! feasts derived from the Gregorian Easter Sunday. Nothing is cached
//! across requests and nothing is persisted.

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::models::{HolidayEntry, Period};

/// Computes the Gregorian Easter Sunday for a year.
///
/// Uses the anonymous Gregorian (Meeus/Jones/Butcher) algorithm, valid for
/// all years in the Gregorian calendar.
///
/// # Example
///
/// ```
/// use dienstplan_engine::calculation::easter_sunday;
/// use chrono::NaiveDate;
///
/// assert_eq!(easter_sunday(2026), NaiveDate::from_ymd_opt(2026, 4, 5).unwrap());
/// ```
pub fn easter_sunday(year: i32) -> NaiveDate {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;
    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
        .expect("Easter algorithm yields a valid March or April date")
}

/// Computes the public holidays of North Rhine-Westphalia for a year.
///
/// Fixed holidays: New Year (Jan 1), Labour Day (May 1), German Unity Day
/// (Oct 3), All Saints (Nov 1), Christmas Day (Dec 25) and Boxing Day
/// (Dec 26). Movable holidays are offsets from Easter Sunday: Good Friday
/// (−2), Easter Monday (+1), Ascension (+39), Whit Monday (+50) and
/// Corpus Christi (+60).
///
/// Entries are exact dates, sorted ascending. A holiday that falls on a
/// Sunday is still a holiday; the Sunday and holiday premium pools are
/// independent and both credited from the same worked minutes.
pub fn holidays_for_year(year: i32) -> Vec<HolidayEntry> {
    let easter = easter_sunday(year);
    let fixed = |month: u32, day: u32, name: &str| HolidayEntry {
        date: NaiveDate::from_ymd_opt(year, month, day).expect("fixed holiday date is valid"),
        name: name.to_string(),
    };
    let movable = |offset: i64, name: &str| HolidayEntry {
        date: easter + chrono::Duration::days(offset),
        name: name.to_string(),
    };

    let mut holidays = vec![
        fixed(1, 1, "Neujahr"),
        movable(-2, "Karfreitag"),
        movable(1, "Ostermontag"),
        fixed(5, 1, "Tag der Arbeit"),
        movable(39, "Christi Himmelfahrt"),
        movable(50, "Pfingstmontag"),
        movable(60, "Fronleichnam"),
        fixed(10, 3, "Tag der Deutschen Einheit"),
        fixed(11, 1, "Allerheiligen"),
        fixed(12, 25, "1. Weihnachtstag"),
        fixed(12, 26, "2. Weihnachtstag"),
    ];
    holidays.sort_by_key(|h| h.date);
    holidays
}

/// A date lookup over the holidays of one or more years.
///
/// Built fresh per aggregation request from the years a period spans.
///
/// # Example
///
/// ```
/// use dienstplan_engine::calculation::HolidayCalendar;
/// use chrono::NaiveDate;
///
/// let calendar = HolidayCalendar::for_years(&[2026]);
/// assert!(calendar.is_holiday(NaiveDate::from_ymd_opt(2026, 5, 1).unwrap()));
/// assert!(!calendar.is_holiday(NaiveDate::from_ymd_opt(2026, 5, 2).unwrap()));
/// ```
#[derive(Debug, Clone)]
pub struct HolidayCalendar {
    dates: HashSet<NaiveDate>,
}

impl HolidayCalendar {
    /// Builds a calendar covering the given years.
    pub fn for_years(years: &[i32]) -> Self {
        let dates = years
            .iter()
            .flat_map(|&year| holidays_for_year(year))
            .map(|h| h.date)
            .collect();
        Self { dates }
    }

    /// Builds a calendar covering every year the period touches.
    pub fn for_period(period: &Period) -> Self {
        Self::for_years(&period.years())
    }

    /// Returns true if the date is a public holiday.
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }
}
