//! Overlap between shift spans and recurring daily premium windows.
//!
//! A shift span is defined by wall-clock start and end times on a calendar
//! date; an end at or before the start means the span crosses midnight into
//! the following day. A premium window (e.g. the night window 23:00→06:00)
//! recurs every day and may itself cross midnight. This module expands both
//! into absolute timestamp intervals and sums their overlap in whole
//! minutes.

use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime};

/// Expands wall-clock times on a date into an absolute `[start, end)` pair.
///
/// If `end <= start` the span crosses midnight and ends on the following
/// day. Equal start and end denote a full 24-hour day, not a zero-length
/// shift.
///
/// # Example
///
/// ```
/// use dienstplan_engine::calculation::shift_span;
/// use chrono::{NaiveDate, NaiveTime};
///
/// let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
/// let (start, end) = shift_span(
///     date,
///     NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
///     NaiveTime::from_hms_opt(6, 0, 0).unwrap(),
/// );
/// assert_eq!(start.date(), date);
/// assert_eq!(end.date(), date.succ_opt().unwrap());
/// ```
pub fn shift_span(
    date: NaiveDate,
    start: NaiveTime,
    end: NaiveTime,
) -> (NaiveDateTime, NaiveDateTime) {
    let start_dt = date.and_time(start);
    let end_dt = if end <= start {
        next_day(date).and_time(end)
    } else {
        date.and_time(end)
    };
    (start_dt, end_dt)
}

/// The length of a shift span in whole minutes.
///
/// A `00:00`–`00:00` span yields the full day's 1440 minutes.
pub fn span_minutes(date: NaiveDate, start: NaiveTime, end: NaiveTime) -> i64 {
    let (start_dt, end_dt) = shift_span(date, start, end);
    (end_dt - start_dt).num_minutes()
}

/// The overlap, in whole minutes, between a shift span and a recurring
/// daily window.
///
/// The shift span covers at most two calendar days, so only the window
/// occurrences anchored on `date - 1`, `date` and `date + 1` can intersect
/// it. The occurrences are disjoint, so summing their overlaps cannot
/// double-count.
///
/// # Example
///
/// ```
/// use dienstplan_engine::calculation::overlap_minutes;
/// use chrono::{NaiveDate, NaiveTime};
///
/// let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
/// let t = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();
///
/// // 22:00–06:00 shift against the 23:00–06:00 night window: 7 hours.
/// assert_eq!(overlap_minutes(date, t(22, 0), t(6, 0), t(23, 0), t(6, 0)), 420);
/// ```
pub fn overlap_minutes(
    date: NaiveDate,
    shift_start: NaiveTime,
    shift_end: NaiveTime,
    window_start: NaiveTime,
    window_end: NaiveTime,
) -> i64 {
    let (start_dt, end_dt) = shift_span(date, shift_start, shift_end);

    let mut total = 0;
    for anchor in [prev_day(date), date, next_day(date)] {
        let window_start_dt = anchor.and_time(window_start);
        let window_end_dt = if window_end <= window_start {
            next_day(anchor).and_time(window_end)
        } else {
            anchor.and_time(window_end)
        };

        let overlap_start = start_dt.max(window_start_dt);
        let overlap_end = end_dt.min(window_end_dt);
        if overlap_end > overlap_start {
            total += (overlap_end - overlap_start).num_minutes();
        }
    }
    total
}

fn next_day(date: NaiveDate) -> NaiveDate {
    date.checked_add_days(Days::new(1))
        .expect("date arithmetic stays within chrono's range")
}

fn prev_day(date: NaiveDate) -> NaiveDate {
    date.checked_sub_days(Days::new(1))
        .expect("date arithmetic stays within chrono's range")
}
