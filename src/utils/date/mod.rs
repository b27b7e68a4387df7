// Date utility functions
// Day- and minute-granularity arithmetic over naive time points

use chrono::{Duration, NaiveDateTime};

/// Signed difference `to - from` in whole minutes.
pub fn minutes_between(from: NaiveDateTime, to: NaiveDateTime) -> i64 {
    (to - from).num_minutes()
}

/// Shift a time point by a signed number of minutes.
pub fn add_minutes(t: NaiveDateTime, minutes: i64) -> NaiveDateTime {
    t + Duration::minutes(minutes)
}

pub fn is_same_day(date1: NaiveDateTime, date2: NaiveDateTime) -> bool {
    date1.date() == date2.date()
}

pub fn start_of_day(date: NaiveDateTime) -> NaiveDateTime {
    date.date().and_hms_opt(0, 0, 0).unwrap()
}

pub fn end_of_day(date: NaiveDateTime) -> NaiveDateTime {
    date.date().and_hms_opt(23, 59, 59).unwrap()
}

/// Half-open interval membership: `t` is in `[start, end)`.
pub fn in_range(t: NaiveDateTime, start: NaiveDateTime, end: NaiveDateTime) -> bool {
    t >= start && t < end
}
