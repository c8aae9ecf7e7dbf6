use chrono::{NaiveDate, NaiveDateTime};

/// Builds a date known to be valid.
pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Builds a civil instant known to be valid.
pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    ymd(year, month, day).and_hms_opt(hour, minute, 0).unwrap()
}
