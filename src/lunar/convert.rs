use std::fmt;

use chrono::{Datelike, Days, NaiveDate};
use serde::ser::{Serialize, SerializeStruct, Serializer};
use tracing::debug;

use super::names;
use super::table::{LunarYear, days_before_year, locate_year};
use crate::consts::LUNAR_EPOCH_YMD;
use crate::{CalendarError, Day, LUNAR_YEAR_RANGE, Month, Zodiac};

/// Lunar new year of 1900, day zero of every conversion.
pub const LUNAR_EPOCH: NaiveDate = match NaiveDate::from_ymd_opt(LUNAR_EPOCH_YMD.0, LUNAR_EPOCH_YMD.1, LUNAR_EPOCH_YMD.2) {
    Some(date) => date,
    None => panic!("lunar epoch is not a valid date"),
};

/// A date in the Chinese lunar calendar.
///
/// Only produced by the converters, so the month and day always exist in
/// the given year and `is_leap_month` is only set on that year's leap month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LunarDate {
    year:          i32,
    month:         Month,
    day:           Day,
    is_leap_month: bool,
}

impl LunarDate {
    pub const fn year(&self) -> i32 {
        self.year
    }

    pub const fn month(&self) -> Month {
        self.month
    }

    pub const fn day(&self) -> Day {
        self.day
    }

    pub const fn is_leap_month(&self) -> bool {
        self.is_leap_month
    }

    /// Stem-branch pair of the year, e.g. `丙午`
    pub fn gan_zhi(&self) -> String {
        names::gan_zhi(self.year)
    }

    /// Year name, e.g. `丙午年`
    pub fn year_name(&self) -> String {
        format!("{}年", self.gan_zhi())
    }

    pub const fn zodiac(&self) -> Zodiac {
        names::zodiac(self.year)
    }

    /// Month name, e.g. `正月` or `闰六月`
    pub fn month_name(&self) -> String {
        names::month_name(self.month, self.is_leap_month)
    }

    /// Day name, e.g. `初一`
    pub fn day_name(&self) -> &'static str {
        names::day_name(self.day)
    }
}

impl fmt::Display for LunarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.year_name(), self.month_name(), self.day_name())
    }
}

impl Serialize for LunarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("LunarDate", 9)?;
        state.serialize_field("year", &self.year)?;
        state.serialize_field("month", &self.month)?;
        state.serialize_field("day", &self.day)?;
        state.serialize_field("is_leap_month", &self.is_leap_month)?;
        state.serialize_field("year_name", &self.year_name())?;
        state.serialize_field("month_name", &self.month_name())?;
        state.serialize_field("day_name", self.day_name())?;
        state.serialize_field("zodiac", self.zodiac().chinese())?;
        state.serialize_field("gan_zhi", &self.gan_zhi())?;
        state.end()
    }
}

/// Converts a lunar date to its Gregorian date.
///
/// # Errors
/// - `YearOutOfRange` outside 1900–2100, `MonthOutOfRange`, or
///   `DayOutOfRange` when `day` is past the month's actual length
/// - `InvalidLeapMonth` when `is_leap_month` is set but `month` is not the
///   year's leap month
pub fn lunar_to_solar(year: i32, month: u32, day: u32, is_leap_month: bool) -> Result<NaiveDate, CalendarError> {
    let lunar_year = LunarYear::get(year).inspect_err(|_| debug!(year, month, day, "lunar year rejected"))?;
    let month_number = Month::new(month)?;
    let length = lunar_year.month_length(month, is_leap_month)?;
    Day::new(day)
        .ok()
        .filter(|d| d.get() <= length)
        .ok_or_else(|| {
            debug!(year, month, day, length, "lunar day rejected");
            CalendarError::DayOutOfRange {
                day,
                max: u32::from(length),
            }
        })?;

    let before_month: u32 = lunar_year
        .months()
        .take_while(|m| !(m.number == month_number.get() && m.is_leap == is_leap_month))
        .map(|m| u32::from(m.days))
        .sum();
    let offset = days_before_year(year)? + before_month + (day - 1);

    LUNAR_EPOCH
        .checked_add_days(Days::new(u64::from(offset)))
        .ok_or(CalendarError::YearOutOfRange {
            year,
            range: LUNAR_YEAR_RANGE,
        })
}

/// Converts a Gregorian date to the lunar calendar.
///
/// # Errors
/// - `YearOutOfRange` when the Gregorian year is outside 1900–2100
/// - `EpochUnderflow` for dates before 1900-01-31
pub fn solar_to_lunar(date: NaiveDate) -> Result<LunarDate, CalendarError> {
    LUNAR_YEAR_RANGE
        .check(date.year())
        .inspect_err(|_| debug!(%date, "solar year outside lunar table"))?;

    let offset = u32::try_from((date - LUNAR_EPOCH).num_days()).map_err(|_| {
        debug!(%date, "solar date precedes lunar epoch");
        CalendarError::EpochUnderflow {
            date,
            epoch: LUNAR_EPOCH,
        }
    })?;

    let (lunar_year, mut remaining) = locate_year(offset).ok_or(CalendarError::YearOutOfRange {
        year: date.year(),
        range: LUNAR_YEAR_RANGE,
    })?;

    for month in lunar_year.months() {
        let days = u32::from(month.days);
        if remaining < days {
            return Ok(LunarDate {
                year:          lunar_year.year(),
                month:         Month::new(u32::from(month.number))?,
                day:           Day::new(remaining + 1)?,
                is_leap_month: month.is_leap,
            });
        }
        remaining -= days;
    }

    // locate_year keeps the remainder below the year's total
    Err(CalendarError::YearOutOfRange {
        year: date.year(),
        range: LUNAR_YEAR_RANGE,
    })
}

/// Like [`solar_to_lunar`], starting from a Gregorian triple.
///
/// # Errors
/// `YearOutOfRange` first, then `InvalidSolarDate` for triples naming no
/// real date, then the errors of [`solar_to_lunar`].
pub fn solar_ymd_to_lunar(year: i32, month: u32, day: u32) -> Result<LunarDate, CalendarError> {
    LUNAR_YEAR_RANGE.check(year)?;
    let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        debug!(year, month, day, "invalid solar date");
        CalendarError::InvalidSolarDate { year, month, day }
    })?;
    solar_to_lunar(date)
}
