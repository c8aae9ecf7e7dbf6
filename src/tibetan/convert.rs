//! Tibetan dates by a fixed one-month offset from the Gregorian calendar.
//!
//! Tibetan month `m` of year `y` is taken to be Gregorian month `m + 1`
//! (Tibetan month 12 falls in January of `y + 1`), with the day of month
//! carried over unchanged. This is an approximation, not an astronomical
//! Tibetan calendar.

use std::fmt;

use chrono::{Datelike, Days, NaiveDate};
use serde::ser::{Serialize, SerializeStruct, Serializer};
use tracing::debug;

use super::names::{day_name_tibetan, month_name_chinese, month_name_tibetan};
use super::year::{Element, element, full_year_name, is_double_day, is_missing_day, year_element_name, zodiac};
use crate::consts::MAX_MONTH;
use crate::{CalendarError, Day, Month, TIBETAN_YEAR_RANGE, Zodiac};

/// A date in the Tibetan calendar.
///
/// The day is carried over from the Gregorian date, so it can be 31.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TibetanDate {
    year:           i32,
    month:          Month,
    day:            u8,
    is_missing_day: bool,
    is_double_day:  bool,
}

impl TibetanDate {
    pub const fn year(&self) -> i32 {
        self.year
    }

    pub const fn month(&self) -> Month {
        self.month
    }

    pub const fn day(&self) -> u8 {
        self.day
    }

    pub const fn is_missing_day(&self) -> bool {
        self.is_missing_day
    }

    pub const fn is_double_day(&self) -> bool {
        self.is_double_day
    }

    pub const fn element(&self) -> Element {
        element(self.year)
    }

    pub const fn zodiac(&self) -> Zodiac {
        zodiac(self.year)
    }

    /// Element and animal of the year, e.g. `火马年`
    pub fn year_element(&self) -> String {
        year_element_name(self.year)
    }

    /// Rabjung year name, e.g. `第17绕迥火马年`
    pub fn full_year_name(&self) -> String {
        full_year_name(self.year)
    }

    pub fn month_name_chinese(&self) -> &'static str {
        month_name_chinese(self.month)
    }

    pub fn month_name_tibetan(&self) -> &'static str {
        month_name_tibetan(self.month)
    }

    /// `None` on day 31
    pub fn day_name_tibetan(&self) -> Option<&'static str> {
        day_name_tibetan(self.day)
    }
}

impl fmt::Display for TibetanDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}日", self.year_element(), self.month_name_chinese(), self.day)
    }
}

impl Serialize for TibetanDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("TibetanDate", 9)?;
        state.serialize_field("year", &self.year)?;
        state.serialize_field("month", &self.month)?;
        state.serialize_field("day", &self.day)?;
        state.serialize_field("year_element", &self.year_element())?;
        state.serialize_field("month_name_tibetan", self.month_name_tibetan())?;
        state.serialize_field("month_name_chinese", self.month_name_chinese())?;
        state.serialize_field("day_name_tibetan", &self.day_name_tibetan())?;
        state.serialize_field("is_missing_day", &self.is_missing_day)?;
        state.serialize_field("is_double_day", &self.is_double_day)?;
        state.end()
    }
}

/// Converts a Gregorian date to the Tibetan calendar.
///
/// January belongs to the twelfth month of the previous Tibetan year, so
/// January 1950 converts to Tibetan 1949.
///
/// # Errors
/// Returns `CalendarError::YearOutOfRange` when the Gregorian year lies
/// outside 1950–2050.
pub fn solar_date_to_tibetan(date: NaiveDate) -> Result<TibetanDate, CalendarError> {
    TIBETAN_YEAR_RANGE
        .check(date.year())
        .inspect_err(|_| debug!(%date, "solar year outside Tibetan range"))?;

    let (year, month) = match date.month() {
        1 => (date.year() - 1, u32::from(MAX_MONTH)),
        m => (date.year(), m - 1),
    };

    let day = date.day();
    Ok(TibetanDate {
        year,
        month: Month::new(month)?,
        day: day as u8,
        is_missing_day: is_missing_day(year, month, day),
        is_double_day: is_double_day(year, month, day),
    })
}

/// Like [`solar_date_to_tibetan`], starting from a Gregorian triple.
///
/// # Errors
/// `YearOutOfRange` first, then `InvalidSolarDate` for triples naming no
/// real date.
pub fn solar_to_tibetan(year: i32, month: u32, day: u32) -> Result<TibetanDate, CalendarError> {
    TIBETAN_YEAR_RANGE.check(year)?;
    let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        debug!(year, month, day, "invalid solar date");
        CalendarError::InvalidSolarDate { year, month, day }
    })?;
    solar_date_to_tibetan(date)
}

/// Converts a Tibetan date to its Gregorian date.
///
/// Days past the end of the Gregorian month roll over into the next one,
/// so Tibetan 1/30 is March 2 in a common year.
///
/// # Errors
/// `YearOutOfRange` outside 1950–2050, `MonthOutOfRange`, or
/// `DayOutOfRange` outside 1–30.
pub fn tibetan_to_solar(year: i32, month: u32, day: u32) -> Result<NaiveDate, CalendarError> {
    let year = TIBETAN_YEAR_RANGE
        .check(year)
        .inspect_err(|_| debug!(year, month, day, "Tibetan year rejected"))?;
    let month = Month::new(month)?;
    let day = Day::new(day)?;

    let (solar_year, solar_month) = if month.get() == MAX_MONTH {
        (year + 1, 1)
    } else {
        (year, u32::from(month) + 1)
    };
    let first = NaiveDate::from_ymd_opt(solar_year, solar_month, 1).ok_or(CalendarError::InvalidSolarDate {
        year:  solar_year,
        month: solar_month,
        day:   1,
    })?;
    Ok(first + Days::new(u64::from(day.get()) - 1))
}
