//! Festival reference data shared by both calendars.

use std::borrow::Cow;

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::consts::{MAX_SOLAR_DAY, MAX_WEEK_OF_MONTH};
use crate::lunar::lunar_to_solar;
use crate::tibetan::tibetan_to_solar;
use crate::{CalendarError, CalendarType, Day, Month, prelude::*};

/// When a festival falls, in the calendar that defines it.
///
/// Month and day are kept as plain numbers so festival tables can be built
/// at compile time. Deserialized values are checked against the bounds of
/// their calendar; whether the day exists in a given year is only known
/// when resolving it to a solar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "calendar", rename_all = "snake_case", try_from = "UncheckedFestivalDate")]
pub enum FestivalDate {
    /// Same Gregorian month and day every year
    Fixed { month: u8, day: u8 },
    /// The `week`th `weekday` of a Gregorian month (`week` counts from 1)
    Relative { month: u8, week: u8, weekday: Weekday },
    /// Lunar month and day, never the leap month
    Lunar { month: u8, day: u8 },
    /// Tibetan month and day
    Tibetan { month: u8, day: u8 },
}

/// Wire form of [`FestivalDate`] before its bounds are checked.
#[derive(Deserialize)]
#[serde(tag = "calendar", rename_all = "snake_case")]
enum UncheckedFestivalDate {
    Fixed { month: u8, day: u8 },
    Relative { month: u8, week: u8, weekday: Weekday },
    Lunar { month: u8, day: u8 },
    Tibetan { month: u8, day: u8 },
}

impl TryFrom<UncheckedFestivalDate> for FestivalDate {
    type Error = CalendarError;

    fn try_from(unchecked: UncheckedFestivalDate) -> Result<Self, Self::Error> {
        let date = match unchecked {
            UncheckedFestivalDate::Fixed { month, day } => Self::Fixed { month, day },
            UncheckedFestivalDate::Relative { month, week, weekday } => Self::Relative { month, week, weekday },
            UncheckedFestivalDate::Lunar { month, day } => Self::Lunar { month, day },
            UncheckedFestivalDate::Tibetan { month, day } => Self::Tibetan { month, day },
        };
        date.check_bounds()?;
        Ok(date)
    }
}

impl FestivalDate {
    /// Checks month 1-12, day 1-31 for fixed dates and 1-30 otherwise, and
    /// week 1-5.
    fn check_bounds(&self) -> Result<(), CalendarError> {
        Month::new(u32::from(self.month()))?;
        match *self {
            Self::Fixed { day, .. } if !(1..=MAX_SOLAR_DAY).contains(&day) => Err(CalendarError::DayOutOfRange {
                day: u32::from(day),
                max: u32::from(MAX_SOLAR_DAY),
            }),
            Self::Fixed { .. } => Ok(()),
            Self::Relative { week, .. } if !(1..=MAX_WEEK_OF_MONTH).contains(&week) => {
                Err(CalendarError::WeekOutOfRange { week })
            }
            Self::Relative { .. } => Ok(()),
            Self::Lunar { day, .. } | Self::Tibetan { day, .. } => Day::new(u32::from(day)).map(|_| ()),
        }
    }

    /// Month number in the festival's own calendar
    pub const fn month(&self) -> u8 {
        match *self {
            Self::Fixed { month, .. }
            | Self::Relative { month, .. }
            | Self::Lunar { month, .. }
            | Self::Tibetan { month, .. } => month,
        }
    }

    /// Resolves the date in `year` to a Gregorian date.
    ///
    /// `year` is read in the festival's own calendar: a Tibetan 12th-month
    /// festival of `year` lands in January of `year + 1`.
    ///
    /// # Errors
    /// - `InvalidSolarDate` for a fixed date that does not exist in `year`
    /// - `NoSuchWeekday` when the month has no such `week`
    /// - the conversion errors of the lunar or Tibetan calendar, including
    ///   `DayOutOfRange` for a lunar day past the end of a short month
    pub fn solar_date(&self, year: i32) -> Result<NaiveDate, CalendarError> {
        match *self {
            Self::Fixed { month, day } => {
                NaiveDate::from_ymd_opt(year, u32::from(month), u32::from(day)).ok_or(CalendarError::InvalidSolarDate {
                    year,
                    month: u32::from(month),
                    day: u32::from(day),
                })
            }
            Self::Relative { month, week, weekday } => {
                NaiveDate::from_weekday_of_month_opt(year, u32::from(month), weekday, week).ok_or(
                    CalendarError::NoSuchWeekday {
                        year,
                        month: u32::from(month),
                        week,
                    },
                )
            }
            Self::Lunar { month, day } => lunar_to_solar(year, u32::from(month), u32::from(day), false),
            Self::Tibetan { month, day } => tibetan_to_solar(year, u32::from(month), u32::from(day)),
        }
    }
}

/// Festival category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
pub enum FestivalType {
    #[display(fmt = "传统节日")]
    Traditional,
    #[display(fmt = "佛教节日")]
    Buddhist,
    #[display(fmt = "国家节日")]
    National,
    #[display(fmt = "节气")]
    SolarTerm,
    #[display(fmt = "自定义")]
    Custom,
}

/// A named festival of one calendar.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display(fmt = "{name}")]
pub struct Festival {
    pub id:            Cow<'static, str>,
    pub name:          Cow<'static, str>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_tibetan:  Option<Cow<'static, str>>,
    pub date:          FestivalDate,
    pub calendar_type: CalendarType,
    pub kind:          FestivalType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description:   Option<Cow<'static, str>>,
}

const fn borrowed(text: Option<&'static str>) -> Option<Cow<'static, str>> {
    match text {
        Some(text) => Some(Cow::Borrowed(text)),
        None => None,
    }
}

impl Festival {
    /// Builds a festival from static text, usable in `static` tables.
    pub const fn from_static(
        id: &'static str,
        name: &'static str,
        name_tibetan: Option<&'static str>,
        date: FestivalDate,
        calendar_type: CalendarType,
        kind: FestivalType,
        description: Option<&'static str>,
    ) -> Self {
        Self {
            id: Cow::Borrowed(id),
            name: Cow::Borrowed(name),
            name_tibetan: borrowed(name_tibetan),
            date,
            calendar_type,
            kind,
            description: borrowed(description),
        }
    }

    /// Gregorian date of the festival in `year` of its own calendar.
    ///
    /// # Errors
    /// See [`FestivalDate::solar_date`].
    pub fn solar_date(&self, year: i32) -> Result<NaiveDate, CalendarError> {
        self.date.solar_date(year)
    }
}
