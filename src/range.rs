use std::{ops::RangeInclusive, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::consts::{LUNAR_MAX_YEAR, LUNAR_MIN_YEAR, TIBETAN_MAX_YEAR, TIBETAN_MIN_YEAR};
use crate::{CalendarError, RANGE_SEPARATOR, prelude::*};

/// Years covered by the lunar year table
pub const LUNAR_YEAR_RANGE: YearRange = YearRange {
    start: LUNAR_MIN_YEAR,
    end:   LUNAR_MAX_YEAR,
};

/// Years the Tibetan converter accepts
pub const TIBETAN_YEAR_RANGE: YearRange = YearRange {
    start: TIBETAN_MIN_YEAR,
    end:   TIBETAN_MAX_YEAR,
};

/// Inclusive range of years a calendar supports.
/// The start year must be less than or equal to the end year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{start}/{end}")]
pub struct YearRange {
    start: i32,
    end:   i32,
}

impl YearRange {
    /// Creates a new year range.
    /// Returns `None` if start > end.
    pub const fn new(start: i32, end: i32) -> Option<Self> {
        if start > end {
            return None;
        }
        Some(Self { start, end })
    }

    /// First supported year
    pub const fn lower_bound(&self) -> i32 {
        self.start
    }

    /// Last supported year (inclusive)
    pub const fn upper_bound(&self) -> i32 {
        self.end
    }

    /// Checks if the range contains a given year
    pub const fn contains(&self, year: i32) -> bool {
        self.start <= year && year <= self.end
    }

    /// Returns `year` unchanged when supported.
    ///
    /// # Errors
    /// Returns `CalendarError::YearOutOfRange` otherwise.
    pub fn check(&self, year: i32) -> Result<i32, CalendarError> {
        if self.contains(year) {
            Ok(year)
        } else {
            Err(CalendarError::YearOutOfRange { year, range: *self })
        }
    }

    /// Pulls `year` to the nearest supported year
    pub fn clamp(&self, year: i32) -> i32 {
        year.clamp(self.start, self.end)
    }

    /// Iterates every supported year
    pub const fn years(&self) -> RangeInclusive<i32> {
        self.start..=self.end
    }
}

impl FromStr for YearRange {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (start, end) = trimmed.split_once(RANGE_SEPARATOR).ok_or_else(|| {
            CalendarError::InvalidRangeFormat(format!("No range separator found (expected '{RANGE_SEPARATOR}'): {s}"))
        })?;

        let parse = |part: &str| {
            part.trim()
                .parse::<i32>()
                .map_err(|_| CalendarError::InvalidRangeFormat(format!("Not a year: {part}")))
        };
        let (start, end) = (parse(start)?, parse(end)?);

        Self::new(start, end)
            .ok_or_else(|| CalendarError::InvalidRangeFormat(format!("start ({start}) is after end ({end})")))
    }
}

impl Serialize for YearRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for YearRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
