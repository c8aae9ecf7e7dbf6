//! Lunar year table for 1900–2100.
//!
//! Each packed entry encodes one lunar year:
//!
//! - bits 0–3: the intercalary month (0 when the year has none)
//! - bits 4–15: lengths of months 1–12, month 1 in bit 15 (1 = 30 days, 0 = 29)
//! - bit 16: length of the intercalary month
//!
//! The packed words are decoded into [`LunarYear`] records at compile time.

use crate::consts::{LONG_MONTH_DAYS, LUNAR_MAX_YEAR, LUNAR_MIN_YEAR, MAX_MONTH, SHORT_MONTH_DAYS};
use crate::{CalendarError, LUNAR_YEAR_RANGE};

const YEAR_COUNT: usize = (LUNAR_MAX_YEAR - LUNAR_MIN_YEAR + 1) as usize;

#[rustfmt::skip]
const PACKED_YEARS: [u32; YEAR_COUNT] = [
    0x04bd8, 0x04ae0, 0x0a570, 0x054d5, 0x0d260, 0x0d950, 0x16554, 0x056a0, 0x09ad0, 0x055d2, // 1900
    0x04ae0, 0x0a5b6, 0x0a4d0, 0x0d250, 0x1d255, 0x0b540, 0x0d6a0, 0x0ada2, 0x095b0, 0x14977, // 1910
    0x04970, 0x0a4b0, 0x0b4b5, 0x06a50, 0x06d40, 0x1ab54, 0x02b60, 0x09570, 0x052f2, 0x04970, // 1920
    0x06566, 0x0d4a0, 0x0ea50, 0x06e95, 0x05ad0, 0x02b60, 0x186e3, 0x092e0, 0x1c8d7, 0x0c950, // 1930
    0x0d4a0, 0x1d8a6, 0x0b550, 0x056a0, 0x1a5b4, 0x025d0, 0x092d0, 0x0d2b2, 0x0a950, 0x0b557, // 1940
    0x06ca0, 0x0b550, 0x15355, 0x04da0, 0x0a5d0, 0x14573, 0x052d0, 0x0a9a8, 0x0e950, 0x06aa0, // 1950
    0x0aea6, 0x0ab50, 0x04b60, 0x0aae4, 0x0a570, 0x05260, 0x0f263, 0x0d950, 0x05b57, 0x056a0, // 1960
    0x096d0, 0x04dd5, 0x04ad0, 0x0a4d0, 0x0d4d4, 0x0d250, 0x0d558, 0x0b540, 0x0b5a0, 0x195a6, // 1970
    0x095b0, 0x049b0, 0x0a974, 0x0a4b0, 0x0b27a, 0x06a50, 0x06d40, 0x0af46, 0x0ab60, 0x09570, // 1980
    0x04af5, 0x04970, 0x064b0, 0x074a3, 0x0ea50, 0x06b58, 0x055c0, 0x0ab60, 0x096d5, 0x092e0, // 1990
    0x0c960, 0x0d954, 0x0d4a0, 0x0da50, 0x07552, 0x056a0, 0x0abb7, 0x025d0, 0x092d0, 0x0cab5, // 2000
    0x0a950, 0x0b4a0, 0x0baa4, 0x0ad50, 0x055d9, 0x04ba0, 0x0a5b0, 0x15176, 0x052b0, 0x0a930, // 2010
    0x07954, 0x06aa0, 0x0ad50, 0x05b52, 0x04b60, 0x0a6e6, 0x0a4e0, 0x0d260, 0x0ea65, 0x0d530, // 2020
    0x05aa0, 0x076a3, 0x096d0, 0x04afb, 0x04ad0, 0x0a4d0, 0x1d0b6, 0x0d250, 0x0d520, 0x0dd45, // 2030
    0x0b5a0, 0x056d0, 0x055b2, 0x049b0, 0x0a577, 0x0a4b0, 0x0aa50, 0x1b255, 0x06d20, 0x0ada0, // 2040
    0x14b63, 0x09370, 0x049f8, 0x04970, 0x064b0, 0x168a6, 0x0ea50, 0x06b20, 0x1a6c4, 0x0aae0, // 2050
    0x0a2e0, 0x0d2e3, 0x0c960, 0x0d557, 0x0d4a0, 0x0da50, 0x05d55, 0x056a0, 0x0a6d0, 0x055d4, // 2060
    0x052d0, 0x0a9b8, 0x0a950, 0x0b4a0, 0x0b6a6, 0x0ad50, 0x055a0, 0x0aba4, 0x0a5b0, 0x052b0, // 2070
    0x0b273, 0x06930, 0x07337, 0x06aa0, 0x0ad50, 0x14b55, 0x04b60, 0x0a570, 0x054e4, 0x0d160, // 2080
    0x0e968, 0x0d520, 0x0daa0, 0x16aa6, 0x056d0, 0x04ae0, 0x0a9d4, 0x0a2d0, 0x0d150, 0x0f252, // 2090
    0x0d520,                                                                                     // 2100
];

const LEAP_MONTH_MASK: u32 = 0xf;
const FIRST_MONTH_BIT: u32 = 0x8000;
const LEAP_LENGTH_BIT: u32 = 0x1_0000;

/// Decoded month lengths and leap month of one lunar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LunarYear {
    year:              i32,
    month_lengths:     [u8; 12],
    leap_month:        Option<u8>,
    leap_month_length: Option<u8>,
    total_days:        u16,
}

/// One month of a lunar year in calendar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LunarMonth {
    /// Month number 1–12; a leap month repeats its predecessor's number
    pub number:  u8,
    pub is_leap: bool,
    pub days:    u8,
}

const fn month_days(long: bool) -> u8 {
    if long { LONG_MONTH_DAYS } else { SHORT_MONTH_DAYS }
}

const fn decode(year: i32, info: u32) -> LunarYear {
    let mut month_lengths = [0u8; 12];
    let mut total_days = 0u16;
    let mut m = 0;
    while m < MAX_MONTH as usize {
        month_lengths[m] = month_days(info & (FIRST_MONTH_BIT >> m) != 0);
        total_days += month_lengths[m] as u16;
        m += 1;
    }

    let leap = (info & LEAP_MONTH_MASK) as u8;
    let (leap_month, leap_month_length) = if leap == 0 {
        (None, None)
    } else {
        let length = month_days(info & LEAP_LENGTH_BIT != 0);
        total_days += length as u16;
        (Some(leap), Some(length))
    };

    LunarYear {
        year,
        month_lengths,
        leap_month,
        leap_month_length,
        total_days,
    }
}

const DECODED: [LunarYear; YEAR_COUNT] = {
    let mut years = [decode(LUNAR_MIN_YEAR, 0); YEAR_COUNT];
    let mut i = 0;
    while i < YEAR_COUNT {
        years[i] = decode(LUNAR_MIN_YEAR + i as i32, PACKED_YEARS[i]);
        i += 1;
    }
    years
};

static YEARS: [LunarYear; YEAR_COUNT] = DECODED;

/// Day offset of each lunar new year from the epoch, plus one trailing
/// entry for the day after the table ends.
static DAYS_BEFORE_YEAR: [u32; YEAR_COUNT + 1] = {
    let mut offsets = [0u32; YEAR_COUNT + 1];
    let mut i = 0;
    while i < YEAR_COUNT {
        offsets[i + 1] = offsets[i] + DECODED[i].total_days as u32;
        i += 1;
    }
    offsets
};

fn index_of(year: i32) -> Result<usize, CalendarError> {
    let year = LUNAR_YEAR_RANGE.check(year)?;
    Ok((year - LUNAR_MIN_YEAR) as usize)
}

impl LunarYear {
    /// Looks up the decoded record of `year`.
    ///
    /// # Errors
    /// Returns `CalendarError::YearOutOfRange` outside 1900–2100.
    pub fn get(year: i32) -> Result<&'static Self, CalendarError> {
        Ok(&YEARS[index_of(year)?])
    }

    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Lengths of the twelve regular months, month 1 first
    pub const fn month_lengths(&self) -> [u8; 12] {
        self.month_lengths
    }

    /// The intercalary month, if the year has one
    pub const fn leap_month(&self) -> Option<u8> {
        self.leap_month
    }

    pub const fn leap_month_length(&self) -> Option<u8> {
        self.leap_month_length
    }

    /// Days in the whole year, leap month included
    pub const fn total_days(&self) -> u16 {
        self.total_days
    }

    /// Length of a regular month or, with `is_leap`, of the leap month.
    ///
    /// # Errors
    /// Returns `CalendarError::MonthOutOfRange` for months outside 1–12 and
    /// `CalendarError::InvalidLeapMonth` if `is_leap` names a month that is
    /// not this year's leap month.
    pub fn month_length(&self, month: u32, is_leap: bool) -> Result<u8, CalendarError> {
        if !(1..=u32::from(MAX_MONTH)).contains(&month) {
            return Err(CalendarError::MonthOutOfRange { month });
        }
        if !is_leap {
            return Ok(self.month_lengths[month as usize - 1]);
        }
        match (self.leap_month, self.leap_month_length) {
            (Some(leap), Some(length)) if u32::from(leap) == month => Ok(length),
            _ => Err(CalendarError::InvalidLeapMonth {
                year: self.year,
                month,
            }),
        }
    }

    /// Months in calendar order; the leap month directly follows the
    /// regular month it repeats.
    pub fn months(&self) -> impl Iterator<Item = LunarMonth> + '_ {
        (1..=MAX_MONTH).flat_map(move |number| {
            let regular = LunarMonth {
                number,
                is_leap: false,
                days: self.month_lengths[number as usize - 1],
            };
            let leap = self
                .leap_month
                .zip(self.leap_month_length)
                .filter(|&(leap, _)| leap == number)
                .map(|(_, days)| LunarMonth {
                    number,
                    is_leap: true,
                    days,
                });
            std::iter::once(regular).chain(leap)
        })
    }
}

/// Days in lunar `year`, leap month included.
///
/// # Errors
/// Returns `CalendarError::YearOutOfRange` outside 1900–2100.
pub fn year_total_days(year: i32) -> Result<u32, CalendarError> {
    LunarYear::get(year).map(|y| u32::from(y.total_days()))
}

/// The intercalary month of `year`, if any.
///
/// # Errors
/// Returns `CalendarError::YearOutOfRange` outside 1900–2100.
pub fn leap_month(year: i32) -> Result<Option<u32>, CalendarError> {
    LunarYear::get(year).map(|y| y.leap_month().map(u32::from))
}

/// Days in `month` of `year`, or in its leap month when `is_leap` is set.
///
/// # Errors
/// Returns `CalendarError::YearOutOfRange`, `CalendarError::MonthOutOfRange`
/// or `CalendarError::InvalidLeapMonth`.
pub fn month_length(year: i32, month: u32, is_leap: bool) -> Result<u32, CalendarError> {
    LunarYear::get(year)?.month_length(month, is_leap).map(u32::from)
}

/// Days from the epoch (lunar new year 1900) to the lunar new year of `year`.
///
/// # Errors
/// Returns `CalendarError::YearOutOfRange` outside 1900–2100.
pub fn days_before_year(year: i32) -> Result<u32, CalendarError> {
    Ok(DAYS_BEFORE_YEAR[index_of(year)?])
}

/// Splits a day offset from the epoch into the lunar year containing it and
/// the offset within that year. `None` past the end of the table.
pub(crate) fn locate_year(offset: u32) -> Option<(&'static LunarYear, u32)> {
    if offset >= DAYS_BEFORE_YEAR[YEAR_COUNT] {
        return None;
    }
    let index = DAYS_BEFORE_YEAR.partition_point(|&start| start <= offset) - 1;
    Some((&YEARS[index], offset - DAYS_BEFORE_YEAR[index]))
}
