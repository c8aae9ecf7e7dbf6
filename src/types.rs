use crate::consts::{BRANCH_CYCLE, MAX_DAY, MAX_MONTH};
use crate::{CalendarError, prelude::*};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;

/// A calendar-local month number guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `CalendarError::MonthOutOfRange` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u32) -> Result<Self, CalendarError> {
        u8::try_from(value)
            .ok()
            .filter(|&m| m <= MAX_MONTH)
            .and_then(NonZeroU8::new)
            .map(Self)
            .ok_or(CalendarError::MonthOutOfRange { month: value })
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u32> for Month {
    type Error = CalendarError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u32 {
    fn from(month: Month) -> Self {
        Self::from(month.0.get())
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A calendar-local day of month guaranteed to be in the range `1..=MAX_DAY` (1..=30)
///
/// Only the outer bound is checked here; whether the day exists in a
/// particular month is the converter's business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating that it's non-zero and <= `MAX_DAY`
    ///
    /// # Errors
    /// Returns `CalendarError::DayOutOfRange` if the value is 0 or > `MAX_DAY`.
    pub fn new(value: u32) -> Result<Self, CalendarError> {
        u8::try_from(value)
            .ok()
            .filter(|&d| d <= MAX_DAY)
            .and_then(NonZeroU8::new)
            .map(Self)
            .ok_or(CalendarError::DayOutOfRange {
                day: value,
                max: u32::from(MAX_DAY),
            })
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u32> for Day {
    type Error = CalendarError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Day> for u32 {
    fn from(day: Day) -> Self {
        Self::from(day.0.get())
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The twelve animals shared by the Chinese branch cycle and the Tibetan year cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Zodiac {
    #[display(fmt = "鼠")]
    Rat,
    #[display(fmt = "牛")]
    Ox,
    #[display(fmt = "虎")]
    Tiger,
    #[display(fmt = "兔")]
    Rabbit,
    #[display(fmt = "龙")]
    Dragon,
    #[display(fmt = "蛇")]
    Snake,
    #[display(fmt = "马")]
    Horse,
    #[display(fmt = "羊")]
    Goat,
    #[display(fmt = "猴")]
    Monkey,
    #[display(fmt = "鸡")]
    Rooster,
    #[display(fmt = "狗")]
    Dog,
    #[display(fmt = "猪")]
    Pig,
}

impl Zodiac {
    /// All animals in cycle order, rat first.
    pub const ALL: [Self; 12] = [
        Self::Rat,
        Self::Ox,
        Self::Tiger,
        Self::Rabbit,
        Self::Dragon,
        Self::Snake,
        Self::Horse,
        Self::Goat,
        Self::Monkey,
        Self::Rooster,
        Self::Dog,
        Self::Pig,
    ];

    const TIBETAN: [&'static str; 12] = [
        "བྱི་བ", "གླང་", "སྟག", "ཡོས", "འབྲུག", "སྦྲུལ", "རྟ", "ལུག", "སྤྲེལ", "བྱ", "ཁྱི", "ཕག",
    ];

    /// Animal at `index` in the cycle; any integer is reduced modulo 12.
    pub const fn from_index(index: i32) -> Self {
        Self::ALL[index.rem_euclid(BRANCH_CYCLE) as usize]
    }

    /// Position in the cycle, rat = 0
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Chinese name
    pub fn chinese(self) -> &'static str {
        const NAMES: [&str; 12] = ["鼠", "牛", "虎", "兔", "龙", "蛇", "马", "羊", "猴", "鸡", "狗", "猪"];
        NAMES[self.index()]
    }

    /// Tibetan name
    pub const fn tibetan(self) -> &'static str {
        Self::TIBETAN[self.index()]
    }
}

/// Calendar a date or festival belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
pub enum CalendarType {
    #[display(fmt = "公历")]
    Solar,
    #[display(fmt = "农历")]
    Lunar,
    #[display(fmt = "藏历")]
    Tibetan,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_new_valid() {
        for m in 1..=12 {
            assert!(Month::new(m).is_ok(), "Month {m} should be valid");
        }
    }

    #[test]
    fn test_month_new_invalid() {
        for m in [0, 13, 255, 256, u32::MAX] {
            assert_eq!(Month::new(m), Err(CalendarError::MonthOutOfRange { month: m }));
        }
    }

    #[test]
    fn test_month_get_and_into() {
        let month = Month::new(8).unwrap();
        assert_eq!(month.get(), 8);
        assert_eq!(u32::from(month), 8);
        assert_eq!(month.to_string(), "8");
    }

    #[test]
    fn test_month_serde() {
        let month = Month::new(8).unwrap();
        let json = serde_json::to_string(&month).unwrap();
        assert_eq!(json, "8");

        let parsed: Month = serde_json::from_str(&json).unwrap();
        assert_eq!(month, parsed);

        let bad: Result<Month, _> = serde_json::from_str("13");
        assert!(bad.is_err());
    }

    #[test]
    fn test_day_bounds() {
        assert!(Day::new(1).is_ok());
        assert!(Day::new(30).is_ok());
        assert_eq!(Day::new(0), Err(CalendarError::DayOutOfRange { day: 0, max: 30 }));
        assert_eq!(Day::new(31), Err(CalendarError::DayOutOfRange { day: 31, max: 30 }));
    }

    #[test]
    fn test_day_ordering() {
        let d1 = Day::new(10).unwrap();
        let d2 = Day::new(20).unwrap();
        assert!(d1 < d2);
        assert_eq!(d1, d1);
    }

    #[test]
    fn test_day_serde() {
        let day = Day::new(15).unwrap();
        let json = serde_json::to_string(&day).unwrap();
        assert_eq!(json, "15");

        let parsed: Day = serde_json::from_str(&json).unwrap();
        assert_eq!(day, parsed);

        let bad: Result<Day, _> = serde_json::from_str("0");
        assert!(bad.is_err());
    }

    #[test]
    fn test_zodiac_cycle() {
        assert_eq!(Zodiac::from_index(0), Zodiac::Rat);
        assert_eq!(Zodiac::from_index(11), Zodiac::Pig);
        assert_eq!(Zodiac::from_index(12), Zodiac::Rat);
        assert_eq!(Zodiac::from_index(-1), Zodiac::Pig);

        for (i, animal) in Zodiac::ALL.iter().enumerate() {
            assert_eq!(animal.index(), i);
            assert_eq!(animal.to_string(), animal.chinese());
        }
    }

    #[test]
    fn test_zodiac_names() {
        assert_eq!(Zodiac::Horse.chinese(), "马");
        assert_eq!(Zodiac::Horse.tibetan(), "རྟ");
        assert_eq!(Zodiac::Rat.tibetan(), "བྱི་བ");
    }

    #[test]
    fn test_calendar_type_display_and_serde() {
        assert_eq!(CalendarType::Lunar.to_string(), "农历");
        assert_eq!(CalendarType::Tibetan.to_string(), "藏历");
        assert_eq!(serde_json::to_string(&CalendarType::Solar).unwrap(), r#""solar""#);
    }
}
