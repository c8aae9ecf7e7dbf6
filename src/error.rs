//! Error type shared by every conversion and derivation in the crate.

use chrono::NaiveDate;

use crate::YearRange;

/// Failure of a conversion or derived-date computation.
///
/// Conversions report failures as values so that a caller rendering many
/// days can treat a failed day as "no overlay" and carry on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Year outside the calendar's supported range.
    #[error("year {year} outside supported range {range}")]
    YearOutOfRange { year: i32, range: YearRange },

    /// Month outside `1..=12`.
    #[error("month {month} outside 1-12")]
    MonthOutOfRange { month: u32 },

    /// Day outside `1..=max` for its month.
    #[error("day {day} outside 1-{max}")]
    DayOutOfRange { day: u32, max: u32 },

    /// Week of month outside `1..=5`.
    #[error("week {week} outside 1-5")]
    WeekOutOfRange { week: u8 },

    /// Gregorian triple that names no real date.
    #[error("invalid solar date {year:04}-{month:02}-{day:02}")]
    InvalidSolarDate { year: i32, month: u32, day: u32 },

    /// Leap-month conversion requested for a month that is not intercalary.
    #[error("lunar year {year} has no leap month {month}")]
    InvalidLeapMonth { year: i32, month: u32 },

    /// Relative festival date naming a week the month does not have.
    #[error("{year:04}-{month:02} has no week {week} for that weekday")]
    NoSuchWeekday { year: i32, month: u32, week: u8 },

    /// Solar date before the lunar conversion epoch.
    #[error("{date} precedes the conversion epoch {epoch}")]
    EpochUnderflow { date: NaiveDate, epoch: NaiveDate },

    /// A bounded day-by-day scan ran out of iterations.
    #[error("no matching day within {limit} days of {from}")]
    ScanExhausted { from: NaiveDate, limit: u32 },

    /// Malformed year range text.
    #[error("invalid year range format: {0}")]
    InvalidRangeFormat(String),
}

impl CalendarError {
    /// Whether the error says an input lies outside the calendar's domain.
    pub const fn is_range_error(&self) -> bool {
        matches!(
            self,
            Self::YearOutOfRange { .. }
                | Self::MonthOutOfRange { .. }
                | Self::DayOutOfRange { .. }
                | Self::WeekOutOfRange { .. }
                | Self::InvalidSolarDate { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::ymd;

    #[test]
    fn test_messages() {
        let range = YearRange::new(1900, 2100).expect("valid range");
        let cases = [
            (
                CalendarError::YearOutOfRange { year: 1899, range },
                "year 1899 outside supported range 1900/2100",
            ),
            (CalendarError::MonthOutOfRange { month: 13 }, "month 13 outside 1-12"),
            (CalendarError::DayOutOfRange { day: 30, max: 29 }, "day 30 outside 1-29"),
            (CalendarError::WeekOutOfRange { week: 6 }, "week 6 outside 1-5"),
            (
                CalendarError::InvalidSolarDate {
                    year: 2023,
                    month: 2,
                    day: 29,
                },
                "invalid solar date 2023-02-29",
            ),
            (
                CalendarError::InvalidLeapMonth { year: 2024, month: 4 },
                "lunar year 2024 has no leap month 4",
            ),
            (
                CalendarError::EpochUnderflow {
                    date: ymd(1900, 1, 30),
                    epoch: ymd(1900, 1, 31),
                },
                "1900-01-30 precedes the conversion epoch 1900-01-31",
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.to_string(), expected);
        }
    }

    #[test]
    fn test_range_classification() {
        assert!(CalendarError::MonthOutOfRange { month: 0 }.is_range_error());
        assert!(CalendarError::DayOutOfRange { day: 31, max: 30 }.is_range_error());
        assert!(!CalendarError::InvalidLeapMonth { year: 2024, month: 1 }.is_range_error());
        assert!(
            !CalendarError::EpochUnderflow {
                date: ymd(1900, 1, 1),
                epoch: ymd(1900, 1, 31),
            }
            .is_range_error()
        );
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<CalendarError>();
    }
}
