//! The 24 solar terms by linear approximation.
//!
//! Term `i` of year `y` falls `TERM_OFFSET_MINUTES[i] + (y - 1900) * TROPICAL_YEAR_MINUTES`
//! minutes after 小寒 1900. This drifts from the true astronomical terms by
//! up to a day or so across the supported range.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use serde::Serialize;

use super::names::SOLAR_TERMS;
use crate::consts::{LUNAR_MIN_YEAR, SOLAR_TERM_COUNT, SOLAR_TERM_EPOCH, TROPICAL_YEAR_MINUTES};
use crate::{CalendarError, LUNAR_YEAR_RANGE};

/// Minutes from 小寒 to each term within one year
const TERM_OFFSET_MINUTES: [i64; SOLAR_TERM_COUNT] = [
    0, 21_208, 42_467, 63_836, 85_337, 107_014, 128_867, 150_921, 173_149, 195_551, 218_072, 240_693, //
    263_343, 285_989, 308_563, 331_033, 353_350, 375_494, 397_447, 419_210, 440_795, 462_224, 483_532, 504_758,
];

const EPOCH_DATE: NaiveDate = match NaiveDate::from_ymd_opt(SOLAR_TERM_EPOCH.0, SOLAR_TERM_EPOCH.1, SOLAR_TERM_EPOCH.2) {
    Some(date) => date,
    None => panic!("solar term epoch is not a valid date"),
};

/// One of the 24 solar terms of a particular year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SolarTerm {
    /// Position in the year, 小寒 = 0
    pub index:   usize,
    pub name:    &'static str,
    /// Civil instant of the term
    pub instant: NaiveDateTime,
}

impl SolarTerm {
    /// Calendar day the term falls on
    pub fn date(&self) -> NaiveDate {
        self.instant.date()
    }
}

fn epoch_instant() -> NaiveDateTime {
    let (.., hour, minute) = SOLAR_TERM_EPOCH;
    EPOCH_DATE.and_time(NaiveTime::MIN) + TimeDelta::minutes(i64::from(hour * 60 + minute))
}

/// All 24 terms of `year`, 小寒 first, strictly increasing.
///
/// # Errors
/// Returns `CalendarError::YearOutOfRange` outside 1900–2100.
#[tracing::instrument(level = "trace")]
pub fn solar_terms(year: i32) -> Result<[SolarTerm; SOLAR_TERM_COUNT], CalendarError> {
    let year = LUNAR_YEAR_RANGE.check(year)?;
    let epoch = epoch_instant();
    let year_minutes = i64::from(year - LUNAR_MIN_YEAR) * TROPICAL_YEAR_MINUTES;

    Ok(std::array::from_fn(|index| SolarTerm {
        index,
        name: SOLAR_TERMS[index],
        instant: epoch + TimeDelta::minutes(TERM_OFFSET_MINUTES[index] + year_minutes),
    }))
}

/// A single term of `year` by index (小寒 = 0).
pub(crate) fn solar_term(year: i32, index: usize) -> Result<SolarTerm, CalendarError> {
    let terms = solar_terms(year)?;
    Ok(terms[index % SOLAR_TERM_COUNT])
}

/// The first term at or after `instant` in its year, otherwise the first
/// term of the following year.
///
/// # Errors
/// Returns `CalendarError::YearOutOfRange` when the year (or, after the last
/// term of 2100, the following year) is unsupported.
pub fn current_term(instant: NaiveDateTime) -> Result<SolarTerm, CalendarError> {
    let year = instant.year();
    match solar_terms(year)?.into_iter().find(|term| term.instant >= instant) {
        Some(term) => Ok(term),
        None => solar_term(year + 1, 0),
    }
}

/// The term whose instant falls on `date`, if any.
///
/// # Errors
/// Returns `CalendarError::YearOutOfRange` outside 1900–2100.
pub fn solar_term_on(date: NaiveDate) -> Result<Option<SolarTerm>, CalendarError> {
    Ok(solar_terms(date.year())?.into_iter().find(|term| term.date() == date))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{at, ymd};

    #[test]
    fn test_epoch_year() {
        let terms = solar_terms(1900).unwrap();
        assert_eq!(terms[0].instant, at(1900, 1, 6, 2, 5));
        assert_eq!(terms[0].name, "小寒");
    }

    #[test]
    fn test_known_instants() {
        struct TestCase {
            year:    i32,
            index:   usize,
            name:    &'static str,
            instant: NaiveDateTime,
        }

        let cases = [
            TestCase { year: 2026, index: 0, name: "小寒", instant: at(2026, 1, 5, 14, 59) },
            TestCase { year: 2026, index: 11, name: "夏至", instant: at(2026, 6, 21, 18, 32) },
            TestCase { year: 2026, index: 14, name: "立秋", instant: at(2026, 8, 7, 21, 42) },
            TestCase { year: 2026, index: 23, name: "冬至", instant: at(2026, 12, 22, 3, 37) },
            TestCase { year: 2024, index: 23, name: "冬至", instant: at(2024, 12, 21, 15, 59) },
        ];

        for case in &cases {
            let term = solar_terms(case.year).unwrap()[case.index];
            assert_eq!(term.index, case.index);
            assert_eq!(term.name, case.name);
            assert_eq!(term.instant, case.instant, "{} {}", case.year, case.name);
        }
    }

    #[test]
    fn test_terms_increase_within_year() {
        for year in [1900, 1950, 2000, 2026, 2100] {
            let terms = solar_terms(year).unwrap();
            assert!(terms.windows(2).all(|w| w[0].instant < w[1].instant), "year {year}");
            assert!(terms.iter().all(|t| t.instant.year() == year), "year {year}");
        }
    }

    #[test]
    fn test_range() {
        assert!(matches!(solar_terms(1899), Err(CalendarError::YearOutOfRange { year: 1899, .. })));
        assert!(matches!(solar_terms(2101), Err(CalendarError::YearOutOfRange { year: 2101, .. })));
    }

    #[test]
    fn test_current_term() {
        let term = current_term(at(2026, 6, 1, 0, 0)).unwrap();
        assert_eq!(term.name, "芒种");

        // exactly on the instant
        let term = current_term(at(2026, 6, 21, 18, 32)).unwrap();
        assert_eq!(term.name, "夏至");

        let term = current_term(at(2026, 12, 30, 0, 0)).unwrap();
        assert_eq!((term.name, term.instant.year()), ("小寒", 2027));

        assert!(current_term(at(2100, 12, 30, 0, 0)).is_err());
    }

    #[test]
    fn test_solar_term_on() {
        let term = solar_term_on(ymd(2026, 6, 21)).unwrap().unwrap();
        assert_eq!(term.name, "夏至");
        assert_eq!(solar_term_on(ymd(2026, 6, 22)).unwrap(), None);
    }

    #[test]
    fn test_serialize() {
        let term = solar_terms(2026).unwrap()[0];
        let value = serde_json::to_value(term).unwrap();
        assert_eq!(value["name"], "小寒");
        assert_eq!(value["index"], 0);
        assert_eq!(value["instant"], "2026-01-05T14:59:00");
    }
}
