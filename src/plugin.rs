//! The capability contract each calendar offers to its callers, and the two
//! implementations.

use std::borrow::Cow;

use chrono::{Datelike, NaiveDate, NaiveTime};
use serde::Serialize;

use crate::festival::{Festival, FestivalDate, FestivalType};
use crate::lunar::{self, LUNAR_FESTIVALS, LunarDate};
use crate::tibetan::{self, DayQuality, TIBETAN_FESTIVALS, TibetanDate};
use crate::{CalendarError, CalendarType, LUNAR_YEAR_RANGE, MAX_MONTH, TIBETAN_YEAR_RANGE, YearRange};

const PLUGIN_VERSION: &str = "2.0.0";
const SUPPORTED_LANGUAGES: &[&str] = &["zh-Hans"];

/// Descriptive information about a calendar implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PluginMetadata {
    pub identifier:          &'static str,
    pub name:                &'static str,
    pub version:             &'static str,
    pub calendar_type:       CalendarType,
    pub supported_years:     YearRange,
    pub supported_languages: &'static [&'static str],
}

/// A date in one of the non-solar calendars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "calendar", content = "date", rename_all = "snake_case")]
pub enum LocalDate {
    Lunar(LunarDate),
    Tibetan(TibetanDate),
}

/// A solar date together with its conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalendarDate {
    pub solar: NaiveDate,
    pub local: LocalDate,
}

/// Almanac details for one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyInfo {
    pub date:               NaiveDate,
    pub suitable:           Vec<&'static str>,
    pub unsuitable:         Vec<&'static str>,
    pub lucky_directions:   Vec<&'static str>,
    pub unlucky_directions: Vec<&'static str>,
    pub five_elements:      Option<String>,
    pub note:               Option<String>,
}

/// Answer to a special-day query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SpecialDate {
    pub is_special:  bool,
    pub description: Option<&'static str>,
}

/// Operations every calendar exposes.
///
/// Implementations are stateless and shared freely between threads.
pub trait CalendarPlugin: Send + Sync {
    fn metadata(&self) -> PluginMetadata;

    fn calendar_type(&self) -> CalendarType {
        self.metadata().calendar_type
    }

    /// Inclusive range of years the conversions accept
    fn supported_year_range(&self) -> YearRange {
        self.metadata().supported_years
    }

    /// Converts a solar date into this calendar.
    ///
    /// # Errors
    /// The calendar's conversion errors.
    fn convert(&self, date: NaiveDate) -> Result<CalendarDate, CalendarError>;

    /// Converts a date of this calendar back to the solar calendar.
    /// `is_leap_month` is ignored by calendars without leap months.
    ///
    /// # Errors
    /// The calendar's conversion errors.
    fn convert_to_solar(&self, year: i32, month: u32, day: u32, is_leap_month: bool)
    -> Result<NaiveDate, CalendarError>;

    /// Festivals falling in `month` of this calendar. The festival tables
    /// are the same every year.
    fn festivals_for_month(&self, year: i32, month: u32) -> Vec<Festival>;

    fn festivals_for_year(&self, year: i32) -> Vec<Festival> {
        (1..=u32::from(MAX_MONTH))
            .flat_map(|month| self.festivals_for_month(year, month))
            .collect()
    }

    /// Almanac details for a solar date.
    ///
    /// # Errors
    /// Fails when `date` cannot be converted into this calendar.
    fn daily_info(&self, date: NaiveDate) -> Result<DailyInfo, CalendarError>;

    /// The solar terms of `year` as festivals, for calendars that have them.
    ///
    /// # Errors
    /// `YearOutOfRange` when the calendar has terms but not for `year`.
    fn solar_term_festivals(&self, _year: i32) -> Result<Option<Vec<Festival>>, CalendarError> {
        Ok(None)
    }

    /// Special-day status, for calendars that have the concept. `None` also
    /// when `date` cannot be converted.
    fn is_special_date(&self, _date: NaiveDate) -> Option<SpecialDate> {
        None
    }
}

fn festivals_in_month(festivals: &[Festival], month: u32, keep: impl Fn(&FestivalDate) -> bool) -> Vec<Festival> {
    festivals
        .iter()
        .filter(|festival| keep(&festival.date) && u32::from(festival.date.month()) == month)
        .cloned()
        .collect()
}

/// The Chinese lunar calendar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LunarCalendar;

impl CalendarPlugin for LunarCalendar {
    fn metadata(&self) -> PluginMetadata {
        PluginMetadata {
            identifier:          "com.multicalendar.lunar",
            name:                "农历",
            version:             PLUGIN_VERSION,
            calendar_type:       CalendarType::Lunar,
            supported_years:     LUNAR_YEAR_RANGE,
            supported_languages: SUPPORTED_LANGUAGES,
        }
    }

    fn convert(&self, date: NaiveDate) -> Result<CalendarDate, CalendarError> {
        Ok(CalendarDate {
            solar: date,
            local: LocalDate::Lunar(lunar::solar_to_lunar(date)?),
        })
    }

    fn convert_to_solar(
        &self,
        year: i32,
        month: u32,
        day: u32,
        is_leap_month: bool,
    ) -> Result<NaiveDate, CalendarError> {
        lunar::lunar_to_solar(year, month, day, is_leap_month)
    }

    fn festivals_for_month(&self, _year: i32, month: u32) -> Vec<Festival> {
        festivals_in_month(&LUNAR_FESTIVALS, month, |date| {
            matches!(date, FestivalDate::Lunar { .. } | FestivalDate::Fixed { .. })
        })
    }

    /// Notes, in order of preference: the winter nine-day period, `三伏天`
    /// inside the dog days, then the name of the next solar term.
    fn daily_info(&self, date: NaiveDate) -> Result<DailyInfo, CalendarError> {
        let almanac = lunar::daily_auspicious(date)?;

        let note = match lunar::jiujiu_period_for(date)? {
            Some(period) => Some(period.name.to_owned()),
            None if lunar::sanfu(date.year())?.contains(date) => Some("三伏天".to_owned()),
            None => lunar::current_term(date.and_time(NaiveTime::MIN))
                .ok()
                .map(|term| term.name.to_owned()),
        };

        Ok(DailyInfo {
            date,
            suitable: almanac.suitable,
            unsuitable: almanac.unsuitable,
            lucky_directions: Vec::new(),
            unlucky_directions: Vec::new(),
            five_elements: None,
            note,
        })
    }

    fn solar_term_festivals(&self, year: i32) -> Result<Option<Vec<Festival>>, CalendarError> {
        let festivals = lunar::solar_terms(year)?
            .iter()
            .map(|term| {
                let date = term.date();
                Festival {
                    id:            Cow::Owned(format!("solar-term-{}", term.name)),
                    name:          Cow::Borrowed(term.name),
                    name_tibetan:  None,
                    date:          FestivalDate::Fixed {
                        month: date.month() as u8,
                        day:   date.day() as u8,
                    },
                    calendar_type: CalendarType::Solar,
                    kind:          FestivalType::SolarTerm,
                    description:   Some(Cow::Borrowed("二十四节气")),
                }
            })
            .collect();
        Ok(Some(festivals))
    }
}

/// The Tibetan calendar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TibetanCalendar;

impl CalendarPlugin for TibetanCalendar {
    fn metadata(&self) -> PluginMetadata {
        PluginMetadata {
            identifier:          "com.multicalendar.tibetan",
            name:                "藏历",
            version:             PLUGIN_VERSION,
            calendar_type:       CalendarType::Tibetan,
            supported_years:     TIBETAN_YEAR_RANGE,
            supported_languages: SUPPORTED_LANGUAGES,
        }
    }

    fn convert(&self, date: NaiveDate) -> Result<CalendarDate, CalendarError> {
        Ok(CalendarDate {
            solar: date,
            local: LocalDate::Tibetan(tibetan::solar_date_to_tibetan(date)?),
        })
    }

    fn convert_to_solar(
        &self,
        year: i32,
        month: u32,
        day: u32,
        _is_leap_month: bool,
    ) -> Result<NaiveDate, CalendarError> {
        tibetan::tibetan_to_solar(year, month, day)
    }

    fn festivals_for_month(&self, _year: i32, month: u32) -> Vec<Festival> {
        festivals_in_month(&TIBETAN_FESTIVALS, month, |date| {
            matches!(date, FestivalDate::Tibetan { .. })
        })
    }

    fn daily_info(&self, date: NaiveDate) -> Result<DailyInfo, CalendarError> {
        let local = tibetan::solar_date_to_tibetan(date)?;
        let (year, month, day) = (local.year(), u32::from(local.month()), u32::from(local.day()));
        let verdict = tibetan::day_quality(year, month, day);
        let star = tibetan::flying_star(year, month, day);

        let (mut suitable, unsuitable) = match verdict.quality {
            DayQuality::VeryGood | DayQuality::Good => (vec!["祈福", "供养", "修法", "放生", "布施", "诵经"], vec![]),
            DayQuality::Neutral => (vec!["日常事务"], vec!["重大决策"]),
            DayQuality::SlightlyBad | DayQuality::Bad => (vec![], vec!["开业", "婚嫁", "远行", "动土"]),
        };

        let special = tibetan::special_day_description(day);
        if special.is_some() {
            suitable.push("殊胜日修行");
        }
        let note = match special {
            Some(description) => format!("{description} - {}", verdict.description),
            None => verdict.description,
        };

        Ok(DailyInfo {
            date,
            suitable,
            unsuitable,
            lucky_directions: vec![star.direction],
            unlucky_directions: if star.star == 5 { vec!["中央"] } else { vec![] },
            five_elements: Some(local.year_element()),
            note: Some(note),
        })
    }

    fn is_special_date(&self, date: NaiveDate) -> Option<SpecialDate> {
        let description = tibetan::is_special_date(date).ok()?;
        Some(SpecialDate {
            is_special: description.is_some(),
            description,
        })
    }
}

static LUNAR: LunarCalendar = LunarCalendar;
static TIBETAN: TibetanCalendar = TibetanCalendar;

/// The implementation of a calendar; `None` for the solar calendar, which
/// every other calendar converts to and from.
pub fn calendar(kind: CalendarType) -> Option<&'static dyn CalendarPlugin> {
    match kind {
        CalendarType::Solar => None,
        CalendarType::Lunar => Some(&LUNAR),
        CalendarType::Tibetan => Some(&TIBETAN),
    }
}

/// Every calendar implementation.
pub fn calendars() -> [&'static dyn CalendarPlugin; 2] {
    [&LUNAR, &TIBETAN]
}

/// Festivals in `month` of the given calendar.
pub fn festivals_for_month(kind: CalendarType, year: i32, month: u32) -> Vec<Festival> {
    calendar(kind).map_or_else(Vec::new, |plugin| plugin.festivals_for_month(year, month))
}

/// Festivals of the given calendar across a whole year.
pub fn festivals_for_year(kind: CalendarType, year: i32) -> Vec<Festival> {
    calendar(kind).map_or_else(Vec::new, |plugin| plugin.festivals_for_year(year))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::ymd;

    #[test]
    fn test_metadata() {
        let lunar = LunarCalendar.metadata();
        assert_eq!(lunar.identifier, "com.multicalendar.lunar");
        assert_eq!(lunar.name, "农历");
        assert_eq!(lunar.version, "2.0.0");
        assert_eq!(LunarCalendar.supported_year_range(), LUNAR_YEAR_RANGE);
        assert_eq!(LunarCalendar.calendar_type(), CalendarType::Lunar);

        let tibetan = TibetanCalendar.metadata();
        assert_eq!(tibetan.identifier, "com.multicalendar.tibetan");
        assert_eq!(TibetanCalendar.supported_year_range().to_string(), "1950/2050");

        let value = serde_json::to_value(tibetan).unwrap();
        assert_eq!(value["supported_years"], "1950/2050");
        assert_eq!(value["supported_languages"][0], "zh-Hans");
    }

    #[test]
    fn test_calendar_lookup() {
        assert!(calendar(CalendarType::Solar).is_none());
        for kind in [CalendarType::Lunar, CalendarType::Tibetan] {
            assert_eq!(calendar(kind).unwrap().calendar_type(), kind);
        }
        assert_eq!(calendars().len(), 2);
    }

    #[test]
    fn test_convert() {
        let date = ymd(2026, 2, 17);
        let converted = LunarCalendar.convert(date).unwrap();
        assert_eq!(converted.solar, date);
        match converted.local {
            LocalDate::Lunar(lunar) => assert_eq!(lunar.to_string(), "丙午年正月初一"),
            LocalDate::Tibetan(_) => panic!("expected a lunar date"),
        }

        let converted = TibetanCalendar.convert(date).unwrap();
        let LocalDate::Tibetan(tibetan) = converted.local else {
            panic!("expected a Tibetan date");
        };
        assert_eq!((tibetan.month().get(), tibetan.day()), (1, 17));

        assert_eq!(LunarCalendar.convert_to_solar(2026, 1, 1, false), Ok(date));
        assert_eq!(TibetanCalendar.convert_to_solar(2026, 1, 17, true), Ok(date));
    }

    #[test]
    fn test_tibetan_convert_covers_first_supported_january() {
        assert!(TibetanCalendar.supported_year_range().contains(1950));
        let converted = TibetanCalendar.convert(ymd(1950, 1, 15)).unwrap();
        let LocalDate::Tibetan(tibetan) = converted.local else {
            panic!("expected a Tibetan date");
        };
        assert_eq!((tibetan.year(), tibetan.month().get(), tibetan.day()), (1949, 12, 15));
        assert!(TibetanCalendar.daily_info(ymd(1950, 1, 15)).is_ok());
    }

    #[test]
    fn test_lunar_festivals_for_month() {
        let names = |month| {
            festivals_for_month(CalendarType::Lunar, 2026, month)
                .into_iter()
                .map(|f| f.name.into_owned())
                .collect::<Vec<_>>()
        };
        assert_eq!(names(1), ["春节", "元宵节"]);
        assert_eq!(names(7), ["七夕节", "中元节"]);
        assert_eq!(names(12), ["冬至", "腊八节", "除夕"]);
        assert!(names(6).is_empty());

        assert_eq!(festivals_for_year(CalendarType::Lunar, 2026).len(), LUNAR_FESTIVALS.len());
        assert!(festivals_for_year(CalendarType::Solar, 2026).is_empty());
    }

    #[test]
    fn test_tibetan_festivals_for_month() {
        let festivals = festivals_for_month(CalendarType::Tibetan, 2026, 4);
        assert_eq!(festivals.len(), 4);
        assert!(festivals.iter().all(|f| f.date.month() == 4));
        assert_eq!(festivals_for_year(CalendarType::Tibetan, 2026).len(), TIBETAN_FESTIVALS.len());
    }

    #[test]
    fn test_lunar_daily_info_notes() {
        struct TestCase {
            date: NaiveDate,
            note: &'static str,
        }

        let cases = [
            // winter nines of the previous year's solstice
            TestCase { date: ymd(2026, 1, 10), note: "三九" },
            TestCase { date: ymd(2026, 12, 22), note: "一九" },
            TestCase { date: ymd(2026, 7, 25), note: "三伏天" },
            TestCase { date: ymd(2026, 8, 10), note: "三伏天" },
            // next term after the dog days end
            TestCase { date: ymd(2026, 8, 11), note: "处暑" },
            TestCase { date: ymd(2026, 6, 1), note: "芒种" },
        ];

        for case in &cases {
            let info = LunarCalendar.daily_info(case.date).unwrap();
            assert_eq!(info.note.as_deref(), Some(case.note), "{}", case.date);
            assert_eq!(info.suitable.len(), 5);
            assert_eq!(info.unsuitable.len(), 4);
            assert!(info.lucky_directions.is_empty());
        }
    }

    #[test]
    fn test_lunar_daily_info_out_of_range() {
        assert!(LunarCalendar.daily_info(ymd(1900, 1, 1)).is_err());
    }

    #[test]
    fn test_solar_term_festivals() {
        let terms = LunarCalendar.solar_term_festivals(2026).unwrap().unwrap();
        assert_eq!(terms.len(), 24);
        assert_eq!(terms[0].id, "solar-term-小寒");
        assert_eq!(terms[0].date, FestivalDate::Fixed { month: 1, day: 5 });
        assert_eq!(terms[11].date, FestivalDate::Fixed { month: 6, day: 21 });
        assert!(terms.iter().all(|t| t.kind == FestivalType::SolarTerm));

        assert_eq!(TibetanCalendar.solar_term_festivals(2026), Ok(None));
        assert!(LunarCalendar.solar_term_festivals(2101).is_err());
    }

    #[test]
    fn test_tibetan_daily_info() {
        // Tibetan 2026/1/15: special day and festival
        let info = TibetanCalendar.daily_info(ymd(2026, 2, 15)).unwrap();
        assert_eq!(info.suitable, ["祈福", "供养", "修法", "放生", "布施", "诵经", "殊胜日修行"]);
        assert!(info.unsuitable.is_empty());
        assert_eq!(info.note.as_deref(), Some("十五 - 佛陀节日 (满月) - 殊胜日，诸事皆宜"));
        assert_eq!(info.five_elements.as_deref(), Some("火马年"));
        // 2026 + 1 + 15 = 2042, 2042 mod 9 = 8
        assert_eq!(info.lucky_directions, ["南方"]);
        assert!(info.unlucky_directions.is_empty());

        // Tibetan 2026/1/2: 2029 mod 5 = 4
        let info = TibetanCalendar.daily_info(ymd(2026, 2, 2)).unwrap();
        assert!(info.suitable.is_empty());
        assert_eq!(info.unsuitable, ["开业", "婚嫁", "远行", "动土"]);
        assert_eq!(info.note.as_deref(), Some("凶"));

        // Tibetan 2026/2/4: 2032 mod 5 = 2
        let info = TibetanCalendar.daily_info(ymd(2026, 3, 4)).unwrap();
        assert_eq!(info.suitable, ["日常事务"]);
        assert_eq!(info.unsuitable, ["重大决策"]);
    }

    #[test]
    fn test_tibetan_unlucky_center() {
        // Tibetan 2026/1/11: 2038 mod 9 = 4, star 5
        let info = TibetanCalendar.daily_info(ymd(2026, 2, 11)).unwrap();
        assert_eq!(info.lucky_directions, ["中央"]);
        assert_eq!(info.unlucky_directions, ["中央"]);
    }

    #[test]
    fn test_special_date() {
        assert_eq!(LunarCalendar.is_special_date(ymd(2026, 2, 15)), None);
        assert_eq!(
            TibetanCalendar.is_special_date(ymd(2026, 2, 8)),
            Some(SpecialDate {
                is_special:  true,
                description: Some("初八 - 药师佛节日"),
            })
        );
        assert_eq!(
            TibetanCalendar.is_special_date(ymd(2026, 2, 9)),
            Some(SpecialDate {
                is_special:  false,
                description: None,
            })
        );
        assert_eq!(TibetanCalendar.is_special_date(ymd(1949, 6, 1)), None);
        assert_eq!(TibetanCalendar.is_special_date(ymd(2051, 6, 1)), None);
    }

    #[test]
    fn test_daily_info_serialize() {
        let info = TibetanCalendar.daily_info(ymd(2026, 2, 15)).unwrap();
        let value = serde_json::to_value(&info).unwrap();
        assert_eq!(value["date"], "2026-02-15");
        assert_eq!(value["five_elements"], "火马年");
    }
}
