//! Dates derived from the solar terms and the lunar date: the dog days,
//! the nine nines of winter and the daily almanac.

use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;
use tracing::warn;

use super::convert::solar_to_lunar;
use super::names::{AUTUMN_BEGINS, SUMMER_SOLSTICE, WINTER_SOLSTICE};
use super::solar_term::solar_term;
use crate::consts::{
    GENG_DAY_SHIFT, GENG_SCAN_LIMIT, GENG_STEM, JIUJIU_PERIOD_DAYS, JIUJIU_PERIODS, SANFU_MIDDLE_OFFSET_DAYS,
    SANFU_START_GENG_ORDINAL, STEM_CYCLE, SUITABLE_PICKS, SUITABLE_STRIDE, UNSUITABLE_PICKS, UNSUITABLE_STRIDE,
};
use crate::{CalendarError, LUNAR_YEAR_RANGE};

const JIUJIU_NAMES: [&str; JIUJIU_PERIODS] = ["一九", "二九", "三九", "四九", "五九", "六九", "七九", "八九", "九九"];

const SUITABLE: [&str; 36] = [
    "祭祀", "祈福", "求嗣", "开光", "出行", "解除", "纳采", "冠笄", "嫁娶", "纳婿", "安床", "移徙", //
    "入宅", "安香", "拆卸", "动土", "挂匾", "开市", "立券", "纳财", "沐浴", "理发", "安门", "修造", //
    "盖屋", "合脊", "起基", "定磉", "安碓硙", "放水", "掘井", "破土", "安葬", "启钻", "除服", "成服",
];

const UNSUITABLE: [&str; 18] = [
    "嫁娶", "安葬", "出行", "动土", "开市", "入宅", "移徙", "祭祀", "祈福", "开光", "纳采", "安床", //
    "拆卸", "掘井", "破土", "作灶", "伐木", "探病",
];

/// Whether `date` counts as a 庚 day.
///
/// Uses the day of the month rather than the true sexagenary day count, so
/// the 10th, 20th and 30th of every month qualify.
pub fn is_geng_day(date: NaiveDate) -> bool {
    (date.day() + GENG_DAY_SHIFT) % STEM_CYCLE.unsigned_abs() == GENG_STEM
}

/// The `nth` 庚 day on or after `from`.
fn nth_geng_day(from: NaiveDate, nth: u32) -> Result<NaiveDate, CalendarError> {
    let mut seen = 0;
    for date in from.iter_days().take(GENG_SCAN_LIMIT as usize) {
        if is_geng_day(date) {
            seen += 1;
            if seen == nth {
                return Ok(date);
            }
        }
    }
    warn!(%from, nth, limit = GENG_SCAN_LIMIT, "geng day scan exhausted");
    Err(CalendarError::ScanExhausted {
        from,
        limit: GENG_SCAN_LIMIT,
    })
}

/// The three dog-days periods of a summer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Sanfu {
    /// 初伏: third 庚 day from the summer solstice
    pub start:  NaiveDate,
    /// 中伏: ten days after `start`
    pub middle: NaiveDate,
    /// 末伏: first 庚 day from the start of autumn
    pub end:    NaiveDate,
}

impl Sanfu {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Dog days of `year`.
///
/// # Errors
/// Returns `CalendarError::YearOutOfRange` outside 1900–2100.
#[tracing::instrument(level = "trace")]
pub fn sanfu(year: i32) -> Result<Sanfu, CalendarError> {
    let solstice = solar_term(year, SUMMER_SOLSTICE)?.date();
    let autumn = solar_term(year, AUTUMN_BEGINS)?.date();

    let start = nth_geng_day(solstice, SANFU_START_GENG_ORDINAL)?;
    let end = nth_geng_day(autumn, 1)?;
    Ok(Sanfu {
        start,
        middle: start + Days::new(SANFU_MIDDLE_OFFSET_DAYS),
        end,
    })
}

/// One of the nine nine-day periods after the winter solstice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct JiujiuPeriod {
    /// 1 through 9
    pub ordinal: u8,
    pub name:    &'static str,
    pub start:   NaiveDate,
    /// Last day of the period (inclusive)
    pub end:     NaiveDate,
}

impl JiujiuPeriod {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// The nine nines counted from the winter solstice of `year`; the last
/// periods run into the following year.
///
/// # Errors
/// Returns `CalendarError::YearOutOfRange` outside 1900–2100.
#[tracing::instrument(level = "trace")]
pub fn jiujiu(year: i32) -> Result<[JiujiuPeriod; JIUJIU_PERIODS], CalendarError> {
    let solstice = solar_term(year, WINTER_SOLSTICE)?.date();
    Ok(std::array::from_fn(|i| {
        let start = solstice + Days::new(JIUJIU_PERIOD_DAYS * i as u64);
        JiujiuPeriod {
            ordinal: i as u8 + 1,
            name: JIUJIU_NAMES[i],
            start,
            end: start + Days::new(JIUJIU_PERIOD_DAYS - 1),
        }
    }))
}

/// The winter period containing `date`, looking at the winters that began
/// in the previous and in the current year.
///
/// # Errors
/// Returns `CalendarError::YearOutOfRange` when `date`'s year is unsupported.
pub fn jiujiu_period_for(date: NaiveDate) -> Result<Option<JiujiuPeriod>, CalendarError> {
    let year = LUNAR_YEAR_RANGE.check(date.year())?;
    for winter in [year - 1, year] {
        if !LUNAR_YEAR_RANGE.contains(winter) {
            continue;
        }
        if let Some(period) = jiujiu(winter)?.into_iter().find(|p| p.contains(date)) {
            return Ok(Some(period));
        }
    }
    Ok(None)
}

/// Activities recommended for and against on one day.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DailyAlmanac {
    pub suitable:   Vec<&'static str>,
    pub unsuitable: Vec<&'static str>,
}

/// The simplified daily 宜/忌 lists.
///
/// Picks are a fixed stride walk over two candidate lists, keyed on the
/// lunar day (宜) and the lunar month (忌). This is not a traditional
/// almanac computation.
///
/// # Errors
/// Fails when `date` cannot be converted to a lunar date.
pub fn daily_auspicious(date: NaiveDate) -> Result<DailyAlmanac, CalendarError> {
    let lunar = solar_to_lunar(date)?;
    let day_index = (usize::from(lunar.day().get()) - 1) % SUITABLE.len();
    let month_index = (usize::from(lunar.month().get()) - 1) % UNSUITABLE.len();

    let suitable = (0..SUITABLE_PICKS)
        .map(|i| SUITABLE[(day_index + i * SUITABLE_STRIDE) % SUITABLE.len()])
        .collect();
    let unsuitable = (0..UNSUITABLE_PICKS)
        .map(|i| UNSUITABLE[(month_index + i * UNSUITABLE_STRIDE) % UNSUITABLE.len()])
        .collect();

    Ok(DailyAlmanac { suitable, unsuitable })
}
