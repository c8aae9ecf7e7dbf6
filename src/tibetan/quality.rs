//! Special days, day quality and the nine-palace flying star.
//!
//! Apart from the fixed set of special days, these are simplified modular
//! rules over `year + month + day`, not almanac computations.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::convert::solar_date_to_tibetan;
use super::festivals::festival_on;
use super::year::{is_double_day, is_missing_day};
use crate::consts::{FLYING_STARS, QUALITY_BANDS, SPECIAL_DAYS, SPECIAL_DAY_SCAN_LIMIT};
use crate::{CalendarError, prelude::*};

/// Whether a Tibetan day of the month is one of the special days
/// (1, 8, 10, 15, 18, 25, 30) on which merit is multiplied.
pub fn is_special_day(day: u32) -> bool {
    u8::try_from(day).is_ok_and(|day| SPECIAL_DAYS.contains(&day))
}

/// Canned description of a special day.
pub fn special_day_description(day: u32) -> Option<&'static str> {
    match day {
        1 => Some("初一 - 吉祥日"),
        8 => Some("初八 - 药师佛节日"),
        10 => Some("初十 - 莲师荟供日"),
        15 => Some("十五 - 佛陀节日 (满月)"),
        18 => Some("十八 - 观音菩萨节日"),
        25 => Some("廿五 - 空行母荟供日"),
        30 => Some("三十 - 释迦牟尼佛节日 (新月)"),
        _ => None,
    }
}

/// The special-day description of a Gregorian date, if its Tibetan day
/// is special.
///
/// # Errors
/// Fails when `date` cannot be converted to a Tibetan date.
pub fn is_special_date(date: NaiveDate) -> Result<Option<&'static str>, CalendarError> {
    let day = u32::from(solar_date_to_tibetan(date)?.day());
    Ok(special_day_description(day))
}

/// The next special day strictly after `from`, with its description.
///
/// # Errors
/// Conversion failures, or `CalendarError::ScanExhausted` if nothing turns
/// up within 60 days.
pub fn next_special_day(from: NaiveDate) -> Result<(NaiveDate, &'static str), CalendarError> {
    for offset in 1..=SPECIAL_DAY_SCAN_LIMIT {
        let date = from + Days::new(u64::from(offset));
        if let Some(description) = is_special_date(date)? {
            return Ok((date, description));
        }
    }
    warn!(%from, limit = SPECIAL_DAY_SCAN_LIMIT, "special day scan exhausted");
    Err(CalendarError::ScanExhausted {
        from,
        limit: SPECIAL_DAY_SCAN_LIMIT,
    })
}

/// Five-step scale of day quality, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
pub enum DayQuality {
    #[display(fmt = "大吉")]
    VeryGood,
    #[display(fmt = "吉")]
    Good,
    #[display(fmt = "平")]
    Neutral,
    #[display(fmt = "小凶")]
    SlightlyBad,
    #[display(fmt = "凶")]
    Bad,
}

impl DayQuality {
    const BANDS: [Self; 5] = [Self::VeryGood, Self::Good, Self::Neutral, Self::SlightlyBad, Self::Bad];

    pub const fn symbol(self) -> &'static str {
        match self {
            Self::VeryGood => "✨",
            Self::Good => "✅",
            Self::Neutral => "➖",
            Self::SlightlyBad => "⚠️",
            Self::Bad => "❌",
        }
    }

    pub const fn is_auspicious(self) -> bool {
        matches!(self, Self::VeryGood | Self::Good)
    }
}

/// Quality of a day with the reason given for it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DayVerdict {
    pub quality:     DayQuality,
    pub description: String,
}

impl DayVerdict {
    fn new(quality: DayQuality, description: impl Into<String>) -> Self {
        Self {
            quality,
            description: description.into(),
        }
    }
}

fn day_sum(year: i32, month: u32, day: u32) -> i64 {
    i64::from(year) + i64::from(month) + i64::from(day)
}

/// Quality of a Tibetan date. The first rule that applies wins: special
/// day, festival, missing day, doubled day, then `year + month + day`
/// modulo 5.
pub fn day_quality(year: i32, month: u32, day: u32) -> DayVerdict {
    if is_special_day(day) {
        return DayVerdict::new(DayQuality::VeryGood, "殊胜日，诸事皆宜");
    }
    if let Some(festival) = festival_on(month, day) {
        return DayVerdict::new(DayQuality::Good, format!("{}，吉祥日", festival.name));
    }
    if is_missing_day(year, month, day) {
        return DayVerdict::new(DayQuality::Bad, "缺日，不宜重大事项");
    }
    if is_double_day(year, month, day) {
        return DayVerdict::new(DayQuality::Neutral, "重日");
    }

    let band = DayQuality::BANDS[day_sum(year, month, day).rem_euclid(i64::from(QUALITY_BANDS)) as usize];
    DayVerdict::new(band, band.to_string())
}

/// One of the nine palace stars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FlyingStar {
    /// 1 through 9
    pub star:      u8,
    pub direction: &'static str,
    pub meaning:   &'static str,
}

const STAR_DIRECTIONS: [&str; 9] = ["北方", "西南", "东方", "东南", "中央", "西北", "西方", "东北", "南方"];

const STAR_MEANINGS: [&str; 9] = [
    "一白贪狼 - 喜庆、人缘",
    "二黑巨门 - 病符、健康",
    "三碧禄存 - 是非、官灾",
    "四绿文曲 - 文昌、学业",
    "五黄廉贞 - 煞气、灾祸",
    "六白武曲 - 偏财、贵人",
    "七赤破军 - 口舌、破财",
    "八白左辅 - 正财、置业",
    "九紫右弼 - 喜庆、姻缘",
];

/// Flying star of a Tibetan date: `(year + month + day) mod 9 + 1`.
pub fn flying_star(year: i32, month: u32, day: u32) -> FlyingStar {
    let index = day_sum(year, month, day).rem_euclid(i64::from(FLYING_STARS)) as usize;
    FlyingStar {
        star:      index as u8 + 1,
        direction: STAR_DIRECTIONS[index],
        meaning:   STAR_MEANINGS[index],
    }
}
