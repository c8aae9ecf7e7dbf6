//! Display names for the lunar calendar.

use crate::consts::{BRANCH_CYCLE, SEXAGENARY_YEAR_OFFSET, STEM_CYCLE};
use crate::{Day, Month, Zodiac};

/// Heavenly stems, 甲 first.
pub const STEMS: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];

/// Earthly branches, 子 first.
pub const BRANCHES: [&str; 12] = ["子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥"];

const MONTHS: [&str; 12] = [
    "正月", "二月", "三月", "四月", "五月", "六月", "七月", "八月", "九月", "十月", "冬月", "腊月",
];

const DAYS: [&str; 30] = [
    "初一", "初二", "初三", "初四", "初五", "初六", "初七", "初八", "初九", "初十", //
    "十一", "十二", "十三", "十四", "十五", "十六", "十七", "十八", "十九", "二十", //
    "廿一", "廿二", "廿三", "廿四", "廿五", "廿六", "廿七", "廿八", "廿九", "三十",
];

/// The 24 solar terms in calendar-year order, 小寒 first.
pub const SOLAR_TERMS: [&str; 24] = [
    "小寒", "大寒", "立春", "雨水", "惊蛰", "春分", "清明", "谷雨", "立夏", "小满", "芒种", "夏至", //
    "小暑", "大暑", "立秋", "处暑", "白露", "秋分", "寒露", "霜降", "立冬", "小雪", "大雪", "冬至",
];

pub(crate) const SUMMER_SOLSTICE: usize = 11;
pub(crate) const AUTUMN_BEGINS: usize = 14;
pub(crate) const WINTER_SOLSTICE: usize = 23;

/// Stem and branch indices of a lunar year.
pub const fn sexagenary_indices(year: i32) -> (usize, usize) {
    let shifted = year - SEXAGENARY_YEAR_OFFSET;
    (
        shifted.rem_euclid(STEM_CYCLE) as usize,
        shifted.rem_euclid(BRANCH_CYCLE) as usize,
    )
}

/// Stem-branch name of a lunar year, e.g. `丙午` for 2026.
pub fn gan_zhi(year: i32) -> String {
    let (stem, branch) = sexagenary_indices(year);
    format!("{}{}", STEMS[stem], BRANCHES[branch])
}

/// Zodiac animal of a lunar year.
pub const fn zodiac(year: i32) -> Zodiac {
    Zodiac::from_index(year - SEXAGENARY_YEAR_OFFSET)
}

/// Month name, `闰`-prefixed for a leap month.
pub fn month_name(month: Month, is_leap: bool) -> String {
    let name = MONTHS[usize::from(month.get()) - 1];
    if is_leap { format!("闰{name}") } else { name.to_owned() }
}

/// Day name, `初一` through `三十`.
pub fn day_name(day: Day) -> &'static str {
    DAYS[usize::from(day.get()) - 1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gan_zhi() {
        for (year, name) in [(1900, "庚子"), (1984, "甲子"), (2024, "甲辰"), (2026, "丙午"), (2043, "癸亥")] {
            assert_eq!(gan_zhi(year), name, "year {year}");
        }
    }

    #[test]
    fn test_zodiac() {
        assert_eq!(zodiac(1900), Zodiac::Rat);
        assert_eq!(zodiac(2024), Zodiac::Dragon);
        assert_eq!(zodiac(2026), Zodiac::Horse);
    }

    #[test]
    fn test_month_names() {
        let month = |m| Month::new(m).unwrap();
        assert_eq!(month_name(month(1), false), "正月");
        assert_eq!(month_name(month(11), false), "冬月");
        assert_eq!(month_name(month(12), false), "腊月");
        assert_eq!(month_name(month(6), true), "闰六月");
    }

    #[test]
    fn test_day_names() {
        for (day, name) in [(1, "初一"), (10, "初十"), (11, "十一"), (20, "二十"), (21, "廿一"), (30, "三十")] {
            assert_eq!(day_name(Day::new(day).unwrap()), name);
        }
    }

    #[test]
    fn test_term_indices() {
        assert_eq!(SOLAR_TERMS[SUMMER_SOLSTICE], "夏至");
        assert_eq!(SOLAR_TERMS[AUTUMN_BEGINS], "立秋");
        assert_eq!(SOLAR_TERMS[WINTER_SOLSTICE], "冬至");
    }
}
