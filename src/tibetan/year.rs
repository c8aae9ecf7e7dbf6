//! Year-level facts of the Tibetan calendar: element, animal, Rabjung cycle,
//! and the simplified month-length and missing/doubled-day rules.

use serde::{Deserialize, Serialize};

use crate::consts::{
    DOUBLE_DAY_MODULUS, ELEMENT_CYCLE, MAX_DAY, MIN_DAY, MISSING_DAY_MODULUS, RABJUNG_CYCLE, RABJUNG_EPOCH_YEAR,
    SHORT_TIBETAN_MONTH_MODULUS, TIBETAN_CYCLE_ANCHOR_YEAR,
};
use crate::{Month, Zodiac, prelude::*};

/// One of the five elements, each ruling two consecutive years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
pub enum Element {
    #[display(fmt = "木")]
    Wood,
    #[display(fmt = "火")]
    Fire,
    #[display(fmt = "土")]
    Earth,
    #[display(fmt = "金")]
    Metal,
    #[display(fmt = "水")]
    Water,
}

impl Element {
    pub const ALL: [Self; 5] = [Self::Wood, Self::Fire, Self::Earth, Self::Metal, Self::Water];

    pub fn chinese(self) -> &'static str {
        const NAMES: [&str; 5] = ["木", "火", "土", "金", "水"];
        NAMES[self as usize]
    }

    pub fn tibetan(self) -> &'static str {
        const NAMES: [&str; 5] = ["ཤིང་", "མེ་", "ས་", "ལྕགས་", "ཆུ་"];
        NAMES[self as usize]
    }
}

/// Element ruling `year`; 1984 and 1985 are wood years.
pub const fn element(year: i32) -> Element {
    let index = (year - TIBETAN_CYCLE_ANCHOR_YEAR).rem_euclid(ELEMENT_CYCLE) / 2;
    Element::ALL[index as usize]
}

/// Animal of `year`; 1984 is a rat year.
pub const fn zodiac(year: i32) -> Zodiac {
    Zodiac::from_index(year - TIBETAN_CYCLE_ANCHOR_YEAR)
}

/// Position of `year` in the 60-year Rabjung cycles as `(cycle, year_in_cycle)`,
/// both counted from 1. Years before 1027 give `(0, 0)`.
pub const fn rabjung_cycle(year: i32) -> (i32, i32) {
    let since = year - RABJUNG_EPOCH_YEAR;
    if since < 0 {
        return (0, 0);
    }
    (since / RABJUNG_CYCLE + 1, since % RABJUNG_CYCLE + 1)
}

/// Element and animal, e.g. `火马年`.
pub fn year_element_name(year: i32) -> String {
    format!("{}{}年", element(year), zodiac(year))
}

/// Full year name, e.g. `第17绕迥火马年` for 2026.
pub fn full_year_name(year: i32) -> String {
    let (cycle, _) = rabjung_cycle(year);
    format!("第{cycle}绕迥{}", year_element_name(year))
}

fn day_sum(year: i32, month: u32, day: u32) -> i64 {
    i64::from(year) + i64::from(month) + i64::from(day)
}

/// Days in a Tibetan month: 29 when `year + month` is a multiple of 3,
/// otherwise 30.
pub fn month_length(year: i32, month: Month) -> u8 {
    let sum = i64::from(year) + i64::from(month.get());
    if sum.rem_euclid(i64::from(SHORT_TIBETAN_MONTH_MODULUS)) == 0 {
        MAX_DAY - 1
    } else {
        MAX_DAY
    }
}

/// Whether the day is skipped: `year + month + day` is a multiple of 64.
pub fn is_missing_day(year: i32, month: u32, day: u32) -> bool {
    day_sum(year, month, day).rem_euclid(i64::from(MISSING_DAY_MODULUS)) == 0
}

/// Whether the day is doubled: `year + month + day` is a multiple of 128.
///
/// Every doubled day is also a missing day under these rules.
pub fn is_double_day(year: i32, month: u32, day: u32) -> bool {
    day_sum(year, month, day).rem_euclid(i64::from(DOUBLE_DAY_MODULUS)) == 0
}

/// Missing days of a month, among days 1–30.
pub fn missing_days(year: i32, month: Month) -> Vec<u8> {
    (MIN_DAY..=MAX_DAY)
        .filter(|&d| is_missing_day(year, u32::from(month), u32::from(d)))
        .collect()
}

/// Doubled days of a month, among days 1–30.
pub fn double_days(year: i32, month: Month) -> Vec<u8> {
    (MIN_DAY..=MAX_DAY)
        .filter(|&d| is_double_day(year, u32::from(month), u32::from(d)))
        .collect()
}

const TEN_GODS: [&str; 12] = [
    "比肩", "劫财", "食神", "伤官", "偏财", "正财", "七杀", "正官", "偏印", "正印", "比肩", "劫财",
];

/// Relation of `year2` to `year1`, indexed by the year gap modulo 12.
pub fn ten_gods(year1: i32, year2: i32) -> &'static str {
    TEN_GODS[(i64::from(year2) - i64::from(year1)).rem_euclid(TEN_GODS.len() as i64) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn month(m: u32) -> Month {
        Month::new(m).unwrap()
    }

    #[test]
    fn test_element_and_zodiac() {
        struct TestCase {
            year:    i32,
            element: Element,
            zodiac:  Zodiac,
        }

        let cases = [
            TestCase { year: 1984, element: Element::Wood, zodiac: Zodiac::Rat },
            TestCase { year: 1985, element: Element::Wood, zodiac: Zodiac::Ox },
            TestCase { year: 1986, element: Element::Fire, zodiac: Zodiac::Tiger },
            TestCase { year: 2024, element: Element::Wood, zodiac: Zodiac::Dragon },
            TestCase { year: 2026, element: Element::Fire, zodiac: Zodiac::Horse },
            TestCase { year: 1983, element: Element::Water, zodiac: Zodiac::Pig },
            TestCase { year: 1950, element: Element::Metal, zodiac: Zodiac::Tiger },
        ];

        for case in &cases {
            assert_eq!(element(case.year), case.element, "year {}", case.year);
            assert_eq!(zodiac(case.year), case.zodiac, "year {}", case.year);
        }
    }

    #[test]
    fn test_element_names() {
        assert_eq!(Element::Fire.to_string(), "火");
        assert_eq!(Element::Fire.chinese(), "火");
        assert_eq!(Element::Metal.tibetan(), "ལྕགས་");
    }

    #[test]
    fn test_rabjung() {
        assert_eq!(rabjung_cycle(1027), (1, 1));
        assert_eq!(rabjung_cycle(1086), (1, 60));
        assert_eq!(rabjung_cycle(1087), (2, 1));
        assert_eq!(rabjung_cycle(2026), (17, 40));
        assert_eq!(rabjung_cycle(1026), (0, 0));
    }

    #[test]
    fn test_year_names() {
        assert_eq!(year_element_name(2026), "火马年");
        assert_eq!(full_year_name(2026), "第17绕迥火马年");
        assert_eq!(full_year_name(1987), "第17绕迥火兔年");
    }

    #[test]
    fn test_month_length() {
        // 2026 + 2 = 2028 is a multiple of 3
        assert_eq!(month_length(2026, month(1)), 30);
        assert_eq!(month_length(2026, month(2)), 29);
        assert_eq!(month_length(2026, month(3)), 30);
        assert_eq!(month_length(2026, month(5)), 29);
    }

    #[test]
    fn test_missing_and_double_days() {
        // 2026 + 6 + 16 = 2048 = 16 * 128
        assert!(is_missing_day(2026, 6, 16));
        assert!(is_double_day(2026, 6, 16));
        // 2026 + 1 + 21 and 2026 + 7 + 15 both give 2048
        assert_eq!(missing_days(2026, month(1)), [21]);
        assert_eq!(double_days(2026, month(7)), [15]);

        // 1970 + 4 + 10 = 1984 is a multiple of 64 but not of 128
        assert!(is_missing_day(1970, 4, 10));
        assert!(!is_double_day(1970, 4, 10));

        assert!(!is_missing_day(2026, 1, 1));
    }

    #[test]
    fn test_doubled_days_are_missing_days() {
        for year in 1950..=2050 {
            for m in 1..=12 {
                for day in double_days(year, month(m)) {
                    assert!(is_missing_day(year, m, u32::from(day)));
                }
            }
        }
    }

    #[test]
    fn test_ten_gods() {
        assert_eq!(ten_gods(2026, 2026), "比肩");
        assert_eq!(ten_gods(2026, 2027), "劫财");
        assert_eq!(ten_gods(2026, 2032), "七杀");
        assert_eq!(ten_gods(2026, 2025), "劫财");
        assert_eq!(ten_gods(2026, 2038), "比肩");
    }
}
