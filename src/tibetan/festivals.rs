use chrono::NaiveDate;

use crate::festival::FestivalType::{Buddhist, Traditional};
use crate::festival::{Festival, FestivalDate, FestivalType};
use crate::{CalendarError, CalendarType, TIBETAN_YEAR_RANGE};

const fn tibetan(
    id: &'static str,
    month: u8,
    day: u8,
    name: &'static str,
    name_tibetan: &'static str,
    kind: FestivalType,
    description: &'static str,
) -> Festival {
    Festival::from_static(
        id,
        name,
        Some(name_tibetan),
        FestivalDate::Tibetan { month, day },
        CalendarType::Tibetan,
        kind,
        Some(description),
    )
}

/// Major festivals of the Tibetan calendar, in month order.
pub static TIBETAN_FESTIVALS: [Festival; 26] = [
    tibetan("tibetan-1-1", 1, 1, "藏历新年", "ལོ་གསར", Traditional, "藏族最重要的传统节日，庆祝新的一年开始"),
    tibetan("tibetan-1-3", 1, 3, "麦朵切", "སྨོན་ལམ་ཆེན་པོ", Traditional, "拉萨大昭寺传召大法会开始"),
    tibetan("tibetan-1-8", 1, 8, "神变节", "ཆོ་འཕྲུལ་དུས་ཆེན", Traditional, "佛陀示现神变的日子"),
    tibetan("tibetan-1-15", 1, 15, "酥油花灯节", "ཆོས་འཁོར་དུས་ཆེན", Traditional, "正月十五，纪念佛陀示现神变，展出酥油花"),
    tibetan("tibetan-1-25", 1, 25, "正月末", "དང་པོའི་མཇུག", Traditional, "正月最后一个殊胜日"),
    tibetan("tibetan-2-15", 2, 15, "二月十五", "ཟླ་གཉིས་པའི་བཅོ་ལྔ", Traditional, "春季重要的佛教节日"),
    tibetan("tibetan-3-15", 3, 15, "三月十五", "ཟླ་གསུམ་པའི་བཅོ་ལྔ", Traditional, "时轮金刚灌顶纪念日"),
    tibetan("tibetan-4-7", 4, 7, "佛陀诞辰", "སྐུ་བལྟམས་པའི་དུས་ཆེན", Buddhist, "佛陀诞生"),
    tibetan("tibetan-4-15", 4, 15, "萨迦达瓦", "ས་ག་ཟླ་བ", Buddhist, "佛诞、成道、涅槃三节合一，藏历最殊胜日"),
    tibetan("tibetan-4-25", 4, 25, "四月末", "ས་གའི་མཇུག", Traditional, "萨迦达瓦月最后一个殊胜日"),
    tibetan("tibetan-4-15-dharma-wheel", 4, 15, "佛陀转法轮日", "ཆོས་འཁོར་གྱི་དུས་ཆེན", Buddhist, "佛陀初转法轮纪念日"),
    tibetan("tibetan-6-4", 6, 4, "佛陀初转法轮", "ཆོས་འཁོར་དང་པོ", Buddhist, "佛陀在鹿野苑初转法轮"),
    tibetan("tibetan-6-15", 6, 15, "六月十五", "ཟླ་དྲུག་པའི་བཅོ་ལྔ", Traditional, "夏季重要节日"),
    tibetan("tibetan-6-30", 6, 30, "雪顿节", "ཞོ་སྟོན", Traditional, "吃酸奶的节日，藏戏表演"),
    tibetan("tibetan-7-15", 7, 15, "七月十五", "ཟླ་བདུན་པའི་བཅོ་ལྔ", Traditional, "秋季开始"),
    tibetan("tibetan-8-3", 8, 3, "八月节", "ཟླ་བརྒྱད་པ", Traditional, "丰收季节"),
    tibetan("tibetan-8-15", 8, 15, "八月十五", "ཟླ་བརྒྱད་པའི་བཅོ་ལྔ", Traditional, "中秋节 (与农历相同)"),
    tibetan("tibetan-9-15", 9, 15, "九月十五", "ཟླ་དགུ་པའི་བཅོ་ལྔ", Traditional, "秋季重要节日"),
    tibetan("tibetan-9-22", 9, 22, "佛陀天降日", "ལྷ་བབས་དུས་ཆེན", Buddhist, "佛陀从三十三天返回人间"),
    tibetan("tibetan-10-15", 10, 15, "十月十五", "ཟླ་བཅུ་པའི་བཅོ་ལྔ", Traditional, "宗喀巴大师圆寂纪念日前夕"),
    tibetan("tibetan-10-25", 10, 25, "燃灯节", "དགའ་ལྡན་ལྔ་མཆོད", Traditional, "宗喀巴大师圆寂纪念日，点灯供养"),
    tibetan("tibetan-11-15", 11, 15, "十一月十五", "ཟླ་བཅུ་གཅིག་པའི་བཅོ་ལྔ", Traditional, "冬季重要节日"),
    tibetan("tibetan-11-29", 11, 29, "驱鬼节", "གླིང་རས་ཆེན་པོ", Traditional, "年终驱鬼仪式"),
    tibetan("tibetan-12-15", 12, 15, "十二月十五", "ཟླ་བཅུ་གཉིས་པའི་བཅོ་ལྔ", Traditional, "年终准备"),
    tibetan("tibetan-12-29", 12, 29, "除夕", "ལོ་མཇུག", Traditional, "藏历年前夜，驱鬼除旧"),
    tibetan("tibetan-12-30", 12, 30, "除夕夜", "ལོ་རྙིང་མཇུག་རྫོགས", Traditional, "旧年最后一天"),
];

/// The first festival on a Tibetan month and day.
pub fn festival_on(month: u32, day: u32) -> Option<&'static Festival> {
    TIBETAN_FESTIVALS.iter().find(|festival| match festival.date {
        FestivalDate::Tibetan { month: m, day: d } => u32::from(m) == month && u32::from(d) == day,
        _ => false,
    })
}

/// Every festival of Tibetan `year` with its Gregorian date, earliest first.
///
/// # Errors
/// Returns `CalendarError::YearOutOfRange` outside 1950–2050.
pub fn festivals_resolved(year: i32) -> Result<Vec<(NaiveDate, &'static Festival)>, CalendarError> {
    let year = TIBETAN_YEAR_RANGE.check(year)?;
    let mut resolved = TIBETAN_FESTIVALS
        .iter()
        .map(|festival| festival.solar_date(year).map(|date| (date, festival)))
        .collect::<Result<Vec<_>, _>>()?;
    resolved.sort_by_key(|&(date, _)| date);
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::ymd;

    #[test]
    fn test_ids_are_unique() {
        let mut ids: Vec<_> = TIBETAN_FESTIVALS.iter().map(|f| f.id.as_ref()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), TIBETAN_FESTIVALS.len());
    }

    #[test]
    fn test_kinds() {
        let buddhist: Vec<_> = TIBETAN_FESTIVALS
            .iter()
            .filter(|f| f.kind == FestivalType::Buddhist)
            .map(|f| f.name.as_ref())
            .collect();
        assert_eq!(buddhist, ["佛陀诞辰", "萨迦达瓦", "佛陀转法轮日", "佛陀初转法轮", "佛陀天降日"]);
        assert!(TIBETAN_FESTIVALS.iter().all(|f| f.calendar_type == CalendarType::Tibetan));
    }

    #[test]
    fn test_festival_on_first_match() {
        assert_eq!(festival_on(1, 1).map(|f| f.name.as_ref()), Some("藏历新年"));
        assert_eq!(festival_on(4, 15).map(|f| f.name.as_ref()), Some("萨迦达瓦"));
        assert_eq!(festival_on(5, 5), None);
    }

    #[test]
    fn test_resolved_sorted() {
        let resolved = festivals_resolved(2026).unwrap();
        assert_eq!(resolved.len(), TIBETAN_FESTIVALS.len());
        assert_eq!(resolved[0].0, ymd(2026, 2, 1));
        assert_eq!(resolved[0].1.name, "藏历新年");
        assert_eq!(resolved.last().unwrap().0, ymd(2027, 1, 30));
        assert!(resolved.windows(2).all(|w| w[0].0 <= w[1].0));

        assert!(festivals_resolved(2051).is_err());
    }
}
