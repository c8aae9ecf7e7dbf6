use crate::CalendarType::{Lunar, Solar};
use crate::festival::{Festival, FestivalDate, FestivalType::*};

const fn lunar(id: &'static str, name: &'static str, month: u8, day: u8, description: &'static str) -> Festival {
    Festival::from_static(
        id,
        name,
        None,
        FestivalDate::Lunar { month, day },
        Lunar,
        Traditional,
        Some(description),
    )
}

/// Traditional festivals of the lunar calendar.
pub static LUNAR_FESTIVALS: [Festival; 14] = [
    lunar("lunar-spring-festival", "春节", 1, 1, "农历新年，最重要的传统节日"),
    lunar("lunar-lantern-festival", "元宵节", 1, 15, "正月十五，又称上元节"),
    lunar("lunar-dragon-head", "龙抬头", 2, 2, "二月二，青龙节"),
    lunar("lunar-shangsi", "上巳节", 3, 3, "三月三"),
    Festival::from_static(
        "lunar-buddha-birthday",
        "佛诞日",
        None,
        FestivalDate::Lunar { month: 4, day: 8 },
        Lunar,
        Buddhist,
        Some("四月初八，释迦牟尼佛诞辰"),
    ),
    lunar("lunar-dragon-boat-festival", "端午节", 5, 5, "五月初五"),
    lunar("lunar-qixi", "七夕节", 7, 7, "七月初七，中国情人节"),
    lunar("lunar-ghost-festival", "中元节", 7, 15, "七月十五，鬼节"),
    lunar("lunar-mid-autumn-festival", "中秋节", 8, 15, "八月十五"),
    lunar("lunar-double-ninth-festival", "重阳节", 9, 9, "九月初九"),
    lunar("lunar-xiayuan", "下元节", 10, 15, "十月十五"),
    // approximate; the real solstice date comes from the solar terms
    Festival::from_static(
        "lunar-dongzhi",
        "冬至",
        None,
        FestivalDate::Fixed { month: 12, day: 22 },
        Solar,
        SolarTerm,
        Some("二十四节气之一"),
    ),
    lunar("lunar-laba-festival", "腊八节", 12, 8, "腊月初八"),
    lunar("lunar-new-year-eve", "除夕", 12, 30, "腊月最后一天"),
];
