use crate::Month;

const MONTHS_CHINESE: [&str; 12] = [
    "一月", "二月", "三月", "四月", "五月", "六月", "七月", "八月", "九月", "十月", "十一月", "十二月",
];

const MONTHS_TIBETAN: [&str; 12] = [
    "ཧོར་ཟླ་དང་པོ",
    "ཧོར་ཟླ་གཉིས་པ",
    "ཧོར་ཟླ་གསུམ་པ",
    "ཧོར་ཟླ་བཞི་པ",
    "ཧོར་ཟླ་ལྔ་པ",
    "ཧོར་ཟླ་དྲུག་པ",
    "ཧོར་ཟླ་བདུན་པ",
    "ཧོར་ཟླ་བརྒྱད་པ",
    "ཧོར་ཟླ་དགུ་པ",
    "ཧོར་ཟླ་བཅུ་པ",
    "ཧོར་ཟླ་བཅུ་གཅིག་པ",
    "ཧོར་ཟླ་བཅུ་གཉིས་པ",
];

const DAYS_TIBETAN: [&str; 30] = [
    "གཅིག", "གཉིས", "གསུམ", "བཞི", "ལྔ", "དྲུག", "བདུན", "བརྒྱད", "དགུ", "བཅུ", //
    "བཅུ་གཅིག", "བཅུ་གཉིས", "བཅུ་གསུམ", "བཅུ་བཞི", "བཅོ་ལྔ", "བཅུ་དྲུག", "བཅུ་བདུན", "བཅུ་བརྒྱད", "བཅུ་དགུ", "ཉི་ཤུ", //
    "ཉེར་གཅིག", "ཉེར་གཉིས", "ཉེར་གསུམ", "ཉེར་བཞི", "ཉེར་ལྔ", "ཉེར་དྲུག", "ཉེར་བདུན", "ཉེར་བརྒྱད", "ཉེར་དགུ", "སུམ་ཅུ",
];

pub fn month_name_chinese(month: Month) -> &'static str {
    MONTHS_CHINESE[usize::from(month.get()) - 1]
}

pub fn month_name_tibetan(month: Month) -> &'static str {
    MONTHS_TIBETAN[usize::from(month.get()) - 1]
}

/// Tibetan numeral name of days 1–30; `None` otherwise.
pub fn day_name_tibetan(day: u8) -> Option<&'static str> {
    usize::from(day).checked_sub(1).and_then(|i| DAYS_TIBETAN.get(i)).copied()
}
