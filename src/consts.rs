/// First year covered by the lunar year table (inclusive)
pub const LUNAR_MIN_YEAR: i32 = 1900;
/// Last year covered by the lunar year table (inclusive)
pub const LUNAR_MAX_YEAR: i32 = 2100;

/// First supported Tibetan year (inclusive)
pub const TIBETAN_MIN_YEAR: i32 = 1950;
/// Last supported Tibetan year (inclusive)
pub const TIBETAN_MAX_YEAR: i32 = 2050;

/// Months per calendar year, leap months excluded
pub const MAX_MONTH: u8 = 12;
/// Longest calendar-local month
pub const MAX_DAY: u8 = 30;
/// First day of a month
pub const MIN_DAY: u8 = 1;
/// Longest Gregorian month
pub const MAX_SOLAR_DAY: u8 = 31;
/// Most times a weekday can occur in one month
pub const MAX_WEEK_OF_MONTH: u8 = 5;

/// Length of a long lunar month
pub const LONG_MONTH_DAYS: u8 = 30;
/// Length of a short lunar month
pub const SHORT_MONTH_DAYS: u8 = 29;

/// Lunar new year of 1900 as (year, month, day): the conversion epoch
pub const LUNAR_EPOCH_YMD: (i32, u32, u32) = (1900, 1, 31);

/// Instant of the 1900 小寒 term as (year, month, day, hour, minute)
pub const SOLAR_TERM_EPOCH: (i32, u32, u32, u32, u32) = (1900, 1, 6, 2, 5);
/// Tropical year in whole minutes (365.2422 days, rounded)
pub const TROPICAL_YEAR_MINUTES: i64 = 525_949;
/// Solar terms per year
pub const SOLAR_TERM_COUNT: usize = 24;

/// Heavenly stems in the sexagenary cycle
pub const STEM_CYCLE: i32 = 10;
/// Earthly branches (and zodiac animals)
pub const BRANCH_CYCLE: i32 = 12;
/// Offset between a Gregorian year and its stem/branch index (4 CE was 甲子)
pub const SEXAGENARY_YEAR_OFFSET: i32 = 4;

/// Stem index of 庚 days in the Sanfu day-of-month rule
pub const GENG_STEM: u32 = 6;
/// Added to the day of month before reducing modulo the stem cycle
pub const GENG_DAY_SHIFT: u32 = 6;
/// Which 庚 day after the summer solstice opens the first dog days
pub const SANFU_START_GENG_ORDINAL: u32 = 3;
/// Days from the start of the first dog days to the middle period
pub const SANFU_MIDDLE_OFFSET_DAYS: u64 = 10;
/// Upper bound on days scanned while looking for 庚 days
pub const GENG_SCAN_LIMIT: u32 = 40;

/// Number of nine-day winter periods
pub const JIUJIU_PERIODS: usize = 9;
/// Days in each winter period
pub const JIUJIU_PERIOD_DAYS: u64 = 9;

/// Auspicious activities picked for a day
pub const SUITABLE_PICKS: usize = 5;
/// Stride between auspicious picks
pub const SUITABLE_STRIDE: usize = 3;
/// Inauspicious activities picked for a day
pub const UNSUITABLE_PICKS: usize = 4;
/// Stride between inauspicious picks
pub const UNSUITABLE_STRIDE: usize = 5;

/// Year anchoring the element and zodiac cycles (a wood-rat year)
pub const TIBETAN_CYCLE_ANCHOR_YEAR: i32 = 1984;
/// Years per element and polarity pair cycle
pub const ELEMENT_CYCLE: i32 = 10;
/// First year of the first Rabjung
pub const RABJUNG_EPOCH_YEAR: i32 = 1027;
/// Years per Rabjung
pub const RABJUNG_CYCLE: i32 = 60;

/// `year + month + day` divisible by this marks a missing day
pub const MISSING_DAY_MODULUS: i32 = 64;
/// `year + month + day` divisible by this marks a doubled day
pub const DOUBLE_DAY_MODULUS: i32 = 128;
/// `(year + month) mod 3 == 0` marks a 29-day Tibetan month
pub const SHORT_TIBETAN_MONTH_MODULUS: i32 = 3;

/// Tibetan days of the month with multiplied merit
pub const SPECIAL_DAYS: [u8; 7] = [1, 8, 10, 15, 18, 25, 30];
/// Upper bound on days scanned when looking for the next special day
pub const SPECIAL_DAY_SCAN_LIMIT: u32 = 60;
/// Number of fallback day-quality bands
pub const QUALITY_BANDS: i32 = 5;
/// Stars in the nine palaces
pub const FLYING_STARS: i32 = 9;

/// Range separator (ISO 8601 interval style)
pub const RANGE_SEPARATOR: char = '/';
