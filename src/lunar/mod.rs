//! The Chinese lunar calendar: year table, conversions, solar terms and the
//! dates derived from them.
//!
//! ```
//! use lunisolar::lunar;
//!
//! let date = chrono::NaiveDate::from_ymd_opt(2026, 2, 17).unwrap();
//! let lunar = lunar::solar_to_lunar(date).unwrap();
//! assert_eq!(lunar.to_string(), "丙午年正月初一");
//! assert_eq!(lunar::lunar_to_solar(2026, 1, 1, false), Ok(date));
//! ```

mod convert;
mod events;
mod festivals;
mod names;
mod solar_term;
mod table;

pub use convert::{LUNAR_EPOCH, LunarDate, lunar_to_solar, solar_to_lunar, solar_ymd_to_lunar};
pub use events::{DailyAlmanac, JiujiuPeriod, Sanfu, daily_auspicious, is_geng_day, jiujiu, jiujiu_period_for, sanfu};
pub use festivals::LUNAR_FESTIVALS;
pub use names::{BRANCHES, SOLAR_TERMS, STEMS, gan_zhi, sexagenary_indices, zodiac};
pub use solar_term::{SolarTerm, current_term, solar_term_on, solar_terms};
pub use table::{LunarMonth, LunarYear, days_before_year, leap_month, month_length, year_total_days};
