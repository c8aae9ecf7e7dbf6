//! Conversions between the Gregorian calendar and the Chinese lunar and
//! Tibetan calendars, with the festivals, solar terms and daily almanac
//! details a calendar view shows alongside each day.
//!
//! ```
//! use chrono::NaiveDate;
//! use lunisolar::{CalendarType, calendar};
//!
//! let lunar = calendar(CalendarType::Lunar).unwrap();
//! let date = NaiveDate::from_ymd_opt(2026, 2, 17).unwrap();
//! let info = lunar.daily_info(date).unwrap();
//! assert_eq!(info.suitable.len(), 5);
//!
//! let festivals = lunisolar::festivals_for_month(CalendarType::Lunar, 2026, 1);
//! assert_eq!(festivals[0].name, "春节");
//! assert_eq!(festivals[0].solar_date(2026), Ok(date));
//! ```

mod consts;
mod error;
mod prelude;
mod range;
mod types;

pub mod festival;
pub mod lunar;
pub mod plugin;
pub mod tibetan;

#[cfg(test)]
mod test_utils;

pub use consts::*;
pub use error::CalendarError;
pub use festival::{Festival, FestivalDate, FestivalType};
pub use plugin::{
    CalendarDate, CalendarPlugin, DailyInfo, LocalDate, LunarCalendar, PluginMetadata, SpecialDate, TibetanCalendar,
    calendar, calendars, festivals_for_month, festivals_for_year,
};
pub use range::{LUNAR_YEAR_RANGE, TIBETAN_YEAR_RANGE, YearRange};
pub use types::{CalendarType, Day, Month, Zodiac};
