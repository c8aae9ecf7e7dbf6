//! The Tibetan calendar: year cycles, conversion, festivals and day markers.
//!
//! ```
//! use lunisolar::tibetan;
//!
//! let date = tibetan::solar_to_tibetan(2026, 2, 15).unwrap();
//! assert_eq!(date.full_year_name(), "第17绕迥火马年");
//! assert!(tibetan::is_special_day(u32::from(date.day())));
//! ```

mod convert;
mod festivals;
mod names;
mod quality;
mod year;

pub use convert::{TibetanDate, solar_date_to_tibetan, solar_to_tibetan, tibetan_to_solar};
pub use festivals::{TIBETAN_FESTIVALS, festival_on, festivals_resolved};
pub use quality::{
    DayQuality, DayVerdict, FlyingStar, day_quality, flying_star, is_special_date, is_special_day, next_special_day,
    special_day_description,
};
pub use year::{
    Element, double_days, element, full_year_name, is_double_day, is_missing_day, missing_days, month_length,
    rabjung_cycle, ten_gods, year_element_name, zodiac,
};
