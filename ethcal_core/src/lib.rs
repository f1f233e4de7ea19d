#![forbid(unsafe_code)]

//! Core date arithmetic for the Ethiopian/Gregorian calendar tool.
//!
//! This crate provides:
//! - Calendar types (dates, Julian Day Numbers, weekdays, ages)
//! - Gregorian and Ethiopian calendar rules
//! - Conversion through the Julian Day Number pivot
//! - Age calculation against an injected reference date
//! - Year views and CSV export for presentation layers

pub mod types;
pub mod error;
pub mod gregorian;
pub mod julian_day;
pub mod ethiopian;
pub mod bridge;
pub mod age;
pub mod clock;
pub mod view;
pub mod export;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use bridge::{ethiopian_to_gregorian, gregorian_to_ethiopian, weekday_of};
pub use age::{age_from_ethiopian, age_from_ethiopian_exact, age_from_gregorian};
pub use clock::{Clock, FixedClock, SystemClock};
pub use view::{ethiopian_year_view, gregorian_year_view, DayEntry, MonthView, YearView};
pub use config::{AgeMethod, Config, OutputFormat};
