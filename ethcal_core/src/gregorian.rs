//! Gregorian calendar rules.
//!
//! The rules apply uniformly to every year (proleptic Gregorian calendar);
//! there is no Julian-calendar switchover.

use crate::{Error, Result, SUPPORTED_YEARS};

/// English month names, January first
pub static MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Determines if `year` is a leap year in the Gregorian calendar.
///
/// Defined for every integer, including astronomical years `<= 0`.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && year % 100 != 0 || year % 400 == 0
}

/// Number of days in `month` of `year`.
///
/// Fails with [`Error::InvalidInput`] when `month` is not in `1..=12`.
pub fn days_in_month(month: u32, year: i32) -> Result<u32> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Ok(31),
        4 | 6 | 9 | 11 => Ok(30),
        2 if is_leap_year(year) => Ok(29),
        2 => Ok(28),
        _ => Err(Error::invalid(format!(
            "Gregorian month {} is outside 1..=12",
            month
        ))),
    }
}

/// Name of a Gregorian month.
pub fn month_name(month: u32) -> Result<&'static str> {
    match month {
        1..=12 => Ok(MONTH_NAMES[(month - 1) as usize]),
        _ => Err(Error::invalid(format!(
            "Gregorian month {} is outside 1..=12",
            month
        ))),
    }
}

/// Checks that `(year, month, day)` names a real Gregorian date in the
/// supported year range.
pub fn validate(year: i32, month: u32, day: u32) -> Result<()> {
    if !SUPPORTED_YEARS.contains(&year) {
        return Err(Error::invalid(format!(
            "Gregorian year {} is outside {}..={}",
            year,
            SUPPORTED_YEARS.start(),
            SUPPORTED_YEARS.end()
        )));
    }
    let max_day = days_in_month(month, year)?;
    if day == 0 || day > max_day {
        return Err(Error::invalid(format!(
            "day {} is outside 1..={} for {} {}",
            day,
            max_day,
            MONTH_NAMES[(month - 1) as usize],
            year
        )));
    }
    Ok(())
}
