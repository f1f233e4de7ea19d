//! Ethiopian calendar rules and Ethiopian date ↔ Julian Day Number conversion.
//!
//! The Ethiopian year has twelve 30-day months followed by Pagume, which
//! has 5 days, or 6 in a leap year. Year `y` is leap when `(y + 1) % 4 == 0`,
//! i.e. the year before a Gregorian leap year's February.

use crate::{Error, JulianDayNumber, Result, SUPPORTED_YEARS};

/// JDN anchor of the Ethiopian era used by the conversion formulas.
pub const EPOCH_OFFSET: i64 = 1_723_856;

/// Days in a four-year Ethiopian cycle.
const CYCLE_DAYS: i64 = 1461;

/// Month of Pagume
pub const PAGUME: u32 = 13;

/// Ethiopian month names, Meskerem first
pub static MONTH_NAMES: [&str; 13] = [
    "Meskerem",
    "Tikimt",
    "Hidar",
    "Tahsas",
    "Tir",
    "Yekatit",
    "Megabit",
    "Miazia",
    "Ginbot",
    "Sene",
    "Hamle",
    "Nehase",
    "Pagume",
];

// ============================================================================
// Calendar Information
// ============================================================================

/// Name of an Ethiopian month.
///
/// Fails with [`Error::InvalidInput`] for months outside `1..=13`.
pub fn month_name(month: u32) -> Result<&'static str> {
    match month {
        1..=13 => Ok(MONTH_NAMES[(month - 1) as usize]),
        _ => Err(Error::invalid(format!(
            "Ethiopian month {} is outside 1..=13",
            month
        ))),
    }
}

/// Determines if Ethiopian `year` has a six-day Pagume.
pub fn is_leap_year(year: i32) -> bool {
    (year as i64 + 1).rem_euclid(4) == 0
}

/// Number of days in Ethiopian `month` of `year`.
pub fn days_in_month(month: u32, year: i32) -> Result<u32> {
    match month {
        1..=12 => Ok(30),
        PAGUME if is_leap_year(year) => Ok(6),
        PAGUME => Ok(5),
        _ => Err(Error::invalid(format!(
            "Ethiopian month {} is outside 1..=13",
            month
        ))),
    }
}

/// Checks that `(year, month, day)` names a real Ethiopian date in the
/// supported year range.
pub fn validate(year: i32, month: u32, day: u32) -> Result<()> {
    if !SUPPORTED_YEARS.contains(&year) {
        return Err(Error::invalid(format!(
            "Ethiopian year {} is outside {}..={}",
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

// ============================================================================
// Julian Day Number Conversion
// ============================================================================

/// Computes the JDN of an Ethiopian date.
///
/// # Example
///
/// ```
/// use ethcal_core::ethiopian::ethiopian_to_jdn;
///
/// // 22 Tahsas 2016 is 1 January 2024
/// assert_eq!(2460311, ethiopian_to_jdn(2016, 4, 22).unwrap().value());
/// ```
pub fn ethiopian_to_jdn(year: i32, month: u32, day: u32) -> Result<JulianDayNumber> {
    validate(year, month, day)?;
    Ok(ethiopian_jdn_unchecked(year, month, day))
}

pub(crate) fn ethiopian_jdn_unchecked(year: i32, month: u32, day: u32) -> JulianDayNumber {
    let (year, month, day) = (year as i64, month as i64, day as i64);
    let start_of_year = EPOCH_OFFSET + 365 * year + year.div_euclid(4);
    let day_of_year = if month < PAGUME as i64 {
        30 * (month - 1) + (day - 1)
    } else {
        360 + (day - 1)
    };
    JulianDayNumber(start_of_year + day_of_year)
}

/// Ethiopian `(year, month, day)` falling on `jdn`.
///
/// Fails with [`Error::InvalidInput`] when `jdn` is outside
/// [`crate::SUPPORTED_JDNS`].
pub fn jdn_to_ethiopian(jdn: JulianDayNumber) -> Result<(i32, u32, u32)> {
    let offset = jdn.checked()?.value() - EPOCH_OFFSET;
    let r = offset.rem_euclid(CYCLE_DAYS);
    let n = r % 365 + 365 * (r / 1460);
    let year = 4 * offset.div_euclid(CYCLE_DAYS) + r / 365 - r / 1460;

    let (month, day) = if n < 360 {
        (n / 30 + 1, n % 30 + 1)
    } else {
        (PAGUME as i64, n - 360 + 1)
    };
    let year = i32::try_from(year)
        .map_err(|_| Error::invalid(format!("year {} does not fit", year)))?;
    Ok((year, month as u32, day as u32))
}
