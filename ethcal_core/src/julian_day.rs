//! Gregorian date ↔ Julian Day Number conversion.
//!
//! Uses the Fliegel–Van Flandern integer formulas. Every division is floor
//! division (`div_euclid`) so century and leap boundaries stay exact.

use crate::{gregorian, Error, JulianDayNumber, Result, Weekday};

/// Computes the JDN of a Gregorian date.
///
/// Fails with [`crate::Error::InvalidInput`] for an out-of-range date.
///
/// # Example
///
/// ```
/// use ethcal_core::julian_day::gregorian_to_jdn;
///
/// assert_eq!(2451545, gregorian_to_jdn(2000, 1, 1).unwrap().value());
/// ```
pub fn gregorian_to_jdn(year: i32, month: u32, day: u32) -> Result<JulianDayNumber> {
    gregorian::validate(year, month, day)?;
    Ok(gregorian_jdn_unchecked(year, month, day))
}

pub(crate) fn gregorian_jdn_unchecked(year: i32, month: u32, day: u32) -> JulianDayNumber {
    let (year, month, day) = (year as i64, month as i64, day as i64);
    let a = (14 - month).div_euclid(12);
    let y = year + 4800 - a;
    let m = month + 12 * a - 3;
    JulianDayNumber(
        day + (153 * m + 2).div_euclid(5) + 365 * y + y.div_euclid(4) - y.div_euclid(100)
            + y.div_euclid(400)
            - 32045,
    )
}

/// Gregorian `(year, month, day)` falling on `jdn`.
///
/// Fails with [`crate::Error::InvalidInput`] when `jdn` is outside
/// [`crate::SUPPORTED_JDNS`].
///
/// # Example
///
/// ```
/// use ethcal_core::JulianDayNumber;
/// use ethcal_core::julian_day::jdn_to_gregorian;
///
/// assert_eq!((2000, 1, 1), jdn_to_gregorian(JulianDayNumber(2451545)).unwrap());
/// ```
pub fn jdn_to_gregorian(jdn: JulianDayNumber) -> Result<(i32, u32, u32)> {
    let mut l = jdn.checked()?.value() + 68569;
    let n = (4 * l).div_euclid(146097);
    l -= (146097 * n + 3).div_euclid(4);
    let i = (4000 * (l + 1)).div_euclid(1461001);
    l = l - (1461 * i).div_euclid(4) + 31;
    let j = (80 * l).div_euclid(2447);
    let day = l - (2447 * j).div_euclid(80);
    l = j.div_euclid(11);
    let month = j + 2 - 12 * l;
    let year = 100 * (n - 49) + i + l;
    let year = i32::try_from(year)
        .map_err(|_| Error::invalid(format!("year {} does not fit", year)))?;
    Ok((year, month as u32, day as u32))
}

/// Weekday of `jdn`, Sunday = 0.
pub fn day_of_week(jdn: JulianDayNumber) -> Weekday {
    Weekday::from_index(jdn.value() + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_jdns() {
        assert_eq!(gregorian_to_jdn(1970, 1, 1).unwrap().value(), 2440588);
        assert_eq!(gregorian_to_jdn(2000, 1, 1).unwrap().value(), 2451545);
        assert_eq!(gregorian_to_jdn(2021, 9, 8).unwrap().value(), 2459466);
        assert_eq!(gregorian_to_jdn(2024, 1, 1).unwrap().value(), 2460311);
    }

    #[test]
    fn test_to_gregorian() {
        assert_eq!(jdn_to_gregorian(JulianDayNumber(2440588)).unwrap(), (1970, 1, 1));
        assert_eq!(jdn_to_gregorian(JulianDayNumber(2459466)).unwrap(), (2021, 9, 8));
        assert_eq!(jdn_to_gregorian(JulianDayNumber(2460311)).unwrap(), (2024, 1, 1));
    }

    #[test]
    fn test_to_gregorian_rejects_out_of_range_jdn() {
        for jdn in [-1, 10_000_001, 1_568_707_052_920, i64::MAX, i64::MIN] {
            assert!(
                matches!(jdn_to_gregorian(JulianDayNumber(jdn)), Err(Error::InvalidInput(_))),
                "jdn {jdn}"
            );
        }
    }

    #[test]
    fn test_rejects_invalid_dates() {
        assert!(gregorian_to_jdn(2023, 2, 29).is_err());
        assert!(gregorian_to_jdn(2024, 13, 1).is_err());
        assert!(gregorian_to_jdn(2024, 1, 32).is_err());
    }

    #[test]
    fn test_round_trip_every_date() {
        for year in 1..=9999 {
            for month in 1..=12 {
                let days = gregorian::days_in_month(month, year).unwrap();
                for day in 1..=days {
                    let jdn = gregorian_to_jdn(year, month, day).unwrap();
                    assert_eq!(
                        jdn_to_gregorian(jdn).unwrap(),
                        (year, month, day),
                        "{year:04}-{month:02}-{day:02}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_consecutive_days_are_consecutive_jdns() {
        let mut prev = gregorian_to_jdn(1899, 12, 31).unwrap();
        for year in [1900, 2000, 2023, 2024] {
            let start = gregorian_to_jdn(year, 1, 1).unwrap();
            let end = gregorian_to_jdn(year, 12, 31).unwrap();
            let len = if gregorian::is_leap_year(year) { 366 } else { 365 };
            assert_eq!(end - start + 1, len);
            assert!(start > prev);
            prev = end;
        }
    }

    #[test]
    fn test_day_of_week() {
        let weekday = |y, m, d| day_of_week(gregorian_to_jdn(y, m, d).unwrap());
        assert_eq!(weekday(1970, 1, 1), Weekday::Thursday);
        assert_eq!(weekday(2000, 1, 1), Weekday::Saturday);
        assert_eq!(weekday(2021, 9, 8), Weekday::Wednesday);
        assert_eq!(weekday(2024, 1, 1), Weekday::Monday);
    }

    #[test]
    fn test_day_of_week_period_and_negative_jdn() {
        let base = JulianDayNumber(2460311);
        for offset in 0..30 {
            assert_eq!(day_of_week(base + offset), day_of_week(base + offset + 7));
        }
        // JDN 0 is a Monday; JDN -1 a Sunday
        assert_eq!(day_of_week(JulianDayNumber(0)), Weekday::Monday);
        assert_eq!(day_of_week(JulianDayNumber(-1)), Weekday::Sunday);
        assert_eq!(day_of_week(JulianDayNumber(-8)), Weekday::Sunday);
    }
}
