//! Core domain types for the calendar converter.
//!
//! This module defines the fundamental values passed between the converters:
//! - Calendar systems and validated calendar dates
//! - Julian Day Numbers, the pivot shared by both calendars
//! - Weekdays and elapsed ages

use crate::{ethiopian, gregorian, julian_day, Error, Result};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, RangeInclusive, Sub};

/// Years accepted by the validated constructors, in both calendars.
pub const SUPPORTED_YEARS: RangeInclusive<i32> = 1..=9999;

/// JDNs accepted by the inverse conversions. Wide enough to cover every
/// supported year in both calendars, small enough that the integer formulas
/// cannot overflow and every resulting year fits in an `i32`.
pub const SUPPORTED_JDNS: RangeInclusive<i64> = 0..=10_000_000;

// ============================================================================
// Calendar Systems and Dates
// ============================================================================

/// Calendar a date is expressed in
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CalendarSystem {
    Gregorian,
    Ethiopian,
}

impl CalendarSystem {
    pub fn name(&self) -> &'static str {
        match self {
            CalendarSystem::Gregorian => "Gregorian",
            CalendarSystem::Ethiopian => "Ethiopian",
        }
    }
}

/// A validated date in one of the two supported calendars.
///
/// Values can only be built through [`CalendarDate::gregorian`],
/// [`CalendarDate::ethiopian`] or a conversion, so the month and day are
/// always within range for the year under that calendar's leap rule.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq, Hash)]
pub struct CalendarDate {
    system: CalendarSystem,
    year: i32,
    month: u32,
    day: u32,
}

impl CalendarDate {
    /// Creates a proleptic Gregorian date.
    ///
    /// # Example
    ///
    /// ```
    /// use ethcal_core::CalendarDate;
    ///
    /// assert!(CalendarDate::gregorian(2024, 2, 29).is_ok());
    /// assert!(CalendarDate::gregorian(2023, 2, 29).is_err());
    /// ```
    pub fn gregorian(year: i32, month: u32, day: u32) -> Result<Self> {
        gregorian::validate(year, month, day)?;
        Ok(Self {
            system: CalendarSystem::Gregorian,
            year,
            month,
            day,
        })
    }

    /// Creates an Ethiopian date. Month 13 is Pagume.
    ///
    /// # Example
    ///
    /// ```
    /// use ethcal_core::CalendarDate;
    ///
    /// assert!(CalendarDate::ethiopian(2015, 13, 6).is_ok()); // leap year
    /// assert!(CalendarDate::ethiopian(2016, 13, 6).is_err());
    /// ```
    pub fn ethiopian(year: i32, month: u32, day: u32) -> Result<Self> {
        ethiopian::validate(year, month, day)?;
        Ok(Self {
            system: CalendarSystem::Ethiopian,
            year,
            month,
            day,
        })
    }

    /// Creates a date in the given calendar.
    pub fn new(system: CalendarSystem, year: i32, month: u32, day: u32) -> Result<Self> {
        match system {
            CalendarSystem::Gregorian => Self::gregorian(year, month, day),
            CalendarSystem::Ethiopian => Self::ethiopian(year, month, day),
        }
    }

    /// Builds the date of `system` that falls on `jdn`.
    ///
    /// Fails with [`Error::InvalidInput`] when `jdn` is outside
    /// [`SUPPORTED_JDNS`] or lands on a year outside [`SUPPORTED_YEARS`].
    pub fn from_jdn(system: CalendarSystem, jdn: JulianDayNumber) -> Result<Self> {
        let (year, month, day) = match system {
            CalendarSystem::Gregorian => julian_day::jdn_to_gregorian(jdn)?,
            CalendarSystem::Ethiopian => ethiopian::jdn_to_ethiopian(jdn)?,
        };
        Self::new(system, year, month, day)
    }

    /// Parses `YYYY-MM-DD`, `YYYY/MM/DD` or `YYYY MM DD` as a date of `system`.
    pub fn parse(system: CalendarSystem, input: &str) -> Result<Self> {
        let parts: Vec<&str> = input
            .trim()
            .split(|c: char| c == '-' || c == '/' || c.is_whitespace())
            .filter(|p| !p.is_empty())
            .collect();

        let [y, m, d] = parts.as_slice() else {
            return Err(Error::invalid(format!(
                "expected a date as YYYY-MM-DD, got {:?}",
                input.trim()
            )));
        };

        let year = y
            .parse::<i32>()
            .map_err(|_| Error::invalid(format!("year {:?} is not a number", y)))?;
        let month = m
            .parse::<u32>()
            .map_err(|_| Error::invalid(format!("month {:?} is not a number", m)))?;
        let day = d
            .parse::<u32>()
            .map_err(|_| Error::invalid(format!("day {:?} is not a number", d)))?;

        Self::new(system, year, month, day)
    }

    pub fn system(&self) -> CalendarSystem {
        self.system
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// Name of the month in this date's calendar.
    pub fn month_name(&self) -> &'static str {
        let idx = (self.month - 1) as usize;
        match self.system {
            CalendarSystem::Gregorian => gregorian::MONTH_NAMES[idx],
            CalendarSystem::Ethiopian => ethiopian::MONTH_NAMES[idx],
        }
    }

    /// Julian Day Number of this date.
    pub fn to_jdn(&self) -> JulianDayNumber {
        match self.system {
            CalendarSystem::Gregorian => {
                julian_day::gregorian_jdn_unchecked(self.year, self.month, self.day)
            }
            CalendarSystem::Ethiopian => {
                ethiopian::ethiopian_jdn_unchecked(self.year, self.month, self.day)
            }
        }
    }

    pub fn weekday(&self) -> Weekday {
        julian_day::day_of_week(self.to_jdn())
    }
}

impl TryFrom<NaiveDate> for CalendarDate {
    type Error = Error;

    fn try_from(date: NaiveDate) -> Result<Self> {
        Self::gregorian(date.year(), date.month(), date.day())
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)?;
        if self.system == CalendarSystem::Ethiopian {
            write!(f, " E.C.")?;
        }
        Ok(())
    }
}

// ============================================================================
// Julian Day Number
// ============================================================================

/// Count of days since the proleptic Julian epoch (civil, noon-based).
#[derive(
    Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(transparent)]
pub struct JulianDayNumber(pub i64);

impl JulianDayNumber {
    pub fn value(&self) -> i64 {
        self.0
    }

    /// Returns `self` if it lies within [`SUPPORTED_JDNS`].
    pub fn checked(self) -> Result<Self> {
        if !SUPPORTED_JDNS.contains(&self.0) {
            return Err(Error::invalid(format!(
                "JDN {} is outside {}..={}",
                self.0,
                SUPPORTED_JDNS.start(),
                SUPPORTED_JDNS.end()
            )));
        }
        Ok(self)
    }
}

impl Add<i64> for JulianDayNumber {
    type Output = JulianDayNumber;

    fn add(self, rhs: i64) -> Self::Output {
        JulianDayNumber(self.0 + rhs)
    }
}

impl Sub for JulianDayNumber {
    type Output = i64;

    fn sub(self, rhs: JulianDayNumber) -> Self::Output {
        self.0 - rhs.0
    }
}

impl fmt::Display for JulianDayNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Weekday
// ============================================================================

/// Day of the week, numbered Sunday = 0 through Saturday = 6
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// Maps any integer onto the week, so negative values wrap as well.
    pub fn from_index(index: i64) -> Self {
        Self::ALL[index.rem_euclid(7) as usize]
    }

    pub fn index(&self) -> u32 {
        *self as u32
    }

    pub fn name(&self) -> &'static str {
        match self {
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        }
    }

    pub fn short_name(&self) -> &'static str {
        &self.name()[..3]
    }
}

// ============================================================================
// Age
// ============================================================================

/// Elapsed time between a birth date and a reference date
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AgeDuration {
    pub years: u32,
    pub months: u32,
    pub days: u32,
}

impl fmt::Display for AgeDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} years, {} months, {} days",
            self.years, self.months, self.days
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gregorian_constructor_validates() {
        assert!(CalendarDate::gregorian(2024, 1, 31).is_ok());
        assert!(CalendarDate::gregorian(2024, 13, 1).is_err());
        assert!(CalendarDate::gregorian(2024, 4, 31).is_err());
        assert!(CalendarDate::gregorian(2024, 1, 0).is_err());
        assert!(CalendarDate::gregorian(0, 1, 1).is_err());
    }

    #[test]
    fn test_ethiopian_constructor_validates() {
        assert!(CalendarDate::ethiopian(2016, 12, 30).is_ok());
        assert!(CalendarDate::ethiopian(2016, 14, 1).is_err());
        assert!(CalendarDate::ethiopian(2016, 1, 31).is_err());
        assert!(CalendarDate::ethiopian(2016, 13, 5).is_ok());
        assert!(CalendarDate::ethiopian(2016, 13, 6).is_err());
    }

    #[test]
    fn test_parse_accepts_common_separators() {
        let a = CalendarDate::parse(CalendarSystem::Gregorian, "1990-05-15").unwrap();
        let b = CalendarDate::parse(CalendarSystem::Gregorian, "1990 5 15").unwrap();
        let c = CalendarDate::parse(CalendarSystem::Gregorian, " 1990/05/15\n").unwrap();
        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_eq!((a.year(), a.month(), a.day()), (1990, 5, 15));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            CalendarDate::parse(CalendarSystem::Gregorian, "1990-05"),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            CalendarDate::parse(CalendarSystem::Ethiopian, "2000-xx-10"),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            CalendarDate::parse(CalendarSystem::Ethiopian, "2000-14-10"),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_display() {
        let g = CalendarDate::gregorian(2024, 1, 1).unwrap();
        let e = CalendarDate::ethiopian(2016, 4, 22).unwrap();
        assert_eq!(g.to_string(), "2024-01-01");
        assert_eq!(e.to_string(), "2016-04-22 E.C.");
    }

    #[test]
    fn test_month_names() {
        let g = CalendarDate::gregorian(2024, 1, 1).unwrap();
        let e = CalendarDate::ethiopian(2016, 13, 1).unwrap();
        assert_eq!(g.month_name(), "January");
        assert_eq!(e.month_name(), "Pagume");
    }

    #[test]
    fn test_from_naive_date() {
        let naive = NaiveDate::from_ymd_opt(2024, 5, 14).unwrap();
        let date = CalendarDate::try_from(naive).unwrap();
        assert_eq!(date, CalendarDate::gregorian(2024, 5, 14).unwrap());
    }

    #[test]
    fn test_weekday_from_index_wraps() {
        assert_eq!(Weekday::from_index(0), Weekday::Sunday);
        assert_eq!(Weekday::from_index(6), Weekday::Saturday);
        assert_eq!(Weekday::from_index(7), Weekday::Sunday);
        assert_eq!(Weekday::from_index(-1), Weekday::Saturday);
        assert_eq!(Weekday::Wednesday.short_name(), "Wed");
        assert_eq!(Weekday::Friday.index(), 5);
    }

    #[test]
    fn test_from_jdn_rejects_far_jdns() {
        // 1 January of year 2^32 + 2024 would wrap to 2024 in an i32
        let far = JulianDayNumber(1_568_707_052_920);
        for system in [CalendarSystem::Gregorian, CalendarSystem::Ethiopian] {
            assert!(matches!(
                CalendarDate::from_jdn(system, far),
                Err(Error::InvalidInput(_))
            ));
            assert!(matches!(
                CalendarDate::from_jdn(system, JulianDayNumber(i64::MAX)),
                Err(Error::InvalidInput(_))
            ));
            assert!(matches!(
                CalendarDate::from_jdn(system, JulianDayNumber(i64::MIN)),
                Err(Error::InvalidInput(_))
            ));
        }
    }

    #[test]
    fn test_from_jdn_within_range() {
        let date = CalendarDate::from_jdn(CalendarSystem::Gregorian, JulianDayNumber(2460311));
        assert_eq!(date.unwrap(), CalendarDate::gregorian(2024, 1, 1).unwrap());
        // Inside the JDN range but before year 1
        assert!(CalendarDate::from_jdn(CalendarSystem::Gregorian, JulianDayNumber(0)).is_err());
    }

    #[test]
    fn test_jdn_arithmetic() {
        let a = JulianDayNumber(2460311);
        assert_eq!(a + 30, JulianDayNumber(2460341));
        assert_eq!((a + 30) - a, 30);
    }

    #[test]
    fn test_age_display() {
        let age = AgeDuration {
            years: 33,
            months: 11,
            days: 29,
        };
        assert_eq!(age.to_string(), "33 years, 11 months, 29 days");
    }
}
