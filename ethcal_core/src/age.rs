//! Age calculation between a birth date and a reference date.
//!
//! Two strategies are provided:
//! - Field subtraction with borrow (calendar-accurate), used for Gregorian
//!   birth dates and for the exact Ethiopian mode
//! - The 365/30-day approximation over the JDN difference, which is the
//!   historical behaviour for Ethiopian birth dates
//!
//! The reference date is always supplied by the caller; see [`crate::clock`].

use crate::bridge::convert;
use crate::{ethiopian, gregorian, AgeDuration, AgeMethod, CalendarDate, CalendarSystem, Error, Result};

/// Elapsed age between two Gregorian dates by field subtraction.
///
/// When the day of `today` is before the birth day, one month is borrowed
/// (adding the length of the month preceding `today`); a negative month count
/// borrows one year.
///
/// # Example
///
/// ```
/// use ethcal_core::{age_from_gregorian, CalendarDate};
///
/// let birth = CalendarDate::gregorian(1990, 5, 15).unwrap();
/// let today = CalendarDate::gregorian(2024, 5, 14).unwrap();
/// let age = age_from_gregorian(&birth, &today).unwrap();
/// assert_eq!((33, 11, 29), (age.years, age.months, age.days));
/// ```
pub fn age_from_gregorian(birth: &CalendarDate, today: &CalendarDate) -> Result<AgeDuration> {
    expect_system(birth, CalendarSystem::Gregorian, "birth")?;
    expect_system(today, CalendarSystem::Gregorian, "reference")?;
    check_order(birth, today)?;

    field_difference(birth, today, 12, gregorian::days_in_month)
}

/// Approximate age for an Ethiopian birth date.
///
/// The JDN difference is split into 365-day years and 30-day months, so the
/// result drifts from the calendar by roughly a day per leap year and up to
/// five days per year on the month field. Use [`age_from_ethiopian_exact`]
/// for a calendar-accurate value. `today` may be in either calendar.
pub fn age_from_ethiopian(birth: &CalendarDate, today: &CalendarDate) -> Result<AgeDuration> {
    expect_system(birth, CalendarSystem::Ethiopian, "birth")?;
    check_order(birth, today)?;

    let diff_days = today.to_jdn() - birth.to_jdn();
    let age = AgeDuration {
        years: (diff_days / 365) as u32,
        months: ((diff_days % 365) / 30) as u32,
        days: ((diff_days % 365) % 30) as u32,
    };
    tracing::debug!("Approximate age over {} days: {}", diff_days, age);
    Ok(age)
}

/// Calendar-accurate age for an Ethiopian birth date.
///
/// `today` is converted to the Ethiopian calendar, then fields are
/// subtracted with borrow over 13-month years (Pagume lends 5 or 6 days).
pub fn age_from_ethiopian_exact(
    birth: &CalendarDate,
    today: &CalendarDate,
) -> Result<AgeDuration> {
    expect_system(birth, CalendarSystem::Ethiopian, "birth")?;
    check_order(birth, today)?;

    let today = convert(today, CalendarSystem::Ethiopian)?;
    field_difference(birth, &today, 13, ethiopian::days_in_month)
}

/// Computes an age with the strategy appropriate for the birth calendar.
///
/// Gregorian birth dates always use field subtraction; Ethiopian birth dates
/// use `method`.
pub fn age_of(
    birth: &CalendarDate,
    today: &CalendarDate,
    method: AgeMethod,
) -> Result<AgeDuration> {
    match (birth.system(), method) {
        (CalendarSystem::Gregorian, _) => {
            let today = convert(today, CalendarSystem::Gregorian)?;
            age_from_gregorian(birth, &today)
        }
        (CalendarSystem::Ethiopian, AgeMethod::Approximate) => age_from_ethiopian(birth, today),
        (CalendarSystem::Ethiopian, AgeMethod::Exact) => age_from_ethiopian_exact(birth, today),
    }
}

/// Subtracts `birth` from `today` field by field. Both dates must share a
/// calendar and `birth` must not be later than `today`.
fn field_difference(
    birth: &CalendarDate,
    today: &CalendarDate,
    months_per_year: u32,
    days_in_month: fn(u32, i32) -> Result<u32>,
) -> Result<AgeDuration> {
    let mut years = today.year() - birth.year();
    let mut months = today.month() as i32 - birth.month() as i32;
    let mut days = today.day() as i32 - birth.day() as i32;

    // Borrow from the months preceding `today`, walking back as needed
    let (mut borrow_year, mut borrow_month) = (today.year(), today.month());
    while days < 0 {
        if borrow_month == 1 {
            borrow_month = months_per_year;
            borrow_year -= 1;
        } else {
            borrow_month -= 1;
        }
        days += days_in_month(borrow_month, borrow_year)? as i32;
        months -= 1;
    }

    while months < 0 {
        months += months_per_year as i32;
        years -= 1;
    }

    debug_assert!(years >= 0, "chronological order checked by caller");
    let age = AgeDuration {
        years: years as u32,
        months: months as u32,
        days: days as u32,
    };
    tracing::debug!("Age from {} to {}: {}", birth, today, age);
    Ok(age)
}

fn check_order(birth: &CalendarDate, reference: &CalendarDate) -> Result<()> {
    if birth.to_jdn() > reference.to_jdn() {
        return Err(Error::ChronologicalViolation {
            birth: *birth,
            reference: *reference,
        });
    }
    Ok(())
}

fn expect_system(date: &CalendarDate, system: CalendarSystem, role: &str) -> Result<()> {
    if date.system() != system {
        return Err(Error::invalid(format!(
            "{} date {} must be a {} date",
            role,
            date,
            system.name()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn greg(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::gregorian(y, m, d).unwrap()
    }

    fn eth(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::ethiopian(y, m, d).unwrap()
    }

    fn ymd(age: AgeDuration) -> (u32, u32, u32) {
        (age.years, age.months, age.days)
    }

    #[test]
    fn test_gregorian_day_borrow() {
        let age = age_from_gregorian(&greg(1990, 5, 15), &greg(2024, 5, 14)).unwrap();
        assert_eq!(ymd(age), (33, 11, 29));
    }

    #[test]
    fn test_gregorian_exact_birthday() {
        let age = age_from_gregorian(&greg(1990, 5, 15), &greg(2024, 5, 15)).unwrap();
        assert_eq!(ymd(age), (34, 0, 0));
    }

    #[test]
    fn test_gregorian_same_day_is_zero() {
        let age = age_from_gregorian(&greg(2024, 2, 29), &greg(2024, 2, 29)).unwrap();
        assert_eq!(age, AgeDuration::default());
    }

    #[test]
    fn test_gregorian_borrow_from_december_across_year() {
        let age = age_from_gregorian(&greg(2023, 12, 31), &greg(2024, 1, 1)).unwrap();
        assert_eq!(ymd(age), (0, 0, 1));
    }

    #[test]
    fn test_gregorian_double_borrow_over_february() {
        // 31 January to 1 March spans 29 days in a common year
        let age = age_from_gregorian(&greg(2023, 1, 31), &greg(2023, 3, 1)).unwrap();
        assert_eq!(ymd(age), (0, 0, 29));
    }

    #[test]
    fn test_gregorian_rejects_future_birth() {
        let err = age_from_gregorian(&greg(2025, 1, 1), &greg(2024, 5, 14)).unwrap_err();
        assert!(matches!(err, Error::ChronologicalViolation { .. }));
    }

    #[test]
    fn test_gregorian_rejects_ethiopian_input() {
        let err = age_from_gregorian(&eth(2000, 1, 1), &greg(2024, 5, 14)).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_ethiopian_approximation() {
        // 10 Yekatit 2000 is JDN 2454515; 14 May 2024 is JDN 2460445
        let age = age_from_ethiopian(&eth(2000, 6, 10), &greg(2024, 5, 14)).unwrap();
        assert_eq!(ymd(age), (16, 3, 0));
    }

    #[test]
    fn test_ethiopian_reference_in_either_calendar() {
        let birth = eth(2000, 6, 10);
        let from_greg = age_from_ethiopian(&birth, &greg(2024, 5, 14)).unwrap();
        let from_eth = age_from_ethiopian(&birth, &eth(2016, 9, 6)).unwrap();
        assert_eq!(from_greg, from_eth);
    }

    #[test]
    fn test_ethiopian_rejects_future_birth() {
        let err = age_from_ethiopian(&eth(2017, 1, 1), &greg(2024, 5, 14)).unwrap_err();
        assert!(matches!(err, Error::ChronologicalViolation { .. }));
    }

    #[test]
    fn test_ethiopian_exact() {
        let age = age_from_ethiopian_exact(&eth(2000, 6, 10), &greg(2024, 5, 14)).unwrap();
        assert_eq!(ymd(age), (16, 2, 26));
    }

    #[test]
    fn test_ethiopian_exact_borrows_pagume() {
        // Five days of Pagume 2016 plus one day into Meskerem 2017
        let age = age_from_ethiopian_exact(&eth(2016, 12, 30), &eth(2017, 1, 1)).unwrap();
        assert_eq!(ymd(age), (0, 0, 6));
    }

    #[test]
    fn test_ethiopian_exact_rejects_future_birth() {
        let err = age_from_ethiopian_exact(&eth(2017, 1, 1), &greg(2024, 5, 14)).unwrap_err();
        assert!(matches!(err, Error::ChronologicalViolation { .. }));
    }

    #[test]
    fn test_age_of_dispatch() {
        let today = greg(2024, 5, 14);
        let g = age_of(&greg(1990, 5, 15), &today, AgeMethod::Approximate).unwrap();
        assert_eq!(ymd(g), (33, 11, 29));
        let a = age_of(&eth(2000, 6, 10), &today, AgeMethod::Approximate).unwrap();
        assert_eq!(ymd(a), (16, 3, 0));
        let e = age_of(&eth(2000, 6, 10), &today, AgeMethod::Exact).unwrap();
        assert_eq!(ymd(e), (16, 2, 26));
    }

    #[test]
    fn test_age_of_gregorian_birth_with_ethiopian_today() {
        let age = age_of(&greg(1990, 5, 15), &eth(2016, 9, 6), AgeMethod::Exact).unwrap();
        assert_eq!(ymd(age), (33, 11, 29));
    }
}
