//! Conversion between the Gregorian and Ethiopian calendars.
//!
//! The Julian Day Number is the only path between the two calendars, so the
//! year views and the age calculators always agree on which day is which.

use crate::{julian_day, CalendarDate, CalendarSystem, Error, Result, Weekday};

/// Converts a Gregorian date to the Ethiopian calendar.
///
/// # Example
///
/// ```
/// use ethcal_core::{gregorian_to_ethiopian, CalendarDate};
///
/// let date = CalendarDate::gregorian(2024, 1, 1).unwrap();
/// let eth = gregorian_to_ethiopian(&date).unwrap();
/// assert_eq!((2016, 4, 22), (eth.year(), eth.month(), eth.day()));
/// assert_eq!("Tahsas", eth.month_name());
/// ```
pub fn gregorian_to_ethiopian(date: &CalendarDate) -> Result<CalendarDate> {
    expect_system(date, CalendarSystem::Gregorian)?;
    let converted = CalendarDate::from_jdn(CalendarSystem::Ethiopian, date.to_jdn())?;
    tracing::debug!("Converted {} to {}", date, converted);
    Ok(converted)
}

/// Converts an Ethiopian date to the Gregorian calendar.
pub fn ethiopian_to_gregorian(date: &CalendarDate) -> Result<CalendarDate> {
    expect_system(date, CalendarSystem::Ethiopian)?;
    let converted = CalendarDate::from_jdn(CalendarSystem::Gregorian, date.to_jdn())?;
    tracing::debug!("Converted {} to {}", date, converted);
    Ok(converted)
}

/// Converts `date` into `target`, returning it unchanged when it is already
/// expressed in that calendar.
pub fn convert(date: &CalendarDate, target: CalendarSystem) -> Result<CalendarDate> {
    match (date.system(), target) {
        (CalendarSystem::Gregorian, CalendarSystem::Ethiopian) => gregorian_to_ethiopian(date),
        (CalendarSystem::Ethiopian, CalendarSystem::Gregorian) => ethiopian_to_gregorian(date),
        _ => Ok(*date),
    }
}

/// Weekday of a date in either calendar.
pub fn weekday_of(date: &CalendarDate) -> Weekday {
    julian_day::day_of_week(date.to_jdn())
}

fn expect_system(date: &CalendarDate, system: CalendarSystem) -> Result<()> {
    if date.system() != system {
        return Err(Error::invalid(format!(
            "expected a {} date, got {} date {}",
            system.name(),
            date.system().name(),
            date
        )));
    }
    Ok(())
}
