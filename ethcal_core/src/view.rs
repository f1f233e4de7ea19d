//! Structured year views for presentation layers.
//!
//! A view lists every day of a year in one calendar alongside the same day
//! in the other calendar. Rendering (text grids, JSON, CSV) is left to the
//! caller; [`MonthView::weeks`] provides the Sunday-first grid layout.

use crate::bridge::convert;
use crate::{
    ethiopian, gregorian, CalendarDate, CalendarSystem, JulianDayNumber, Result, Weekday,
};
use serde::Serialize;

/// One day of a view
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct DayEntry {
    pub date: CalendarDate,
    pub counterpart: CalendarDate,
    pub jdn: JulianDayNumber,
    pub weekday: Weekday,
}

/// All days of one month, in order
#[derive(Clone, Debug, Serialize)]
pub struct MonthView {
    pub system: CalendarSystem,
    pub year: i32,
    pub month: u32,
    pub month_name: &'static str,
    pub days: Vec<DayEntry>,
}

/// One grid row, Sunday through Saturday
pub type Week<'a> = [Option<&'a DayEntry>; 7];

impl MonthView {
    /// Weekday of the first day of the month
    pub fn first_weekday(&self) -> Option<Weekday> {
        self.days.first().map(|d| d.weekday)
    }

    /// The other calendar's date on the first day of the month
    pub fn first_counterpart(&self) -> Option<&CalendarDate> {
        self.days.first().map(|d| &d.counterpart)
    }

    /// Lays the month out on Sunday-first rows. Cells before the first day
    /// and after the last day are `None`.
    pub fn weeks(&self) -> Vec<Week<'_>> {
        let mut weeks = Vec::new();
        let mut row: Week<'_> = [None; 7];

        for entry in &self.days {
            let col = entry.weekday.index() as usize;
            row[col] = Some(entry);
            if col == 6 {
                weeks.push(row);
                row = [None; 7];
            }
        }
        if row.iter().any(Option::is_some) {
            weeks.push(row);
        }
        weeks
    }
}

/// A full year of month views
#[derive(Clone, Debug, Serialize)]
pub struct YearView {
    pub system: CalendarSystem,
    pub year: i32,
    pub months: Vec<MonthView>,
}

impl YearView {
    /// Every day of the year, in order
    pub fn days(&self) -> impl Iterator<Item = &DayEntry> {
        self.months.iter().flat_map(|m| m.days.iter())
    }
}

/// Gregorian year with the Ethiopian date of every day.
///
/// Fails with [`crate::Error::InvalidInput`] when the year, or the Ethiopian
/// counterpart of one of its days, is outside the supported range.
pub fn gregorian_year_view(year: i32) -> Result<YearView> {
    let months = (1..=12)
        .map(|month| {
            let days = gregorian::days_in_month(month, year)?;
            build_month(CalendarSystem::Gregorian, year, month, days)
        })
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!("Built Gregorian year view for {}", year);
    Ok(YearView {
        system: CalendarSystem::Gregorian,
        year,
        months,
    })
}

/// Ethiopian year with the Gregorian date of every day.
///
/// Pagume has 6 days in Ethiopian leap years and 5 otherwise.
pub fn ethiopian_year_view(year: i32) -> Result<YearView> {
    let months = (1..=ethiopian::PAGUME)
        .map(|month| {
            let days = ethiopian::days_in_month(month, year)?;
            build_month(CalendarSystem::Ethiopian, year, month, days)
        })
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!("Built Ethiopian year view for {}", year);
    Ok(YearView {
        system: CalendarSystem::Ethiopian,
        year,
        months,
    })
}

fn build_month(system: CalendarSystem, year: i32, month: u32, len: u32) -> Result<MonthView> {
    let other = match system {
        CalendarSystem::Gregorian => CalendarSystem::Ethiopian,
        CalendarSystem::Ethiopian => CalendarSystem::Gregorian,
    };

    let mut days = Vec::with_capacity(len as usize);
    for day in 1..=len {
        let date = CalendarDate::new(system, year, month, day)?;
        days.push(DayEntry {
            counterpart: convert(&date, other)?,
            jdn: date.to_jdn(),
            weekday: date.weekday(),
            date,
        });
    }

    let month_name = match system {
        CalendarSystem::Gregorian => gregorian::month_name(month)?,
        CalendarSystem::Ethiopian => ethiopian::month_name(month)?,
    };

    Ok(MonthView {
        system,
        year,
        month,
        month_name,
        days,
    })
}
