//! CSV export of year views.

use crate::{Result, YearView};
use serde::Serialize;
use std::io::Write;

/// One CSV row per day
#[derive(Debug, Serialize)]
struct DayRow<'a> {
    system: &'a str,
    year: i32,
    month: u32,
    month_name: &'a str,
    day: u32,
    weekday: &'a str,
    jdn: i64,
    other_year: i32,
    other_month: u32,
    other_month_name: &'a str,
    other_day: u32,
}

/// Writes every day of `view` as CSV, with a header row.
pub fn write_csv<W: Write>(view: &YearView, writer: W) -> Result<usize> {
    let mut wtr = csv::Writer::from_writer(writer);
    let mut count = 0;

    for entry in view.days() {
        let (date, other) = (&entry.date, &entry.counterpart);
        wtr.serialize(DayRow {
            system: date.system().name(),
            year: date.year(),
            month: date.month(),
            month_name: date.month_name(),
            day: date.day(),
            weekday: entry.weekday.name(),
            jdn: entry.jdn.value(),
            other_year: other.year(),
            other_month: other.month(),
            other_month_name: other.month_name(),
            other_day: other.day(),
        })?;
        count += 1;
    }

    wtr.flush()?;
    tracing::debug!("Exported {} days of {} {}", count, view.system.name(), view.year);
    Ok(count)
}
