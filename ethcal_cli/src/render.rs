//! Text rendering of year views and dates.

use ethcal_core::{CalendarDate, CalendarSystem, DayEntry, MonthView, YearView};
use std::io::{self, Write};

pub const WEEK_HEADER: &str = "Sun    Mon    Tue    Wed    Thu    Fri    Sat";

const BLANK_CELL: &str = "       ";
const RULE: &str = "------------------------------------------------";

/// `22 Tahsas 2016 E.C.` / `1 January 2024`
pub fn long_date(date: &CalendarDate) -> String {
    match date.system() {
        CalendarSystem::Gregorian => {
            format!("{} {} {}", date.day(), date.month_name(), date.year())
        }
        CalendarSystem::Ethiopian => {
            format!("{} {} {} E.C.", date.day(), date.month_name(), date.year())
        }
    }
}

/// Writes every month of `view` as a weekly grid.
pub fn write_year_grid<W: Write>(out: &mut W, view: &YearView) -> io::Result<()> {
    writeln!(
        out,
        "\n==================== {} Year: {} ====================\n",
        view.system.name(),
        view.year
    )?;
    for month in &view.months {
        write_month_grid(out, month)?;
    }
    Ok(())
}

/// Writes one month: a title line, the weekday header and one line per week.
pub fn write_month_grid<W: Write>(out: &mut W, month: &MonthView) -> io::Result<()> {
    writeln!(out, "-------------------- Month {} --------------------", month.month)?;

    match (month.system, month.first_counterpart()) {
        (CalendarSystem::Gregorian, Some(eth)) => writeln!(
            out,
            "Gregorian Month {} ({}) | Ethiopian Month: {} {}",
            month.month,
            month.month_name,
            eth.month_name(),
            eth.year()
        )?,
        (CalendarSystem::Ethiopian, Some(greg)) => writeln!(
            out,
            "Ethiopian Month {} | Gregorian Year: {}",
            month.month_name,
            greg.year()
        )?,
        (_, None) => writeln!(out, "{} Month {}", month.system.name(), month.month_name)?,
    }
    writeln!(out, "{}", WEEK_HEADER)?;

    for week in month.weeks() {
        let line: String = week
            .iter()
            .map(|cell| cell.map_or_else(|| BLANK_CELL.to_string(), format_cell))
            .collect();
        writeln!(out, "{}", line.trim_end())?;
    }

    writeln!(out, "{}\n", RULE)
}

/// Gregorian grids show `day/Ethiopian day`; Ethiopian grids show the
/// Gregorian `day/month`.
fn format_cell(entry: &DayEntry) -> String {
    let (a, b) = match entry.date.system() {
        CalendarSystem::Gregorian => (entry.date.day(), entry.counterpart.day()),
        CalendarSystem::Ethiopian => (entry.counterpart.day(), entry.counterpart.month()),
    };
    format!("{:02}/{:02}  ", a, b)
}
