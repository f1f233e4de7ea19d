//! Interactive calendar & age menu.

use crate::render;
use ethcal_core::age::age_of;
use ethcal_core::*;
use std::io::{BufRead, Write};

/// Runs the menu until the user picks "Exit" or input ends.
///
/// Input problems (bad numbers, invalid dates, future birth dates) are
/// reported and the menu is shown again.
pub fn run<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    clock: &dyn Clock,
    config: &Config,
) -> Result<()> {
    loop {
        writeln!(out, "\n====== Calendar & Age Menu ======")?;
        writeln!(out, "1) Gregorian -> Ethiopian calendar")?;
        writeln!(out, "2) Ethiopian -> Gregorian calendar")?;
        writeln!(out, "3) Calculate current age")?;
        writeln!(out, "4) Exit")?;

        let Some(choice) = prompt(input, out, "Enter choice: ")? else {
            return Ok(());
        };

        let outcome = match choice.as_str() {
            "1" => show_year(input, out, CalendarSystem::Gregorian),
            "2" => show_year(input, out, CalendarSystem::Ethiopian),
            "3" => show_age(input, out, clock, config),
            "4" => {
                writeln!(out, "Exiting program...")?;
                return Ok(());
            }
            _ => {
                writeln!(out, "Invalid choice!")?;
                Ok(())
            }
        };

        match outcome {
            Ok(()) => {}
            Err(e @ (Error::InvalidInput(_) | Error::ChronologicalViolation { .. })) => {
                tracing::warn!("Rejected menu input: {}", e);
                writeln!(out, "{}", e)?;
            }
            Err(e) => return Err(e),
        }
    }
}

fn show_year<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    system: CalendarSystem,
) -> Result<()> {
    let msg = format!("Enter {} year: ", system.name());
    let Some(line) = prompt(input, out, &msg)? else {
        return Ok(());
    };
    let year = line
        .parse::<i32>()
        .map_err(|_| Error::InvalidInput(format!("year {:?} is not a number", line)))?;

    let view = match system {
        CalendarSystem::Gregorian => gregorian_year_view(year)?,
        CalendarSystem::Ethiopian => ethiopian_year_view(year)?,
    };
    render::write_year_grid(out, &view)?;
    Ok(())
}

fn show_age<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    clock: &dyn Clock,
    config: &Config,
) -> Result<()> {
    writeln!(out, "a) Calculate age from Gregorian birthdate")?;
    writeln!(out, "b) Calculate age from Ethiopian birthdate")?;
    let Some(choice) = prompt(input, out, "Enter choice: ")? else {
        return Ok(());
    };

    let system = match choice.to_lowercase().as_str() {
        "a" => CalendarSystem::Gregorian,
        "b" => CalendarSystem::Ethiopian,
        _ => {
            writeln!(out, "Invalid choice!")?;
            return Ok(());
        }
    };

    let msg = format!("Enter {} birthdate (YYYY MM DD): ", system.name());
    let Some(line) = prompt(input, out, &msg)? else {
        return Ok(());
    };
    let birth = CalendarDate::parse(system, &line)?;
    let today = clock.today()?;
    let method = config.age.ethiopian_method;
    let age = age_of(&birth, &today, method)?;

    if system == CalendarSystem::Ethiopian && method == AgeMethod::Approximate {
        writeln!(out, "Your age is approximately: {}", age)?;
    } else {
        writeln!(out, "Your age is: {}", age)?;
    }
    Ok(())
}

/// Prints `msg` and reads one trimmed line. Returns `None` at end of input.
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, msg: &str) -> Result<Option<String>> {
    write!(out, "{}", msg)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
