use clap::{Parser, Subcommand};
use ethcal_core::age::age_of;
use ethcal_core::bridge::convert;
use ethcal_core::*;
use serde_json::json;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

mod menu;
mod render;

#[derive(Parser)]
#[command(name = "ethcal")]
#[command(about = "Ethiopian and Gregorian calendar converter", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Output format (text, json, csv) [default: from config]
    #[arg(long, global = true)]
    format: Option<OutputFormat>,

    /// Treat this Gregorian date (YYYY-MM-DD) as today
    #[arg(long, global = true)]
    today: Option<String>,

    /// Load configuration from this file instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a Gregorian year with Ethiopian dates
    Gregorian {
        /// Gregorian year
        year: i32,
    },

    /// Show an Ethiopian year with Gregorian dates
    Ethiopian {
        /// Ethiopian year
        year: i32,
    },

    /// Convert a single date to the other calendar
    Convert {
        /// Date as YYYY-MM-DD (Gregorian unless --ethiopian)
        date: String,

        /// The date is an Ethiopian date
        #[arg(long)]
        ethiopian: bool,
    },

    /// Calculate age from a birthdate
    Age {
        /// Birthdate as YYYY-MM-DD (Gregorian unless --ethiopian)
        birthdate: String,

        /// The birthdate is an Ethiopian date
        #[arg(long)]
        ethiopian: bool,

        /// Use exact Ethiopian field subtraction instead of the approximation
        #[arg(long)]
        exact: bool,
    },

    /// Interactive menu (default)
    Menu,

    /// Write the default configuration file
    InitConfig {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    ethcal_core::logging::init_with_level(if cli.verbose { "debug" } else { "warn" });

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    // Writing the config must not depend on being able to parse the old one
    if let Some(Commands::InitConfig { force }) = cli.command {
        return cmd_init_config(cli.config, force);
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let format = cli.format.unwrap_or(config.display.format);

    match cli.command {
        Some(Commands::Gregorian { year }) => cmd_year(gregorian_year_view(year)?, format),
        Some(Commands::Ethiopian { year }) => cmd_year(ethiopian_year_view(year)?, format),
        Some(Commands::Convert { date, ethiopian }) => {
            cmd_convert(&date, system_for(ethiopian), format)
        }
        Some(Commands::Age {
            birthdate,
            ethiopian,
            exact,
        }) => {
            let method = if exact {
                AgeMethod::Exact
            } else {
                config.age.ethiopian_method
            };
            let clock = clock_for(cli.today.as_deref())?;
            cmd_age(&birthdate, system_for(ethiopian), method, clock.as_ref(), format)
        }
        Some(Commands::InitConfig { force }) => cmd_init_config(cli.config, force),
        Some(Commands::Menu) | None => {
            let clock = clock_for(cli.today.as_deref())?;
            let stdin = io::stdin();
            let mut input = stdin.lock();
            let mut out = io::stdout().lock();
            menu::run(&mut input, &mut out, clock.as_ref(), &config)
        }
    }
}

/// `--today` pins the reference date; otherwise the system clock is used.
fn clock_for(today: Option<&str>) -> Result<Box<dyn Clock>> {
    Ok(match today {
        Some(date) => Box::new(FixedClock(CalendarDate::parse(
            CalendarSystem::Gregorian,
            date,
        )?)),
        None => Box::new(SystemClock),
    })
}

fn system_for(ethiopian: bool) -> CalendarSystem {
    if ethiopian {
        CalendarSystem::Ethiopian
    } else {
        CalendarSystem::Gregorian
    }
}

fn cmd_year(view: YearView, format: OutputFormat) -> Result<()> {
    let mut out = io::stdout().lock();
    match format {
        OutputFormat::Text => render::write_year_grid(&mut out, &view)?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&view)?)?,
        OutputFormat::Csv => {
            ethcal_core::export::write_csv(&view, &mut out)?;
        }
    }
    Ok(())
}

fn cmd_convert(input: &str, system: CalendarSystem, format: OutputFormat) -> Result<()> {
    let date = CalendarDate::parse(system, input)?;
    let target = match system {
        CalendarSystem::Gregorian => CalendarSystem::Ethiopian,
        CalendarSystem::Ethiopian => CalendarSystem::Gregorian,
    };
    let converted = convert(&date, target)?;
    let weekday = weekday_of(&date);

    match format {
        OutputFormat::Text => println!(
            "{}, {} = {}",
            weekday.name(),
            render::long_date(&date),
            render::long_date(&converted)
        ),
        OutputFormat::Json => {
            let value = json!({
                "input": date,
                "output": converted,
                "weekday": weekday,
                "jdn": date.to_jdn(),
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Csv => return Err(csv_unsupported("convert")),
    }
    Ok(())
}

fn cmd_age(
    input: &str,
    system: CalendarSystem,
    method: AgeMethod,
    clock: &dyn Clock,
    format: OutputFormat,
) -> Result<()> {
    let birth = CalendarDate::parse(system, input)?;
    let today = clock.today()?;
    let age = age_of(&birth, &today, method)?;
    let approximate = system == CalendarSystem::Ethiopian && method == AgeMethod::Approximate;

    match format {
        OutputFormat::Text if approximate => println!("Your age is approximately: {}", age),
        OutputFormat::Text => println!("Your age is: {}", age),
        OutputFormat::Json => {
            let value = json!({
                "birth": birth,
                "today": today,
                "approximate": approximate,
                "age": age,
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Csv => return Err(csv_unsupported("age")),
    }
    Ok(())
}

fn cmd_init_config(path: Option<PathBuf>, force: bool) -> Result<()> {
    let path = match path {
        Some(p) => p,
        None => Config::default_config_path()?,
    };

    if path.exists() && !force {
        return Err(Error::Config(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    Config::default().save_to(&path)?;
    println!("✓ Wrote default configuration to {}", path.display());
    Ok(())
}

fn csv_unsupported(command: &str) -> Error {
    Error::InvalidInput(format!(
        "CSV output is only available for year views, not `{}`",
        command
    ))
}
