//! Tracing setup for the `ethcal` binary.
//!
//! Calendar grids, JSON and CSV go to stdout, so every log line is sent to
//! stderr instead. Conversion and age traces are emitted at `debug`, config
//! loading at `info`, and rejected menu input at `warn`.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Installs the subscriber with `default_level` as the filter.
///
/// The CLI passes `"debug"` for `--verbose` and `"warn"` otherwise. A
/// `RUST_LOG` directive, when set and valid, replaces this level entirely.
pub fn init_with_level(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

/// Routes `debug` traces into the test harness output; safe to call repeatedly.
#[cfg(test)]
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(EnvFilter::new("debug"))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{gregorian_to_ethiopian, CalendarDate};

    #[test]
    fn test_conversion_with_debug_logging() {
        init_test();
        let date = CalendarDate::gregorian(2024, 1, 1).unwrap();
        assert!(gregorian_to_ethiopian(&date).is_ok());
    }
}
