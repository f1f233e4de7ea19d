//! Sources of the reference ("today") date.
//!
//! Age calculation never reads the system clock itself; callers obtain the
//! reference date from a [`Clock`] and pass it in.

use crate::{CalendarDate, Result};

/// Supplies today's Gregorian date
pub trait Clock {
    fn today(&self) -> Result<CalendarDate>;
}

/// Reads the local date from the operating system
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> Result<CalendarDate> {
        let today = chrono::Local::now().date_naive();
        tracing::debug!("System clock reports {}", today);
        CalendarDate::try_from(today)
    }
}

/// Always reports the same date
#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub CalendarDate);

impl Clock for FixedClock {
    fn today(&self) -> Result<CalendarDate> {
        Ok(self.0)
    }
}
