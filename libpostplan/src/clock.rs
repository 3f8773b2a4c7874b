//! Wall-clock access
//!
//! Everything in Postplan works in naive local time. The composer needs
//! "today" for its default date; the shell needs "now" for relative hints.
//! Both go through [`Clock`] so tests can pin the date.

use chrono::{Local, NaiveDate, NaiveDateTime};

pub trait Clock: Send + Sync {
    /// Current local date and time, without a timezone
    fn now(&self) -> NaiveDateTime;

    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// Reads the machine's local time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always returns the same instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_today() {
        let instant = NaiveDate::from_ymd_opt(2026, 10, 19)
            .unwrap()
            .and_hms_opt(23, 0, 0)
            .unwrap();
        let clock = FixedClock(instant);

        assert_eq!(clock.now(), instant);
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2026, 10, 19).unwrap());
    }
}
