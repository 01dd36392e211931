//! Date source for defaulted post dates.
//!
//! Posts without a usable `date` field are stamped with "today". Because that makes derivation
//! depend on when it runs, the current date is read through a [`Clock`] so callers (and tests)
//! can pin it.

use chrono::{NaiveDate, Utc};

/// Supplies the current date.
pub trait Clock: Send + Sync {
    /// Returns today's date.
    fn today(&self) -> NaiveDate;
}

/// Reads the system clock, in UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// A clock that always reports the same date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl FixedClock {
    /// Creates a clock fixed at the given calendar date.
    ///
    /// Returns `None` if the date is invalid.
    pub fn ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
