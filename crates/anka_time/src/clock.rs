//! Source of "today".
//!
//! Personal cycles and biorhythms depend on the current date. Everything
//! else in the workspace is a pure function of its inputs, so the clock is
//! passed explicitly and can be pinned in tests.

use chrono::{Datelike, Local};

use crate::date::DateParts;

/// Supplies the current local calendar date.
pub trait Clock: Send + Sync {
    /// Today's date.
    fn today(&self) -> DateParts;
}

/// Wall clock in the local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> DateParts {
        let now = Local::now().date_naive();
        DateParts::new(now.day(), now.month(), u32::try_from(now.year()).unwrap_or(0))
    }
}

/// A clock that always returns the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateParts);

impl FixedClock {
    pub const fn new(day: u32, month: u32, year: u32) -> Self {
        Self(DateParts::new(day, month, year))
    }
}

impl Clock for FixedClock {
    fn today(&self) -> DateParts {
        self.0
    }
}
