//! Calendar dates as numerology sees them.
//!
//! This crate provides:
//! - `DD/MM/YYYY` parsing into [`DateParts`], including the legacy stored
//!   form with 0-based months
//! - Julian Day Number conversion for whole-day arithmetic
//! - The [`Clock`] abstraction, the only place wall-clock time enters
//! - Day spans used by biorhythms and personal cycles
//!
//! No calendar validation is performed beyond field ranges: `30/02/2001`
//! is accepted and rolls forward to 2 March in day arithmetic.

pub mod clock;
pub mod date;
pub mod error;
pub mod julian;
pub mod span;

pub use clock::{Clock, FixedClock, SystemClock};
pub use date::{DateParts, MonthEncoding};
pub use error::DateError;
pub use julian::{calendar_to_jdn, days_in_month, is_leap_year, jdn_to_calendar};
pub use span::{
    days_between, days_from_birth_till_start_of_month, days_since, shift_days, shift_months,
};
