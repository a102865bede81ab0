//! Error types for date parsing.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from parsing a `DD/MM/YYYY` date string.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DateError {
    /// Wrong number of `/`-separated fields, or a field that is not all digits.
    InvalidDateFormat(String),
    /// Day outside 1..=31.
    DayOutOfRange(u32),
    /// Month outside the range allowed by the month encoding.
    MonthOutOfRange(u32),
    /// Year field is not a 4-digit number.
    YearOutOfRange(String),
}

impl Display for DateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDateFormat(input) => {
                write!(f, "invalid date format: expected DD/MM/YYYY, got {input:?}")
            }
            Self::DayOutOfRange(d) => write!(f, "day out of range: {d}"),
            Self::MonthOutOfRange(m) => write!(f, "month out of range: {m}"),
            Self::YearOutOfRange(y) => write!(f, "year must have 4 digits: {y:?}"),
        }
    }
}

impl Error for DateError {}
