//! `DD/MM/YYYY` date decomposition.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::DateError;
use crate::julian::{calendar_to_jdn, jdn_to_calendar};

/// How the month field of a stored date string is numbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MonthEncoding {
    /// January = 1 .. December = 12.
    #[default]
    OneBased,
    /// January = 0 .. December = 11, as written by the legacy app.
    ///
    /// Parsing normalizes to 1..=12, so every formula sees the same month.
    ZeroBased,
}

impl MonthEncoding {
    const fn month_range(self) -> (u32, u32) {
        match self {
            Self::OneBased => (1, 12),
            Self::ZeroBased => (0, 11),
        }
    }
}

/// Day, month (1..=12) and 4-digit year of a calendar date.
///
/// Only field ranges are checked; the day is not validated against the
/// month length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DateParts {
    pub year: u32,
    pub month: u32,
    pub day: u32,
}

impl DateParts {
    /// Build from fields without validation.
    pub const fn new(day: u32, month: u32, year: u32) -> Self {
        Self { year, month, day }
    }

    /// Parse `DD/MM/YYYY` with a 1-based month.
    pub fn parse(s: &str) -> Result<Self, DateError> {
        Self::parse_with(s, MonthEncoding::OneBased)
    }

    /// Parse `DD/MM/YYYY` with the given month encoding.
    pub fn parse_with(s: &str, encoding: MonthEncoding) -> Result<Self, DateError> {
        let fields: Vec<&str> = s.trim().split('/').collect();
        if fields.len() != 3 {
            return Err(DateError::InvalidDateFormat(s.to_string()));
        }
        let day = parse_field(fields[0], s)?;
        let month = parse_field(fields[1], s)?;
        let year = parse_field(fields[2], s)?;

        if !(1..=31).contains(&day) {
            return Err(DateError::DayOutOfRange(day));
        }
        let (lo, hi) = encoding.month_range();
        if !(lo..=hi).contains(&month) {
            return Err(DateError::MonthOutOfRange(month));
        }
        if fields[2].len() != 4 || year < 1000 {
            return Err(DateError::YearOutOfRange(fields[2].to_string()));
        }

        let month = match encoding {
            MonthEncoding::OneBased => month,
            MonthEncoding::ZeroBased => month + 1,
        };
        Ok(Self { year, month, day })
    }

    /// Render as `DD/MM/YYYY` in the given month encoding.
    pub fn format_with(&self, encoding: MonthEncoding) -> String {
        let month = match encoding {
            MonthEncoding::OneBased => self.month,
            MonthEncoding::ZeroBased => self.month.saturating_sub(1),
        };
        format!("{:02}/{:02}/{:04}", self.day, month, self.year)
    }

    /// Julian Day Number of this date (day overflow rolls forward).
    pub fn day_number(&self) -> i64 {
        calendar_to_jdn(i64::from(self.year), self.month, self.day)
    }

    /// Calendar date of a Julian Day Number.
    pub fn from_day_number(jdn: i64) -> Self {
        let (year, month, day) = jdn_to_calendar(jdn);
        Self {
            year: u32::try_from(year).unwrap_or(0),
            month,
            day,
        }
    }

    /// `[day, month, year]` triple.
    pub const fn as_triple(&self) -> [u32; 3] {
        [self.day, self.month, self.year]
    }
}

fn parse_field(field: &str, input: &str) -> Result<u32, DateError> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DateError::InvalidDateFormat(input.to_string()));
    }
    field
        .parse()
        .map_err(|_| DateError::InvalidDateFormat(input.to_string()))
}

impl FromStr for DateParts {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Display for DateParts {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}/{:02}/{:04}", self.day, self.month, self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_basic() {
        let d = DateParts::parse("24/10/1990").unwrap();
        assert_eq!(d, DateParts::new(24, 10, 1990));
    }

    #[test]
    fn parse_unpadded() {
        let d = DateParts::parse("5/6/1985").unwrap();
        assert_eq!(d, DateParts::new(5, 6, 1985));
    }

    #[test]
    fn parse_trims_outer_whitespace() {
        assert!(DateParts::parse(" 01/01/2000 ").is_ok());
    }

    #[test]
    fn parse_zero_based_shifts_month() {
        let d = DateParts::parse_with("24/10/1990", MonthEncoding::ZeroBased).unwrap();
        assert_eq!(d.month, 11);
        let jan = DateParts::parse_with("01/00/2000", MonthEncoding::ZeroBased).unwrap();
        assert_eq!(jan.month, 1);
    }

    #[test]
    fn parse_zero_based_rejects_twelve() {
        assert_eq!(
            DateParts::parse_with("01/12/2000", MonthEncoding::ZeroBased),
            Err(DateError::MonthOutOfRange(12))
        );
    }

    #[test]
    fn parse_rejects_wrong_field_count() {
        assert!(matches!(
            DateParts::parse("24/10"),
            Err(DateError::InvalidDateFormat(_))
        ));
        assert!(matches!(
            DateParts::parse("24/10/1990/1"),
            Err(DateError::InvalidDateFormat(_))
        ));
    }

    #[test]
    fn parse_rejects_non_digits() {
        for s in ["aa/10/1990", "24/-1/1990", "24/10/19x0", "24//1990", "+4/10/1990"] {
            assert!(
                matches!(DateParts::parse(s), Err(DateError::InvalidDateFormat(_))),
                "{s}"
            );
        }
    }

    #[test]
    fn parse_rejects_ranges() {
        assert_eq!(DateParts::parse("00/10/1990"), Err(DateError::DayOutOfRange(0)));
        assert_eq!(DateParts::parse("32/10/1990"), Err(DateError::DayOutOfRange(32)));
        assert_eq!(DateParts::parse("01/13/1990"), Err(DateError::MonthOutOfRange(13)));
        assert_eq!(DateParts::parse("01/00/1990"), Err(DateError::MonthOutOfRange(0)));
        assert!(matches!(
            DateParts::parse("01/01/990"),
            Err(DateError::YearOutOfRange(_))
        ));
        assert!(matches!(
            DateParts::parse("01/01/0990"),
            Err(DateError::YearOutOfRange(_))
        ));
    }

    #[test]
    fn feb_30_is_accepted() {
        assert!(DateParts::parse("30/02/2001").is_ok());
    }

    #[test]
    fn display_pads() {
        assert_eq!(DateParts::new(5, 6, 1985).to_string(), "05/06/1985");
    }

    #[test]
    fn format_zero_based() {
        let d = DateParts::new(24, 11, 1990);
        assert_eq!(d.format_with(MonthEncoding::ZeroBased), "24/10/1990");
        assert_eq!(d.format_with(MonthEncoding::OneBased), "24/11/1990");
    }

    #[test]
    fn day_number_roundtrip() {
        let d = DateParts::new(19, 10, 2026);
        assert_eq!(DateParts::from_day_number(d.day_number()), d);
    }

    #[test]
    fn from_str_works() {
        let d: DateParts = "15/06/1985".parse().unwrap();
        assert_eq!(d.as_triple(), [15, 6, 1985]);
    }
}
