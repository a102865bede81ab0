//! Julian Day Number ↔ proleptic Gregorian calendar.
//!
//! Integer-only variant of the usual JD conversion: the day number changes
//! at the calendar date boundary, which is all whole-day spans need.
//! The day field is added linearly, so out-of-month days roll forward
//! (`30 Feb 2001` has the same number as `2 Mar 2001`).

/// JDN of 1 January 2000.
pub const JDN_2000_01_01: i64 = 2_451_545;

/// Julian Day Number of a Gregorian calendar date. `month` must be 1..=12.
pub fn calendar_to_jdn(year: i64, month: u32, day: u32) -> i64 {
    let m = i64::from(month);
    let a = (14 - m) / 12;
    let y = year + 4800 - a;
    let mm = m + 12 * a - 3;
    i64::from(day) + (153 * mm + 2) / 5 + 365 * y + y / 4 - y / 100 + y / 400 - 32_045
}

/// Gregorian `(year, month, day)` of a Julian Day Number.
pub fn jdn_to_calendar(jdn: i64) -> (i64, u32, u32) {
    let a = jdn + 32_044;
    let b = (4 * a + 3) / 146_097;
    let c = a - 146_097 * b / 4;
    let d = (4 * c + 3) / 1461;
    let e = c - 1461 * d / 4;
    let m = (5 * e + 2) / 153;
    let day = e - (153 * m + 2) / 5 + 1;
    let month = m + 3 - 12 * (m / 10);
    let year = 100 * b + d - 4800 + m / 10;
    (year, month as u32, day as u32)
}

/// Gregorian leap-year rule.
pub const fn is_leap_year(year: i64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` (1..=12) of `year`.
pub const fn days_in_month(year: i64, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_day() {
        assert_eq!(calendar_to_jdn(2000, 1, 1), JDN_2000_01_01);
    }

    #[test]
    fn roundtrip_sweep() {
        let start = calendar_to_jdn(1899, 12, 25);
        for jdn in start..start + 80_000 {
            let (y, m, d) = jdn_to_calendar(jdn);
            assert_eq!(calendar_to_jdn(y, m, d), jdn);
        }
    }

    #[test]
    fn consecutive_days() {
        assert_eq!(calendar_to_jdn(1990, 10, 25) - calendar_to_jdn(1990, 10, 24), 1);
        assert_eq!(calendar_to_jdn(2001, 1, 1) - calendar_to_jdn(2000, 1, 1), 366);
        assert_eq!(calendar_to_jdn(2002, 1, 1) - calendar_to_jdn(2001, 1, 1), 365);
    }

    #[test]
    fn day_overflow_rolls_forward() {
        assert_eq!(calendar_to_jdn(2001, 2, 30), calendar_to_jdn(2001, 3, 2));
        assert_eq!(calendar_to_jdn(2000, 2, 30), calendar_to_jdn(2000, 3, 1));
        assert_eq!(calendar_to_jdn(2024, 4, 31), calendar_to_jdn(2024, 5, 1));
    }

    #[test]
    fn leap_years() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2023, 4), 30);
        assert_eq!(days_in_month(2023, 12), 31);
    }
}
