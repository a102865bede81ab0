//! Whole-day spans and calendar shifts.

use crate::clock::Clock;
use crate::date::DateParts;
use crate::julian::days_in_month;

/// Absolute number of days between two dates.
pub fn days_between(a: &DateParts, b: &DateParts) -> u64 {
    (a.day_number() - b.day_number()).unsigned_abs()
}

/// Absolute number of days between `date` and today.
///
/// Direction-agnostic: a date in the future yields a positive count too.
pub fn days_since(date: &DateParts, clock: &dyn Clock) -> u64 {
    days_between(&clock.today(), date)
}

/// Days from `birth` to the first day of the current month.
///
/// Origin of a month-long biorhythm chart.
pub fn days_from_birth_till_start_of_month(birth: &DateParts, clock: &dyn Clock) -> u64 {
    let today = clock.today();
    let first = DateParts::new(1, today.month, today.year);
    days_between(&first, birth)
}

/// `date` moved by `days` (may be negative).
pub fn shift_days(date: &DateParts, days: i64) -> DateParts {
    DateParts::from_day_number(date.day_number() + days)
}

/// `date` moved by `months` (may be negative).
///
/// The day is clamped to the length of the target month, so 31 January
/// plus one month is the last day of February.
pub fn shift_months(date: &DateParts, months: i32) -> DateParts {
    let index = i64::from(date.year) * 12 + i64::from(date.month) - 1 + i64::from(months);
    let year = index.div_euclid(12);
    let month = index.rem_euclid(12) as u32 + 1;
    let day = date.day.min(days_in_month(year, month));
    DateParts::new(day, month, u32::try_from(year).unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;

    #[test]
    fn between_is_symmetric() {
        let a = DateParts::new(24, 10, 1990);
        let b = DateParts::new(15, 6, 1985);
        assert_eq!(days_between(&a, &b), days_between(&b, &a));
        assert_eq!(days_between(&a, &a), 0);
    }

    #[test]
    fn since_counts_days() {
        let clock = FixedClock::new(19, 10, 2026);
        assert_eq!(days_since(&DateParts::new(1, 10, 2026), &clock), 18);
        assert_eq!(days_since(&DateParts::new(19, 10, 2025), &clock), 365);
    }

    #[test]
    fn since_future_is_positive() {
        let clock = FixedClock::new(19, 10, 2026);
        assert_eq!(days_since(&DateParts::new(29, 10, 2026), &clock), 10);
    }

    #[test]
    fn start_of_month_origin() {
        let clock = FixedClock::new(19, 10, 2026);
        let birth = DateParts::new(1, 9, 2026);
        assert_eq!(days_from_birth_till_start_of_month(&birth, &clock), 30);
        assert_eq!(days_since(&birth, &clock), 48);
    }

    #[test]
    fn shift_days_crosses_year() {
        let d = shift_days(&DateParts::new(31, 12, 2026), 1);
        assert_eq!(d, DateParts::new(1, 1, 2027));
        let back = shift_days(&DateParts::new(1, 3, 2024), -1);
        assert_eq!(back, DateParts::new(29, 2, 2024));
    }

    #[test]
    fn shift_months_wraps_and_clamps() {
        assert_eq!(
            shift_months(&DateParts::new(15, 11, 2026), 3),
            DateParts::new(15, 2, 2027)
        );
        assert_eq!(
            shift_months(&DateParts::new(31, 1, 2026), 1),
            DateParts::new(28, 2, 2026)
        );
        assert_eq!(
            shift_months(&DateParts::new(10, 1, 2026), -1),
            DateParts::new(10, 12, 2025)
        );
    }
}
