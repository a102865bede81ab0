//! Integration tests for date parsing and day spans.

use anka_time::{
    DateError, DateParts, FixedClock, MonthEncoding, days_between, days_from_birth_till_start_of_month,
    days_since, shift_days, shift_months,
};

#[test]
fn legacy_and_canonical_strings_agree() {
    let legacy = DateParts::parse_with("24/10/1990", MonthEncoding::ZeroBased).unwrap();
    let canonical = DateParts::parse("24/11/1990").unwrap();
    assert_eq!(legacy, canonical);
    assert_eq!(legacy.format_with(MonthEncoding::ZeroBased), "24/10/1990");
}

#[test]
fn couple_span_known_value() {
    // 15 Jun 1985 -> 24 Nov 1990: 1985-06-15..1990-06-15 = 1826 (one leap day, 1988),
    // then 15 Jun -> 24 Nov = 15 + 31 + 31 + 30 + 31 + 24 = 162
    let a = DateParts::parse("15/06/1985").unwrap();
    let b = DateParts::parse("24/11/1990").unwrap();
    assert_eq!(days_between(&a, &b), 1826 + 162);
}

#[test]
fn feb_30_counts_as_march_2() {
    let clock = FixedClock::new(2, 3, 2001);
    let feb30 = DateParts::parse("30/02/2001").unwrap();
    assert_eq!(days_since(&feb30, &clock), 0);
}

#[test]
fn chart_origin_precedes_today() {
    let clock = FixedClock::new(19, 10, 2026);
    let birth = DateParts::parse("24/11/1990").unwrap();
    let since = days_since(&birth, &clock);
    let origin = days_from_birth_till_start_of_month(&birth, &clock);
    assert_eq!(since - origin, 18);
}

#[test]
fn shifting_back_and_forth() {
    let d = DateParts::parse("19/10/2026").unwrap();
    assert_eq!(shift_days(&shift_days(&d, 400), -400), d);
    assert_eq!(shift_months(&d, 12), DateParts::new(19, 10, 2027));
}

#[test]
fn error_is_std_error() {
    let err: Box<dyn std::error::Error> = Box::new(DateParts::parse("x").unwrap_err());
    assert!(err.to_string().contains("DD/MM/YYYY"));
    assert!(matches!(
        DateParts::parse("1990-10-24"),
        Err(DateError::InvalidDateFormat(_))
    ));
}
