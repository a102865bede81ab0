//! Challenge and achievement (pinnacle) numbers.
//!
//! Both are four-element sequences built from the single-digit
//! reductions of day, month and year.

use anka_math::reduce_to_single_digit;
use anka_time::DateParts;

use crate::context::NumerologyContext;
use crate::scoring::digit_sum;

fn reduced_parts(date: &DateParts) -> (u32, u32, u32) {
    let r = |n: u32| reduce_to_single_digit(digit_sum(n));
    (r(date.day), r(date.month), r(date.year))
}

/// The four challenge numbers, each in 0..=8.
pub fn challenge_numbers(ctx: &NumerologyContext) -> [u32; 4] {
    let (day, month, year) = reduced_parts(&ctx.date_of_birth);
    let first = day.abs_diff(month);
    let second = day.abs_diff(year);
    let third = first.abs_diff(second);
    let fourth = year.abs_diff(month);
    [first, second, third, fourth]
}

/// The four achievement numbers, each in 0..=9.
pub fn achievement_numbers(ctx: &NumerologyContext) -> [u32; 4] {
    let (day, month, year) = reduced_parts(&ctx.date_of_birth);
    let first = reduce_to_single_digit(day + month);
    let second = reduce_to_single_digit(day + year);
    let third = reduce_to_single_digit(first + second);
    let fourth = reduce_to_single_digit(year + month);
    [first, second, third, fourth]
}
