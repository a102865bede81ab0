//! Metrics read off the birth date alone.

use anka_math::{reduce_to_single_digit, reduce_to_single_digit_or_master};

use crate::context::NumerologyContext;
use crate::language::Ruleset;
use crate::scoring::digit_sum;

/// Day of the month, unreduced.
pub fn birthday_number(ctx: &NumerologyContext) -> u32 {
    ctx.date_of_birth.day
}

/// Digit sums of day, month and year added together and reduced:
/// master-preserving for Cyrillic, plain otherwise.
pub fn birthday_code(ctx: &NumerologyContext) -> u32 {
    let d = &ctx.date_of_birth;
    let total = digit_sum(d.day) + digit_sum(d.month) + digit_sum(d.year);
    match ctx.ruleset() {
        Ruleset::Cyrillic => reduce_to_single_digit_or_master(total),
        Ruleset::Latin => reduce_to_single_digit(total),
    }
}

pub fn character_number(ctx: &NumerologyContext) -> u32 {
    reduce_to_single_digit_or_master(digit_sum(ctx.date_of_birth.day))
}

/// Day-of-birth soul number. Same reduction as [`character_number`].
pub fn soul_number(ctx: &NumerologyContext) -> u32 {
    character_number(ctx)
}

pub fn lucky_gem(ctx: &NumerologyContext) -> u32 {
    reduce_to_single_digit(ctx.date_of_birth.day)
}

pub fn planet_number(ctx: &NumerologyContext) -> u32 {
    reduce_to_single_digit(ctx.date_of_birth.day)
}

pub fn money_number(ctx: &NumerologyContext) -> u32 {
    let d = &ctx.date_of_birth;
    reduce_to_single_digit(
        reduce_to_single_digit(digit_sum(d.day)) + reduce_to_single_digit(digit_sum(d.month)),
    )
}
