//! Life path number and the values derived directly from it.

use anka_math::{reduce_to_single_digit, reduce_to_single_digit_or_master};
use anka_time::DateParts;

use crate::context::NumerologyContext;

/// Life path of a birth date.
///
/// Day, month and year are each reduced with master preservation, then
/// their sum is reduced the same way. Result is 1..=9, 11 or 22.
pub fn life_path_of(date: &DateParts) -> u32 {
    let day = reduce_to_single_digit_or_master(date.day);
    let month = reduce_to_single_digit_or_master(date.month);
    let year = reduce_to_single_digit_or_master(date.year);
    reduce_to_single_digit_or_master(day + month + year)
}

/// Life path of the person.
pub fn life_path_number(ctx: &NumerologyContext) -> u32 {
    life_path_of(&ctx.date_of_birth)
}

/// Life path of the partner, or 0 without a partner date.
pub fn partner_life_path(ctx: &NumerologyContext) -> u32 {
    ctx.partner_date_of_birth
        .as_ref()
        .map_or(0, life_path_of)
}

/// Life path reduced to one digit.
pub fn achievement_period(ctx: &NumerologyContext) -> u32 {
    reduce_to_single_digit(life_path_number(ctx))
}
