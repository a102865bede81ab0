//! Metrics that combine other metrics.

use anka_math::{reduce_to_single_digit, reduce_to_single_digit_or_master};

use crate::birth_numbers::birthday_code;
use crate::context::NumerologyContext;
use crate::language::Ruleset;
use crate::life_path::life_path_number;
use crate::name_numbers::{destiny_number, expression_number};

/// Life path plus expression, master-reduced.
pub fn realization_number(ctx: &NumerologyContext) -> u32 {
    reduce_to_single_digit_or_master(life_path_number(ctx) + expression_number(ctx))
}

/// Life path plus expression: plain for Cyrillic, master-preserving otherwise.
pub fn maturity_number(ctx: &NumerologyContext) -> u32 {
    let total = life_path_number(ctx) + expression_number(ctx);
    match ctx.ruleset() {
        Ruleset::Cyrillic => reduce_to_single_digit(total),
        Ruleset::Latin => reduce_to_single_digit_or_master(total),
    }
}

/// Realization number flattened to one digit.
pub fn marriage_number(ctx: &NumerologyContext) -> u32 {
    reduce_to_single_digit(realization_number(ctx))
}

/// Birthday code plus destiny, master-reduced.
pub fn potential_number(ctx: &NumerologyContext) -> u32 {
    reduce_to_single_digit_or_master(birthday_code(ctx) + destiny_number(ctx))
}
