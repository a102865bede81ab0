//! Metrics scored from the letters of the name.

use anka_math::{reduce_to_single_digit, reduce_to_single_digit_or_master};

use crate::alphabet::LetterTable;
use crate::context::NumerologyContext;
use crate::language::Ruleset;
use crate::scoring::{digit_sum, score_name};

fn score(ctx: &NumerologyContext, part: &str, table: LetterTable) -> u32 {
    score_name(part, table, ctx.language)
}

/// Expression (destiny of the full name).
///
/// Each name part is scored with the full table and digit-summed twice.
/// Cyrillic reduces the sum of parts plainly. Latin digit-sums it once
/// more and keeps master numbers.
pub fn expression_number(ctx: &NumerologyContext) -> u32 {
    match ctx.ruleset() {
        Ruleset::Cyrillic => cyrillic_expression(ctx),
        Ruleset::Latin => latin_expression(ctx),
    }
}

fn cyrillic_expression(ctx: &NumerologyContext) -> u32 {
    let first = digit_sum(digit_sum(score(ctx, &ctx.first(), LetterTable::Full)));
    let last = digit_sum(digit_sum(score(ctx, &ctx.last(), LetterTable::Full)));
    let middle = digit_sum(digit_sum(score(ctx, &ctx.middle(), LetterTable::Full)));
    reduce_to_single_digit(first + last + middle)
}

fn latin_expression(ctx: &NumerologyContext) -> u32 {
    let first = digit_sum(digit_sum(score(ctx, &ctx.first(), LetterTable::Full)));
    let last = digit_sum(digit_sum(score(ctx, &ctx.last(), LetterTable::Full)));
    let middle = if ctx.has_middle_name() {
        digit_sum(digit_sum(score(ctx, &ctx.middle(), LetterTable::Full)))
    } else {
        0
    };
    reduce_to_single_digit_or_master(digit_sum(first + last + middle))
}

/// Personality: consonants of each part, master-reduced per part and
/// again over the sum.
///
/// The same formula serves both rulesets; an absent middle name scores 0
/// and adds nothing to the sum.
pub fn personality_number(ctx: &NumerologyContext) -> u32 {
    let part = |name: &str| reduce_to_single_digit_or_master(score(ctx, name, LetterTable::Consonant));
    reduce_to_single_digit_or_master(part(&ctx.first()) + part(&ctx.middle()) + part(&ctx.last()))
}

/// Destiny: consonant and vowel scores of every part, each reduced to one
/// digit, summed and master-reduced.
pub fn destiny_number(ctx: &NumerologyContext) -> u32 {
    let total: u32 = [ctx.first(), ctx.middle(), ctx.last()]
        .iter()
        .map(|name| {
            reduce_to_single_digit(score(ctx, name, LetterTable::Consonant))
                + reduce_to_single_digit(score(ctx, name, LetterTable::Vowel))
        })
        .sum();
    reduce_to_single_digit_or_master(total)
}

/// Soul urge: raw vowel score of all parts, master-reduced once.
pub fn soul_urge_number(ctx: &NumerologyContext) -> u32 {
    let total = score(ctx, &ctx.first(), LetterTable::Vowel)
        + score(ctx, &ctx.last(), LetterTable::Vowel)
        + score(ctx, &ctx.middle(), LetterTable::Vowel);
    reduce_to_single_digit_or_master(total)
}

/// Desire: consonants of first and last name only.
pub fn desire_number(ctx: &NumerologyContext) -> u32 {
    let first = reduce_to_single_digit_or_master(score(ctx, &ctx.first(), LetterTable::Consonant));
    let last = reduce_to_single_digit_or_master(score(ctx, &ctx.last(), LetterTable::Consonant));
    reduce_to_single_digit_or_master(first + last)
}

/// Name number: full-table score of the whole name.
pub fn name_number(ctx: &NumerologyContext) -> u32 {
    let total = score(ctx, &ctx.full_name(), LetterTable::Full);
    match ctx.ruleset() {
        Ruleset::Cyrillic => reduce_to_single_digit_or_master(total),
        Ruleset::Latin => reduce_to_single_digit(total),
    }
}

/// Balance: number of characters in the whole name.
pub fn balance_number(ctx: &NumerologyContext) -> u32 {
    let len = u32::try_from(ctx.full_name().chars().count()).unwrap_or(u32::MAX);
    reduce_to_single_digit_or_master(len)
}

/// Intelligence: first name combined with the birth day.
pub fn intelligence_number(ctx: &NumerologyContext) -> u32 {
    let first = reduce_to_single_digit(score(ctx, &ctx.first(), LetterTable::Full));
    let day = reduce_to_single_digit(digit_sum(ctx.date_of_birth.day));
    reduce_to_single_digit(first + day)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::Language;
    use anka_time::DateParts;

    fn john_doe() -> NumerologyContext {
        NumerologyContext::new(Language::English, DateParts::new(15, 6, 1985), "John", "Doe")
    }

    fn ivan() -> NumerologyContext {
        NumerologyContext::new(Language::Russian, DateParts::new(24, 11, 1990), "Иван", "Иванов")
            .with_father_name("Иванович")
    }

    #[test]
    fn john_doe_name_metrics() {
        let ctx = john_doe();
        assert_eq!(expression_number(&ctx), 8);
        assert_eq!(personality_number(&ctx), 9);
        assert_eq!(destiny_number(&ctx), 8);
        assert_eq!(soul_urge_number(&ctx), 8);
        assert_eq!(desire_number(&ctx), 9);
        assert_eq!(name_number(&ctx), 8);
        assert_eq!(balance_number(&ctx), 7);
        assert_eq!(intelligence_number(&ctx), 8);
    }

    #[test]
    fn ivan_expression() {
        // иван 11 -> 2, иванов 21 -> 3, иванович 29 -> 11 -> 2
        assert_eq!(expression_number(&ivan()), 7);
    }

    #[test]
    fn ivan_other_metrics() {
        let ctx = ivan();
        // consonants: иван 9, иванович 9 + 3 + 7 = 19 -> 10 -> 1, иванов 12 -> 3
        assert_eq!(personality_number(&ctx), 4);
        // full name 11 + 29 + 21 = 61 -> 7
        assert_eq!(name_number(&ctx), 7);
        // 4 + 8 + 6 characters
        assert_eq!(balance_number(&ctx), 9);
    }

    #[test]
    fn latin_middle_name_counts_when_present() {
        let with = john_doe().with_father_name("Paul");
        // paul: p7 a1 u3 l3 = 14 -> 5 -> 5; 2 + 5 + 6 = 13 -> 4
        assert_eq!(expression_number(&with), 4);
        assert_eq!(expression_number(&john_doe().with_father_name("  ")), 8);
    }

    #[test]
    fn names_are_case_insensitive() {
        let upper = NumerologyContext::new(Language::English, DateParts::new(15, 6, 1985), "JOHN", "DOE");
        assert_eq!(expression_number(&upper), expression_number(&john_doe()));
        assert_eq!(soul_urge_number(&upper), soul_urge_number(&john_doe()));
    }

    #[test]
    fn empty_names_score_zero() {
        let ctx = NumerologyContext::new(Language::English, DateParts::new(15, 6, 1985), "", "");
        assert_eq!(expression_number(&ctx), 0);
        assert_eq!(personality_number(&ctx), 0);
        assert_eq!(soul_urge_number(&ctx), 0);
        assert_eq!(balance_number(&ctx), 0);
    }

    #[test]
    fn german_umlauts_change_vowel_metrics() {
        let de = NumerologyContext::new(Language::German, DateParts::new(1, 1, 2000), "Jürgen", "Bär");
        let en = NumerologyContext { language: Language::English, ..de.clone() };
        // vowels: ü e / ä -> de 8 + 5 + 6 = 19 -> 1, en 3 + 5 + 1 = 9
        assert_eq!(soul_urge_number(&de), 1);
        assert_eq!(soul_urge_number(&en), 9);
    }

    #[test]
    fn results_stay_in_range() {
        for ctx in [john_doe(), ivan()] {
            for v in [
                expression_number(&ctx),
                personality_number(&ctx),
                destiny_number(&ctx),
                soul_urge_number(&ctx),
                desire_number(&ctx),
                name_number(&ctx),
                balance_number(&ctx),
                intelligence_number(&ctx),
            ] {
                assert!(v <= 9 || v == 11 || v == 22, "{v}");
            }
        }
    }
}
