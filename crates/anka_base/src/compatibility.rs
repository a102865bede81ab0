//! Couple metrics. Each returns 0 (or `[0, 0]`) when the date it needs is
//! missing.

use anka_math::reduce_to_single_digit;
use anka_time::DateParts;

use crate::context::NumerologyContext;
use crate::life_path::{life_path_number, life_path_of};
use crate::scoring::digit_sum;

/// All digits of `DDMMYYYY` reduced to one digit.
fn date_digit_root(date: &DateParts) -> u32 {
    reduce_to_single_digit(digit_sum(date.day) + digit_sum(date.month) + digit_sum(date.year))
}

/// Digit roots of both birth dates, summed and reduced. The partner half is
/// 0 without a partner date.
pub fn couple_number(ctx: &NumerologyContext) -> u32 {
    let own = date_digit_root(&ctx.date_of_birth);
    let partner = ctx.partner_date_of_birth.as_ref().map_or(0, date_digit_root);
    reduce_to_single_digit(own + partner)
}

/// Partner's day and month, each reduced, summed and reduced.
pub fn love_number(ctx: &NumerologyContext) -> u32 {
    ctx.partner_date_of_birth.as_ref().map_or(0, |p| {
        reduce_to_single_digit(reduce_to_single_digit(p.day) + reduce_to_single_digit(p.month))
    })
}

/// Partner's life path plus the person's own, reduced to one digit.
pub fn love_compatibility_number(ctx: &NumerologyContext) -> u32 {
    ctx.partner_date_of_birth
        .as_ref()
        .map_or(0, |p| reduce_to_single_digit(life_path_of(p) + life_path_number(ctx)))
}

/// Wedding day digits: day and year digit sums plus the reduced month.
pub fn wedding_number(ctx: &NumerologyContext) -> u32 {
    ctx.wedding_day.as_ref().map_or(0, |w| {
        let month = reduce_to_single_digit(digit_sum(w.month));
        reduce_to_single_digit(digit_sum(w.day) + digit_sum(w.year) + month)
    })
}

/// Both life paths as an unordered pair `[min, max]`, or `[0, 0]`.
///
/// Compatibility content is keyed by the unordered pair.
pub fn life_path_pair(ctx: &NumerologyContext) -> [u32; 2] {
    match ctx.partner_date_of_birth.as_ref() {
        Some(p) => {
            let own = life_path_number(ctx);
            let partner = life_path_of(p);
            [own.min(partner), own.max(partner)]
        }
        None => [0, 0],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::Language;

    fn single() -> NumerologyContext {
        NumerologyContext::new(Language::English, DateParts::new(15, 6, 1985), "John", "Doe")
    }

    fn couple() -> NumerologyContext {
        single().with_partner_date_of_birth(DateParts::new(24, 11, 1990))
    }

    #[test]
    fn without_partner() {
        let ctx = single();
        // own half only: 6 + 6 + 23 = 35 -> 8
        assert_eq!(couple_number(&ctx), 8);
        assert_eq!(love_number(&ctx), 0);
        assert_eq!(love_compatibility_number(&ctx), 0);
        assert_eq!(life_path_pair(&ctx), [0, 0]);
    }

    #[test]
    fn with_partner() {
        let ctx = couple();
        // 8 + (6 + 2 + 19 = 27 -> 9) = 17 -> 8
        assert_eq!(couple_number(&ctx), 8);
        // 24 -> 6, 11 -> 2
        assert_eq!(love_number(&ctx), 8);
        // partner life path 9 + own 8
        assert_eq!(love_compatibility_number(&ctx), 8);
        assert_eq!(life_path_pair(&ctx), [8, 9]);
    }

    #[test]
    fn pair_is_unordered() {
        let swapped = NumerologyContext::new(Language::English, DateParts::new(24, 11, 1990), "a", "b")
            .with_partner_date_of_birth(DateParts::new(15, 6, 1985));
        assert_eq!(life_path_pair(&swapped), life_path_pair(&couple()));
    }

    #[test]
    fn wedding() {
        assert_eq!(wedding_number(&single()), 0);
        // 3 + 8 + 4 = 15 -> 6
        let ctx = single().with_wedding_day(DateParts::new(3, 4, 2015));
        assert_eq!(wedding_number(&ctx), 6);
    }
}
