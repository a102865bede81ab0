//! Personal year, month and day cycles relative to the clock.
//!
//! Each level takes its own offset. The lower levels always build on the
//! un-offset higher level: the personal month for "next month" uses this
//! year's personal year, and the personal day for "tomorrow" uses this
//! month's personal month.

use anka_math::{reduce_to_single_digit, reduce_to_single_digit_or_master, sum_digits};
use anka_time::{Clock, shift_days, shift_months};

use crate::context::NumerologyContext;
use crate::life_path::life_path_number;
use crate::scoring::digit_sum;

/// Personal year for the current year shifted by `year_offset`.
pub fn personal_year(ctx: &NumerologyContext, clock: &dyn Clock, year_offset: i32) -> u32 {
    let today = clock.today();
    let year = i64::from(today.year) + i64::from(year_offset);
    let year = reduce_to_single_digit_or_master(sum_digits(year));
    let day = reduce_to_single_digit_or_master(digit_sum(ctx.date_of_birth.day));
    let month = reduce_to_single_digit_or_master(digit_sum(ctx.date_of_birth.month));
    reduce_to_single_digit(day + month + year)
}

/// Personal month for the current month shifted by `month_offset`.
pub fn personal_month(ctx: &NumerologyContext, clock: &dyn Clock, month_offset: i32) -> u32 {
    let year = personal_year(ctx, clock, 0);
    let target = shift_months(&clock.today(), month_offset);
    reduce_to_single_digit(year + target.month)
}

/// Personal day for today shifted by `day_offset`.
pub fn personal_day(ctx: &NumerologyContext, clock: &dyn Clock, day_offset: i64) -> u32 {
    let month = personal_month(ctx, clock, 0);
    let target = shift_days(&clock.today(), day_offset);
    reduce_to_single_digit(month + target.day)
}

/// Personal day plus life path.
pub fn daily_lucky_number(ctx: &NumerologyContext, clock: &dyn Clock, day_offset: i64) -> u32 {
    reduce_to_single_digit(personal_day(ctx, clock, day_offset) + life_path_number(ctx))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::Language;
    use anka_time::{DateParts, FixedClock};

    fn ctx() -> NumerologyContext {
        NumerologyContext::new(Language::English, DateParts::new(15, 6, 1985), "John", "Doe")
    }

    const TODAY: FixedClock = FixedClock::new(19, 10, 2026);

    #[test]
    fn cycles_today() {
        // 6 + 6 + (2026 -> 10 -> 1) = 13 -> 4
        assert_eq!(personal_year(&ctx(), &TODAY, 0), 4);
        assert_eq!(personal_month(&ctx(), &TODAY, 0), 5);
        assert_eq!(personal_day(&ctx(), &TODAY, 0), 6);
        assert_eq!(daily_lucky_number(&ctx(), &TODAY, 0), 5);
    }

    #[test]
    fn year_offset() {
        // 2027 -> 11 stays master: 6 + 6 + 11 = 23 -> 5
        assert_eq!(personal_year(&ctx(), &TODAY, 1), 5);
        // 2025 -> 9: 21 -> 3
        assert_eq!(personal_year(&ctx(), &TODAY, -1), 3);
    }

    #[test]
    fn month_offset_wraps_year() {
        // December: 4 + 12 = 16 -> 7
        assert_eq!(personal_month(&ctx(), &TODAY, 2), 7);
        // March of next year still uses this year's personal year: 4 + 3
        assert_eq!(personal_month(&ctx(), &TODAY, 5), 7);
    }

    #[test]
    fn day_offset_crosses_month() {
        // 19 Oct + 13 = 1 Nov; personal month stays October's 5
        assert_eq!(personal_day(&ctx(), &TODAY, 13), 6);
        // tomorrow: 5 + 20 = 25 -> 7
        assert_eq!(personal_day(&ctx(), &TODAY, 1), 7);
        assert_eq!(daily_lucky_number(&ctx(), &TODAY, 1), 6);
    }

    #[test]
    fn personal_day_of_master_day_uses_digit_sum() {
        // Day 11 digit-sums to 2 before reduction: 2 + 6 + 1 = 9
        let c = NumerologyContext::new(Language::English, DateParts::new(11, 6, 1985), "a", "b");
        assert_eq!(personal_year(&c, &TODAY, 0), 9);
    }
}
