//! Summing letter values over a name.

use anka_math::sum_digits;

use crate::alphabet::LetterTable;
use crate::language::Language;

/// Digit sum of a non-negative value.
pub(crate) fn digit_sum(n: u32) -> u32 {
    sum_digits(i64::from(n))
}

/// Sum of per-letter values from `table`. Unmapped characters add 0.
///
/// The input is taken as-is; callers lowercase first.
pub fn score_letters(letters: &str, table: LetterTable) -> u32 {
    letters.chars().map(|c| table.value(c).unwrap_or(0)).sum()
}

/// Lowercase `name` and score it under `language`'s conventions.
///
/// German fixes `ü` at 8 and `ä` at 6 in the full and vowel tables.
/// The consonant table has no overrides.
pub fn score_name(name: &str, table: LetterTable, language: Language) -> u32 {
    let lower = name.to_lowercase();
    if !language.has_umlaut_overrides() || table == LetterTable::Consonant {
        return score_letters(&lower, table);
    }
    lower
        .chars()
        .map(|c| match c {
            'ü' => 8,
            'ä' => 6,
            _ => table.value(c).unwrap_or(0),
        })
        .sum()
}
