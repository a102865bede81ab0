//! Karmic lessons: how often each digit occurs among the letters of the
//! full name.

use crate::alphabet::LetterTable;
use crate::context::NumerologyContext;

/// Occurrence count of each digit 0..=9 over the full name.
///
/// Every character counts once. Unmapped characters count as digit 0, so
/// the sum of the histogram equals the character count of the name.
pub fn karmic_lessons(ctx: &NumerologyContext) -> [u32; 10] {
    let mut counts = [0u32; 10];
    for c in ctx.full_name().chars() {
        let digit = LetterTable::Full.value(c).unwrap_or(0) as usize;
        counts[digit] += 1;
    }
    counts
}

/// Digits 1..=9 that never occur: the karmic lessons proper.
pub fn missing_digits(counts: &[u32; 10]) -> Vec<u32> {
    (1..=9u32).filter(|&d| counts[d as usize] == 0).collect()
}
