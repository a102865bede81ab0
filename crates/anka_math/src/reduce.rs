//! Decimal digit reduction.
//!
//! Summing the digits of any number >= 10 yields a strictly smaller number,
//! so both reduction loops terminate in a handful of passes for any `u32`.

/// Numbers that the master-preserving reduction keeps as-is.
///
/// Only 11 and 22. 33 is reduced like any other two-digit number.
pub const MASTER_NUMBERS: [u32; 2] = [11, 22];

/// Sum of the decimal digits of `|n|`. Returns 0 for 0.
pub fn sum_digits(n: i64) -> u32 {
    let mut num = n.unsigned_abs();
    let mut sum = 0u32;
    while num > 0 {
        sum += (num % 10) as u32;
        num /= 10;
    }
    sum
}

/// Whether `n` is one of [`MASTER_NUMBERS`].
pub const fn is_master_number(n: u32) -> bool {
    n == 11 || n == 22
}

/// Repeatedly sum digits until the result is below 10.
pub fn reduce_to_single_digit(n: u32) -> u32 {
    let mut result = n;
    while result >= 10 {
        result = sum_digits(i64::from(result));
    }
    result
}

/// Repeatedly sum digits until the result is below 10 or a master number.
///
/// The check happens before every pass, so an intermediate 11 or 22 stops
/// the loop even when the input itself was larger (29 -> 11).
pub fn reduce_to_single_digit_or_master(n: u32) -> u32 {
    let mut result = n;
    while result >= 10 && !is_master_number(result) {
        result = sum_digits(i64::from(result));
    }
    result
}

/// Number of decimal digits in `n`; 0 has length 0.
///
/// Psychomatrix slots store repeated digits (`111`), so the length of a
/// slot value is the repeat count.
pub fn decimal_len(n: u64) -> u32 {
    if n == 0 { 0 } else { n.ilog10() + 1 }
}

/// Which reduction a formula step applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reduction {
    /// Reduce to 0..=9.
    Plain,
    /// Reduce to 0..=9, keeping 11 and 22.
    Master,
}

impl Reduction {
    /// Apply this reduction to `n`.
    pub fn apply(self, n: u32) -> u32 {
        match self {
            Self::Plain => reduce_to_single_digit(n),
            Self::Master => reduce_to_single_digit_or_master(n),
        }
    }
}
