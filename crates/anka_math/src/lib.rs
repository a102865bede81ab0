//! Digit-sum and reduction primitives.
//!
//! Every numerology metric in the workspace is built from three operations:
//! - [`sum_digits`]: one pass of decimal digit summation
//! - [`reduce_to_single_digit`]: repeated summation down to 0..=9
//! - [`reduce_to_single_digit_or_master`]: the same loop, also stopping at
//!   the master numbers 11 and 22
//!
//! All functions are pure and allocation-free.

pub mod reduce;

pub use reduce::{
    MASTER_NUMBERS, Reduction, decimal_len, is_master_number, reduce_to_single_digit,
    reduce_to_single_digit_or_master, sum_digits,
};
