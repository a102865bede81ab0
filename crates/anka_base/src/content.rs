//! Lookup keys for localized readings.
//!
//! The content store is keyed by `(table, locale, number)`, or by
//! `(table, locale, characteristic, number)` for psychomatrix cells. This
//! module turns metric results into those keys; it never reads the store.

use crate::category::{CategoryId, MetricResult};
use crate::karmic::missing_digits;
use crate::language::Language;
use crate::psychomatrix::{ALL_CHARACTERISTICS, cell_counts};

/// One row to fetch from the content store.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentKey {
    pub table: &'static str,
    pub locale: &'static str,
    pub characteristic: Option<&'static str>,
    pub number: u64,
}

impl ContentKey {
    pub const fn new(table: &'static str, language: Language, number: u64) -> Self {
        Self {
            table,
            locale: language.code(),
            characteristic: None,
            number,
        }
    }
}

/// Keys for the readings of one category result.
///
/// Multi results yield one key per element. Karmic results yield one key
/// per missing digit, so an empty list means nothing is missing.
/// Psychomatrix results yield one key per cell, numbered by digit count.
pub fn content_keys(id: CategoryId, result: &MetricResult, language: Language) -> Vec<ContentKey> {
    let table = id.definition().table;
    match result {
        MetricResult::Simple(v) => vec![ContentKey::new(table, language, u64::from(*v))],
        MetricResult::Multi(vs) => vs
            .iter()
            .map(|&v| ContentKey::new(table, language, u64::from(v)))
            .collect(),
        MetricResult::Karmic(counts) => missing_digits(counts)
            .into_iter()
            .map(|d| ContentKey::new(table, language, u64::from(d)))
            .collect(),
        MetricResult::Psychomatrix(grid) => ALL_CHARACTERISTICS
            .iter()
            .zip(cell_counts(grid))
            .map(|(c, count)| ContentKey {
                characteristic: Some(c.name()),
                ..ContentKey::new(table, language, u64::from(count))
            })
            .collect(),
    }
}

/// Table of life-path compatibility readings.
pub const LIFE_PATH_COMPAT_TABLE: &str = "life_path_compatibility";

/// Key for a life-path compatibility reading, addressed by the unordered
/// pair `[min, max]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PairKey {
    pub table: &'static str,
    pub locale: &'static str,
    pub low: u32,
    pub high: u32,
}

/// `None` for the `[0, 0]` pair of a context without a partner.
pub fn life_path_compat_key(pair: [u32; 2], language: Language) -> Option<PairKey> {
    let [a, b] = pair;
    if a == 0 && b == 0 {
        return None;
    }
    Some(PairKey {
        table: LIFE_PATH_COMPAT_TABLE,
        locale: language.code(),
        low: a.min(b),
        high: a.max(b),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_key() {
        let keys = content_keys(CategoryId::LifePath, &MetricResult::Simple(8), Language::German);
        assert_eq!(keys, vec![ContentKey::new("life_path_number", Language::German, 8)]);
        assert_eq!(keys[0].locale, "de");
    }

    #[test]
    fn multi_keys_keep_order() {
        let keys = content_keys(
            CategoryId::ChallengeNumber,
            &MetricResult::Multi([0, 1, 1, 3]),
            Language::English,
        );
        let numbers: Vec<_> = keys.iter().map(|k| k.number).collect();
        assert_eq!(numbers, vec![0, 1, 1, 3]);
    }

    #[test]
    fn karmic_keys_are_missing_digits() {
        let keys = content_keys(
            CategoryId::KarmicLesson,
            &MetricResult::Karmic([0, 1, 0, 0, 1, 2, 2, 0, 1, 0]),
            Language::English,
        );
        let numbers: Vec<_> = keys.iter().map(|k| k.number).collect();
        assert_eq!(numbers, vec![2, 3, 7, 9]);
        assert!(keys.iter().all(|k| k.table == "karmic_lesson"));
    }

    #[test]
    fn psychomatrix_keys_use_counts() {
        let keys = content_keys(
            CategoryId::Psychomatrix,
            &MetricResult::Psychomatrix([111, 222, 3, 4, 5, 0, 7, 0, 999]),
            Language::Russian,
        );
        assert_eq!(keys.len(), 9);
        assert_eq!(keys[0].characteristic, Some("personality"));
        assert_eq!(keys[0].number, 3);
        assert_eq!(keys[5].characteristic, Some("labor"));
        assert_eq!(keys[5].number, 0);
        assert_eq!(keys[8].characteristic, Some("memory"));
    }

    #[test]
    fn compat_key_is_unordered() {
        let a = life_path_compat_key([9, 8], Language::English);
        let b = life_path_compat_key([8, 9], Language::English);
        assert_eq!(a, b);
        assert_eq!(a.map(|k| (k.low, k.high)), Some((8, 9)));
        assert_eq!(life_path_compat_key([0, 0], Language::English), None);
    }
}
