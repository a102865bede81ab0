//! Numerology metrics over a person's name and birth date.
//!
//! This crate provides:
//! - Letter tables (full, vowel, consonant) for Latin and Cyrillic names
//! - Name scoring with the German umlaut overrides
//! - Around forty metric functions, each a pure function of a
//!   [`NumerologyContext`] and, for the time-dependent ones, a [`Clock`]
//! - The category registry and [`calculate_for_category`] dispatch
//! - Content keys for joining results against localized readings
//!
//! Two formula variants exist ([`Ruleset::Cyrillic`] for Russian and
//! [`Ruleset::Latin`] for everything else). Where they differ, each metric
//! keeps both branches.
//!
//! [`Clock`]: anka_time::Clock

pub mod alphabet;
pub mod biorhythm;
pub mod birth_numbers;
pub mod category;
pub mod challenge;
pub mod combined;
pub mod compatibility;
pub mod content;
pub mod context;
pub mod cycles;
pub mod error;
pub mod karmic;
pub mod language;
pub mod life_path;
pub mod name_numbers;
pub mod psychomatrix;
pub mod scoring;
pub mod zodiac;

pub use alphabet::{ALL_TABLES, LetterTable};
pub use biorhythm::{
    BioLevel, ChartPoint, Cycle, PRIMARY_CYCLES, SECONDARY_CYCLES, SecondaryLevel, SyncLevel,
    biorhythm, chart_series, couple_sync, secondary_biorhythm,
};
pub use birth_numbers::{
    birthday_code, birthday_number, character_number, lucky_gem, money_number, planet_number,
    soul_number,
};
pub use category::{
    ALL_CATEGORIES, Arity, CategoryDefinition, CategoryId, MetricResult, calculate_all,
    calculate_by_id, calculate_for_category, definitions,
};
pub use challenge::{achievement_numbers, challenge_numbers};
pub use combined::{marriage_number, maturity_number, potential_number, realization_number};
pub use compatibility::{
    couple_number, life_path_pair, love_compatibility_number, love_number, wedding_number,
};
pub use content::{ContentKey, PairKey, content_keys, life_path_compat_key};
pub use context::NumerologyContext;
pub use cycles::{daily_lucky_number, personal_day, personal_month, personal_year};
pub use error::NumerologyError;
pub use karmic::{karmic_lessons, missing_digits};
pub use language::{ALL_LANGUAGES, Language, Ruleset};
pub use life_path::{achievement_period, life_path_number, life_path_of, partner_life_path};
pub use name_numbers::{
    balance_number, desire_number, destiny_number, expression_number, intelligence_number,
    name_number, personality_number, soul_urge_number,
};
pub use psychomatrix::{
    ALL_CHARACTERISTICS, ALL_LINES, Characteristic, Grid, Line, LineComparison, LineStrength,
    cell_counts, compare_lines, line_values, partner_psychomatrix, psychomatrix, psychomatrix_of,
};
pub use scoring::{score_letters, score_name};
pub use zodiac::{ALL_SIGNS, ZodiacSign};
