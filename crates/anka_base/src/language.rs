//! Supported languages and the formula ruleset each one selects.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::NumerologyError;

/// Interface languages with localized content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    English,
    Russian,
    German,
    Spanish,
    French,
    Italian,
    Portuguese,
}

/// All languages in registry order.
pub const ALL_LANGUAGES: [Language; 7] = [
    Language::English,
    Language::Russian,
    Language::German,
    Language::Spanish,
    Language::French,
    Language::Italian,
    Language::Portuguese,
];

impl Language {
    /// Two-letter code used as the content locale.
    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Russian => "ru",
            Self::German => "de",
            Self::Spanish => "es",
            Self::French => "fr",
            Self::Italian => "it",
            Self::Portuguese => "pt",
        }
    }

    /// Resolve a two-letter code (case-insensitive).
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        ALL_LANGUAGES
            .into_iter()
            .find(|l| l.code().eq_ignore_ascii_case(code))
    }

    /// Formula variant used for this language.
    pub const fn ruleset(self) -> Ruleset {
        match self {
            Self::Russian => Ruleset::Cyrillic,
            _ => Ruleset::Latin,
        }
    }

    /// German scores `ü` and `ä` with fixed overrides.
    pub const fn has_umlaut_overrides(self) -> bool {
        matches!(self, Self::German)
    }
}

impl FromStr for Language {
    type Err = NumerologyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| NumerologyError::UnsupportedLanguage(s.to_string()))
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// The two historical formula variants.
///
/// Several metrics differ between them in which name parts participate
/// and which reduction is applied at the last step. Both variants are
/// kept as separate code paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ruleset {
    /// Russian: the patronymic always participates.
    Cyrillic,
    /// Every other language: the middle name participates only when given.
    Latin,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_roundtrip() {
        for lang in ALL_LANGUAGES {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
        }
    }

    #[test]
    fn code_is_case_insensitive() {
        assert_eq!(Language::from_code("RU"), Some(Language::Russian));
        assert_eq!(Language::from_code(" de "), Some(Language::German));
    }

    #[test]
    fn unknown_code() {
        assert_eq!(Language::from_code("xx"), None);
        assert_eq!(
            "xx".parse::<Language>(),
            Err(NumerologyError::UnsupportedLanguage("xx".into()))
        );
    }

    #[test]
    fn only_russian_is_cyrillic() {
        for lang in ALL_LANGUAGES {
            let expected = if lang == Language::Russian {
                Ruleset::Cyrillic
            } else {
                Ruleset::Latin
            };
            assert_eq!(lang.ruleset(), expected);
        }
    }

    #[test]
    fn only_german_overrides_umlauts() {
        assert!(Language::German.has_umlaut_overrides());
        assert!(!Language::English.has_umlaut_overrides());
    }
}
