//! Error types for context construction and category lookup.

use std::error::Error;
use std::fmt::{Display, Formatter};

use anka_time::DateError;

/// Errors raised at the boundary of the numerology core.
///
/// Metric functions themselves are total; only building a context from
/// raw strings or resolving a category identifier can fail.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NumerologyError {
    /// A date field could not be parsed.
    Date(DateError),
    /// Language code not in the supported set.
    UnsupportedLanguage(String),
    /// Category identifier not in the registry.
    UnknownCategory(String),
}

impl Display for NumerologyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Date(e) => write!(f, "date error: {e}"),
            Self::UnsupportedLanguage(code) => write!(f, "unsupported language: {code:?}"),
            Self::UnknownCategory(id) => write!(f, "unknown category: {id:?}"),
        }
    }
}

impl Error for NumerologyError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Date(e) => Some(e),
            _ => None,
        }
    }
}

impl From<DateError> for NumerologyError {
    fn from(e: DateError) -> Self {
        Self::Date(e)
    }
}
