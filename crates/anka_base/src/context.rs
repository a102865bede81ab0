//! Per-person input for every metric.

use anka_time::{DateParts, MonthEncoding};
use tracing::trace;

use crate::error::NumerologyError;
use crate::language::{Language, Ruleset};

/// Everything a metric may read about one person.
///
/// Names are stored as entered; metrics lowercase them before scoring.
/// The middle name (patronymic) is trimmed on read and treated as absent
/// when blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumerologyContext {
    pub language: Language,
    pub date_of_birth: DateParts,
    pub first_name: String,
    pub last_name: String,
    pub father_name: Option<String>,
    pub partner_date_of_birth: Option<DateParts>,
    pub wedding_day: Option<DateParts>,
}

impl NumerologyContext {
    pub fn new(
        language: Language,
        date_of_birth: DateParts,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            language,
            date_of_birth,
            first_name: first_name.into(),
            last_name: last_name.into(),
            father_name: None,
            partner_date_of_birth: None,
            wedding_day: None,
        }
    }

    /// Build from raw strings: a language code and a `DD/MM/YYYY` date.
    pub fn from_strings(
        language: &str,
        date_of_birth: &str,
        first_name: &str,
        last_name: &str,
        encoding: MonthEncoding,
    ) -> Result<Self, NumerologyError> {
        let language: Language = language.parse()?;
        let dob = DateParts::parse_with(date_of_birth, encoding)?;
        trace!(%language, %dob, "context built");
        Ok(Self::new(language, dob, first_name, last_name))
    }

    pub fn with_father_name(mut self, name: impl Into<String>) -> Self {
        self.father_name = Some(name.into());
        self
    }

    pub fn with_partner_date_of_birth(mut self, date: DateParts) -> Self {
        self.partner_date_of_birth = Some(date);
        self
    }

    pub fn with_wedding_day(mut self, date: DateParts) -> Self {
        self.wedding_day = Some(date);
        self
    }

    pub const fn ruleset(&self) -> Ruleset {
        self.language.ruleset()
    }

    /// Lowercased first name.
    pub fn first(&self) -> String {
        self.first_name.to_lowercase()
    }

    /// Lowercased last name.
    pub fn last(&self) -> String {
        self.last_name.to_lowercase()
    }

    /// Trimmed, lowercased middle name; empty when absent.
    pub fn middle(&self) -> String {
        self.father_name
            .as_deref()
            .map(|m| m.trim().to_lowercase())
            .unwrap_or_default()
    }

    /// Whether a non-blank middle name was given.
    pub fn has_middle_name(&self) -> bool {
        self.father_name
            .as_deref()
            .is_some_and(|m| !m.trim().is_empty())
    }

    /// First, middle and last name run together, lowercased.
    pub fn full_name(&self) -> String {
        format!("{}{}{}", self.first(), self.middle(), self.last())
    }
}
