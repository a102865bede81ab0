//! Person profile: a TOML file overlaid with command-line values.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

use anka_base::{NumerologyContext, NumerologyError};
use anka_time::{DateError, DateParts, MonthEncoding};
use serde::Deserialize;
use tracing::debug;

/// Everything needed to build a [`NumerologyContext`].
///
/// Every field is optional so a file and the command line can each supply
/// part of it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Profile {
    pub language: Option<String>,
    pub date_of_birth: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub middle_name: Option<String>,
    pub partner_date_of_birth: Option<String>,
    pub wedding_day: Option<String>,
    /// Dates use the legacy 0-based month.
    pub zero_based_months: Option<bool>,
}

#[derive(Debug)]
#[non_exhaustive]
pub enum ProfileError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Missing(&'static str),
    Numerology(NumerologyError),
}

impl Display for ProfileError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "cannot read profile: {e}"),
            Self::Parse(e) => write!(f, "invalid profile: {e}"),
            Self::Missing(field) => write!(f, "missing {field}"),
            Self::Numerology(e) => write!(f, "{e}"),
        }
    }
}

impl Error for ProfileError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Numerology(e) => Some(e),
            Self::Missing(_) => None,
        }
    }
}

impl From<std::io::Error> for ProfileError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ProfileError {
    fn from(e: toml::de::Error) -> Self {
        Self::Parse(e)
    }
}

impl From<NumerologyError> for ProfileError {
    fn from(e: NumerologyError) -> Self {
        Self::Numerology(e)
    }
}

impl From<DateError> for ProfileError {
    fn from(e: DateError) -> Self {
        Self::Numerology(NumerologyError::Date(e))
    }
}

impl Profile {
    pub fn from_toml(s: &str) -> Result<Self, ProfileError> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: &Path) -> Result<Self, ProfileError> {
        let content = std::fs::read_to_string(path)?;
        let profile = Self::from_toml(&content)?;
        debug!(path = %path.display(), "profile loaded");
        Ok(profile)
    }

    /// Fields set in `other` replace those in `self`.
    pub fn overlay(self, other: Profile) -> Profile {
        Profile {
            language: other.language.or(self.language),
            date_of_birth: other.date_of_birth.or(self.date_of_birth),
            first_name: other.first_name.or(self.first_name),
            last_name: other.last_name.or(self.last_name),
            middle_name: other.middle_name.or(self.middle_name),
            partner_date_of_birth: other.partner_date_of_birth.or(self.partner_date_of_birth),
            wedding_day: other.wedding_day.or(self.wedding_day),
            zero_based_months: other.zero_based_months.or(self.zero_based_months),
        }
    }

    pub fn month_encoding(&self) -> MonthEncoding {
        if self.zero_based_months.unwrap_or(false) {
            MonthEncoding::ZeroBased
        } else {
            MonthEncoding::OneBased
        }
    }

    /// Build the context. Language defaults to English and names to empty;
    /// the birth date is required.
    pub fn into_context(self) -> Result<NumerologyContext, ProfileError> {
        let encoding = self.month_encoding();
        let dob = self.date_of_birth.ok_or(ProfileError::Missing("date of birth"))?;
        let mut ctx = NumerologyContext::from_strings(
            self.language.as_deref().unwrap_or("en"),
            &dob,
            self.first_name.as_deref().unwrap_or_default(),
            self.last_name.as_deref().unwrap_or_default(),
            encoding,
        )?;
        if let Some(middle) = self.middle_name {
            ctx = ctx.with_father_name(middle);
        }
        if let Some(partner) = self.partner_date_of_birth {
            ctx = ctx.with_partner_date_of_birth(DateParts::parse_with(&partner, encoding)?);
        }
        if let Some(wedding) = self.wedding_day {
            ctx = ctx.with_wedding_day(DateParts::parse_with(&wedding, encoding)?);
        }
        Ok(ctx)
    }
}
