//! Category registry and dispatch.
//!
//! Every category names the content table its readings live in, the
//! shape of its result, and whether it needs a name or a partner date to
//! be meaningful. Dispatch is a plain lookup-and-call.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use anka_time::Clock;
use tracing::debug;

use crate::birth_numbers::{
    birthday_code, birthday_number, character_number, lucky_gem, money_number, planet_number,
};
use crate::challenge::{achievement_numbers, challenge_numbers};
use crate::combined::{marriage_number, maturity_number, potential_number, realization_number};
use crate::compatibility::{couple_number, love_number};
use crate::context::NumerologyContext;
use crate::cycles::{daily_lucky_number, personal_day, personal_month, personal_year};
use crate::error::NumerologyError;
use crate::karmic::karmic_lessons;
use crate::life_path::life_path_number;
use crate::name_numbers::{
    balance_number, desire_number, destiny_number, expression_number, intelligence_number,
    name_number, personality_number, soul_urge_number,
};
use crate::psychomatrix::psychomatrix;

/// Shape of a category's result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arity {
    /// One number.
    Simple,
    /// Four ordered numbers.
    Multi,
    /// Ten digit counts.
    Karmic,
    /// Nine grid slots.
    Psychomatrix,
}

impl Arity {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Multi => "multi",
            Self::Karmic => "karmic",
            Self::Psychomatrix => "psychomatrix",
        }
    }
}

/// Category identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryId {
    LifePath,
    BirthdayNumber,
    BirthdayCode,
    MaturityNumber,
    ChallengeNumber,
    AchievementNumber,
    SoulUrge,
    DesireNumber,
    LoveNumber,
    CoupleNumber,
    MarriageNumber,
    Expression,
    PersonalityNumber,
    NameNumber,
    CharacterNumber,
    IntelligenceNumber,
    BalanceNumber,
    MoneyNumber,
    LuckyGem,
    Destiny,
    RealizationNumber,
    PotentialNumber,
    KarmicLesson,
    PlanetNumber,
    PersonalYear,
    PersonalMonth,
    PersonalDay,
    DailyLuckyNumber,
    Psychomatrix,
}

/// All categories in registry order.
pub const ALL_CATEGORIES: [CategoryId; 29] = [
    CategoryId::LifePath,
    CategoryId::BirthdayNumber,
    CategoryId::BirthdayCode,
    CategoryId::MaturityNumber,
    CategoryId::ChallengeNumber,
    CategoryId::AchievementNumber,
    CategoryId::SoulUrge,
    CategoryId::DesireNumber,
    CategoryId::LoveNumber,
    CategoryId::CoupleNumber,
    CategoryId::MarriageNumber,
    CategoryId::Expression,
    CategoryId::PersonalityNumber,
    CategoryId::NameNumber,
    CategoryId::CharacterNumber,
    CategoryId::IntelligenceNumber,
    CategoryId::BalanceNumber,
    CategoryId::MoneyNumber,
    CategoryId::LuckyGem,
    CategoryId::Destiny,
    CategoryId::RealizationNumber,
    CategoryId::PotentialNumber,
    CategoryId::KarmicLesson,
    CategoryId::PlanetNumber,
    CategoryId::PersonalYear,
    CategoryId::PersonalMonth,
    CategoryId::PersonalDay,
    CategoryId::DailyLuckyNumber,
    CategoryId::Psychomatrix,
];

/// Static description of a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryDefinition {
    pub id: CategoryId,
    /// Content table holding the readings.
    pub table: &'static str,
    pub arity: Arity,
    pub needs_name: bool,
    pub needs_partner: bool,
}

impl CategoryId {
    /// Stable string identifier.
    pub const fn id(self) -> &'static str {
        match self {
            Self::LifePath => "life_path",
            Self::BirthdayNumber => "birthday_number",
            Self::BirthdayCode => "birthday_code",
            Self::MaturityNumber => "maturity_number",
            Self::ChallengeNumber => "challenge_number",
            Self::AchievementNumber => "achievement_number",
            Self::SoulUrge => "soul_urge",
            Self::DesireNumber => "desire_number",
            Self::LoveNumber => "love_number",
            Self::CoupleNumber => "couple_number",
            Self::MarriageNumber => "marriage_number",
            Self::Expression => "expression",
            Self::PersonalityNumber => "personality_number",
            Self::NameNumber => "name_number",
            Self::CharacterNumber => "character_number",
            Self::IntelligenceNumber => "intelligence_number",
            Self::BalanceNumber => "balance_number",
            Self::MoneyNumber => "money_number",
            Self::LuckyGem => "lucky_gem",
            Self::Destiny => "destiny",
            Self::RealizationNumber => "realization_number",
            Self::PotentialNumber => "potential_number",
            Self::KarmicLesson => "karmic_lesson",
            Self::PlanetNumber => "planet_number",
            Self::PersonalYear => "personal_year",
            Self::PersonalMonth => "personal_month",
            Self::PersonalDay => "personal_day",
            Self::DailyLuckyNumber => "daily_lucky_number",
            Self::Psychomatrix => "psychomatrix",
        }
    }

    /// Position in [`ALL_CATEGORIES`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Resolve a string identifier.
    pub fn from_id(id: &str) -> Option<Self> {
        ALL_CATEGORIES.into_iter().find(|c| c.id() == id)
    }

    pub const fn definition(self) -> CategoryDefinition {
        use Arity::{Karmic, Multi, Psychomatrix, Simple};
        // (table, arity, needs_name, needs_partner)
        let (table, arity, needs_name, needs_partner) = match self {
            Self::LifePath => ("life_path_number", Simple, false, false),
            Self::BirthdayNumber => ("birthday_number", Simple, false, false),
            Self::BirthdayCode => ("birthday_code", Simple, false, false),
            Self::MaturityNumber => ("maturity_number", Simple, false, false),
            Self::ChallengeNumber => ("challenge_number", Multi, false, false),
            Self::AchievementNumber => ("achievement_number", Multi, false, false),
            Self::SoulUrge => ("soul_urge_number", Simple, true, false),
            Self::DesireNumber => ("desire_number", Simple, true, false),
            Self::LoveNumber => ("love_number", Simple, false, true),
            Self::CoupleNumber => ("couple_number", Simple, false, true),
            Self::MarriageNumber => ("marriage_number", Simple, true, false),
            Self::Expression => ("expression_number", Simple, true, false),
            Self::PersonalityNumber => ("personality_number", Simple, true, false),
            Self::NameNumber => ("name_number", Simple, true, false),
            Self::CharacterNumber => ("character_number", Simple, true, false),
            Self::IntelligenceNumber => ("intelligence_number", Simple, true, false),
            Self::BalanceNumber => ("balance_number", Simple, true, false),
            Self::MoneyNumber => ("money_number", Simple, true, false),
            Self::LuckyGem => ("lucky_gem", Simple, true, false),
            Self::Destiny => ("destiny_number", Simple, true, false),
            Self::RealizationNumber => ("realization_number", Simple, true, false),
            Self::PotentialNumber => ("potential_number", Simple, true, false),
            Self::KarmicLesson => ("karmic_lesson", Karmic, true, false),
            Self::PlanetNumber => ("planet_number", Simple, false, false),
            Self::PersonalYear => ("personal_year", Simple, false, false),
            Self::PersonalMonth => ("personal_month", Simple, false, false),
            Self::PersonalDay => ("personal_day", Simple, false, false),
            Self::DailyLuckyNumber => ("daily_lucky_number", Simple, false, false),
            Self::Psychomatrix => ("psychomatrix", Psychomatrix, false, false),
        };
        CategoryDefinition {
            id: self,
            table,
            arity,
            needs_name,
            needs_partner,
        }
    }
}

impl FromStr for CategoryId {
    type Err = NumerologyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s).ok_or_else(|| NumerologyError::UnknownCategory(s.to_string()))
    }
}

impl Display for CategoryId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Definitions of every category, in registry order.
pub fn definitions() -> [CategoryDefinition; 29] {
    ALL_CATEGORIES.map(CategoryId::definition)
}

/// Result of one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricResult {
    Simple(u32),
    Multi([u32; 4]),
    Karmic([u32; 10]),
    Psychomatrix([u64; 9]),
}

impl MetricResult {
    pub const fn arity(&self) -> Arity {
        match self {
            Self::Simple(_) => Arity::Simple,
            Self::Multi(_) => Arity::Multi,
            Self::Karmic(_) => Arity::Karmic,
            Self::Psychomatrix(_) => Arity::Psychomatrix,
        }
    }

    pub const fn as_simple(&self) -> Option<u32> {
        match self {
            Self::Simple(v) => Some(*v),
            _ => None,
        }
    }

    /// Every value widened to `u64`, in order.
    pub fn values(&self) -> Vec<u64> {
        match self {
            Self::Simple(v) => vec![u64::from(*v)],
            Self::Multi(vs) => vs.iter().map(|&v| u64::from(v)).collect(),
            Self::Karmic(vs) => vs.iter().map(|&v| u64::from(v)).collect(),
            Self::Psychomatrix(vs) => vs.to_vec(),
        }
    }
}

impl Display for MetricResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let values = self.values();
        for (i, v) in values.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

/// Compute one category for `ctx`.
///
/// Time-dependent categories read today from `clock` with no offset.
pub fn calculate_for_category(
    id: CategoryId,
    ctx: &NumerologyContext,
    clock: &dyn Clock,
) -> MetricResult {
    use MetricResult::Simple;
    let result = match id {
        CategoryId::LifePath => Simple(life_path_number(ctx)),
        CategoryId::BirthdayNumber => Simple(birthday_number(ctx)),
        CategoryId::BirthdayCode => Simple(birthday_code(ctx)),
        CategoryId::MaturityNumber => Simple(maturity_number(ctx)),
        CategoryId::ChallengeNumber => MetricResult::Multi(challenge_numbers(ctx)),
        CategoryId::AchievementNumber => MetricResult::Multi(achievement_numbers(ctx)),
        CategoryId::SoulUrge => Simple(soul_urge_number(ctx)),
        CategoryId::DesireNumber => Simple(desire_number(ctx)),
        CategoryId::LoveNumber => Simple(love_number(ctx)),
        CategoryId::CoupleNumber => Simple(couple_number(ctx)),
        CategoryId::MarriageNumber => Simple(marriage_number(ctx)),
        CategoryId::Expression => Simple(expression_number(ctx)),
        CategoryId::PersonalityNumber => Simple(personality_number(ctx)),
        CategoryId::NameNumber => Simple(name_number(ctx)),
        CategoryId::CharacterNumber => Simple(character_number(ctx)),
        CategoryId::IntelligenceNumber => Simple(intelligence_number(ctx)),
        CategoryId::BalanceNumber => Simple(balance_number(ctx)),
        CategoryId::MoneyNumber => Simple(money_number(ctx)),
        CategoryId::LuckyGem => Simple(lucky_gem(ctx)),
        CategoryId::Destiny => Simple(destiny_number(ctx)),
        CategoryId::RealizationNumber => Simple(realization_number(ctx)),
        CategoryId::PotentialNumber => Simple(potential_number(ctx)),
        CategoryId::KarmicLesson => MetricResult::Karmic(karmic_lessons(ctx)),
        CategoryId::PlanetNumber => Simple(planet_number(ctx)),
        CategoryId::PersonalYear => Simple(personal_year(ctx, clock, 0)),
        CategoryId::PersonalMonth => Simple(personal_month(ctx, clock, 0)),
        CategoryId::PersonalDay => Simple(personal_day(ctx, clock, 0)),
        CategoryId::DailyLuckyNumber => Simple(daily_lucky_number(ctx, clock, 0)),
        CategoryId::Psychomatrix => MetricResult::Psychomatrix(psychomatrix(ctx)),
    };
    debug!(category = id.id(), %result, "category computed");
    result
}

/// Compute a category given its string identifier.
pub fn calculate_by_id(
    id: &str,
    ctx: &NumerologyContext,
    clock: &dyn Clock,
) -> Result<MetricResult, NumerologyError> {
    let id: CategoryId = id.parse()?;
    Ok(calculate_for_category(id, ctx, clock))
}

/// Every category for `ctx`, in registry order.
pub fn calculate_all(ctx: &NumerologyContext, clock: &dyn Clock) -> Vec<(CategoryId, MetricResult)> {
    ALL_CATEGORIES
        .into_iter()
        .map(|id| (id, calculate_for_category(id, ctx, clock)))
        .collect()
}
