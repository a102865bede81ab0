//! Pythagorean square (psychomatrix) and its line readings.
//!
//! The grid is built from the digits of the birth date plus four working
//! numbers derived from it. Slot `d - 1` stores the digit `d` repeated once
//! per occurrence (`111` for three ones); 0 means the digit never occurs.

use anka_math::decimal_len;
use anka_time::DateParts;

use crate::context::NumerologyContext;
use crate::scoring::digit_sum;

/// A psychomatrix: nine slots for the digits 1..=9.
pub type Grid = [u64; 9];

/// Build the grid for a birth date.
pub fn psychomatrix_of(date: &DateParts) -> Grid {
    let first = digit_sum(date.day) + digit_sum(date.month) + digit_sum(date.year);
    let second = digit_sum(first);
    let lead = if date.day > 9 { date.day / 10 } else { date.day };
    let third = first.abs_diff(2 * lead);
    let fourth = digit_sum(third);

    let digits = format!(
        "{}{}{}{first}{second}{third}{fourth}",
        date.day, date.month, date.year
    );

    let mut grid = [0u64; 9];
    for d in digits.chars().filter_map(|c| c.to_digit(10)).filter(|&d| d > 0) {
        let slot = &mut grid[(d - 1) as usize];
        *slot = *slot * 10 + u64::from(d);
    }
    grid
}

/// Grid of the person.
pub fn psychomatrix(ctx: &NumerologyContext) -> Grid {
    psychomatrix_of(&ctx.date_of_birth)
}

/// Grid of the partner, if a partner date is set.
pub fn partner_psychomatrix(ctx: &NumerologyContext) -> Option<Grid> {
    ctx.partner_date_of_birth.as_ref().map(psychomatrix_of)
}

/// Occurrence count of each digit: the decimal length of each slot.
pub fn cell_counts(grid: &Grid) -> [u32; 9] {
    grid.map(decimal_len)
}

/// What each grid cell describes, in slot order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Characteristic {
    Personality,
    Energy,
    Interest,
    Health,
    Logic,
    Labor,
    Luck,
    Duty,
    Memory,
}

pub const ALL_CHARACTERISTICS: [Characteristic; 9] = [
    Characteristic::Personality,
    Characteristic::Energy,
    Characteristic::Interest,
    Characteristic::Health,
    Characteristic::Logic,
    Characteristic::Labor,
    Characteristic::Luck,
    Characteristic::Duty,
    Characteristic::Memory,
];

impl Characteristic {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Personality => "personality",
            Self::Energy => "energy",
            Self::Interest => "interest",
            Self::Health => "health",
            Self::Logic => "logic",
            Self::Labor => "labor",
            Self::Luck => "luck",
            Self::Duty => "duty",
            Self::Memory => "memory",
        }
    }

    /// Grid slot (0..=8).
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Rows, columns and diagonals of the 3x3 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Line {
    SelfEsteem,
    Domestic,
    Stability,
    Purpose,
    Family,
    Habits,
    Spirituality,
    Temperament,
}

pub const ALL_LINES: [Line; 8] = [
    Line::SelfEsteem,
    Line::Domestic,
    Line::Stability,
    Line::Purpose,
    Line::Family,
    Line::Habits,
    Line::Spirituality,
    Line::Temperament,
];

impl Line {
    pub const fn name(self) -> &'static str {
        match self {
            Self::SelfEsteem => "self-esteem",
            Self::Domestic => "domestic",
            Self::Stability => "stability",
            Self::Purpose => "purpose",
            Self::Family => "family",
            Self::Habits => "habits",
            Self::Spirituality => "spirituality",
            Self::Temperament => "temperament",
        }
    }

    /// Slots making up the line, with the grid read row-major.
    pub const fn cells(self) -> [usize; 3] {
        match self {
            Self::SelfEsteem => [0, 1, 2],
            Self::Domestic => [3, 4, 5],
            Self::Stability => [6, 7, 8],
            Self::Purpose => [0, 3, 6],
            Self::Family => [1, 4, 7],
            Self::Habits => [2, 5, 8],
            Self::Spirituality => [0, 4, 8],
            Self::Temperament => [2, 4, 6],
        }
    }

    /// Sum of digit counts over the line's cells.
    pub fn value(self, counts: &[u32; 9]) -> u32 {
        self.cells().iter().map(|&i| counts[i]).sum()
    }
}

/// Values of all eight lines, in [`ALL_LINES`] order.
pub fn line_values(grid: &Grid) -> [u32; 8] {
    let counts = cell_counts(grid);
    ALL_LINES.map(|line| line.value(&counts))
}

/// How two people's values on one line compare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineStrength {
    Weak,
    Moderate,
    Strong,
    YouStronger,
    PartnerStronger,
}

impl LineStrength {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Weak => "weak",
            Self::Moderate => "moderate",
            Self::Strong => "strong",
            Self::YouStronger => "you_stronger",
            Self::PartnerStronger => "partner_stronger",
        }
    }

    /// Classify a pair of line values.
    pub fn classify(user: u32, partner: u32) -> Self {
        let leader = if user > partner {
            Self::YouStronger
        } else {
            Self::PartnerStronger
        };
        if user < 3 && partner < 3 {
            Self::Weak
        } else if user == 3 && partner == 3 {
            Self::Moderate
        } else if user > 3 && partner > 3 {
            if user.abs_diff(partner) < 2 {
                Self::Strong
            } else {
                leader
            }
        } else {
            leader
        }
    }
}

/// One line compared between two people.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineComparison {
    pub line: Line,
    pub user: u32,
    pub partner: u32,
    pub strength: LineStrength,
}

/// Compare every line of the person's grid with the partner's.
///
/// `None` without a partner date.
pub fn compare_lines(ctx: &NumerologyContext) -> Option<[LineComparison; 8]> {
    let partner = partner_psychomatrix(ctx)?;
    let user = line_values(&psychomatrix(ctx));
    let other = line_values(&partner);
    Some(std::array::from_fn(|i| LineComparison {
        line: ALL_LINES[i],
        user: user[i],
        partner: other[i],
        strength: LineStrength::classify(user[i], other[i]),
    }))
}
