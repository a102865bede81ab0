//! Western (tropical) sun sign of a birth date.

use anka_time::DateParts;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

pub const ALL_SIGNS: [ZodiacSign; 12] = [
    ZodiacSign::Aries,
    ZodiacSign::Taurus,
    ZodiacSign::Gemini,
    ZodiacSign::Cancer,
    ZodiacSign::Leo,
    ZodiacSign::Virgo,
    ZodiacSign::Libra,
    ZodiacSign::Scorpio,
    ZodiacSign::Sagittarius,
    ZodiacSign::Capricorn,
    ZodiacSign::Aquarius,
    ZodiacSign::Pisces,
];

impl ZodiacSign {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// 0-based index (Aries = 0).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Sign for a day and month (1..=12). Out-of-range months fall back to
    /// Pisces.
    pub const fn from_day_month(day: u32, month: u32) -> Self {
        // (first day of the later sign, sign before, sign from then on)
        let (cusp, before, after) = match month {
            1 => (20, Self::Capricorn, Self::Aquarius),
            2 => (19, Self::Aquarius, Self::Pisces),
            3 => (21, Self::Pisces, Self::Aries),
            4 => (20, Self::Aries, Self::Taurus),
            5 => (21, Self::Taurus, Self::Gemini),
            6 => (21, Self::Gemini, Self::Cancer),
            7 => (23, Self::Cancer, Self::Leo),
            8 => (23, Self::Leo, Self::Virgo),
            9 => (23, Self::Virgo, Self::Libra),
            10 => (23, Self::Libra, Self::Scorpio),
            11 => (22, Self::Scorpio, Self::Sagittarius),
            12 => (22, Self::Sagittarius, Self::Capricorn),
            _ => return Self::Pisces,
        };
        if day >= cusp { after } else { before }
    }

    pub const fn of(date: &DateParts) -> Self {
        Self::from_day_month(date.day, date.month)
    }
}
