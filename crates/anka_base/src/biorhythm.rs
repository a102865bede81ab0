//! Biorhythm waves.
//!
//! Each cycle is `sin(2π·days/period)·100` over whole days since birth.
//! Values just below zero (`-0.1 < v < 0`) are snapped to 0 so a cycle
//! crossing zero never reads as a tiny negative.
//!
//! Couple synchrony uses `|cos(π·days/period)·100|` over the days between
//! the two birth dates, always in `[0, 100]`.

use std::f64::consts::PI;

use anka_time::{Clock, DateParts, days_between, days_since, shift_days};

/// A biorhythm cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cycle {
    Physical,
    Emotional,
    Intellectual,
    Spiritual,
    Awareness,
    Aesthetic,
    Intuition,
}

/// The three classic cycles.
pub const PRIMARY_CYCLES: [Cycle; 3] = [Cycle::Physical, Cycle::Emotional, Cycle::Intellectual];

/// The four secondary cycles.
pub const SECONDARY_CYCLES: [Cycle; 4] = [
    Cycle::Spiritual,
    Cycle::Awareness,
    Cycle::Aesthetic,
    Cycle::Intuition,
];

impl Cycle {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Physical => "physical",
            Self::Emotional => "emotional",
            Self::Intellectual => "intellectual",
            Self::Spiritual => "spiritual",
            Self::Awareness => "awareness",
            Self::Aesthetic => "aesthetic",
            Self::Intuition => "intuition",
        }
    }

    /// Period in days.
    pub const fn period(self) -> u32 {
        match self {
            Self::Physical => 23,
            Self::Emotional => 28,
            Self::Intellectual => 33,
            Self::Spiritual => 53,
            Self::Awareness => 48,
            Self::Aesthetic => 43,
            Self::Intuition => 38,
        }
    }

    /// Value of this cycle `days` after birth, in `[-100, 100]`.
    pub fn value(self, days: i64) -> f64 {
        snap((2.0 * PI * days as f64 / f64::from(self.period())).sin() * 100.0)
    }

    /// Synchrony of two people whose birth dates are `days` apart, in `[0, 100]`.
    pub fn sync(self, days: u64) -> f64 {
        ((PI * days as f64 / f64::from(self.period())).cos() * 100.0).abs()
    }
}

/// Clamp values in `(-0.1, 0)` to exactly 0.
pub fn snap(v: f64) -> f64 {
    if v < 0.0 && v > -0.1 { 0.0 } else { v }
}

/// Primary cycles `days` after birth.
pub fn primary_at(days: i64) -> [f64; 3] {
    PRIMARY_CYCLES.map(|c| c.value(days))
}

/// Secondary cycles `days` after birth.
pub fn secondary_at(days: i64) -> [f64; 4] {
    SECONDARY_CYCLES.map(|c| c.value(days))
}

fn days_alive(birth: &DateParts, clock: &dyn Clock, offset: i64) -> i64 {
    i64::try_from(days_since(birth, clock))
        .unwrap_or(i64::MAX)
        .saturating_add(offset)
}

/// Primary cycles for today shifted by `offset` days (1 = tomorrow).
pub fn biorhythm(birth: &DateParts, clock: &dyn Clock, offset: i64) -> [f64; 3] {
    primary_at(days_alive(birth, clock, offset))
}

/// Secondary cycles for today shifted by `offset` days.
pub fn secondary_biorhythm(birth: &DateParts, clock: &dyn Clock, offset: i64) -> [f64; 4] {
    secondary_at(days_alive(birth, clock, offset))
}

/// Primary-cycle synchrony of two birth dates.
pub fn couple_sync(a: &DateParts, b: &DateParts) -> [f64; 3] {
    let days = days_between(a, b);
    PRIMARY_CYCLES.map(|c| c.sync(days))
}

/// Reading of a primary cycle value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BioLevel {
    Critical,
    Positive,
    Negative,
}

impl BioLevel {
    /// `|v| < 5` is critical.
    pub fn classify(v: f64) -> Self {
        if v.abs() < 5.0 {
            Self::Critical
        } else if v > 0.0 {
            Self::Positive
        } else {
            Self::Negative
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Positive => "positive",
            Self::Negative => "negative",
        }
    }
}

/// Reading of a secondary cycle value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SecondaryLevel {
    High,
    Low,
}

impl SecondaryLevel {
    pub fn classify(v: f64) -> Self {
        if v >= 0.0 { Self::High } else { Self::Low }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Low => "low",
        }
    }
}

/// Reading of a couple synchrony value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyncLevel {
    Max,
    Good,
    Bad,
    Min,
}

impl SyncLevel {
    pub fn classify(v: f64) -> Self {
        if v >= 80.0 {
            Self::Max
        } else if v >= 50.0 {
            Self::Good
        } else if v >= 30.0 {
            Self::Bad
        } else {
            Self::Min
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Max => "max",
            Self::Good => "good",
            Self::Bad => "bad",
            Self::Min => "min",
        }
    }
}

/// One day of a biorhythm chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartPoint {
    /// Days relative to today.
    pub offset: i64,
    pub date: DateParts,
    pub values: [f64; 3],
}

/// Primary cycles for `len` consecutive days starting `back` days before
/// today.
pub fn chart_series(birth: &DateParts, clock: &dyn Clock, back: i64, len: usize) -> Vec<ChartPoint> {
    let today = clock.today();
    let base = days_alive(birth, clock, 0);
    (0..len as i64)
        .map(|i| {
            let offset = i - back;
            ChartPoint {
                offset,
                date: shift_days(&today, offset),
                values: primary_at(base.saturating_add(offset)),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use anka_time::FixedClock;

    const EPS: f64 = 1e-9;

    #[test]
    fn birth_day_is_zero() {
        assert_eq!(primary_at(0), [0.0, 0.0, 0.0]);
        assert_eq!(secondary_at(0), [0.0; 4]);
    }

    #[test]
    fn full_period_snaps_to_zero() {
        // sin(2π)·100 is about -2.4e-14
        assert_eq!(Cycle::Physical.value(23), 0.0);
        assert_eq!(Cycle::Emotional.value(28), 0.0);
        assert_eq!(Cycle::Spiritual.value(53), 0.0);
    }

    #[test]
    fn snap_window() {
        assert_eq!(snap(-0.05), 0.0);
        assert_eq!(snap(-0.1), -0.1);
        assert_eq!(snap(-0.5), -0.5);
        assert_eq!(snap(0.05), 0.05);
    }

    #[test]
    fn quarter_period_peaks() {
        assert!((Cycle::Emotional.value(7) - 100.0).abs() < EPS);
        assert!((Cycle::Emotional.value(21) + 100.0).abs() < EPS);
    }

    #[test]
    fn values_for_fixed_clock() {
        let birth = DateParts::new(15, 6, 1985);
        let clock = FixedClock::new(19, 10, 2026);
        // 15101 days
        let v = biorhythm(&birth, &clock, 0);
        assert!((v[0] + 39.840_108_984_576).abs() < 1e-6);
        assert!((v[1] - 90.096_886_790_256).abs() < 1e-6);
        assert!((v[2] + 61.815_898_622_038).abs() < 1e-6);
        assert_eq!(biorhythm(&birth, &clock, 1), primary_at(15102));
        assert_eq!(secondary_biorhythm(&birth, &clock, -3), secondary_at(15098));
    }

    #[test]
    fn next_day_values_are_snapped() {
        let birth = DateParts::new(1, 1, 2000);
        // 22 days alive; tomorrow completes the physical period
        let clock = FixedClock::new(23, 1, 2000);
        assert!(biorhythm(&birth, &clock, 0)[0] < -0.1);
        assert_eq!(biorhythm(&birth, &clock, 1)[0], 0.0);
    }

    #[test]
    fn couple_sync_values() {
        let a = DateParts::new(15, 6, 1985);
        let b = DateParts::new(24, 11, 1990);
        // 1988 days apart
        let s = couple_sync(&a, &b);
        assert!((s[0] - 20.345_601_305_265).abs() < 1e-6);
        assert!((s[1] - 100.0).abs() < 1e-6);
        assert!((s[2] - 72.373_403_810_506).abs() < 1e-6);
        assert_eq!(s, couple_sync(&b, &a));
    }

    #[test]
    fn couple_sync_bounds() {
        for days in 0..200 {
            for c in PRIMARY_CYCLES {
                let v = c.sync(days);
                assert!((0.0..=100.0 + EPS).contains(&v), "{days}: {v}");
            }
        }
    }

    #[test]
    fn levels() {
        assert_eq!(BioLevel::classify(4.9), BioLevel::Critical);
        assert_eq!(BioLevel::classify(-4.9), BioLevel::Critical);
        assert_eq!(BioLevel::classify(5.0), BioLevel::Positive);
        assert_eq!(BioLevel::classify(-5.0), BioLevel::Negative);
        assert_eq!(SecondaryLevel::classify(0.0), SecondaryLevel::High);
        assert_eq!(SecondaryLevel::classify(-0.2), SecondaryLevel::Low);
        assert_eq!(SyncLevel::classify(80.0), SyncLevel::Max);
        assert_eq!(SyncLevel::classify(79.9), SyncLevel::Good);
        assert_eq!(SyncLevel::classify(30.0), SyncLevel::Bad);
        assert_eq!(SyncLevel::classify(29.9), SyncLevel::Min);
    }

    #[test]
    fn chart_window() {
        let birth = DateParts::new(15, 6, 1985);
        let clock = FixedClock::new(19, 10, 2026);
        let series = chart_series(&birth, &clock, 7, 15);
        assert_eq!(series.len(), 15);
        assert_eq!(series[0].offset, -7);
        assert_eq!(series[0].date, DateParts::new(12, 10, 2026));
        assert_eq!(series[7].offset, 0);
        assert_eq!(series[7].values, biorhythm(&birth, &clock, 0));
        assert_eq!(series[14].date, DateParts::new(26, 10, 2026));
    }

    #[test]
    fn periods() {
        assert_eq!(PRIMARY_CYCLES.map(Cycle::period), [23, 28, 33]);
        assert_eq!(SECONDARY_CYCLES.map(Cycle::period), [53, 48, 43, 38]);
    }
}
