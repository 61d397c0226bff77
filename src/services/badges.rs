//! Badge evaluation against a user's live counters.
//!
//! Earned flags in stored user data are never recomputed implicitly; callers
//! that want live badges call [`evaluate`] and store the result themselves.

use crate::models::{Badge, SustainabilityImpact};

/// Counters badge criteria can refer to.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProgressStats {
    pub impact: SustainabilityImpact,
    /// Items the user has listed
    pub items_listed: u32,
    /// Distinct people the user has swapped with
    pub people_helped: u32,
}

impl From<SustainabilityImpact> for ProgressStats {
    fn from(impact: SustainabilityImpact) -> Self {
        Self {
            impact,
            ..Default::default()
        }
    }
}

/// Metric named on the left of a criteria expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Swaps,
    Items,
    Co2,
    Helped,
    Water,
    Waste,
}

impl Metric {
    fn parse(name: &str) -> Option<Self> {
        match name {
            "swaps" => Some(Self::Swaps),
            "items" => Some(Self::Items),
            "co2" => Some(Self::Co2),
            "helped" => Some(Self::Helped),
            "water" => Some(Self::Water),
            "waste" => Some(Self::Waste),
            _ => None,
        }
    }

    fn value(self, stats: &ProgressStats) -> f64 {
        match self {
            Self::Swaps => f64::from(stats.impact.total_swaps),
            Self::Items => f64::from(stats.items_listed),
            Self::Co2 => stats.impact.co2_saved,
            Self::Helped => f64::from(stats.people_helped),
            Self::Water => stats.impact.water_saved,
            Self::Waste => stats.impact.textile_waste_prevented,
        }
    }
}

/// A parsed `<metric> >= <threshold>` expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Criterion {
    pub metric: Metric,
    pub threshold: f64,
}

impl Criterion {
    pub fn parse(expr: &str) -> Option<Self> {
        let (metric, threshold) = expr.split_once(">=")?;
        Some(Self {
            metric: Metric::parse(metric.trim())?,
            threshold: threshold.trim().parse().ok()?,
        })
    }

    pub fn is_met(&self, stats: &ProgressStats) -> bool {
        self.metric.value(stats) >= self.threshold
    }
}

/// Recompute earned flags from `stats`.
///
/// Earned badges stay earned with their original date; newly satisfied ones
/// are stamped with `today`. Entries with unparseable criteria pass through
/// unchanged. Order is preserved and applying the result again changes
/// nothing.
pub fn evaluate(stats: &ProgressStats, badges: &[Badge], today: &str) -> Vec<Badge> {
    badges
        .iter()
        .map(|badge| {
            if badge.earned {
                return badge.clone();
            }
            match Criterion::parse(&badge.criteria) {
                Some(criterion) if criterion.is_met(stats) => Badge {
                    earned: true,
                    earned_at: Some(today.to_string()),
                    ..badge.clone()
                },
                _ => badge.clone(),
            }
        })
        .collect()
}
