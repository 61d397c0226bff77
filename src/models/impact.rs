//! Per-user sustainability counters and the dashboard's view of them.
//!
//! Counters are only ever added to; nothing in the application decreases them.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// CO2 milestone shown on the dashboard (kg).
pub const CO2_MILESTONE_KG: f64 = 50.0;
/// Water milestone shown on the dashboard (liters).
pub const WATER_MILESTONE_LITERS: f64 = 50_000.0;
/// Textile waste milestone shown on the dashboard (kg).
pub const WASTE_MILESTONE_KG: f64 = 30.0;

/// Aggregate sustainability impact attached to a user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct SustainabilityImpact {
    /// Completed swaps
    #[serde(default)]
    pub total_swaps: u32,
    /// CO2 saved (kg)
    #[serde(default)]
    pub co2_saved: f64,
    /// Water saved (liters)
    #[serde(default)]
    pub water_saved: f64,
    /// Textile waste kept from landfill (kg)
    #[serde(default)]
    pub textile_waste_prevented: f64,
}

/// Progress towards the next milestone, as percentages capped at 100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ImpactProgress {
    pub co2: f64,
    pub water: f64,
    pub waste: f64,
}

impl SustainabilityImpact {
    /// Milestone progress for each tracked counter.
    pub fn progress(&self) -> ImpactProgress {
        ImpactProgress {
            co2: percent_of(self.co2_saved, CO2_MILESTONE_KG),
            water: percent_of(self.water_saved, WATER_MILESTONE_LITERS),
            waste: percent_of(self.textile_waste_prevented, WASTE_MILESTONE_KG),
        }
    }

    /// Headline score: ten per swap plus two per kg of CO2, rounded.
    pub fn eco_score(&self) -> u64 {
        let score = f64::from(self.total_swaps) * 10.0 + self.co2_saved * 2.0;
        score.max(0.0).round() as u64
    }
}

fn percent_of(value: f64, milestone: f64) -> f64 {
    (value / milestone * 100.0).min(100.0)
}
