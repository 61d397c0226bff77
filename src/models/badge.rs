// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Achievement badges: the static catalog and per-user earned state.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// A badge definition from the process-wide catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    /// Textual criteria, `<metric> >= <threshold>`
    pub criteria: &'static str,
}

/// Every badge a user can earn, in display order.
pub const CATALOG: [BadgeDefinition; 5] = [
    BadgeDefinition {
        id: "eco-warrior",
        name: "Eco Warrior",
        description: "Complete 5 swaps",
        icon: "🌱",
        criteria: "swaps >= 5",
    },
    BadgeDefinition {
        id: "trendsetter",
        name: "Trendsetter",
        description: "List 10 items",
        icon: "👗",
        criteria: "items >= 10",
    },
    BadgeDefinition {
        id: "green-pioneer",
        name: "Green Pioneer",
        description: "Save 20kg CO2",
        icon: "🌍",
        criteria: "co2 >= 20",
    },
    BadgeDefinition {
        id: "community-builder",
        name: "Community Builder",
        description: "Help 10 people swap",
        icon: "🤝",
        criteria: "helped >= 10",
    },
    BadgeDefinition {
        id: "water-saver",
        name: "Water Saver",
        description: "Save 5000L water",
        icon: "💧",
        criteria: "water >= 5000",
    },
];

/// A user's copy of a catalog badge, annotated with earned state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub criteria: String,
    pub earned: bool,
    /// Date the badge was earned ("YYYY-MM-DD")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub earned_at: Option<String>,
}

impl Badge {
    /// Unearned copy of a catalog definition.
    pub fn unearned(def: &BadgeDefinition) -> Self {
        Self {
            id: def.id.to_string(),
            name: def.name.to_string(),
            description: def.description.to_string(),
            icon: def.icon.to_string(),
            criteria: def.criteria.to_string(),
            earned: false,
            earned_at: None,
        }
    }

    /// Earned copy of a catalog definition.
    pub fn earned(def: &BadgeDefinition, earned_at: &str) -> Self {
        Self {
            earned: true,
            earned_at: Some(earned_at.to_string()),
            ..Self::unearned(def)
        }
    }
}

/// Fresh badge list for a new user: every catalog badge, none earned.
pub fn catalog_badges() -> Vec<Badge> {
    CATALOG.iter().map(Badge::unearned).collect()
}

/// Rebuild a badge list so it holds exactly one entry per catalog
/// definition, in catalog order.
///
/// The first entry found for each catalog id wins; entries whose id is not
/// in the catalog are dropped and missing ones are filled in unearned.
pub fn reconcile(badges: &[Badge]) -> Vec<Badge> {
    CATALOG
        .iter()
        .map(|def| {
            badges
                .iter()
                .find(|b| b.id == def.id)
                .cloned()
                .unwrap_or_else(|| Badge::unearned(def))
        })
        .collect()
}

/// Number of earned badges in a list.
pub fn earned_count(badges: &[Badge]) -> usize {
    badges.iter().filter(|b| b.earned).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_badges_cover_catalog_in_order() {
        let badges = catalog_badges();
        let ids: Vec<&str> = badges.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "eco-warrior",
                "trendsetter",
                "green-pioneer",
                "community-builder",
                "water-saver"
            ]
        );
        assert!(badges.iter().all(|b| !b.earned && b.earned_at.is_none()));
    }

    #[test]
    fn test_reconcile_drops_duplicates_and_fills_gaps() {
        let messy = vec![
            Badge::earned(&CATALOG[0], "2024-01-10"),
            Badge::earned(&CATALOG[2], "2024-01-15"),
            Badge::unearned(&CATALOG[2]),
            Badge::unearned(&CATALOG[4]),
        ];

        let fixed = reconcile(&messy);

        assert_eq!(fixed.len(), CATALOG.len());
        assert_eq!(fixed[1], Badge::unearned(&CATALOG[1]));
        assert!(fixed[2].earned);
        assert_eq!(fixed[2].earned_at.as_deref(), Some("2024-01-15"));
        assert_eq!(earned_count(&fixed), 2);
    }

    #[test]
    fn test_earned_at_omitted_when_unset() {
        let json = serde_json::to_value(Badge::unearned(&CATALOG[0])).unwrap();
        assert!(json.get("earnedAt").is_none());

        let json = serde_json::to_value(Badge::earned(&CATALOG[0], "2024-01-10")).unwrap();
        assert_eq!(json["earnedAt"], "2024-01-10");
    }
}
