//! Dashboard summary for the logged-in user.

use serde::Serialize;

use crate::db::fixtures;
use crate::models::badge::earned_count;
use crate::models::impact::ImpactProgress;
use crate::models::{ItemStatus, SustainabilityImpact};
use crate::routes::{Navigator, Route};
use crate::services::session::SessionStore;

/// One of the user's own listings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserListing {
    pub id: String,
    pub title: String,
    pub status: ItemStatus,
    pub views: u32,
    pub likes: u32,
    pub created_at: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SwapDirection {
    Incoming,
    Outgoing,
}

/// A swap still awaiting a decision.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActiveSwap {
    pub id: String,
    pub direction: SwapDirection,
    pub item_title: String,
    pub other_user: String,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletedSwap {
    pub id: String,
    pub item_given: String,
    pub item_received: String,
    pub other_user: String,
    pub completed_at: String,
    /// 1-5 stars
    pub rating: u8,
}

/// Listings and swaps shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardData {
    pub listings: Vec<UserListing>,
    pub active_swaps: Vec<ActiveSwap>,
    pub completed_swaps: Vec<CompletedSwap>,
}

impl Default for DashboardData {
    fn default() -> Self {
        Self {
            listings: fixtures::user_listings(),
            active_swaps: fixtures::active_swaps(),
            completed_swaps: fixtures::completed_swaps(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub username: String,
    pub is_admin: bool,
    pub items_listed: usize,
    pub active_swaps: usize,
    pub completed_swaps: usize,
    pub points: u32,
    pub unread_notifications: usize,
    pub badges_earned: usize,
    pub badges_total: usize,
    pub impact: SustainabilityImpact,
    pub progress: ImpactProgress,
    pub eco_score: u64,
}

/// Summarize the dashboard, or send anonymous users to the login page.
pub fn summarize(
    session: &SessionStore,
    data: &DashboardData,
    nav: &dyn Navigator,
) -> Option<DashboardSummary> {
    let state = session.snapshot();
    let Some(user) = state.current_user.as_ref() else {
        nav.navigate(Route::Login);
        return None;
    };

    let impact = user.sustainability_impact.clone();
    Some(DashboardSummary {
        username: user.username.clone(),
        is_admin: user.is_admin,
        items_listed: data.listings.len(),
        active_swaps: data.active_swaps.len(),
        completed_swaps: data.completed_swaps.len(),
        points: user.points,
        unread_notifications: state.unread_count(),
        badges_earned: earned_count(&user.badges),
        badges_total: user.badges.len(),
        progress: impact.progress(),
        eco_score: impact.eco_score(),
        impact,
    })
}
