// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Admin panel: access gate, moderation actions and simulated moderation.

use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::db::fixtures;
use crate::error::{AppError, Result};
use crate::routes::{Navigator, Route};
use crate::services::clock::Clock;
use crate::services::session::SessionStore;

/// Default simulated latency for a moderation action.
pub const DEFAULT_ADMIN_LATENCY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountStatus {
    Active,
    Suspended,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Shipping,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingStatus {
    Active,
    Pending,
    Suspended,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ManagedUser {
    pub id: String,
    pub username: String,
    pub email: String,
    pub status: AccountStatus,
    pub join_date: String,
    pub total_items: u32,
    pub total_swaps: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SwapOrder {
    pub id: String,
    pub user_from: String,
    pub user_to: String,
    pub item: String,
    pub status: OrderStatus,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingRecord {
    pub id: String,
    pub title: String,
    pub user: String,
    pub category: String,
    pub status: ListingStatus,
    pub date: String,
}

/// Which admin tab a record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    User,
    Order,
    Listing,
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TargetKind::User => "user",
            TargetKind::Order => "order",
            TargetKind::Listing => "listing",
        })
    }
}

/// The two action buttons shown for a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Actions {
    pub primary: &'static str,
    pub secondary: &'static str,
}

impl Actions {
    fn new(primary: &'static str, secondary: &'static str) -> Self {
        Self { primary, secondary }
    }

    pub fn contains(&self, action: &str) -> bool {
        self.primary == action || self.secondary == action
    }
}

pub fn user_actions(user: &ManagedUser) -> Actions {
    match user.status {
        AccountStatus::Suspended => Actions::new("Activate", "Delete"),
        AccountStatus::Active => Actions::new("Suspend", "Delete"),
    }
}

pub fn order_actions(order: &SwapOrder) -> Actions {
    match order.status {
        OrderStatus::Pending => Actions::new("Approve", "Reject"),
        OrderStatus::Shipping => Actions::new("Complete", "Cancel"),
        OrderStatus::Completed | OrderStatus::Cancelled => Actions::new("View", "Edit"),
    }
}

pub fn listing_actions(listing: &ListingRecord) -> Actions {
    match listing.status {
        ListingStatus::Suspended => Actions::new("Approve", "Remove"),
        ListingStatus::Active | ListingStatus::Pending => Actions::new("Suspend", "Remove"),
    }
}

/// Confirmation shown after a moderation action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModerationReceipt {
    pub title: String,
    pub description: String,
}

/// Admin panel opened by an admin user.
pub struct AdminPanel {
    clock: Arc<dyn Clock>,
    latency: Duration,
    pub users: Vec<ManagedUser>,
    pub orders: Vec<SwapOrder>,
    pub listings: Vec<ListingRecord>,
}

impl std::fmt::Debug for AdminPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminPanel")
            .field("latency", &self.latency)
            .field("users", &self.users.len())
            .field("orders", &self.orders.len())
            .field("listings", &self.listings.len())
            .finish()
    }
}

impl AdminPanel {
    /// Open the panel. Non-admins, including anonymous users, are sent home
    /// and get [`AppError::Forbidden`].
    pub fn open(session: &SessionStore, nav: &dyn Navigator, clock: Arc<dyn Clock>) -> Result<Self> {
        match session.current_user() {
            Some(user) if user.is_admin => Ok(Self {
                clock,
                latency: DEFAULT_ADMIN_LATENCY,
                users: fixtures::managed_users(),
                orders: fixtures::swap_orders(),
                listings: fixtures::listing_records(),
            }),
            _ => {
                nav.navigate(Route::Home);
                Err(AppError::Forbidden)
            }
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    fn actions_for(&self, kind: TargetKind, id: &str) -> Option<Actions> {
        match kind {
            TargetKind::User => self.users.iter().find(|u| u.id == id).map(user_actions),
            TargetKind::Order => self.orders.iter().find(|o| o.id == id).map(order_actions),
            TargetKind::Listing => self
                .listings
                .iter()
                .find(|l| l.id == id)
                .map(listing_actions),
        }
    }

    /// Carry out a moderation action after the simulated round trip.
    ///
    /// The action must be one of the buttons offered for the record.
    pub async fn perform(&self, kind: TargetKind, id: &str, action: &str) -> Result<ModerationReceipt> {
        let actions = self
            .actions_for(kind, id)
            .ok_or_else(|| AppError::NotFound(format!("{kind} {id} not found")))?;
        if !actions.contains(action) {
            return Err(AppError::BadRequest(format!(
                "{action} is not available for {kind} {id}"
            )));
        }

        self.clock.sleep(self.latency).await;

        tracing::info!(kind = %kind, id, action, "Moderation action applied");
        let verb = action.to_lowercase();
        Ok(ModerationReceipt {
            title: format!("{kind} {verb}"),
            description: format!("{kind} has been {verb} successfully."),
        })
    }
}
