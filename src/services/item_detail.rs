// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Item detail page: swap and redeem eligibility, redemption, image carousel.

use serde::Serialize;
use std::sync::Arc;

use crate::db::ItemCatalog;
use crate::error::{AppError, Result};
use crate::models::{Item, ItemStatus, User, UserUpdate};
use crate::routes::{Navigator, Route};
use crate::services::session::SessionStore;
use crate::services::try_on::{overlay_placement, Garment, Placement};

/// Points needed to redeem an item.
pub const REDEEM_COST: u32 = 50;

/// What the current user may do with an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Eligibility {
    pub is_owner: bool,
    pub can_swap: bool,
    pub can_redeem: bool,
}

pub fn eligibility(user: Option<&User>, item: &Item) -> Eligibility {
    let Some(user) = user else {
        return Eligibility {
            is_owner: false,
            can_swap: false,
            can_redeem: false,
        };
    };

    let is_owner = item.is_owned_by(&user.id);
    let can_swap = !is_owner && item.status == ItemStatus::Available;
    Eligibility {
        is_owner,
        can_swap,
        can_redeem: can_swap && user.points >= REDEEM_COST,
    }
}

/// Result of trying to redeem an item with points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedeemOutcome {
    /// No user; the view was sent to the login page
    LoginRequired,
    /// Owner's own item, or the item is no longer available
    NotAllowed,
    InsufficientPoints { needed: u32, available: u32 },
    Redeemed { remaining_points: u32 },
}

/// Result of asking to swap for an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapRequestOutcome {
    LoginRequired,
    NotAllowed,
    /// The swap dialog is open
    DialogOpened,
}

/// Redeem `item_id` for [`REDEEM_COST`] points.
///
/// Points are deducted through the session's user update and the item is
/// marked redeemed. No ledger consistency is guaranteed.
pub fn redeem_with_points(
    session: &SessionStore,
    catalog: &dyn ItemCatalog,
    nav: &dyn Navigator,
    item_id: &str,
) -> Result<RedeemOutcome> {
    let item = catalog
        .get(item_id)
        .ok_or_else(|| AppError::NotFound(format!("Item {item_id} not found")))?;

    let Some(user) = session.current_user() else {
        nav.navigate(Route::Login);
        return Ok(RedeemOutcome::LoginRequired);
    };

    if !eligibility(Some(&user), &item).can_swap {
        return Ok(RedeemOutcome::NotAllowed);
    }

    if user.points < REDEEM_COST {
        return Ok(RedeemOutcome::InsufficientPoints {
            needed: REDEEM_COST,
            available: user.points,
        });
    }

    let remaining_points = user.points - REDEEM_COST;
    session.update_user(UserUpdate::points(remaining_points));
    catalog.set_status(item_id, ItemStatus::Redeemed);

    tracing::info!(
        user_id = %user.id,
        item_id,
        remaining_points,
        "Item redeemed with points"
    );
    Ok(RedeemOutcome::Redeemed { remaining_points })
}

/// Per-visit state of the item detail page.
pub struct ItemDetailView {
    item: Item,
    image_index: usize,
    liked: bool,
    swap_dialog_open: bool,
}

impl ItemDetailView {
    /// Load the view for `item_id`.
    pub fn open(catalog: &Arc<dyn ItemCatalog>, item_id: &str) -> Result<Self> {
        let item = catalog
            .get(item_id)
            .ok_or_else(|| AppError::NotFound(format!("Item {item_id} not found")))?;
        Ok(Self {
            item,
            image_index: 0,
            liked: false,
            swap_dialog_open: false,
        })
    }

    pub fn item(&self) -> &Item {
        &self.item
    }

    pub fn current_image(&self) -> Option<&str> {
        self.item.images.get(self.image_index).map(String::as_str)
    }

    /// Advance the carousel, wrapping to the first image.
    pub fn next_image(&mut self) {
        let count = self.item.images.len();
        if count > 0 {
            self.image_index = (self.image_index + 1) % count;
        }
    }

    /// Step back in the carousel, wrapping to the last image.
    pub fn prev_image(&mut self) {
        let count = self.item.images.len();
        if count > 0 {
            self.image_index = (self.image_index + count - 1) % count;
        }
    }

    /// Where the try-on preview draws this item.
    pub fn try_on_placement(&self) -> Placement {
        overlay_placement(Garment::from_category(&self.item.category))
    }

    pub fn is_liked(&self) -> bool {
        self.liked
    }

    pub fn swap_dialog_open(&self) -> bool {
        self.swap_dialog_open
    }

    /// Toggle the heart; anonymous users go to the login page instead.
    pub fn toggle_like(&mut self, session: &SessionStore, nav: &dyn Navigator) -> bool {
        if session.current_user().is_none() {
            nav.navigate(Route::Login);
            return false;
        }
        self.liked = !self.liked;
        self.liked
    }

    pub fn request_swap(&mut self, session: &SessionStore, nav: &dyn Navigator) -> SwapRequestOutcome {
        let user = session.current_user();
        if user.is_none() {
            nav.navigate(Route::Login);
            return SwapRequestOutcome::LoginRequired;
        }
        if !eligibility(user.as_ref(), &self.item).can_swap {
            return SwapRequestOutcome::NotAllowed;
        }
        self.swap_dialog_open = true;
        SwapRequestOutcome::DialogOpened
    }
}
