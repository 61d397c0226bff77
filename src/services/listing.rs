// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Add-item submission.

use std::sync::Arc;
use std::time::Duration;
use validator::Validate;

use crate::db::ItemCatalog;
use crate::error::{AppError, Result};
use crate::models::{Item, ItemStatus, NewItem, Uploader};
use crate::routes::{Navigator, Route};
use crate::services::clock::Clock;
use crate::services::session::SessionStore;
use crate::time_utils::format_date;

/// Default simulated latency for an item submission.
pub const DEFAULT_SUBMIT_LATENCY: Duration = Duration::from_millis(2000);

/// Submits new listings for admin review.
pub struct ListingService {
    catalog: Arc<dyn ItemCatalog>,
    clock: Arc<dyn Clock>,
    latency: Duration,
}

impl ListingService {
    pub fn new(catalog: Arc<dyn ItemCatalog>, clock: Arc<dyn Clock>) -> Self {
        Self {
            catalog,
            clock,
            latency: DEFAULT_SUBMIT_LATENCY,
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Validate and submit a listing on behalf of the logged-in user.
    ///
    /// Anonymous callers are sent to the login page. Invalid forms come back
    /// as [`AppError::Validation`] without any delay. A successful submission
    /// is stored as pending and the view moves to the dashboard.
    pub async fn submit(
        &self,
        session: &SessionStore,
        nav: &dyn Navigator,
        form: NewItem,
    ) -> Result<Item> {
        let Some(user) = session.current_user() else {
            nav.navigate(Route::Login);
            return Err(AppError::Unauthorized);
        };

        form.validate()?;

        self.clock.sleep(self.latency).await;

        let tags = form.normalized_tags();
        let item = self.catalog.add(Item {
            id: String::new(),
            title: form.title.trim().to_string(),
            description: form.description.trim().to_string(),
            category: form.category,
            item_type: form.item_type,
            size: form.size,
            condition: form.condition,
            tags,
            images: form.images,
            uploader: Uploader {
                id: Some(user.id.clone()),
                username: user.username.clone(),
                join_date: user.join_date.clone(),
                rating: 0.0,
            },
            status: ItemStatus::Pending,
            liked_by: Vec::new(),
            created_at: format_date(self.clock.now()),
        });

        tracing::info!(
            user_id = %user.id,
            item_id = %item.id,
            "Item submitted for review"
        );
        nav.navigate(Route::Dashboard);
        Ok(item)
    }
}
