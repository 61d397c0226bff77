// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! ReWear: peer-to-peer clothing exchange.
//!
//! This crate holds the client-side core of the application: the session
//! store, the mock backend it talks to, and the state behind the browse,
//! listing, item detail, dashboard and admin views.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use db::{InMemoryItemCatalog, ItemCatalog, MockBackend, NotificationFeed, SessionStorage};
use routes::Navigator;
use error::Result;
use services::{AdminPanel, Clock, ListingService, SessionStore};
use std::sync::Arc;

/// Shared application state, built once at startup and handed to views.
pub struct AppState {
    pub config: Config,
    pub clock: Arc<dyn Clock>,
    pub session: Arc<SessionStore>,
    pub catalog: Arc<dyn ItemCatalog>,
    pub listing_service: ListingService,
    pub navigator: Arc<dyn Navigator>,
}

impl AppState {
    /// Wire the seeded mock backend to the given storage, clock and
    /// navigator, and hydrate the session.
    pub fn new(
        config: Config,
        storage: Arc<dyn SessionStorage>,
        clock: Arc<dyn Clock>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        let backend = Arc::new(MockBackend::seeded());
        let session = SessionStore::new(
            backend.clone(),
            storage,
            clock.clone(),
            config.token_signing_key.clone(),
        )
        .configured(&config)
            .with_notifications(backend.inbox());
        session.hydrate();

        let catalog: Arc<dyn ItemCatalog> = Arc::new(InMemoryItemCatalog::seeded());
        let listing_service = ListingService::new(catalog.clone(), clock.clone())
            .with_latency(config.submit_latency());

        Self {
            config,
            clock,
            session: Arc::new(session),
            catalog,
            listing_service,
            navigator,
        }
    }

    /// Open the admin panel for the current user with the configured
    /// moderation latency.
    pub fn admin_panel(&self) -> Result<AdminPanel> {
        AdminPanel::open(&self.session, self.navigator.as_ref(), self.clock.clone())
            .map(|panel| panel.with_latency(self.config.admin_latency()))
    }
}
