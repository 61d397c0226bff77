// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! ReWear application entry point.
//!
//! Builds the application state over file-backed client storage, restores
//! any saved session and reports what the landing views would render.

use anyhow::Context;
use rewear::{
    config::Config,
    db::FileStorage,
    routes::{self, HistoryNavigator, Navigator, Route},
    services::{browse::ItemFilter, dashboard, login, LoginForm, SystemClock},
    AppState,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging()?;

    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(storage_dir = %config.storage_dir.display(), "Starting ReWear");

    let storage = FileStorage::open(&config.storage_dir)
        .with_context(|| format!("Failed to open storage at {}", config.storage_dir.display()))?;

    let navigator = Arc::new(HistoryNavigator::new(Route::Home));
    let state = AppState::new(
        config,
        Arc::new(storage),
        Arc::new(SystemClock),
        navigator.clone(),
    );

    // Demo credentials log in when no session was restored
    if state.session.current_user().is_none() {
        if let (Ok(email), Ok(password)) = (
            std::env::var("REWEAR_DEMO_EMAIL"),
            std::env::var("REWEAR_DEMO_PASSWORD"),
        ) {
            let form = LoginForm::new(email, password);
            let outcome = login::submit(&state.session, navigator.as_ref(), &form).await;
            if let Some(message) = outcome.error_message() {
                tracing::warn!(email = %form.email, message, "Demo login failed");
            }
        }
    }

    let bar = routes::nav_bar(&state.session.snapshot(), navigator.as_ref());
    tracing::info!(
        links = bar.links.len(),
        unread = bar.unread.unwrap_or(0),
        "Navigation ready"
    );

    let items = state.catalog.list();
    let visible = ItemFilter::default().apply(&items).len();
    tracing::info!(items = visible, "Browse ready");

    if let Some(summary) = dashboard::summarize(
        &state.session,
        &dashboard::DashboardData::default(),
        navigator.as_ref(),
    ) {
        tracing::info!(
            user = %summary.username,
            points = summary.points,
            eco_score = summary.eco_score,
            badges = summary.badges_earned,
            "Dashboard ready"
        );
    }

    tracing::info!(path = %navigator.current_path(), "Current route");
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() -> anyhow::Result<()> {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("rewear=debug".parse()?)
                .add_directive("info".parse()?),
        )
        .with(format)
        .init();
    Ok(())
}
