// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use rewear::config::Config;
use rewear::db::{fixtures, MemoryStorage, MockBackend, SessionStorage};
use rewear::routes::{HistoryNavigator, Route};
use rewear::services::{ManualClock, SessionStore};
use rewear::AppState;
use std::sync::Arc;

/// App state plus the concrete test doubles behind it.
#[allow(dead_code)]
pub struct TestApp {
    pub state: AppState,
    pub storage: Arc<MemoryStorage>,
    pub clock: Arc<ManualClock>,
    pub navigator: Arc<HistoryNavigator>,
}

/// Create a test app over in-memory storage and a manual clock.
#[allow(dead_code)]
pub fn create_test_app() -> TestApp {
    let storage = Arc::new(MemoryStorage::new());
    let clock = Arc::new(ManualClock::default());
    let navigator = Arc::new(HistoryNavigator::new(Route::Home));
    let state = AppState::new(
        Config::test_default(),
        storage.clone(),
        clock.clone(),
        navigator.clone(),
    );
    TestApp {
        state,
        storage,
        clock,
        navigator,
    }
}

/// Create a hydrated session store over the given backend and storage.
#[allow(dead_code)]
pub fn session_over(backend: Arc<MockBackend>, storage: Arc<dyn SessionStorage>) -> SessionStore {
    let config = Config::test_default();
    let store = SessionStore::new(
        backend,
        storage,
        Arc::new(ManualClock::default()),
        config.token_signing_key.clone(),
    )
    .configured(&config)
        .with_notifications(fixtures::notifications());
    store.hydrate();
    store
}

/// Log in as the seeded non-admin user.
#[allow(dead_code)]
pub async fn login_as_user(app: &TestApp) {
    assert!(
        app.state
            .session
            .login("user@example.com", "password123")
            .await
    );
}

/// Log in as the seeded admin.
#[allow(dead_code)]
pub async fn login_as_admin(app: &TestApp) {
    assert!(
        app.state
            .session
            .login("admin@rewear.com", "SecurePass123!")
            .await
    );
}
