// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session store: the current user, their notification inbox, and the
//! persisted copy of the session in durable client storage.
//!
//! One store is built at application start and handed to every view that
//! needs it. Views read [`SessionStore::snapshot`] or [`SessionStore::subscribe`]
//! to re-render when the state changes.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{watch, Mutex};

use crate::config::Config;
use crate::db::{keys, SessionStorage, UserRepository};
use crate::error::Result;
use crate::models::badge::catalog_badges;
use crate::models::notification::unread_count;
use crate::models::user::WELCOME_BONUS_POINTS;
use crate::models::{Notification, SustainabilityImpact, User, UserRecord, UserUpdate};
use crate::services::clock::Clock;
use crate::services::token::{create_session_token, verify_session_token, Claims};
use crate::time_utils::format_date;

/// Default simulated network latency for login and signup.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(1000);

/// Observable session state.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub current_user: Option<User>,
    pub notifications: Vec<Notification>,
    /// True while hydrating and during simulated network calls
    pub is_loading: bool,
}

impl SessionState {
    /// Unread notification count, recomputed on every call.
    pub fn unread_count(&self) -> usize {
        unread_count(&self.notifications)
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.is_some()
    }
}

/// Holds the session for the life of the application.
pub struct SessionStore {
    users: Arc<dyn UserRepository>,
    storage: Arc<dyn SessionStorage>,
    clock: Arc<dyn Clock>,
    latency: Duration,
    token_key: Vec<u8>,
    state: watch::Sender<SessionState>,
    /// Serializes the simulated network calls of this store
    in_flight: Mutex<()>,
    /// Calls started but not yet finished, queued ones included
    pending_calls: AtomicUsize,
    hydrated: AtomicBool,
}

impl SessionStore {
    /// Create a store with no user, an empty inbox, and `is_loading` set
    /// until [`hydrate`](Self::hydrate) runs. Session tokens are signed with
    /// `token_key`.
    pub fn new(
        users: Arc<dyn UserRepository>,
        storage: Arc<dyn SessionStorage>,
        clock: Arc<dyn Clock>,
        token_key: Vec<u8>,
    ) -> Self {
        let (state, _) = watch::channel(SessionState {
            current_user: None,
            notifications: Vec::new(),
            is_loading: true,
        });

        Self {
            users,
            storage,
            clock,
            latency: DEFAULT_LATENCY,
            token_key,
            state,
            in_flight: Mutex::new(()),
            pending_calls: AtomicUsize::new(0),
            hydrated: AtomicBool::new(false),
        }
    }

    /// Apply the configured login and signup latency.
    pub fn configured(self, config: &Config) -> Self {
        self.with_latency(config.latency())
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Seed the notification inbox.
    pub fn with_notifications(self, notifications: Vec<Notification>) -> Self {
        self.state.send_modify(|s| s.notifications = notifications);
        self
    }

    // ─── Reads ───────────────────────────────────────────────────

    /// Copy of the current state.
    pub fn snapshot(&self) -> SessionState {
        self.state.borrow().clone()
    }

    /// Receiver that observes every state change.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    pub fn current_user(&self) -> Option<User> {
        self.state.borrow().current_user.clone()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.state.borrow().notifications.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().is_loading
    }

    pub fn unread_count(&self) -> usize {
        self.state.borrow().unread_count()
    }

    /// Claims of the persisted session token, checked against this store's
    /// key and clock. `None` when no token is stored.
    pub fn session_claims(&self) -> Result<Option<Claims>> {
        self.storage
            .get(keys::TOKEN)
            .map(|token| verify_session_token(&token, &self.token_key, self.clock.now()))
            .transpose()
    }

    // ─── Lifecycle ───────────────────────────────────────────────

    /// Restore the session from durable storage.
    ///
    /// A user is restored only when both the token and the serialized user
    /// are present and the user parses. Unparseable user data is discarded
    /// along with the token. Runs once; later calls do nothing.
    pub fn hydrate(&self) {
        if self.hydrated.swap(true, Ordering::SeqCst) {
            return;
        }

        let token = self.storage.get(keys::TOKEN);
        let user_data = self.storage.get(keys::USER);

        let restored = match (token, user_data) {
            (Some(_), Some(data)) => match serde_json::from_str::<User>(&data) {
                Ok(user) => {
                    tracing::debug!(user_id = %user.id, "Restored session from storage");
                    Some(user)
                }
                Err(e) => {
                    tracing::error!(error = %e, "Error parsing stored user data");
                    self.clear_persisted();
                    None
                }
            },
            _ => None,
        };

        self.state.send_modify(|s| {
            if restored.is_some() {
                s.current_user = restored;
            }
            s.is_loading = false;
        });
    }

    /// Log in with an exact email and password match.
    ///
    /// Returns `false` for unknown credentials, leaving the current user as
    /// it was.
    pub async fn login(&self, email: &str, password: &str) -> bool {
        let _loading = LoadingGuard::start(&self.state, &self.pending_calls);
        let _in_flight = self.in_flight.lock().await;

        self.clock.sleep(self.latency).await;

        match self.users.find_by_credentials(email, password) {
            Some(user) => {
                tracing::info!(user_id = %user.id, "User logged in");
                self.establish(user);
                true
            }
            None => {
                tracing::info!(email, "Login rejected: invalid credentials");
                false
            }
        }
    }

    /// Create an account and log into it.
    ///
    /// Returns `false` if the email is already registered; neither the
    /// current user nor the user table changes in that case.
    pub async fn signup(&self, email: &str, password: &str, username: &str) -> bool {
        let _loading = LoadingGuard::start(&self.state, &self.pending_calls);
        let _in_flight = self.in_flight.lock().await;

        self.clock.sleep(self.latency).await;

        if self.users.email_exists(email) {
            tracing::warn!(email, "Signup rejected: email already registered");
            return false;
        }

        let now = self.clock.now();
        let user = User {
            id: now.timestamp_millis().to_string(),
            email: email.to_string(),
            username: username.to_string(),
            points: WELCOME_BONUS_POINTS,
            join_date: format_date(now),
            is_admin: false,
            badges: catalog_badges(),
            sustainability_impact: SustainabilityImpact::default(),
        };

        if !self.users.insert(UserRecord::new(user.clone(), password)) {
            tracing::warn!(email, "Signup rejected: email registered concurrently");
            return false;
        }

        tracing::info!(user_id = %user.id, "User signed up");
        self.establish(user);
        true
    }

    /// Clear the session and its persisted copy.
    pub fn logout(&self) {
        self.state.send_modify(|s| s.current_user = None);
        self.clear_persisted();
        tracing::info!("User logged out");
    }

    /// Shallow-merge `update` into the current user and persist the result.
    ///
    /// Returns `false` (and does nothing) when nobody is logged in. Field
    /// values are not validated here.
    pub fn update_user(&self, update: UserUpdate) -> bool {
        let mut updated = None;
        self.state.send_if_modified(|s| match s.current_user.as_mut() {
            Some(user) => {
                update.apply_to(user);
                updated = Some(user.clone());
                true
            }
            None => false,
        });

        match updated {
            Some(user) => {
                if let Err(e) = self.persist_user(&user) {
                    tracing::error!(user_id = %user.id, error = %e, "Failed to persist user update");
                }
                true
            }
            None => false,
        }
    }

    /// Mark a notification read. Unknown ids and already-read entries are
    /// left alone; order is preserved.
    pub fn mark_notification_as_read(&self, id: &str) {
        self.state.send_if_modified(|s| {
            if !s.notifications.iter().any(|n| n.id == id && !n.read) {
                return false;
            }
            s.notifications = s
                .notifications
                .iter()
                .map(|n| if n.id == id { n.as_read() } else { n.clone() })
                .collect();
            true
        });
    }

    /// Mark every notification read.
    pub fn mark_all_notifications_as_read(&self) {
        self.state.send_if_modified(|s| {
            if s.unread_count() == 0 {
                return false;
            }
            s.notifications = s.notifications.iter().map(Notification::as_read).collect();
            true
        });
    }

    // ─── Persistence ─────────────────────────────────────────────

    fn establish(&self, user: User) {
        if let Err(e) = self.persist_session(&user) {
            tracing::error!(user_id = %user.id, error = %e, "Failed to persist session");
        }
        self.state.send_modify(|s| s.current_user = Some(user));
    }

    fn persist_session(&self, user: &User) -> Result<()> {
        let token = create_session_token(&user.id, &self.token_key, self.clock.now())?;
        self.storage.set(keys::TOKEN, &token);
        self.persist_user(user)
    }

    fn persist_user(&self, user: &User) -> Result<()> {
        let data = serde_json::to_string(user)?;
        self.storage.set(keys::USER, &data);
        Ok(())
    }

    fn clear_persisted(&self) {
        self.storage.remove(keys::TOKEN);
        self.storage.remove(keys::USER);
    }
}

/// Holds `is_loading` set while any call is started and unfinished. The
/// last guard to drop clears it, on every exit path including a dropped
/// future.
struct LoadingGuard<'a> {
    state: &'a watch::Sender<SessionState>,
    pending: &'a AtomicUsize,
}

impl<'a> LoadingGuard<'a> {
    fn start(state: &'a watch::Sender<SessionState>, pending: &'a AtomicUsize) -> Self {
        // Counter changes happen under the state lock
        state.send_modify(|s| {
            pending.fetch_add(1, Ordering::SeqCst);
            s.is_loading = true;
        });
        Self { state, pending }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.state.send_if_modified(|s| {
            if self.pending.fetch_sub(1, Ordering::SeqCst) == 1 {
                s.is_loading = false;
                true
            } else {
                false
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{fixtures, MemoryStorage, MockBackend};
    use crate::services::clock::ManualClock;

    fn store() -> (SessionStore, Arc<MemoryStorage>, Arc<ManualClock>) {
        let storage = Arc::new(MemoryStorage::new());
        let clock = Arc::new(ManualClock::default());
        let store = SessionStore::new(
            Arc::new(MockBackend::seeded()),
            storage.clone(),
            clock.clone(),
            Config::test_default().token_signing_key,
        )
        .with_notifications(fixtures::notifications());
        store.hydrate();
        (store, storage, clock)
    }

    #[test]
    fn test_new_store_is_loading_until_hydrated() {
        let store = SessionStore::new(
            Arc::new(MockBackend::empty()),
            Arc::new(MemoryStorage::new()),
            Arc::new(ManualClock::default()),
            Config::test_default().token_signing_key,
        );
        assert!(store.is_loading());

        store.hydrate();
        assert!(!store.is_loading());
        assert!(store.current_user().is_none());
    }

    #[test]
    fn test_hydrate_runs_once() {
        let (store, storage, _) = store();
        storage.set(keys::TOKEN, "t");
        storage.set(keys::USER, "{not json");

        store.hydrate();

        // Second hydrate is a no-op, so the corrupt entries survive
        assert!(storage.contains(keys::USER));
    }

    #[tokio::test]
    async fn test_login_waits_for_configured_latency() {
        let (store, _, clock) = store();
        let store = store.with_latency(Duration::from_millis(250));

        assert!(store.login("user@example.com", "password123").await);
        assert_eq!(clock.sleeps(), vec![Duration::from_millis(250)]);
        assert!(!store.is_loading());
    }

    #[tokio::test]
    async fn test_subscribers_see_login() {
        let (store, _, _) = store();
        let mut rx = store.subscribe();

        assert!(store.login("user@example.com", "password123").await);

        assert!(rx.has_changed().unwrap());
        assert_eq!(
            rx.borrow_and_update().current_user.as_ref().map(|u| u.id.as_str()),
            Some("2")
        );
    }

    #[tokio::test]
    async fn test_signup_uses_clock_for_id_and_join_date() {
        let (store, _, clock) = store();
        let expected_now = clock.now() + chrono::Duration::milliseconds(1000);

        assert!(store.signup("new@example.com", "pw", "Newbie").await);

        let user = store.current_user().unwrap();
        assert_eq!(user.id, expected_now.timestamp_millis().to_string());
        assert_eq!(user.join_date, "2024-06-01");
    }

    #[test]
    fn test_update_user_without_session_is_noop() {
        let (store, storage, _) = store();
        assert!(!store.update_user(UserUpdate::points(5)));
        assert!(!storage.contains(keys::USER));
    }

    #[test]
    fn test_mark_all_notifications_as_read() {
        let (store, _, _) = store();
        assert_eq!(store.unread_count(), 2);

        store.mark_all_notifications_as_read();

        assert_eq!(store.unread_count(), 0);
        assert_eq!(store.notifications().len(), 2);
    }

    #[tokio::test]
    async fn test_dropped_login_resets_loading() {
        let store = SessionStore::new(
            Arc::new(MockBackend::seeded()),
            Arc::new(MemoryStorage::new()),
            Arc::new(crate::services::clock::SystemClock),
            Config::test_default().token_signing_key,
        )
        .with_latency(Duration::from_millis(50));
        store.hydrate();

        {
            let fut = store.login("user@example.com", "password123");
            futures_util::pin_mut!(fut);
            // Poll once so the login is suspended in its sleep, then drop it
            assert!(futures_util::poll!(&mut fut).is_pending());
            assert!(store.is_loading());
        }

        assert!(!store.is_loading());
    }

    #[tokio::test]
    async fn test_loading_stays_set_while_calls_are_queued() {
        let store = SessionStore::new(
            Arc::new(MockBackend::seeded()),
            Arc::new(MemoryStorage::new()),
            Arc::new(crate::services::clock::SystemClock),
            Config::test_default().token_signing_key,
        )
        .with_latency(Duration::from_millis(20));
        store.hydrate();

        let first = store.login("user@example.com", "password123");
        let second = store.login("admin@rewear.com", "SecurePass123!");
        futures_util::pin_mut!(first, second);

        assert!(futures_util::poll!(&mut first).is_pending());
        // Queued behind the first call
        assert!(futures_util::poll!(&mut second).is_pending());

        assert!((&mut first).await);
        assert!(store.is_loading());

        assert!(second.await);
        assert!(!store.is_loading());
        assert_eq!(store.current_user().unwrap().id, "1");
    }

    #[tokio::test]
    async fn test_session_claims_use_store_clock() {
        let (store, _, clock) = store();
        assert!(store.session_claims().unwrap().is_none());

        assert!(store.login("user@example.com", "password123").await);

        let claims = store.session_claims().unwrap().expect("token stored");
        assert_eq!(claims.sub, "2");
        assert_eq!(claims.iat, clock.now().timestamp());

        clock.advance(Duration::from_secs(31 * 24 * 60 * 60));
        assert!(store.session_claims().is_err());
    }

    #[tokio::test]
    async fn test_tokens_signed_with_given_key() {
        let storage = Arc::new(MemoryStorage::new());
        let clock = Arc::new(ManualClock::default());
        let key = b"deployment_key_not_the_test_key!".to_vec();
        let store = SessionStore::new(
            Arc::new(MockBackend::seeded()),
            storage.clone(),
            clock.clone(),
            key.clone(),
        );
        store.hydrate();

        assert!(store.login("admin@rewear.com", "SecurePass123!").await);

        let token = storage.get(keys::TOKEN).unwrap();
        assert!(verify_session_token(&token, &key, clock.now()).is_ok());
        assert!(
            verify_session_token(&token, &Config::test_default().token_signing_key, clock.now())
                .is_err()
        );
    }
}
