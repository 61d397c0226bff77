// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Scoped access to the session store for code that cannot take it as a
//! parameter.

use std::future::Future;
use std::sync::Arc;

use crate::services::session::SessionStore;

tokio::task_local! {
    static CURRENT_SESSION: Arc<SessionStore>;
}

/// Run `f` with `store` available through [`current_session`].
pub async fn with_session<F>(store: Arc<SessionStore>, f: F) -> F::Output
where
    F: Future,
{
    CURRENT_SESSION.scope(store, f).await
}

/// The store of the enclosing [`with_session`] scope.
///
/// # Panics
///
/// Panics when called outside a `with_session` scope. That is a wiring
/// bug, not a runtime condition.
pub fn current_session() -> Arc<SessionStore> {
    CURRENT_SESSION
        .try_with(Arc::clone)
        .unwrap_or_else(|_| panic!("current_session must be called within a with_session scope"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::db::{MemoryStorage, MockBackend};
    use crate::services::clock::ManualClock;

    fn make_store() -> Arc<SessionStore> {
        Arc::new(SessionStore::new(
            Arc::new(MockBackend::seeded()),
            Arc::new(MemoryStorage::new()),
            Arc::new(ManualClock::default()),
            Config::test_default().token_signing_key,
        ))
    }

    #[tokio::test]
    async fn test_current_session_inside_scope() {
        let store = make_store();

        let same = with_session(store.clone(), async {
            let session = current_session();
            session.login("user@example.com", "password123").await
        })
        .await;

        assert!(same);
        assert_eq!(store.current_user().unwrap().username, "EcoFashionista");
    }

    #[test]
    #[should_panic(expected = "current_session must be called within a with_session scope")]
    fn test_current_session_outside_scope_panics() {
        let _ = current_session();
    }
}
