// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory backend standing in for a real user table, inbox and catalog.
//!
//! Process-local and not meant to be shared between independent clients.

use dashmap::DashMap;
use std::sync::RwLock;

use super::{fixtures, ItemCatalog, NotificationFeed, UserRepository};
use crate::models::{Item, ItemStatus, Notification, User, UserRecord};

/// Mock user table and notification inbox.
pub struct MockBackend {
    /// Records keyed by exact email
    users: DashMap<String, UserRecord>,
    notifications: Vec<Notification>,
}

impl MockBackend {
    /// Empty backend with no users and no notifications.
    pub fn empty() -> Self {
        Self {
            users: DashMap::new(),
            notifications: Vec::new(),
        }
    }

    /// Backend pre-loaded with the demo accounts and inbox.
    pub fn seeded() -> Self {
        let backend = Self {
            users: DashMap::new(),
            notifications: fixtures::notifications(),
        };
        for record in fixtures::user_records() {
            backend.insert(record);
        }
        backend
    }

    /// Replace the inbox handed to new sessions.
    pub fn with_notifications(mut self, notifications: Vec<Notification>) -> Self {
        self.notifications = notifications;
        self
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::seeded()
    }
}

impl UserRepository for MockBackend {
    fn find_by_credentials(&self, email: &str, password: &str) -> Option<User> {
        self.users
            .get(email)
            .filter(|record| record.matches(email, password))
            .map(|record| record.value().clone().into_user())
    }

    fn email_exists(&self, email: &str) -> bool {
        self.users.contains_key(email)
    }

    fn insert(&self, record: UserRecord) -> bool {
        use dashmap::mapref::entry::Entry;

        match self.users.entry(record.user.email.clone()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(record);
                true
            }
        }
    }

    fn len(&self) -> usize {
        self.users.len()
    }
}

impl NotificationFeed for MockBackend {
    fn inbox(&self) -> Vec<Notification> {
        self.notifications.clone()
    }
}

/// In-memory listing catalog.
pub struct InMemoryItemCatalog {
    items: RwLock<Vec<Item>>,
}

impl InMemoryItemCatalog {
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items: RwLock::new(items),
        }
    }

    /// Catalog pre-loaded with the browse fixtures.
    pub fn seeded() -> Self {
        Self::new(fixtures::items())
    }
}

impl Default for InMemoryItemCatalog {
    fn default() -> Self {
        Self::seeded()
    }
}

impl ItemCatalog for InMemoryItemCatalog {
    fn list(&self) -> Vec<Item> {
        self.items.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn get(&self, id: &str) -> Option<Item> {
        self.items
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .find(|item| item.id == id)
            .cloned()
    }

    fn add(&self, mut item: Item) -> Item {
        let mut items = self.items.write().unwrap_or_else(|e| e.into_inner());
        let next_id = items
            .iter()
            .filter_map(|i| i.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0)
            + 1;
        item.id = next_id.to_string();
        items.push(item.clone());
        item
    }

    fn set_status(&self, id: &str, status: ItemStatus) -> bool {
        let mut items = self.items.write().unwrap_or_else(|e| e.into_inner());
        match items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.status = status;
                true
            }
            None => false,
        }
    }
}
