//! Data layer: the mock backend and durable client storage.
//!
//! The session store and views only see the traits defined here.

pub mod fixtures;
pub mod memory;
pub mod storage;

pub use memory::{InMemoryItemCatalog, MockBackend};
pub use storage::{FileStorage, MemoryStorage};

use crate::models::{Item, ItemStatus, Notification, User, UserRecord};

/// Durable client storage key names.
pub mod keys {
    /// Opaque session token
    pub const TOKEN: &str = "rewear_token";
    /// JSON-serialized sanitized user
    pub const USER: &str = "rewear_user";
}

/// The user table of the backend.
pub trait UserRepository: Send + Sync {
    /// Find the user whose email and password both match exactly.
    /// The returned user carries no credential.
    fn find_by_credentials(&self, email: &str, password: &str) -> Option<User>;

    /// Whether any record uses this email.
    fn email_exists(&self, email: &str) -> bool;

    /// Insert a new record. Returns `false`, leaving the table untouched,
    /// if the email is already taken.
    fn insert(&self, record: UserRecord) -> bool;

    /// Number of records in the table.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Source of the notification inbox a session starts with.
pub trait NotificationFeed: Send + Sync {
    fn inbox(&self) -> Vec<Notification>;
}

/// Listings available to browse, detail and add-item views.
pub trait ItemCatalog: Send + Sync {
    /// All listings, in catalog order.
    fn list(&self) -> Vec<Item>;

    fn get(&self, id: &str) -> Option<Item>;

    /// Append a listing and return it with its assigned id.
    fn add(&self, item: Item) -> Item;

    /// Change a listing's status. Returns `false` if the id is unknown.
    fn set_status(&self, id: &str, status: ItemStatus) -> bool;
}

/// String key/value storage that outlives the session (browser local
/// storage in spirit). Reads and writes are treated as always succeeding.
pub trait SessionStorage: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}
