// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Durable client storage implementations.

use dashmap::DashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::SessionStorage;

/// Storage held in memory; the default for tests.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: DashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a key is currently set.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).map(|v| v.value().clone())
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.remove(key);
    }
}

/// Storage backed by one file per key inside a directory.
///
/// I/O failures are logged and otherwise ignored: a failed read looks like
/// a missing key and a failed write leaves the previous value in place.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Use `dir` for storage, creating it if needed.
    pub fn open<P: AsRef<Path>>(dir: P) -> std::io::Result<Self> {
        fs::create_dir_all(dir.as_ref())?;
        Ok(Self {
            dir: dir.as_ref().to_path_buf(),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl SessionStorage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Some(value),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!(key, error = %e, "Failed to read storage entry");
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) {
        // Readers never see a half-written value
        let path = self.path_for(key);
        let tmp = path.with_extension("tmp");
        let result = fs::write(&tmp, value).and_then(|_| fs::rename(&tmp, &path));
        if let Err(e) = result {
            tracing::warn!(key, error = %e, "Failed to write storage entry");
        }
    }

    fn remove(&self, key: &str) {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => tracing::warn!(key, error = %e, "Failed to remove storage entry"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "rewear-storage-{}-{}-{}",
            name,
            std::process::id(),
            chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default()
        ))
    }

    #[test]
    fn test_memory_storage_set_get_remove() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("k"), None);

        storage.set("k", "v1");
        storage.set("k", "v2");
        assert_eq!(storage.get("k").as_deref(), Some("v2"));

        storage.remove("k");
        assert!(!storage.contains("k"));
        // Removing again is a no-op
        storage.remove("k");
    }

    #[test]
    fn test_file_storage_persists_across_instances() {
        let dir = temp_dir("persist");
        let storage = FileStorage::open(&dir).unwrap();
        storage.set("rewear_token", "abc");

        let reopened = FileStorage::open(&dir).unwrap();
        assert_eq!(reopened.get("rewear_token").as_deref(), Some("abc"));

        reopened.remove("rewear_token");
        assert_eq!(storage.get("rewear_token"), None);
        reopened.remove("rewear_token");

        let _ = fs::remove_dir_all(dir);
    }
}
