//! Read-through cache for directory lookups.

use dashmap::DashMap;
use serde_json::Value;

use crate::error::DirectoryError;

/// Process-wide cache of directory records, keyed by external id.
///
/// Entries live for the process lifetime: no TTL, no eviction. The map is
/// concurrent, but population is eventual rather than exactly-once — two
/// simultaneous misses for one key both fetch and the last writer wins,
/// which wastes a lookup without corrupting anything.
#[derive(Debug, Default)]
pub struct DirectoryCache {
    entries: DashMap<String, Value>,
}

impl DirectoryCache {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Return the cached record for `key`, or run `fetch`, store its result
    /// and return it.
    ///
    /// The boolean tells the caller whether the record came from memory
    /// (`true`) or from a fresh fetch (`false`). A failed fetch caches
    /// nothing, so the next call for the same key fetches again.
    pub async fn get_or_fetch<F, Fut>(
        &self,
        key: &str,
        fetch: F,
    ) -> Result<(Value, bool), DirectoryError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Value, DirectoryError>>,
    {
        if let Some(entry) = self.entries.get(key) {
            return Ok((entry.clone(), true));
        }

        let record = fetch().await?;
        self.entries.insert(key.to_string(), record.clone());
        Ok((record, false))
    }

    /// Number of cached records.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
