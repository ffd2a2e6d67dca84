//! Cache Store Module
//!
//! Main cache engine: a HashMap of expiring entries behind a single
//! reader/writer lock, with lazy eviction on lookup.

use std::collections::HashMap;
use std::time::Duration;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use tracing::{debug, trace};

use crate::cache::{CacheEntry, Clock, Expiration, SystemClock};
use crate::config::CacheConfig;
use crate::error::{CacheError, Result};

// == Cache ==
/// Thread-safe key/value cache with per-entry expiration.
///
/// Share it between threads behind an `Arc`. Lookups hand out clones of the
/// stored value, so store `Arc<T>` when values are large or must be shared.
///
/// # Example
/// ```
/// use std::time::Duration;
/// use expiring_cache::{Cache, Expiration};
///
/// let cache: Cache<String> = Cache::new(Duration::from_secs(60));
/// cache.add("greeting", "hello".to_string(), Expiration::Never).unwrap();
/// assert_eq!(cache.get("greeting").unwrap(), "hello");
/// ```
#[derive(Debug)]
pub struct Cache<V, C = SystemClock> {
    /// Key-value storage
    entries: RwLock<HashMap<String, CacheEntry<V>>>,
    /// TTL applied to inserts that ask for `Expiration::Default`
    default_ttl: Duration,
    /// Time source for stamping and checking entries
    clock: C,
}

impl<V> Cache<V, SystemClock> {
    // == Constructor ==
    /// Creates an empty cache using the wall clock.
    ///
    /// # Arguments
    /// * `default_ttl` - TTL for entries inserted with `Expiration::Default`
    pub fn new(default_ttl: Duration) -> Self {
        Self::with_clock(default_ttl, SystemClock)
    }

    /// Creates an empty cache with the default TTL from `config`.
    pub fn from_config(config: &CacheConfig) -> Self {
        Self::new(config.default_ttl_duration())
    }
}

impl<V, C: Clock> Cache<V, C> {
    /// Creates an empty cache reading time from `clock`.
    pub fn with_clock(default_ttl: Duration, clock: C) -> Self {
        debug!("Creating cache with default TTL of {:?}", default_ttl);
        Self {
            entries: RwLock::new(HashMap::new()),
            default_ttl,
            clock,
        }
    }

    // == Add ==
    /// Inserts `value` under `key` unless a live entry already holds the key.
    ///
    /// A dead entry under the same key is replaced silently.
    ///
    /// # Errors
    /// `KeyAlreadyExists` if the key maps to a live or never-expiring entry;
    /// the stored entry is left untouched.
    pub fn add(
        &self,
        key: impl Into<String>,
        value: V,
        expiration: impl Into<Expiration>,
    ) -> Result<()> {
        let key = key.into();
        let mut entries = self.entries.write();
        let now = self.clock.now();

        if let Some(existing) = entries.get(&key) {
            if !existing.is_expired_at(now) {
                debug!("Add rejected, key already exists: {}", key);
                return Err(CacheError::KeyAlreadyExists(key));
            }
            trace!("Reusing expired key: {}", key);
        }

        let entry = self.new_entry(value, expiration.into(), now);
        entries.insert(key, entry);
        Ok(())
    }

    // == Must Add ==
    /// Inserts `value` under `key`, overwriting whatever was there.
    pub fn must_add(&self, key: impl Into<String>, value: V, expiration: impl Into<Expiration>) {
        let key = key.into();
        let mut entries = self.entries.write();
        let entry = self.new_entry(value, expiration.into(), self.clock.now());
        if entries.insert(key, entry).is_some() {
            trace!("Overwrote existing entry");
        }
    }

    // == Get ==
    /// Retrieves a clone of the value stored under `key`.
    ///
    /// # Errors
    /// `KeyNotFound` if the key is absent or its entry has expired. An expired
    /// entry is evicted before returning.
    pub fn get(&self, key: &str) -> Result<V>
    where
        V: Clone,
    {
        self.lookup(key, |entry| entry.value.clone())
    }

    // == Get With Expiration ==
    /// Retrieves the value under `key` together with its expiration instant.
    ///
    /// The instant is `None` for never-expiring entries.
    ///
    /// # Errors
    /// Same as [`Cache::get`].
    pub fn get_with_expiration(&self, key: &str) -> Result<(V, Option<DateTime<Utc>>)>
    where
        V: Clone,
    {
        self.lookup(key, |entry| (entry.value.clone(), entry.expires_at))
    }

    // == Delete ==
    /// Removes `key` if present. Absent keys are a no-op.
    pub fn delete(&self, key: &str) {
        if self.entries.write().remove(key).is_some() {
            debug!("Deleted key: {}", key);
        }
    }

    // == Length ==
    /// Returns the number of entries held, counting expired entries that no
    /// lookup has evicted yet.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    // == Is Empty ==
    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// TTL applied to inserts that request the default expiration.
    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }

    fn new_entry(&self, value: V, expiration: Expiration, now: DateTime<Utc>) -> CacheEntry<V> {
        CacheEntry::new(value, now, expiration.resolve(self.default_ttl))
    }

    /// Reads a live entry under the shared lock; a dead one is handed to
    /// `evict_expired` once the shared guard is released.
    fn lookup<T>(&self, key: &str, read: impl FnOnce(&CacheEntry<V>) -> T) -> Result<T> {
        let observed_at = {
            let entries = self.entries.read();
            let now = self.clock.now();
            match entries.get(key) {
                None => return Err(CacheError::KeyNotFound(key.to_string())),
                Some(entry) if !entry.is_expired_at(now) => return Ok(read(entry)),
                Some(_) => now,
            }
        };

        self.evict_expired(key, observed_at);
        Err(CacheError::KeyNotFound(key.to_string()))
    }

    /// Removes `key` if it is still dead under the exclusive lock.
    ///
    /// Another thread may have replaced the entry between the shared read and
    /// this point; a live replacement must survive. The check uses the later
    /// of `observed_at` and the current time, so a clock stepping backwards
    /// cannot revive the entry the lookup already reported as dead.
    fn evict_expired(&self, key: &str, observed_at: DateTime<Utc>) {
        let mut entries = self.entries.write();
        let now = self.clock.now().max(observed_at);
        if entries.get(key).is_some_and(|entry| entry.is_expired_at(now)) {
            entries.remove(key);
            debug!("Evicted expired key: {}", key);
        } else {
            trace!("Expired key already replaced or removed: {}", key);
        }
    }
}
