//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with expiration support.

use std::time::Duration;

use chrono::{DateTime, Utc};

// == Cache Entry ==
/// A stored value and the instant it dies at.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Absolute expiration time, None = never expires
    pub expires_at: Option<DateTime<Utc>>,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates an entry inserted at `now`.
    ///
    /// # Arguments
    /// * `value` - The value to store
    /// * `now` - Insertion time
    /// * `ttl` - Time to live, None = never expires
    ///
    /// A TTL too large to represent as a timestamp yields a never-expiring entry.
    pub fn new(value: V, now: DateTime<Utc>, ttl: Option<Duration>) -> Self {
        let expires_at = ttl.and_then(|ttl| {
            chrono::Duration::from_std(ttl)
                .ok()
                .and_then(|delta| now.checked_add_signed(delta))
        });

        Self { value, expires_at }
    }

    /// Returns true if the entry has no expiration.
    pub fn never_expires(&self) -> bool {
        self.expires_at.is_none()
    }

    // == Is Expired ==
    /// Checks whether the entry is dead at `now`.
    ///
    /// An entry stays live up to and including its expiration instant and is
    /// dead from the first instant strictly after it.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        match self.expires_at {
            Some(expires) => now > expires,
            None => false,
        }
    }
}
