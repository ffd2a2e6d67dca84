//! Cache Module
//!
//! Provides a thread-safe in-memory cache with per-entry expiration.
//! Expired entries are never swept in the background; the lookup that finds
//! one dead removes it.

mod clock;
mod entry;
mod expiration;
mod store;


// Re-export public types
pub use clock::{Clock, ManualClock, SystemClock};
pub use entry::CacheEntry;
pub use expiration::{Expiration, DEFAULT_EXPIRATION, NO_EXPIRATION};
pub use store::Cache;
