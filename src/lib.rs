//! Expiring Cache - A thread-safe in-process key/value store
//!
//! Entries carry their own expiration and are evicted lazily by the lookups
//! that discover them dead. A serde-backed codec is provided for callers that
//! want to store arbitrary values as bytes.

pub mod cache;
pub mod codec;
pub mod config;
pub mod error;

pub use cache::{Cache, Clock, Expiration, ManualClock, SystemClock};
pub use codec::{decode, encode, Codec, JsonCodec};
pub use config::CacheConfig;
pub use error::{CacheError, CodecError, Result};
