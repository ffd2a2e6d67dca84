//! Error types for the cache and codec
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Errors returned by cache operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Key is absent, or was found dead and evicted by the lookup
    #[error("key not found: {0}")]
    KeyNotFound(String),

    /// Insert-if-absent hit a live or never-expiring entry
    #[error("key already exists: {0}")]
    KeyAlreadyExists(String),

    /// Reserved for telling "existed but dead" apart from "never existed".
    /// No cache operation returns it; lookups report both as `KeyNotFound`.
    #[error("key already expired: {0}")]
    KeyAlreadyExpired(String),
}

// == Codec Error Enum ==
/// Errors returned by the value codec.
#[derive(Error, Debug)]
pub enum CodecError {
    /// The value could not be serialized
    #[error("failed to encode value: {0}")]
    Encode(#[source] serde_json::Error),

    /// The bytes are malformed or do not describe the requested type
    #[error("failed to decode value: {0}")]
    Decode(#[source] serde_json::Error),
}

// == Result Type Alias ==
/// Convenience Result type for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;
