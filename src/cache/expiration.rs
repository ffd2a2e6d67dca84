//! Expiration Policy Module
//!
//! The three forms an insert can request: the cache default, never, or an
//! explicit duration.

use std::time::Duration;

/// How long an inserted entry stays live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Expiration {
    /// Use the cache's configured default TTL
    #[default]
    Default,
    /// The entry never expires on its own
    Never,
    /// The entry expires this long after insertion
    After(Duration),
}

/// Sentinel for "use the cache default".
pub const DEFAULT_EXPIRATION: Expiration = Expiration::Default;

/// Sentinel for "never expire".
pub const NO_EXPIRATION: Expiration = Expiration::Never;

impl Expiration {
    /// Resolves to a concrete TTL, `None` meaning the entry never expires.
    pub fn resolve(self, default_ttl: Duration) -> Option<Duration> {
        match self {
            Expiration::Default => Some(default_ttl),
            Expiration::Never => None,
            Expiration::After(ttl) => Some(ttl),
        }
    }
}

/// A zero duration is the default sentinel; anything else is an explicit TTL.
impl From<Duration> for Expiration {
    fn from(ttl: Duration) -> Self {
        if ttl.is_zero() {
            Expiration::Default
        } else {
            Expiration::After(ttl)
        }
    }
}
