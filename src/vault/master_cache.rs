//! Opt-in, time-bounded master password cache.
//!
//! Replaces the ambient "remember master password" global from the original
//! dashboard with an explicit holder: the caller decides when to remember,
//! reads expire after the configured TTL, and logout calls [`clear`].
//!
//! [`clear`]: MasterPasswordCache::clear

use std::time::{Duration, Instant};

use secrecy::{ExposeSecret, SecretString};

/// Default cache lifetime: 15 minutes.
const DEFAULT_TTL: Duration = Duration::from_secs(15 * 60);

/// A single-slot cache holding the master password for a bounded time.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use okx_vault_client::vault::MasterPasswordCache;
///
/// let mut cache = MasterPasswordCache::new(Duration::from_secs(300));
/// cache.remember("hunter2");
/// assert_eq!(cache.get(), Some("hunter2"));
///
/// cache.clear();
/// assert_eq!(cache.get(), None);
/// ```
pub struct MasterPasswordCache {
    entry: Option<(SecretString, Instant)>,
    ttl: Duration,
}

impl MasterPasswordCache {
    /// Create a cache with the given time-to-live.
    pub fn new(ttl: Duration) -> Self {
        Self { entry: None, ttl }
    }

    /// Remember a master password, replacing any previous entry and
    /// restarting the TTL window.
    pub fn remember(&mut self, master_password: impl Into<String>) {
        self.entry = Some((SecretString::from(master_password.into()), Instant::now()));
    }

    /// Get the cached master password if it exists and hasn't expired.
    pub fn get(&self) -> Option<&str> {
        self.entry.as_ref().and_then(|(password, stored_at)| {
            if stored_at.elapsed() < self.ttl {
                Some(password.expose_secret())
            } else {
                None
            }
        })
    }

    /// Check whether a non-expired password is cached.
    pub fn is_remembered(&self) -> bool {
        self.get().is_some()
    }

    /// Drop the cached password immediately (logout semantics).
    pub fn clear(&mut self) {
        self.entry = None;
    }

    /// Get the TTL duration for this cache.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

impl Default for MasterPasswordCache {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

impl std::fmt::Debug for MasterPasswordCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MasterPasswordCache")
            .field("remembered", &self.entry.is_some())
            .field("ttl", &self.ttl)
            .finish()
    }
}
