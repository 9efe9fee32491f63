//! Token blacklist service for server-side JWT invalidation.
//!
//! Logout adds the presented token to an in-memory blacklist where it stays
//! until its natural expiration time, so a logged-out token cannot be
//! replayed against protected routes.

use dashmap::DashMap;
use log::{debug, info};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};
use tokio::sync::RwLock;

/// Seconds between expired-entry sweeps.
const CLEANUP_INTERVAL_SECS: u64 = 300;

/// Thread-safe token blacklist using DashMap for concurrent access.
///
/// Tokens are keyed by a hash of the token string and carry their Unix
/// expiry; expired entries are swept periodically to bound memory.
#[derive(Clone)]
pub struct TokenBlacklist {
    /// token hash -> Unix expiry in seconds
    tokens: Arc<DashMap<String, u64>>,
    /// Unix time of the last sweep
    last_cleanup: Arc<RwLock<u64>>,
}

impl TokenBlacklist {
    /// Create a new empty token blacklist.
    pub fn new() -> Self {
        Self {
            tokens: Arc::new(DashMap::new()),
            last_cleanup: Arc::new(RwLock::new(now_secs())),
        }
    }

    /// Add a token to the blacklist until `exp` (Unix epoch seconds).
    ///
    /// Already-expired tokens are not stored.
    pub async fn blacklist_token(&self, token: &str, exp: usize) {
        let exp = exp as u64;
        if exp > now_secs() {
            self.tokens.insert(Self::hash_token(token), exp);
            debug!("Token blacklisted until {}", exp);
        }

        self.maybe_cleanup().await;
    }

    /// Check if a token is blacklisted.
    ///
    /// Returns `true` if the token is blacklisted (and should be rejected).
    pub fn is_blacklisted(&self, token: &str) -> bool {
        let token_hash = Self::hash_token(token);

        if let Some(entry) = self.tokens.get(&token_hash) {
            if *entry > now_secs() {
                return true;
            }
            // Entry has expired; drop the read guard before removing
            drop(entry);
            self.tokens.remove(&token_hash);
        }

        false
    }

    /// Hash a token for storage; the raw token never lands in the map.
    fn hash_token(token: &str) -> String {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        token.hash(&mut hasher);
        format!("{:x}", hasher.finish())
    }

    /// Sweep expired entries if enough time has passed since the last sweep.
    async fn maybe_cleanup(&self) {
        let now = now_secs();

        let due = {
            let last = self.last_cleanup.read().await;
            now.saturating_sub(*last) >= CLEANUP_INTERVAL_SECS
        };

        if due {
            let mut last = self.last_cleanup.write().await;
            // Re-check after acquiring the write lock
            if now.saturating_sub(*last) >= CLEANUP_INTERVAL_SECS {
                self.cleanup(now);
                *last = now;
            }
        }
    }

    /// Remove all expired entries from the blacklist.
    fn cleanup(&self, now: u64) {
        let before_count = self.tokens.len();

        self.tokens.retain(|_, exp| *exp > now);

        let removed = before_count - self.tokens.len();
        if removed > 0 {
            info!(
                "Token blacklist cleanup: removed {} expired entries, {} remaining",
                removed,
                self.tokens.len()
            );
        }
    }

    /// Get the current number of blacklisted tokens.
    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if the blacklist is empty.
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl Default for TokenBlacklist {
    fn default() -> Self {
        Self::new()
    }
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unexpired_tokens_are_blacklisted() {
        let blacklist = TokenBlacklist::new();
        let exp = (now_secs() + 3600) as usize;

        blacklist.blacklist_token("token-a", exp).await;
        assert!(blacklist.is_blacklisted("token-a"));
        assert!(!blacklist.is_blacklisted("token-b"));
    }

    #[tokio::test]
    async fn already_expired_tokens_are_not_stored() {
        let blacklist = TokenBlacklist::new();

        blacklist.blacklist_token("stale", 1).await;
        assert!(!blacklist.is_blacklisted("stale"));
        assert!(blacklist.is_empty());
    }
}
