//! Optional DPoP replay-protection seam.
//!
//! `resource-auth-core` is request-local and stateless by design — it
//! keeps no nonce/replay cache of its own. This trait exists so a host
//! that *does* want replay protection can bolt a backing store (Redis,
//! Valkey, an in-process cache, whatever fits the deployment) onto the
//! middleware without the core crate taking on that dependency; no
//! implementation ships here, only the seam.

use std::{future::Future, pin::Pin};

/// Checks whether a DPoP proof's `(sub, jti)` key has been seen before and
/// records it if not.
///
/// - `Ok(true)` — first time seen, now stored.
/// - `Ok(false)` — replay: the key was already present.
/// - `Err(_)` — backend failure; callers must treat this as fail-closed.
pub trait ReplayStore: Send + Sync {
    fn check_and_store<'a>(
        &'a self,
        key: &'a str,
        ttl_secs: u64,
    ) -> Pin<Box<dyn Future<Output = Result<bool, ReplayError>> + Send + 'a>>;
}

#[derive(Debug, thiserror::Error)]
pub enum ReplayError {
    #[error("replay store backend failure: {0}")]
    Backend(String),
}
