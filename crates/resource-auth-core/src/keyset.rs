//! Immutable, in-memory, ordered collection of public keys.
//!
//! Mirrors `r_jwks_t *` from the source: `r_jwks_get_by_kid(jwks, kid)` and
//! `r_jwks_get_at(jwks, 0)` are two distinct operations on an ordered set.
//! `get_by_id` and `default_key` stay separate methods here rather than one
//! "lookup with fallback" call, so a caller can't accidentally skip the
//! `kid`-present path.

use jsonwebtoken::jwk::Jwk;

/// Ordered set of public keys, published once at startup and shared
/// immutably across every request thereafter.
#[derive(Debug, Clone, Default)]
pub struct KeySet {
    keys: Vec<Jwk>,
}

impl KeySet {
    pub fn new(keys: Vec<Jwk>) -> Self {
        Self { keys }
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Select the key whose `kid` matches, if any.
    pub fn get_by_id(&self, kid: &str) -> Option<&Jwk> {
        self.keys
            .iter()
            .find(|k| k.common.key_id.as_deref() == Some(kid))
    }

    /// The first key in the set — the implicit default when a token carries
    /// no `kid` header.
    pub fn default_key(&self) -> Option<&Jwk> {
        self.keys.first()
    }
}

impl FromIterator<Jwk> for KeySet {
    fn from_iter<T: IntoIterator<Item = Jwk>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
