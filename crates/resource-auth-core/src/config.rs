//! Static configuration bundle.
//!
//! Published once at startup and shared immutably across every request
//! thereafter — the source's `struct _glwd_resource_config`, minus the
//! fields that belong to the host (logging, database handles) rather than
//! the validator.

use crate::dpop::DpopConfig;
use crate::keyset::KeySet;
use crate::validate::ClaimValidatorConfig;

/// Where the token is looked for on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenLocation {
    Header,
    Body,
    Query,
}

#[derive(Debug, Clone)]
pub struct Configuration {
    pub method: TokenLocation,
    pub realm: Option<String>,
    /// Space-separated, possibly empty.
    pub oauth_scope: String,
    pub accept_access_token: bool,
    pub accept_client_token: bool,
    pub jwks_public: KeySet,
    /// Bitfield passed through to the JWT parser's x5u-loading policy.
    /// `jsonwebtoken` has no x5u-fetching of its own, so this is carried
    /// only so a host that layers its own x5u resolution can read it back.
    pub x5u_flags: u32,
    pub htm: String,
    pub htu: String,
    pub max_iat: i64,
}

impl Configuration {
    pub fn claim_validator_config(&self) -> ClaimValidatorConfig {
        ClaimValidatorConfig {
            accept_access_token: self.accept_access_token,
            accept_client_token: self.accept_client_token,
        }
    }

    pub fn dpop_config(&self) -> DpopConfig<'_> {
        DpopConfig {
            htm: &self.htm,
            htu: &self.htu,
            max_iat_seconds: self.max_iat,
        }
    }
}
