//! Claim Validator.
//!
//! Grounded on `access_token_check_validity` in the source: check
//! expiration, `type`, and then exactly one of two independent acceptance
//! branches (`accept_access_token` / `accept_client_token`) — the source's
//! `else if` chain means a deployment can accept both kinds at once, so we
//! keep them as two booleans rather than folding them into one enum.

use crate::claims::ClaimSet;
use crate::clock::Clock;
use crate::error::{StageError, StageResult};

/// The subset of `Configuration` the claim validator needs.
#[derive(Debug, Clone, Copy)]
pub struct ClaimValidatorConfig {
    pub accept_access_token: bool,
    pub accept_client_token: bool,
}

/// Passes iff:
/// 1. `exp` exists, is an integer, and is strictly greater than now.
/// 2. `type` exists and is a string.
/// 3. Either accept_access_token && type == "access_token" && non-empty `sub`,
///    or accept_client_token && type == "client_token" && non-empty `aud`.
pub fn validate(claims: &ClaimSet, config: ClaimValidatorConfig, clock: &dyn Clock) -> StageResult<()> {
    let exp = claims.get_i64("exp").ok_or(StageError::InvalidRequest)?;
    if exp <= clock.now() {
        return Err(StageError::InvalidRequest);
    }

    let token_type = claims.get_str("type").ok_or(StageError::InvalidRequest)?;

    let accepted = (config.accept_access_token
        && token_type == "access_token"
        && claims.get_nonempty_str("sub").is_some())
        || (config.accept_client_token
            && token_type == "client_token"
            && claims.get_nonempty_str("aud").is_some());

    if accepted {
        Ok(())
    } else {
        Err(StageError::InvalidRequest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use serde_json::json;

    fn claims(value: serde_json::Value) -> ClaimSet {
        ClaimSet::from_map(value.as_object().unwrap().clone())
    }

    fn cfg() -> ClaimValidatorConfig {
        ClaimValidatorConfig {
            accept_access_token: true,
            accept_client_token: true,
        }
    }

    #[test]
    fn accepts_valid_access_token() {
        let c = claims(json!({"type": "access_token", "sub": "alice", "exp": 1000}));
        assert!(validate(&c, cfg(), &FixedClock(500)).is_ok());
    }

    #[test]
    fn accepts_valid_client_token() {
        let c = claims(json!({"type": "client_token", "aud": "svc", "exp": 1000}));
        assert!(validate(&c, cfg(), &FixedClock(500)).is_ok());
    }

    #[test]
    fn rejects_expired() {
        let c = claims(json!({"type": "access_token", "sub": "alice", "exp": 100}));
        assert_eq!(
            validate(&c, cfg(), &FixedClock(500)).unwrap_err(),
            StageError::InvalidRequest
        );
    }

    #[test]
    fn rejects_exp_equal_to_now() {
        let c = claims(json!({"type": "access_token", "sub": "alice", "exp": 500}));
        assert_eq!(
            validate(&c, cfg(), &FixedClock(500)).unwrap_err(),
            StageError::InvalidRequest
        );
    }

    #[test]
    fn rejects_missing_sub() {
        let c = claims(json!({"type": "access_token", "exp": 1000}));
        assert!(validate(&c, cfg(), &FixedClock(500)).is_err());
    }

    #[test]
    fn rejects_empty_sub() {
        let c = claims(json!({"type": "access_token", "sub": "", "exp": 1000}));
        assert!(validate(&c, cfg(), &FixedClock(500)).is_err());
    }

    #[test]
    fn rejects_disabled_type() {
        let c = claims(json!({"type": "client_token", "aud": "svc", "exp": 1000}));
        let cfg = ClaimValidatorConfig {
            accept_access_token: true,
            accept_client_token: false,
        };
        assert!(validate(&c, cfg, &FixedClock(500)).is_err());
    }

    #[test]
    fn rejects_unknown_type() {
        let c = claims(json!({"type": "id_token", "sub": "alice", "exp": 1000}));
        assert!(validate(&c, cfg(), &FixedClock(500)).is_err());
    }
}
