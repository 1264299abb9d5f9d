//! Authorization Callback — the orchestrator.
//!
//! Grounded on `callback_check_glewlwyd_oidc_access_token`: extract the
//! token, then run Signature → Claims → Scope → (DPoP, if the claim set
//! carries `cnf.jkt`), writing exactly one challenge header on any failure
//! and attaching shared data on success. The source centralizes cleanup
//! with a do-while(0)/break; here that collapses to early-return with `?`
//! since every intermediate just drops at scope exit.

use tracing::debug;

use crate::challenge::{Challenge, HEADER_NAME};
use crate::clock::Clock;
use crate::config::{Configuration, TokenLocation};
use crate::error::StageError;
use crate::request::TokenRequest;
use crate::response::{AuthorizationResult, TokenResponse};
use crate::{dpop, scope, signature, validate};

/// Outcome returned to the host framework.
#[derive(Debug)]
pub enum Outcome {
    Continue(AuthorizationResult),
    Unauthorized,
    /// Attach failure only. `resource-auth-axum`'s `TokenResponse` impl is
    /// infallible, so this variant is never produced there — kept for
    /// interface fidelity with the source's `U_CALLBACK_ERROR`.
    Error,
}

struct ExtractedToken {
    value: String,
    is_dpop_scheme: bool,
}

/// Locate the bearer token per the configured mode.
fn extract_token(req: &dyn TokenRequest, config: &Configuration) -> Option<ExtractedToken> {
    match config.method {
        TokenLocation::Header => {
            let auth = req.header("Authorization")?;
            if let Some(rest) = auth.strip_prefix("Bearer ") {
                Some(ExtractedToken {
                    value: rest.to_string(),
                    is_dpop_scheme: false,
                })
            } else if let Some(rest) = auth.strip_prefix("DPoP ") {
                Some(ExtractedToken {
                    value: rest.to_string(),
                    is_dpop_scheme: true,
                })
            } else {
                None
            }
        }
        TokenLocation::Body => {
            let content_type = req.header("Content-Type").unwrap_or("");
            if !content_type.contains("application/x-www-form-urlencoded") {
                return None;
            }
            req.form("access_token").map(|v| ExtractedToken {
                value: v.to_string(),
                is_dpop_scheme: false,
            })
        }
        TokenLocation::Query => req.query("access_token").map(|v| ExtractedToken {
            value: v.to_string(),
            is_dpop_scheme: false,
        }),
    }
}

/// Run the full validation pipeline and write a challenge header or attach
/// the success result, returning what the host should do next.
pub fn authorize(
    config: &Configuration,
    req: &dyn TokenRequest,
    res: &mut dyn TokenResponse,
    clock: &dyn Clock,
) -> Outcome {
    let Some(token) = extract_token(req, config) else {
        return reject(res, config, Challenge::missing_token());
    };

    let claims = match signature::verify(&token.value, &config.jwks_public) {
        Ok(claims) => claims,
        Err(_) => return reject(res, config, Challenge::invalid_token()),
    };

    match validate::validate(&claims, config.claim_validator_config(), clock) {
        Ok(()) => {}
        Err(StageError::Internal) => return reject(res, config, Challenge::internal_error()),
        Err(_) => return reject(res, config, Challenge::invalid_token()),
    }

    let granted_scope = match scope::intersect(&claims, &config.oauth_scope) {
        Ok(granted) => granted,
        Err(StageError::InsufficientScope) => {
            return reject(res, config, Challenge::insufficient_scope());
        }
        Err(_) => return reject(res, config, Challenge::internal_error()),
    };

    let mut result = AuthorizationResult {
        sub: claims.get_nonempty_str("sub").map(str::to_string),
        scope: granted_scope,
        jkt: None,
        dpop_jti: None,
        aud: claims.get("aud").cloned(),
        client_id: claims.get_str("client_id").map(str::to_string),
        claims: claims.get_object("claims").cloned(),
    };

    if let Some(expected_jkt) = claims.cnf_jkt() {
        if !token.is_dpop_scheme {
            return reject(res, config, Challenge::dpop_required());
        }

        let proof = req.header("DPoP");
        let verified = dpop::verify_proof(
            proof,
            &token.value,
            config.dpop_config(),
            Some(expected_jkt),
            clock,
        );

        match verified {
            Ok(verified) => {
                result.jkt = Some(expected_jkt.to_string());
                result.dpop_jti = Some(verified.jti);
            }
            Err(StageError::InvalidToken) => {
                return reject(res, config, Challenge::invalid_token());
            }
            Err(_) => return reject(res, config, Challenge::internal_error()),
        }
    }

    res.attach(result.clone());
    Outcome::Continue(result)
}

fn reject(res: &mut dyn TokenResponse, config: &Configuration, challenge: Challenge) -> Outcome {
    debug!(realm = ?config.realm, "authorization rejected");
    res.set_header(HEADER_NAME, challenge.to_header_value(config.realm.as_deref()));
    Outcome::Unauthorized
}
