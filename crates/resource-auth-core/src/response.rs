//! Response interface and the success attachment.

use serde_json::{Map, Value};

/// Shared data the callback attaches to the response on success.
///
/// Every field the source copies verbatim into its `j_pack(...)` result
/// object on success stays `Option` here for the same reason: a client
/// token has no `sub`, a Bearer-only request has no `jkt`, and the fields
/// taken straight from the claim set are only present when the token
/// carried them.
#[derive(Debug, Clone, Default)]
pub struct AuthorizationResult {
    pub sub: Option<String>,
    pub scope: Vec<String>,
    pub jkt: Option<String>,
    /// The DPoP proof's `jti`, present only on the DPoP path. Exposed
    /// alongside `jkt` so a host can key an optional replay-protection
    /// store on `(sub, jti)` — the core itself stores nothing.
    pub dpop_jti: Option<String>,
    pub aud: Option<Value>,
    pub client_id: Option<String>,
    pub claims: Option<Map<String, Value>>,
}

/// Response surface the callback writes to.
///
/// `attach` takes ownership of the result; in the axum adapter this means
/// stashing it in a request extension the response carries forward, which
/// is freed with the response the way the source's shared-data dropper is
/// invoked when the response is destroyed.
pub trait TokenResponse {
    fn set_header(&mut self, name: &str, value: String);
    fn attach(&mut self, result: AuthorizationResult);
}
