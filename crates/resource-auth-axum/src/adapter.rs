//! `TokenRequest` / `TokenResponse` impls against Axum's HTTP types.
//!
//! Mirrors how `rs/src/middleware/auth/access.rs` reads straight off
//! `req.headers()` / `OriginalUri` — here the same reads are funneled
//! through the core's trait seam instead of being inlined in the
//! middleware body.

use std::collections::HashMap;

use axum::http::{HeaderMap, Uri};
use resource_auth_core::{AuthorizationResult, TokenRequest, TokenResponse};

pub struct AxumTokenRequest<'a> {
    headers: &'a HeaderMap,
    form: Option<HashMap<String, String>>,
    query: HashMap<String, String>,
}

impl<'a> AxumTokenRequest<'a> {
    pub fn new(headers: &'a HeaderMap, uri: &Uri, form: Option<HashMap<String, String>>) -> Self {
        let query = uri
            .query()
            .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
            .unwrap_or_default();

        Self { headers, form, query }
    }
}

impl<'a> TokenRequest for AxumTokenRequest<'a> {
    fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)?.to_str().ok()
    }

    fn form(&self, name: &str) -> Option<&str> {
        self.form.as_ref()?.get(name).map(String::as_str)
    }

    fn query(&self, name: &str) -> Option<&str> {
        self.query.get(name).map(String::as_str)
    }
}

/// Collects the challenge header and/or success attachment the core writes,
/// so the middleware can apply them to a real `axum::response::Response`
/// (or a request extension, on success) after `authorize` returns.
#[derive(Default)]
pub struct AxumTokenResponse {
    headers: Vec<(String, String)>,
    result: Option<AuthorizationResult>,
}

impl AxumTokenResponse {
    pub fn into_headers(self) -> Vec<(String, String)> {
        self.headers
    }
}

impl TokenResponse for AxumTokenResponse {
    fn set_header(&mut self, name: &str, value: String) {
        self.headers.push((name.to_string(), value));
    }

    fn attach(&mut self, result: AuthorizationResult) {
        self.result = Some(result);
    }
}
