//! `middleware::from_fn_with_state` adapter, grounded on
//! `rs/src/middleware/auth/access.rs`'s `apply`/`access_middleware` pair.

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    extract::{Request, State},
    http::{HeaderName, HeaderValue, StatusCode, header},
    middleware::{self, Next},
    response::Response,
};
use resource_auth_core::{Configuration, Outcome, SystemClock, TokenLocation};
use tracing::warn;

use crate::adapter::{AxumTokenRequest, AxumTokenResponse};
use crate::replay::ReplayStore;

/// Layer `router` so every request passing through it is authorized first.
///
/// ```ignore
/// let protected = resource_auth_axum::apply(router, config.clone());
/// ```
pub fn apply<S>(router: Router<S>, config: Arc<Configuration>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.layer(middleware::from_fn_with_state(config, access_middleware))
}

/// Same as [`apply`], but additionally rejects a DPoP-bound request whose
/// proof `jti` was already seen by `replay_store`, keyed on `(sub, jti)`.
/// Requests without a DPoP proof (plain Bearer) never touch the store.
pub fn apply_with_replay_store<S>(
    router: Router<S>,
    config: Arc<Configuration>,
    replay_store: Arc<dyn ReplayStore>,
    replay_ttl_seconds: u64,
) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let state = ReplayState {
        config,
        replay_store,
        replay_ttl_seconds,
    };
    router.layer(middleware::from_fn_with_state(state, access_middleware_with_replay))
}

#[derive(Clone)]
struct ReplayState {
    config: Arc<Configuration>,
    replay_store: Arc<dyn ReplayStore>,
    replay_ttl_seconds: u64,
}

async fn access_middleware(
    State(config): State<Arc<Configuration>>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let (parts, body, outcome, token_res) = run_authorize(&config, req).await;

    match outcome {
        Outcome::Continue(result) => {
            let mut req = Request::from_parts(parts, body);
            req.extensions_mut().insert(result);
            next.run(req).await
        }
        Outcome::Unauthorized | Outcome::Error => unauthorized_response(token_res),
    }
}

async fn access_middleware_with_replay(
    State(state): State<ReplayState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let (parts, body, outcome, token_res) = run_authorize(&state.config, req).await;

    let result = match outcome {
        Outcome::Continue(result) => result,
        Outcome::Unauthorized | Outcome::Error => return unauthorized_response(token_res),
    };

    if let Some(jti) = &result.dpop_jti {
        let key = match &result.sub {
            Some(sub) => format!("dpop:{sub}:{jti}"),
            None => format!("dpop::{jti}"),
        };
        match state.replay_store.check_and_store(&key, state.replay_ttl_seconds).await {
            Ok(true) => {}
            Ok(false) => {
                warn!(key = %key, "dpop replay detected");
                return unauthorized_response(token_res);
            }
            Err(err) => {
                warn!(error = ?err, "replay store backend failure");
                return unauthorized_response(token_res);
            }
        }
    }

    let mut req = Request::from_parts(parts, body);
    req.extensions_mut().insert(result);
    next.run(req).await
}

/// Shared extraction + core `authorize` call used by both middleware
/// entrypoints, returning the request halves so the caller decides whether
/// to reassemble the request (success) or discard it (rejection).
async fn run_authorize(
    config: &Configuration,
    req: Request<Body>,
) -> (axum::http::request::Parts, Body, Outcome, AxumTokenResponse) {
    let (parts, body) = req.into_parts();

    let content_type = parts
        .headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    let needs_form = matches!(config.method, TokenLocation::Body)
        && content_type.contains("application/x-www-form-urlencoded");

    let (body, form) = if needs_form {
        match axum::body::to_bytes(body, usize::MAX).await {
            Ok(bytes) => {
                let form = url::form_urlencoded::parse(&bytes).into_owned().collect();
                (Body::from(bytes), Some(form))
            }
            Err(err) => {
                warn!(error = ?err, "failed to buffer form body for token extraction");
                (Body::empty(), None)
            }
        }
    } else {
        (body, None)
    };

    let token_req = AxumTokenRequest::new(&parts.headers, &parts.uri, form);
    let mut token_res = AxumTokenResponse::default();

    let outcome = resource_auth_core::authorize(config, &token_req, &mut token_res, &SystemClock);

    (parts, body, outcome, token_res)
}

fn unauthorized_response(token_res: AxumTokenResponse) -> Response {
    let mut response = Response::new(Body::empty());
    *response.status_mut() = StatusCode::UNAUTHORIZED;
    for (name, value) in token_res.into_headers() {
        let (Ok(name), Ok(value)) = (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(&value),
        ) else {
            continue;
        };
        response.headers_mut().insert(name, value);
    }
    response
}
