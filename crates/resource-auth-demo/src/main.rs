//! Example server: an axum app with one route behind
//! `resource-auth-axum`'s middleware. `main` only starts the runtime;
//! `run()` carries the actual startup logic.

mod config;

use std::sync::Arc;

use anyhow::Result;
use axum::{Extension, Json, Router, routing::get};
use resource_auth_core::AuthorizationResult;
use tower_http::trace::TraceLayer;

use config::DemoConfig;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();
    run().await
}

async fn run() -> Result<()> {
    let config = DemoConfig::from_env()?;
    let auth = Arc::new(config.auth);

    let protected = Router::new().route("/whoami", get(whoami));
    let app = resource_auth_axum::apply(protected, auth).layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!(addr = %config.addr, "resource-auth-demo listening");
    axum::serve(listener, app).await?;
    Ok(())
}

async fn whoami(Extension(result): Extension<AuthorizationResult>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "sub": result.sub,
        "scope": result.scope,
        "jkt": result.jkt,
    }))
}
