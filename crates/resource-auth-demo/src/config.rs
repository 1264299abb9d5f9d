//! Environment-based configuration loading for the demo server.
//!
//! Required vars fail startup via `anyhow`; optional vars fall back to
//! sane defaults, covering the fields `resource-auth-core`'s `Configuration`
//! actually needs.

use std::{net::SocketAddr, path::Path};

use anyhow::{Context, Result, anyhow};
use jsonwebtoken::jwk::JwkSet;
use resource_auth_core::{Configuration, KeySet, TokenLocation};

pub struct DemoConfig {
    pub addr: SocketAddr,
    pub auth: Configuration,
}

impl DemoConfig {
    pub fn from_env() -> Result<Self> {
        let port: u16 = std::env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(8080);
        let addr: SocketAddr = format!("0.0.0.0:{port}").parse()?;

        let jwks_path = std::env::var("JWKS_PATH")
            .map_err(|_| anyhow!("JWKS_PATH is not set (path to a JSON JWK Set file)"))?;
        let jwks_public = load_keyset(Path::new(&jwks_path))
            .with_context(|| format!("loading JWKS from {jwks_path}"))?;

        let method = match std::env::var("TOKEN_LOCATION").unwrap_or_default().as_str() {
            "body" => TokenLocation::Body,
            "query" => TokenLocation::Query,
            _ => TokenLocation::Header,
        };

        let auth = Configuration {
            method,
            realm: std::env::var("OAUTH_REALM").ok(),
            oauth_scope: std::env::var("OAUTH_SCOPE").unwrap_or_default(),
            accept_access_token: env_bool("ACCEPT_ACCESS_TOKEN", true),
            accept_client_token: env_bool("ACCEPT_CLIENT_TOKEN", false),
            jwks_public,
            x5u_flags: 0,
            htm: std::env::var("DPOP_HTM").unwrap_or_else(|_| "GET".to_string()),
            htu: std::env::var("DPOP_HTU").unwrap_or_default(),
            max_iat: std::env::var("DPOP_MAX_IAT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
        };

        Ok(Self { addr, auth })
    }
}

fn env_bool(name: &str, default: bool) -> bool {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn load_keyset(path: &Path) -> Result<KeySet> {
    let raw = std::fs::read_to_string(path)?;
    let jwks: JwkSet = serde_json::from_str(&raw)?;
    Ok(jwks.keys.into_iter().collect())
}
