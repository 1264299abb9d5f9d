//! Mints a DPoP proof JWT signed with a client Ed25519 key, for exercising
//! `resource-auth-axum` by hand against a running resource server.
//!
//! Kept as its own small binary rather than folded into `resource-auth-core`
//! (a validator has no business signing anything) but calls into the core's
//! own `ath`/thumbprint routines rather than recomputing them, so the two
//! can never silently drift apart.

use std::{
    fs,
    path::PathBuf,
    time::{SystemTime, UNIX_EPOCH},
};

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use clap::Parser;
use ed25519_dalek::{Signer, SigningKey, pkcs8::DecodePrivateKey};
use jsonwebtoken::jwk::{
    AlgorithmParameters, CommonParameters, EllipticCurve, Jwk, OctetKeyPairParameters, OctetKeyPairType,
};
use resource_auth_core::dpop::{compute_ath, compute_jwk_thumbprint};
use uuid::Uuid;

/// Generate a DPoP proof JWT (JWS compact serialization) signed with an Ed25519 private key.
#[derive(Parser, Debug)]
#[command(name = "dpop-gen", version, about)]
struct Args {
    /// HTTP method (htm), e.g. GET/POST/PUT.
    #[arg(long, default_value = "GET")]
    method: String,

    /// Full request URL used as htu (e.g. http://localhost:3001/api/v1/users).
    #[arg(long)]
    url: String,

    /// Path to the client's Ed25519 private key in PEM (PKCS#8).
    #[arg(long, value_name = "FILE")]
    dpop_private_pem: PathBuf,

    /// Access token string. If provided, `ath` is included in the proof.
    #[arg(long)]
    access_token: Option<String>,

    /// Override iat (unix seconds). Default: now.
    #[arg(long)]
    iat: Option<i64>,

    /// Override jti. Default: random UUID v4.
    #[arg(long)]
    jti: Option<String>,

    /// Print only the DPoP token, no extra lines.
    #[arg(long, default_value_t = false)]
    quiet: bool,
}

fn b64url_json(value: &serde_json::Value) -> String {
    let s = serde_json::to_string(value).expect("serialize json");
    URL_SAFE_NO_PAD.encode(s.as_bytes())
}

fn now_unix() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time")
        .as_secs() as i64
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let pem = fs::read_to_string(&args.dpop_private_pem)?;
    let signing_key = SigningKey::from_pkcs8_pem(&pem)?;
    let verifying_key = signing_key.verifying_key();
    let x_b64 = URL_SAFE_NO_PAD.encode(verifying_key.as_bytes());

    let jwk = Jwk {
        common: CommonParameters::default(),
        algorithm: AlgorithmParameters::OctetKeyPair(OctetKeyPairParameters {
            key_type: OctetKeyPairType::OctetKeyPair,
            curve: EllipticCurve::Ed25519,
            x: x_b64.clone(),
        }),
    };
    let jkt = compute_jwk_thumbprint(&jwk)?;

    let ath = args.access_token.as_deref().map(compute_ath);

    let iat = args.iat.unwrap_or_else(now_unix);
    let jti = args.jti.unwrap_or_else(|| Uuid::new_v4().to_string());

    let header = serde_json::json!({
        "typ": "dpop+jwt",
        "alg": "EdDSA",
        "jwk": { "kty": "OKP", "crv": "Ed25519", "x": x_b64 },
    });

    let mut claims = serde_json::Map::new();
    claims.insert("htu".to_string(), serde_json::Value::String(args.url.clone()));
    claims.insert(
        "htm".to_string(),
        serde_json::Value::String(args.method.to_uppercase()),
    );
    claims.insert("iat".to_string(), serde_json::Value::Number(iat.into()));
    claims.insert("jti".to_string(), serde_json::Value::String(jti.clone()));
    if let Some(ath) = ath.clone() {
        claims.insert("ath".to_string(), serde_json::Value::String(ath));
    }
    let payload = serde_json::Value::Object(claims);

    let encoded_header = b64url_json(&header);
    let encoded_payload = b64url_json(&payload);
    let signing_input = format!("{encoded_header}.{encoded_payload}");

    let signature = signing_key.sign(signing_input.as_bytes());
    let encoded_signature = URL_SAFE_NO_PAD.encode(signature.to_bytes());

    let proof = format!("{signing_input}.{encoded_signature}");

    if args.quiet {
        println!("{proof}");
        return Ok(());
    }

    println!("DPoP: {proof}");
    println!("jkt (cnf.jkt): {jkt}");
    println!("iat: {iat}");
    println!("jti: {jti}");
    match ath {
        Some(ath) => println!("ath: {ath}"),
        None => println!("ath: (none)"),
    }

    Ok(())
}
