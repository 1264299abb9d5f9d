//! Transport-agnostic OAuth 2.0 / OIDC resource-server access-token and
//! DPoP validator.
//!
//! Six components in dependency order: [`keyset`] → [`signature`] →
//! [`validate`] → [`scope`] → [`dpop`] → [`callback`], wired together by
//! [`callback::authorize`]. Host frameworks implement [`request::TokenRequest`]
//! and [`response::TokenResponse`] against their own types; see
//! `resource-auth-axum` for the Axum adapter.

pub mod callback;
pub mod challenge;
pub mod claims;
pub mod clock;
pub mod config;
pub mod dpop;
pub mod error;
pub mod keyset;
pub mod request;
pub mod response;
pub mod scope;
pub mod signature;
pub mod validate;

pub use callback::{authorize, Outcome};
pub use challenge::Challenge;
pub use claims::ClaimSet;
pub use clock::{Clock, SystemClock};
pub use config::{Configuration, TokenLocation};
pub use error::{StageError, StageResult};
pub use keyset::KeySet;
pub use request::TokenRequest;
pub use response::{AuthorizationResult, TokenResponse};
