//! Internal outcome taxonomy shared by every validation stage.
//!
//! Mirrors the five-way `{"result": ...}` tag the source plugin attaches to
//! every intermediate JSON object (`G_TOKEN_OK`, `G_TOKEN_ERROR_INVALID_TOKEN`,
//! `G_TOKEN_ERROR_INVALID_REQUEST`, `G_TOKEN_ERROR_INSUFFICIENT_SCOPE`,
//! `G_TOKEN_ERROR_INTERNAL`), but statically typed instead of stringly-tagged.

use thiserror::Error;

/// A stage either produces a value or fails with one of four reasons.
///
/// `Outcome` intentionally does not implement `std::error::Error` by itself:
/// stages return `Result<T, StageError>` and the orchestrator is the only
/// place that maps a `StageError` onto a wire-visible challenge.
pub type StageResult<T> = Result<T, StageError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StageError {
    /// Token malformed, unparseable, signature mismatch, or DPoP semantic failure.
    #[error("invalid token")]
    InvalidToken,

    /// Token shape wrong at the semantic layer (type/sub/aud missing or empty).
    #[error("invalid request")]
    InvalidRequest,

    /// Token valid but does not cover the required scopes.
    #[error("insufficient scope")]
    InsufficientScope,

    /// Crypto library, allocation, or internal invariant failure.
    #[error("internal error")]
    Internal,
}
