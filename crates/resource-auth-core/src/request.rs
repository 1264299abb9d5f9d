//! Request interface consumed by the callback.
//!
//! The core never touches a concrete HTTP type; it asks the host for
//! headers/form/query by name through this trait, the way the source asks
//! `ulfius`'s `_u_request` for the same three things.

/// Read-only view over the parts of an incoming request the validator needs.
pub trait TokenRequest {
    /// Case-insensitive header lookup.
    fn header(&self, name: &str) -> Option<&str>;

    /// Form-encoded body parameter, only populated when the request's
    /// `Content-Type` was `application/x-www-form-urlencoded`.
    fn form(&self, name: &str) -> Option<&str>;

    /// Query-string parameter.
    fn query(&self, name: &str) -> Option<&str>;
}
