//! RFC 6750 `WWW-Authenticate` challenge builder.
//!
//! The scheme token is always `Bearer`, even for DPoP-flagged requests;
//! RFC 9449 would use `DPoP` there instead, but this crate keeps a single
//! scheme token across every rejection path for simplicity.

pub const HEADER_NAME: &str = "WWW-Authenticate";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChallengeCode {
    InvalidToken,
    InvalidRequest,
    InsufficientScope,
}

impl ChallengeCode {
    fn as_str(self) -> &'static str {
        match self {
            ChallengeCode::InvalidToken => "invalid_token",
            ChallengeCode::InvalidRequest => "invalid_request",
            ChallengeCode::InsufficientScope => "insufficient_scope",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Challenge {
    code: ChallengeCode,
    description: &'static str,
}

impl Challenge {
    pub fn new(code: ChallengeCode, description: &'static str) -> Self {
        Self { code, description }
    }

    pub fn missing_token() -> Self {
        Self::new(ChallengeCode::InvalidToken, "The access token is missing")
    }

    pub fn invalid_token() -> Self {
        Self::new(ChallengeCode::InvalidRequest, "The access token is invalid")
    }

    pub fn internal_error() -> Self {
        Self::new(ChallengeCode::InvalidRequest, "Internal server error")
    }

    pub fn insufficient_scope() -> Self {
        Self::new(ChallengeCode::InsufficientScope, "The scope is invalid")
    }

    pub fn dpop_required() -> Self {
        Self::new(ChallengeCode::InvalidRequest, "DPoP required")
    }

    /// Value template: `Bearer ` then, if `realm` is configured, a
    /// `realm=<realm>,` fragment (unquoted — only `error`/`error_description`
    /// are quoted), then `error="<code>",error_description="<msg>"`. The
    /// realm fragment is only emitted when `realm` is `Some`.
    pub fn to_header_value(&self, realm: Option<&str>) -> String {
        let mut value = String::from("Bearer ");
        if let Some(realm) = realm {
            value.push_str(&format!("realm={realm},"));
        }
        value.push_str(&format!(
            "error=\"{}\",error_description=\"{}\"",
            self.code.as_str(),
            self.description
        ));
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn omits_realm_fragment_when_not_configured() {
        let header = Challenge::missing_token().to_header_value(None);
        assert_eq!(
            header,
            "Bearer error=\"invalid_token\",error_description=\"The access token is missing\""
        );
    }

    #[test]
    fn includes_realm_fragment_when_configured() {
        let header = Challenge::insufficient_scope().to_header_value(Some("api"));
        assert_eq!(
            header,
            "Bearer realm=api,error=\"insufficient_scope\",error_description=\"The scope is invalid\""
        );
    }

    #[test]
    fn scheme_token_is_always_bearer() {
        let header = Challenge::dpop_required().to_header_value(None);
        assert!(header.starts_with("Bearer "));
    }
}
