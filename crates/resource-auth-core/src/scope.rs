//! Scope Intersector.
//!
//! Grounded on `access_token_check_scope` in the source: split both the
//! token's `scope` claim and the configured required scopes on a single
//! space, then walk the *required* list in order and keep whichever member
//! also appears in the token's list — so the output order is the
//! configuration's order, not the token's.

use crate::claims::ClaimSet;
use crate::error::{StageError, StageResult};

/// Intersect the token's granted scopes against the configured required
/// scopes.
///
/// - `required` empty: every token scope is granted verbatim (least
///   surprise for the common "no scope checking configured" deployment).
/// - `required` non-empty: result is the subset of `required`, in
///   `required`'s order, that also appears in the token's scope list. Empty
///   result is `INSUFFICIENT_SCOPE`, not an error.
/// - If the token carries no (or an empty) `scope` claim while scopes are
///   required, the split yields no tokens on that side — the source treats
///   this as `INTERNAL`, not `INSUFFICIENT_SCOPE`, and so do we.
pub fn intersect(claims: &ClaimSet, required: &str) -> StageResult<Vec<String>> {
    let token_scope = claims.get_str("scope").unwrap_or("");
    let token_scopes: Vec<&str> = token_scope.split(' ').filter(|s| !s.is_empty()).collect();

    if required.trim().is_empty() {
        return Ok(token_scopes.into_iter().map(str::to_owned).collect());
    }

    let required_scopes: Vec<&str> = required.split(' ').filter(|s| !s.is_empty()).collect();

    if token_scopes.is_empty() || required_scopes.is_empty() {
        return Err(StageError::Internal);
    }

    let granted: Vec<String> = required_scopes
        .into_iter()
        .filter(|r| token_scopes.contains(r))
        .map(str::to_owned)
        .collect();

    if granted.is_empty() {
        Err(StageError::InsufficientScope)
    } else {
        Ok(granted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn claims_with_scope(scope: &str) -> ClaimSet {
        ClaimSet::from_map(json!({"scope": scope}).as_object().unwrap().clone())
    }

    #[test]
    fn empty_required_returns_token_scope_verbatim() {
        let c = claims_with_scope("read write");
        assert_eq!(intersect(&c, "").unwrap(), vec!["read", "write"]);
    }

    #[test]
    fn filters_and_preserves_required_order() {
        let c = claims_with_scope("write extra read");
        assert_eq!(
            intersect(&c, "read write admin").unwrap(),
            vec!["read", "write"]
        );
    }

    #[test]
    fn insufficient_scope_when_no_overlap() {
        let c = claims_with_scope("read write");
        assert_eq!(
            intersect(&c, "admin").unwrap_err(),
            StageError::InsufficientScope
        );
    }

    #[test]
    fn internal_when_token_has_no_scope_but_scopes_required() {
        let c = ClaimSet::from_map(Default::default());
        assert_eq!(intersect(&c, "admin").unwrap_err(), StageError::Internal);
    }

    #[test]
    fn intersection_is_subset_of_both_inputs() {
        let c = claims_with_scope("write extra read");
        let granted = intersect(&c, "read write admin").unwrap();
        let token_scopes: Vec<&str> = "write extra read".split(' ').collect();
        let required_scopes: Vec<&str> = "read write admin".split(' ').collect();
        for g in &granted {
            assert!(token_scopes.contains(&g.as_str()));
            assert!(required_scopes.contains(&g.as_str()));
        }
    }

    #[test]
    fn intersection_is_idempotent() {
        let c = claims_with_scope("write extra read");
        let granted = intersect(&c, "read write admin").unwrap();
        let required_again = granted.join(" ");
        let granted_again = intersect(&c, &required_again).unwrap();
        assert_eq!(granted, granted_again);
    }
}
