//! Claim set as a tagged variant.
//!
//! The source keeps claims as a `json_t *` and pokes at it with
//! `json_object_get` + `json_is_string`/`json_integer_value`. We keep the
//! same "mapping from string to JSON-shaped value" model but add typed
//! accessors that fold "missing" and "wrong type" into the same `None`:
//! stages must not distinguish the two at the wire layer.

use serde_json::{Map, Value};

/// Key→value mapping with JSON-compatible value types, owned by one
/// request's processing chain.
#[derive(Debug, Clone, Default)]
pub struct ClaimSet(Map<String, Value>);

impl ClaimSet {
    pub fn from_map(map: Map<String, Value>) -> Self {
        Self(map)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key)?.as_str()
    }

    /// Non-empty string convenience — the source checks `!o_strnullempty(...)`
    /// at every `sub`/`aud` site rather than just presence.
    pub fn get_nonempty_str(&self, key: &str) -> Option<&str> {
        self.get_str(key).filter(|s| !s.is_empty())
    }

    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.0.get(key)?.as_i64()
    }

    pub fn get_object(&self, key: &str) -> Option<&Map<String, Value>> {
        self.0.get(key)?.as_object()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// `cnf.jkt`, read through the nested `cnf` object the way the source
    /// reads `json_object_get(json_object_get(j_access_token, "cnf"), "jkt")`.
    pub fn cnf_jkt(&self) -> Option<&str> {
        self.get_object("cnf")?.get("jkt")?.as_str()
    }
}

impl From<Map<String, Value>> for ClaimSet {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}
