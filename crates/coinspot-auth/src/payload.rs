//! Ordered request payloads

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::AuthResult;
use crate::nonce::Nonce;

/// JSON body of an authenticated request
///
/// Fields serialize in insertion order, with `nonce` always first. The
/// compact serialization of this object is both the signed message and the
/// request body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Payload {
    fields: Map<String, Value>,
}

impl Payload {
    /// Start a payload holding only `nonce`
    pub fn new(nonce: Nonce) -> Self {
        let mut fields = Map::new();
        fields.insert("nonce".to_string(), Value::from(nonce.value()));
        Self { fields }
    }

    /// Append a field
    ///
    /// Re-inserting an existing key replaces the value but keeps its position.
    ///
    /// # Errors
    /// `Serialization` if `value` cannot be represented as JSON.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Serialize) -> AuthResult<Self> {
        let value = serde_json::to_value(value)?;
        self.fields.insert(key.into(), value);
        Ok(self)
    }

    /// Get the nonce, if it is a positive integer
    ///
    /// `None` for a zero nonce, which the signer rejects.
    pub fn nonce(&self) -> Option<u64> {
        self.fields
            .get("nonce")
            .and_then(Value::as_u64)
            .filter(|n| *n > 0)
    }

    /// Get a field value
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Field names in serialization order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}
