//! Firebase messaging credential set
//!
//! `RawCredentials` is the plugin block exactly as configured. Presence is
//! judged on the eight Firebase keys only; any other key (`measurementId`,
//! for instance) is carried along untouched. `Credentials` is the same block
//! once every key holds a non-empty string, and is what gets serialized into
//! `firebase.config.json`.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{FirebaseMsgError, FirebaseMsgResult};

/// Required credential keys, in the order they are reported.
pub const CREDENTIAL_KEYS: [&str; 8] = [
    "apiKey",
    "authDomain",
    "databaseURL",
    "projectId",
    "storageBucket",
    "messagingSenderId",
    "appId",
    "vapidKey",
];

const SENDER_ID_KEY: &str = "messagingSenderId";

/// Complete Firebase messaging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    block: Map<String, Value>,
}

impl Credentials {
    /// String value of `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.block.get(key).and_then(Value::as_str)
    }

    pub fn messaging_sender_id(&self) -> &str {
        self.get(SENDER_ID_KEY).unwrap_or_default()
    }

    /// Pretty-printed JSON with 2-space indentation, keys in configured order.
    pub fn to_pretty_json(&self) -> String {
        format!("{:#}", Value::Object(self.block.clone()))
    }
}

/// Plugin block as found on disk.
///
/// `null` and `""` both count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct RawCredentials(Map<String, Value>);

impl RawCredentials {
    pub fn new(block: Map<String, Value>) -> Self {
        Self(block)
    }

    /// Every configured key, credential or not.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Keys with no usable value, in canonical order.
    ///
    /// Fails if a credential field is neither a string nor `null`.
    pub fn missing_keys(&self) -> FirebaseMsgResult<Vec<&'static str>> {
        let mut missing = Vec::new();
        for key in CREDENTIAL_KEYS {
            match self.0.get(key) {
                None | Some(Value::Null) => missing.push(key),
                Some(Value::String(s)) if s.is_empty() => missing.push(key),
                Some(Value::String(_)) => {}
                Some(_) => {
                    return Err(FirebaseMsgError::InvalidCredentialField {
                        key: key.to_string(),
                    })
                }
            }
        }
        Ok(missing)
    }

    /// Convert into a complete set. Returns `None` unless every credential
    /// key holds a non-empty string.
    pub fn into_complete(self) -> Option<Credentials> {
        let complete = CREDENTIAL_KEYS
            .iter()
            .all(|key| matches!(self.0.get(*key), Some(Value::String(s)) if !s.is_empty()));
        complete.then_some(Credentials { block: self.0 })
    }
}

impl From<Map<String, Value>> for RawCredentials {
    fn from(block: Map<String, Value>) -> Self {
        Self::new(block)
    }
}
