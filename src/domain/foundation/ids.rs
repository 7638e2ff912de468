//! Strongly-typed identifier value objects.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Identifier of a session record, as assigned by the session service.
///
/// The service emits either numeric or string ids; both normalize to a string.
/// Any other JSON value decodes as an empty id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SessionRecordId(String);

impl SessionRecordId {
    /// Creates an id from its textual form.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u64> for SessionRecordId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for SessionRecordId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for SessionRecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for SessionRecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Number(serde_json::Number),
            Text(String),
            Other(serde::de::IgnoredAny),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Number(n) => Self(n.to_string()),
            RawId::Text(s) => Self(s),
            RawId::Other(_) => Self::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_numeric_id() {
        let id: SessionRecordId = serde_json::from_str("42").unwrap();
        assert_eq!(id.as_str(), "42");
    }

    #[test]
    fn deserializes_string_id() {
        let id: SessionRecordId = serde_json::from_str("\"65a1f0c2\"").unwrap();
        assert_eq!(id, SessionRecordId::new("65a1f0c2"));
    }

    #[test]
    fn deserializes_negative_and_fractional_ids() {
        let id: SessionRecordId = serde_json::from_str("-3").unwrap();
        assert_eq!(id.as_str(), "-3");
        let id: SessionRecordId = serde_json::from_str("2.5").unwrap();
        assert_eq!(id.as_str(), "2.5");
    }

    #[test]
    fn other_json_values_decode_as_empty() {
        for raw in ["null", "true", "[1]", "{\"a\":1}"] {
            let id: SessionRecordId = serde_json::from_str(raw).unwrap();
            assert_eq!(id, SessionRecordId::default(), "input {}", raw);
        }
    }

    #[test]
    fn serializes_as_string() {
        let json = serde_json::to_string(&SessionRecordId::from(7u64)).unwrap();
        assert_eq!(json, "\"7\"");
    }

    #[test]
    fn display_shows_raw_id() {
        assert_eq!(SessionRecordId::from(3u64).to_string(), "3");
    }
}
