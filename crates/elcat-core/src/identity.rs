//! # Election Identifier Newtype
//!
//! The identifier inside an election file is the real catalog key; the
//! backing filename is only where the bytes happen to live. Keeping the
//! identifier in its own type stops a filename from being passed where a
//! catalog key is expected.

use std::borrow::Borrow;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error constructing an [`ElectionUid`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentifierError {
    /// The identifier was the empty string.
    #[error("election identifier must not be empty")]
    Empty,
}

/// Unique identifier of an election (`electionUId` on the wire).
///
/// Serialized transparently as a JSON string. Deserialization rejects the
/// empty string, so a file with `"electionUId": ""` fails to decode.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ElectionUid(String);

impl ElectionUid {
    /// Create a validated identifier.
    pub fn new(value: impl Into<String>) -> Result<Self, IdentifierError> {
        let value = value.into();
        if value.is_empty() {
            return Err(IdentifierError::Empty);
        }
        Ok(Self(value))
    }

    /// Access the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ElectionUid {
    type Error = IdentifierError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ElectionUid> for String {
    fn from(uid: ElectionUid) -> Self {
        uid.0
    }
}

// Lets `HashMap<ElectionUid, _>` be queried with a plain `&str`. The derived
// `Hash`/`Eq` cover only the inner `String`, so they agree with `str`.
impl Borrow<str> for ElectionUid {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ElectionUid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn rejects_only_the_empty_string() {
        assert_eq!(ElectionUid::new(""), Err(IdentifierError::Empty));
        assert_eq!(ElectionUid::new("   ").unwrap().as_str(), "   ");
    }

    #[test]
    fn keeps_value_verbatim() {
        let uid = ElectionUid::new(" 2024-general ").unwrap();
        assert_eq!(uid.as_str(), " 2024-general ");
        assert_eq!(uid.to_string(), " 2024-general ");
    }

    #[test]
    fn serde_is_a_plain_string() {
        let uid = ElectionUid::new("e-1").unwrap();
        assert_eq!(serde_json::to_string(&uid).unwrap(), "\"e-1\"");
        let back: ElectionUid = serde_json::from_str("\"e-1\"").unwrap();
        assert_eq!(back, uid);
    }

    #[test]
    fn deserializing_empty_fails() {
        assert!(serde_json::from_str::<ElectionUid>("\"\"").is_err());
    }

    #[test]
    fn map_lookup_by_str() {
        let mut map = HashMap::new();
        map.insert(ElectionUid::new("abc").unwrap(), 1);
        assert_eq!(map.get("abc"), Some(&1));
        assert_eq!(map.get("abd"), None);
    }
}
