//! # Election Record
//!
//! One catalog entry. Decoded from the JSON file that backs it and never
//! mutated afterwards.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::identity::ElectionUid;

/// A single election as listed by `GET /elections`.
///
/// Field names on the wire are fixed: `electionUId` and `name`. Unknown
/// fields in the backing file are ignored; they are still returned verbatim
/// by the raw-bytes endpoint because that endpoint never re-encodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Election {
    /// Unique catalog key.
    #[serde(rename = "electionUId")]
    #[schema(value_type = String, example = "2024-general")]
    pub election_uid: ElectionUid,
    /// Display name. Empty when the file does not carry one.
    #[serde(default)]
    pub name: String,
}

impl Election {
    /// Build a record from an already-validated identifier.
    pub fn new(election_uid: ElectionUid, name: impl Into<String>) -> Self {
        Self {
            election_uid,
            name: name.into(),
        }
    }

    /// Decode a record from the raw bytes of its backing file.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_wire_field_names() {
        let e = Election::from_json_slice(br#"{"electionUId":"e-1","name":"General"}"#).unwrap();
        assert_eq!(e.election_uid.as_str(), "e-1");
        assert_eq!(e.name, "General");
    }

    #[test]
    fn name_defaults_to_empty() {
        let e = Election::from_json_slice(br#"{"electionUId":"e-1"}"#).unwrap();
        assert_eq!(e.name, "");
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let e = Election::from_json_slice(
            br#"{"electionUId":"e-1","name":"N","candidates":[1,2,3]}"#,
        )
        .unwrap();
        assert_eq!(e.name, "N");
    }

    #[test]
    fn missing_identifier_is_a_decode_error() {
        assert!(Election::from_json_slice(br#"{"name":"N"}"#).is_err());
        assert!(Election::from_json_slice(br#"{"electionUId":"","name":"N"}"#).is_err());
    }

    #[test]
    fn non_object_is_a_decode_error() {
        assert!(Election::from_json_slice(b"[]").is_err());
        assert!(Election::from_json_slice(b"not json").is_err());
    }

    #[test]
    fn serializes_with_wire_names() {
        let e = Election::new(ElectionUid::new("x").unwrap(), "X");
        let json = serde_json::to_value(&e).unwrap();
        assert_eq!(json, serde_json::json!({"electionUId": "x", "name": "X"}));
    }
}
