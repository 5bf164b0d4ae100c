//! Record identifiers.
//!
//! The relational backend assigns auto-incrementing integers while the
//! document backend assigns 24-digit hex object ids. Both serialize as they
//! are stored: a JSON number or a JSON string.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum RecordId {
    /// Auto-incrementing row id.
    Int(i64),
    /// Hex-encoded object id.
    Object(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Int(id) => write!(f, "{}", id),
            RecordId::Object(id) => f.write_str(id),
        }
    }
}

impl From<i64> for RecordId {
    fn from(id: i64) -> Self {
        RecordId::Int(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_as_stored() {
        assert_eq!(serde_json::to_string(&RecordId::Int(7)).unwrap(), "7");
        assert_eq!(
            serde_json::to_string(&RecordId::Object("65a1f0c2e4b0a1b2c3d4e5f6".into())).unwrap(),
            r#""65a1f0c2e4b0a1b2c3d4e5f6""#
        );
    }

    #[test]
    fn test_deserializes_number_or_string() {
        assert_eq!(serde_json::from_str::<RecordId>("42").unwrap(), RecordId::Int(42));
        assert_eq!(
            serde_json::from_str::<RecordId>(r#""abc""#).unwrap(),
            RecordId::Object("abc".into())
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(RecordId::Int(3).to_string(), "3");
        assert_eq!(RecordId::Object("ff".into()).to_string(), "ff");
    }
}
