use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::utils::error::AppError;

/// Opaque document key. Wraps the store's ObjectId so handlers only deal
/// with the hex string form and fail fast on malformed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocId(ObjectId);

impl DocId {
    /// Parses the hex string form, rejecting malformed input before any
    /// store access.
    pub fn parse(s: &str) -> Result<Self, AppError> {
        if s.is_empty() {
            return Err(AppError::InvalidRequest("Invalid ID format".to_string()));
        }
        ObjectId::parse_str(s)
            .map(DocId)
            .map_err(|_| AppError::InvalidRequest("Invalid ID format".to_string()))
    }

    pub fn new() -> Self {
        DocId(ObjectId::new())
    }

    pub fn to_hex(&self) -> String {
        self.0.to_hex()
    }

    pub fn as_object_id(&self) -> ObjectId {
        self.0
    }
}

impl Default for DocId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_hex())
    }
}

impl FromStr for DocId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DocId::parse(s)
    }
}

impl From<ObjectId> for DocId {
    fn from(oid: ObjectId) -> Self {
        DocId(oid)
    }
}

impl From<DocId> for ObjectId {
    fn from(id: DocId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trip() {
        let id = DocId::new();
        let parsed = DocId::parse(&id.to_hex()).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        assert!(DocId::parse("").is_err());
        assert!(DocId::parse("not-an-id").is_err());
        assert!(DocId::parse("123").is_err());
        // Right length, invalid hex
        assert!(DocId::parse("zzzzzzzzzzzzzzzzzzzzzzzz").is_err());
    }

    #[test]
    fn test_parse_accepts_valid_hex() {
        let parsed = DocId::parse("507f1f77bcf86cd799439011").unwrap();
        assert_eq!(parsed.to_hex(), "507f1f77bcf86cd799439011");
    }
}
