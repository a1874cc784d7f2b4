//! Record identifiers and records.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::crypto::Fingerprint;
use crate::error::CoreError;

/// Maximum accepted length of a record identifier.
pub const MAX_RECORD_ID_LEN: usize = 128;

/// An opaque record identifier.
///
/// Identifiers are issued by an [`IdGenerator`](crate::ids::IdGenerator) and
/// are never derived from content: issuing the same certificate twice yields
/// two records with different ids. Lookups accept any string; one that was
/// never issued simply is not found.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Wrap an identifier string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Parse an identifier supplied by a caller.
    ///
    /// Rejects empty and oversized strings; any other text is a
    /// well-formed id.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        if s.is_empty() {
            return Err(CoreError::InvalidRecordId("empty".into()));
        }
        if s.len() > MAX_RECORD_ID_LEN {
            return Err(CoreError::InvalidRecordId(format!(
                "longer than {} bytes",
                MAX_RECORD_ID_LEN
            )));
        }
        Ok(Self(s.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Debug for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RecordId({})", self.0)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for RecordId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for RecordId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for RecordId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A ledger entry: the fingerprint of an issued certificate.
///
/// Created once by issuance, never updated, never deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    pub fingerprint: Fingerprint,
    /// Issuer name exactly as supplied at issuance.
    pub issuer: String,
    /// Issuance time, Unix milliseconds (UTC).
    pub issued_at: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_id_parse() {
        let id = RecordId::parse("3f1c2e4a-0b5d-4c6e-9f7a-8b9c0d1e2f3a").unwrap();
        assert_eq!(id.as_str(), "3f1c2e4a-0b5d-4c6e-9f7a-8b9c0d1e2f3a");
        assert!(RecordId::parse("").is_err());
        assert!(RecordId::parse(&"x".repeat(MAX_RECORD_ID_LEN + 1)).is_err());
    }

    #[test]
    fn test_record_id_opaque() {
        // Not a UUID, still a well-formed id.
        let id: RecordId = "nonexistent-id".parse().unwrap();
        assert_eq!(id.to_string(), "nonexistent-id");
    }

    #[test]
    fn test_record_id_debug() {
        let id = RecordId::new("abc");
        assert_eq!(format!("{:?}", id), "RecordId(abc)");
    }

    #[test]
    fn test_record_serializes_fingerprint_as_hex() {
        let record = Record {
            id: RecordId::new("id-1"),
            fingerprint: Fingerprint::from_bytes([0xab; 32]),
            issuer: "Acme".into(),
            issued_at: 1_704_844_800_000,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["id"], "id-1");
        assert_eq!(json["fingerprint"], "ab".repeat(32));
        assert_eq!(json["issued_at"], 1_704_844_800_000i64);
    }
}
