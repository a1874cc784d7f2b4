//! Fingerprinting: SHA-256 over canonical bytes.
//!
//! Fingerprints are unkeyed and deterministic. Anyone holding a certificate
//! can recompute its fingerprint; this is integrity checking, not secrecy.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;

use crate::canonical::canonical_bytes;
use crate::document::{Certificate, Document};
use crate::error::{CoreError, ValidationError};
use crate::validation::validate_document;

/// Length of a fingerprint in bytes.
pub const FINGERPRINT_LEN: usize = 32;

/// Length of a fingerprint rendered as hex.
pub const FINGERPRINT_HEX_LEN: usize = FINGERPRINT_LEN * 2;

/// A 256-bit SHA-256 digest of a canonical form.
///
/// Rendered as 64 lowercase hex characters for storage and transport.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint(pub [u8; FINGERPRINT_LEN]);

impl Fingerprint {
    /// Hash arbitrary bytes.
    pub fn compute(data: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(data);
        Self(hasher.finalize().into())
    }

    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; FINGERPRINT_LEN]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; FINGERPRINT_LEN] {
        &self.0
    }

    /// Convert to lowercase hex.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from hex. Upper-case digits are accepted.
    pub fn from_hex(s: &str) -> Result<Self, CoreError> {
        let bytes = hex::decode(s).map_err(|e| CoreError::InvalidFingerprint(e.to_string()))?;
        let arr: [u8; FINGERPRINT_LEN] = bytes.try_into().map_err(|b: Vec<u8>| {
            CoreError::InvalidFingerprint(format!(
                "expected {} bytes, got {}",
                FINGERPRINT_LEN,
                b.len()
            ))
        })?;
        Ok(Self(arr))
    }
}

/// Fingerprint of a validated certificate.
pub fn fingerprint(cert: &Certificate) -> Fingerprint {
    Fingerprint::compute(&canonical_bytes(cert))
}

/// Validate a document and fingerprint it.
pub fn fingerprint_document(document: &Document) -> Result<Fingerprint, ValidationError> {
    let cert = validate_document(document)?;
    Ok(fingerprint(&cert))
}

impl fmt::Debug for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fingerprint({}...)", &self.to_hex()[..16])
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Fingerprint {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl AsRef<[u8]> for Fingerprint {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; FINGERPRINT_LEN]> for Fingerprint {
    fn from(bytes: [u8; FINGERPRINT_LEN]) -> Self {
        Self(bytes)
    }
}

impl Serialize for Fingerprint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Fingerprint {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
