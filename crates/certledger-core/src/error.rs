//! Error types for the certificate ledger core.

use thiserror::Error;

use crate::document::Field;

/// Errors raised when a document cannot be turned into a certificate.
///
/// These are always the caller's fault and are reported before any
/// record is read or written.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing required field: {0}")]
    MissingField(Field),

    #[error("field {0} must be a text value")]
    FieldNotText(Field),

    #[error("missing certificate id")]
    MissingRecordId,

    #[error("malformed document: {0}")]
    MalformedDocument(String),
}

/// Errors from parsing the textual form of core values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("invalid fingerprint: {0}")]
    InvalidFingerprint(String),

    #[error("invalid record id: {0}")]
    InvalidRecordId(String),
}
