//! Canonical form of a certificate.
//!
//! The canonical form is the UTF-8 encoding of
//! `recipient|course|date|issuer`, where every value has been trimmed of
//! surrounding whitespace and lower-cased. Field order is fixed.
//!
//! **FROZEN**: every fingerprint ever issued was computed over this exact
//! byte layout. Two known quirks are kept on purpose:
//!
//! - The date is lower-cased along with every other field. The legacy
//!   ledger only trimmed the date, so its fingerprints differ for any
//!   date containing letters (e.g. `2024-03-01T00:00:00Z`).
//! - The delimiter is not escaped, so a value containing `|` can shift
//!   into its neighbour and two different certificates may share a
//!   canonical form.

use crate::document::{Certificate, Document, Field};
use crate::error::ValidationError;
use crate::validation::validate_document;

/// Separator placed between normalized field values.
pub const DELIMITER: char = '|';

/// Normalize a single field value: trim, then lower-case.
pub fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Canonical bytes for an already validated certificate.
pub fn canonical_bytes(cert: &Certificate) -> Vec<u8> {
    let mut out = String::new();
    for (i, field) in Field::ALL.iter().enumerate() {
        if i > 0 {
            out.push(DELIMITER);
        }
        out.push_str(&normalize(cert.value(*field)));
    }
    out.into_bytes()
}

/// Validate a document and return its canonical bytes.
pub fn canonicalize(document: &Document) -> Result<Vec<u8>, ValidationError> {
    let cert = validate_document(document)?;
    Ok(canonical_bytes(&cert))
}
