//! # Certificate Ledger Core
//!
//! Pure primitives for the certificate ledger: documents, canonicalization,
//! fingerprints and records.
//!
//! This crate contains no I/O and no storage.
//!
//! ## Key Types
//!
//! - [`Document`] - An unordered map of named text fields
//! - [`Certificate`] - A document holding the four required fields
//! - [`Fingerprint`] - SHA-256 of a certificate's canonical form
//! - [`RecordId`] - Opaque identifier of a ledger record
//! - [`Record`] - What the ledger keeps: id, fingerprint, issuer, time
//!
//! ## Canonicalization
//!
//! Values are trimmed, lower-cased and joined with `|` in the order
//! recipient, course, date, issuer. See [`canonical`].

pub mod canonical;
pub mod crypto;
pub mod document;
pub mod error;
pub mod ids;
pub mod types;
pub mod validation;

pub use canonical::{canonical_bytes, canonicalize, normalize, DELIMITER};
pub use crypto::{fingerprint, fingerprint_document, Fingerprint, FINGERPRINT_HEX_LEN};
pub use document::{Certificate, Document, Field};
pub use error::{CoreError, ValidationError};
pub use ids::{Clock, FixedClock, IdGenerator, RandomIdGenerator, SequentialIdGenerator, SystemClock};
pub use types::{Record, RecordId};
pub use validation::{missing_fields, validate_document};
