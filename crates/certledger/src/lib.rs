//! # Certificate Ledger
//!
//! Tamper-evident records for certificates. The ledger keeps only a
//! fingerprint of each issued certificate and can later tell whether a
//! presented certificate matches what was issued.
//!
//! ## Overview
//!
//! - **Issue**: canonicalize the certificate, hash it with SHA-256, and
//!   append the fingerprint to the record store under a fresh random id.
//! - **Verify**: recompute the fingerprint of a presented certificate and
//!   compare it with the one recorded under the given id.
//!
//! ## Key Concepts
//!
//! - **Canonical form**: `recipient|course|date|issuer`, each value trimmed
//!   and lower-cased, so case and surrounding whitespace do not matter.
//! - **Record**: id, fingerprint, issuer, issue time. Never updated or deleted.
//! - **Verdicts**: authentic, tampered, or not found. An unknown id is a
//!   verdict, not an error.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use certledger::{Document, Ledger, LedgerConfig};
//!
//! async fn example() {
//!     let ledger = certledger::open(&LedgerConfig::sqlite("certificate_ledger.db")).unwrap();
//!
//!     let cert = Document::new()
//!         .with("recipient", "Bob Lee")
//!         .with("course", "Systems Design")
//!         .with("date", "2024-01-10")
//!         .with("issuer", "Acme");
//!
//!     let receipt = ledger.issue(&cert).await.unwrap();
//!     let verdict = ledger.verify(&receipt.id, &cert).await.unwrap();
//!     assert!(verdict.is_authentic());
//! }
//! ```
//!
//! ## Re-exports
//!
//! - `certledger::core` - Documents, canonicalization, fingerprints
//! - `certledger::store` - Record stores (SQLite, in-memory)

pub mod config;
pub mod error;
pub mod ledger;

// Re-export component crates
pub use certledger_core as core;
pub use certledger_store as store;

// Re-export main types for convenience
pub use config::{LedgerConfig, StorageConfig};
pub use error::{ErrorKind, LedgerError, Result};
pub use ledger::{open, IssueReceipt, Ledger, Verification};

// Re-export commonly used core types
pub use certledger_core::{
    Certificate, Document, Field, Fingerprint, Record, RecordId, ValidationError,
};
pub use certledger_store::{MemoryStore, RecordStore, SqliteStore, StoreError};
