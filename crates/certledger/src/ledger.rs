//! The Ledger: issuance and verification over a record store.
//!
//! Issuance is validate → canonicalize → fingerprint → append.
//! Verification validates the candidate, fingerprints it and compares the
//! result with the stored fingerprint.

use std::sync::Arc;

use serde::Serialize;

use certledger_core::{
    fingerprint, validate_document, Document, Fingerprint, Record, RecordId, ValidationError,
};
use certledger_store::{MemoryStore, RecordStore, SqliteStore};

use crate::config::{LedgerConfig, StorageConfig};
use crate::error::Result;

/// What issuance hands back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssueReceipt {
    /// Identifier the certificate holder presents at verification.
    pub id: RecordId,
    /// Fingerprint recorded on the ledger.
    pub fingerprint: Fingerprint,
    /// Issuance time, Unix milliseconds.
    pub issued_at: i64,
    /// Recipient as supplied, echoed for display.
    pub recipient: String,
}

/// Outcome of verifying a document against the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum Verification {
    /// The document matches what was issued under this id.
    Authentic {
        stored: Fingerprint,
        computed: Fingerprint,
        issued_at: i64,
        issuer: String,
    },
    /// A record exists, but the document does not match it.
    Tampered {
        stored: Fingerprint,
        computed: Fingerprint,
    },
    /// Nothing was ever issued under this id.
    NotFound,
}

impl Verification {
    pub fn is_authentic(&self) -> bool {
        matches!(self, Verification::Authentic { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Verification::NotFound)
    }

    /// Fingerprint on the ledger, if a record was found.
    pub fn stored_fingerprint(&self) -> Option<&Fingerprint> {
        match self {
            Verification::Authentic { stored, .. } | Verification::Tampered { stored, .. } => {
                Some(stored)
            }
            Verification::NotFound => None,
        }
    }

    /// Fingerprint of the presented document, if a record was found.
    pub fn computed_fingerprint(&self) -> Option<&Fingerprint> {
        match self {
            Verification::Authentic { computed, .. }
            | Verification::Tampered { computed, .. } => Some(computed),
            Verification::NotFound => None,
        }
    }

    /// Issuance time; only meaningful for an authentic document.
    pub fn issued_at(&self) -> Option<i64> {
        match self {
            Verification::Authentic { issued_at, .. } => Some(*issued_at),
            _ => None,
        }
    }

    /// Human-readable verdict.
    pub fn message(&self) -> &'static str {
        match self {
            Verification::Authentic { .. } => {
                "VERIFIED: The certificate is authentic and has not been tampered with."
            }
            Verification::Tampered { .. } => {
                "FAILED: The certificate data has been altered since issuance."
            }
            Verification::NotFound => "Certificate ID not found on the ledger.",
        }
    }
}

/// The main Ledger struct.
///
/// Owns a handle to its record store; there is no global instance. Cheap
/// to share behind an `Arc`, and every method takes `&self`, so issuance
/// and verification may run concurrently.
pub struct Ledger<S: RecordStore> {
    store: S,
}

impl<S: RecordStore> Ledger<S> {
    /// Create a ledger over an existing store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Get the store reference.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Issue a certificate: record its fingerprint under a fresh id.
    ///
    /// Validation happens before anything touches the store, so a rejected
    /// document never leaves a record behind.
    pub async fn issue(&self, document: &Document) -> Result<IssueReceipt> {
        let cert = validate_document(document)?;
        let fp = fingerprint(&cert);

        let record = self.store.append(&fp, &cert.issuer).await?;
        tracing::debug!(id = %record.id, fingerprint = %fp, "issued certificate");

        Ok(IssueReceipt {
            id: record.id,
            fingerprint: record.fingerprint,
            issued_at: record.issued_at,
            recipient: cert.recipient,
        })
    }

    /// Verify a presented document against the record issued under `id`.
    pub async fn verify(&self, id: &RecordId, document: &Document) -> Result<Verification> {
        if id.as_str().is_empty() {
            return Err(ValidationError::MissingRecordId.into());
        }
        let cert = validate_document(document)?;
        let computed = fingerprint(&cert);

        let Some(record) = self.store.get(id).await? else {
            tracing::debug!(id = %id, "verification for unknown record");
            return Ok(Verification::NotFound);
        };

        if record.fingerprint == computed {
            tracing::debug!(id = %id, "certificate verified");
            Ok(Verification::Authentic {
                stored: record.fingerprint,
                computed,
                issued_at: record.issued_at,
                issuer: record.issuer,
            })
        } else {
            tracing::warn!(
                id = %id,
                stored = %record.fingerprint,
                computed = %computed,
                "certificate does not match ledger record"
            );
            Ok(Verification::Tampered {
                stored: record.fingerprint,
                computed,
            })
        }
    }

    /// Look up a record by id.
    pub async fn record(&self, id: &RecordId) -> Result<Option<Record>> {
        Ok(self.store.get(id).await?)
    }

    /// Number of records issued.
    pub async fn record_count(&self) -> Result<u64> {
        Ok(self.store.count().await?)
    }
}

/// Open a ledger from configuration.
pub fn open(config: &LedgerConfig) -> Result<Ledger<Arc<dyn RecordStore>>> {
    config.validate()?;

    let store: Arc<dyn RecordStore> = match &config.storage {
        StorageConfig::Memory => {
            Arc::new(MemoryStore::new().with_max_id_attempts(config.max_id_attempts))
        }
        StorageConfig::Sqlite { path } => {
            Arc::new(SqliteStore::open(path)?.with_max_id_attempts(config.max_id_attempts))
        }
    };

    Ok(Ledger::new(store))
}
