//! RecordStore trait: the abstract interface for record persistence.
//!
//! The ledger is storage-agnostic. Implementations include SQLite
//! (durable) and in-memory (for tests).

use std::sync::Arc;

use async_trait::async_trait;
use certledger_core::{Fingerprint, Record, RecordId};

use crate::error::Result;

/// Default number of fresh identifiers tried before giving up on a collision.
pub const DEFAULT_MAX_ID_ATTEMPTS: u32 = 3;

/// Result of trying to place one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertResult {
    /// The record was written.
    Inserted,
    /// A record with this id already exists; nothing was written.
    Collision,
}

/// The RecordStore trait: an append-only map from id to record.
///
/// # Contract
///
/// - `append` allocates a fresh id, stamps the current time and writes the
///   record atomically. A record that `append` returned is visible to every
///   later `get`.
/// - Ids are never reused. A generated id that is already taken is detected
///   by the write itself and retried with a new id, never overwritten.
/// - Records are never updated or deleted; there is no API for it.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Append a new record for `fingerprint`, returning what was stored.
    async fn append(&self, fingerprint: &Fingerprint, issuer: &str) -> Result<Record>;

    /// Look up a record by id.
    async fn get(&self, id: &RecordId) -> Result<Option<Record>>;

    /// Check whether a record exists.
    async fn contains(&self, id: &RecordId) -> Result<bool>;

    /// Number of records in the store.
    async fn count(&self) -> Result<u64>;
}

#[async_trait]
impl<S: RecordStore + ?Sized> RecordStore for Arc<S> {
    async fn append(&self, fingerprint: &Fingerprint, issuer: &str) -> Result<Record> {
        (**self).append(fingerprint, issuer).await
    }

    async fn get(&self, id: &RecordId) -> Result<Option<Record>> {
        (**self).get(id).await
    }

    async fn contains(&self, id: &RecordId) -> Result<bool> {
        (**self).contains(id).await
    }

    async fn count(&self) -> Result<u64> {
        (**self).count().await
    }
}

#[async_trait]
impl<S: RecordStore + ?Sized> RecordStore for Box<S> {
    async fn append(&self, fingerprint: &Fingerprint, issuer: &str) -> Result<Record> {
        (**self).append(fingerprint, issuer).await
    }

    async fn get(&self, id: &RecordId) -> Result<Option<Record>> {
        (**self).get(id).await
    }

    async fn contains(&self, id: &RecordId) -> Result<bool> {
        (**self).contains(id).await
    }

    async fn count(&self) -> Result<u64> {
        (**self).count().await
    }
}
