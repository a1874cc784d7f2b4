//! In-memory implementation of the RecordStore trait.
//!
//! Primarily for testing. Same semantics as SQLite, no persistence.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use certledger_core::{
    Clock, Fingerprint, IdGenerator, RandomIdGenerator, Record, RecordId, SystemClock,
};

use crate::alloc::allocate;
use crate::error::{Result, StoreError};
use crate::traits::{InsertResult, RecordStore, DEFAULT_MAX_ID_ATTEMPTS};

/// In-memory record store.
///
/// All data is lost when the store is dropped. Thread-safe via RwLock; an
/// append holds the write lock across id allocation and insertion.
pub struct MemoryStore {
    records: RwLock<HashMap<RecordId, Record>>,
    ids: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
    max_id_attempts: u32,
}

impl MemoryStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
            ids: Arc::new(RandomIdGenerator),
            clock: Arc::new(SystemClock),
            max_id_attempts: DEFAULT_MAX_ID_ATTEMPTS,
        }
    }

    /// Replace the identifier source.
    pub fn with_id_generator(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    /// Replace the clock used to stamp records.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Set how many ids `append` draws before reporting a collision.
    pub fn with_max_id_attempts(mut self, attempts: u32) -> Self {
        self.max_id_attempts = attempts.max(1);
        self
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

fn poisoned<E: std::fmt::Display>(e: E) -> StoreError {
    StoreError::Poisoned(e.to_string())
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn append(&self, fingerprint: &Fingerprint, issuer: &str) -> Result<Record> {
        let mut records = self.records.write().map_err(poisoned)?;
        let issued_at = self.clock.now_millis();

        let id = allocate(self.ids.as_ref(), self.max_id_attempts, |id| {
            Ok(match records.entry(id.clone()) {
                Entry::Occupied(_) => InsertResult::Collision,
                Entry::Vacant(slot) => {
                    slot.insert(Record {
                        id: id.clone(),
                        fingerprint: *fingerprint,
                        issuer: issuer.to_owned(),
                        issued_at,
                    });
                    InsertResult::Inserted
                }
            })
        })?;

        records
            .get(&id)
            .cloned()
            .ok_or_else(|| StoreError::InvalidData(format!("record {} vanished after insert", id)))
    }

    async fn get(&self, id: &RecordId) -> Result<Option<Record>> {
        let records = self.records.read().map_err(poisoned)?;
        Ok(records.get(id).cloned())
    }

    async fn contains(&self, id: &RecordId) -> Result<bool> {
        let records = self.records.read().map_err(poisoned)?;
        Ok(records.contains_key(id))
    }

    async fn count(&self) -> Result<u64> {
        let records = self.records.read().map_err(poisoned)?;
        Ok(records.len() as u64)
    }
}
