//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use std::sync::Arc;

use certledger::Ledger;
use certledger_core::{Document, FixedClock, IdGenerator, RecordId, SequentialIdGenerator};
use certledger_store::MemoryStore;

/// Issuance time used by fixtures: 2024-01-10T00:00:00Z.
pub const FIXTURE_TIME: i64 = 1_704_844_800_000;

/// A ledger over an in-memory store with deterministic ids and time.
pub struct TestFixture {
    pub ledger: Ledger<MemoryStore>,
}

impl TestFixture {
    /// Ids are `cert-1`, `cert-2`, ...; every record is stamped [`FIXTURE_TIME`].
    pub fn new() -> Self {
        Self::with_id_generator(Arc::new(SequentialIdGenerator::new("cert")))
    }

    /// Use a specific id source, e.g. a [`ScriptedIds`] to force collisions.
    pub fn with_id_generator(ids: Arc<dyn IdGenerator>) -> Self {
        let store = MemoryStore::new()
            .with_id_generator(ids)
            .with_clock(Arc::new(FixedClock(FIXTURE_TIME)));
        Self {
            ledger: Ledger::new(store),
        }
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a complete certificate document.
pub fn certificate(recipient: &str, course: &str, date: &str, issuer: &str) -> Document {
    Document::new()
        .with("recipient", recipient)
        .with("course", course)
        .with("date", date)
        .with("issuer", issuer)
}

/// The reference certificate used throughout the tests.
pub fn bob_lee() -> Document {
    certificate("Bob Lee", "Systems Design", "2024-01-10", "Acme")
}

/// Hands out a fixed list of ids in order, then repeats the last one.
pub struct ScriptedIds {
    ids: Vec<RecordId>,
    next: std::sync::atomic::AtomicUsize,
}

impl ScriptedIds {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let ids: Vec<RecordId> = ids.into_iter().map(RecordId::new).collect();
        assert!(!ids.is_empty(), "ScriptedIds needs at least one id");
        Self {
            ids,
            next: std::sync::atomic::AtomicUsize::new(0),
        }
    }
}

impl IdGenerator for ScriptedIds {
    fn generate(&self) -> RecordId {
        let i = self
            .next
            .fetch_add(1, std::sync::atomic::Ordering::Relaxed)
            .min(self.ids.len() - 1);
        self.ids[i].clone()
    }
}
