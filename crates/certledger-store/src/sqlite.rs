//! SQLite implementation of the RecordStore trait.
//!
//! This is the durable backend. It uses rusqlite with bundled SQLite,
//! wrapped in async via tokio::spawn_blocking.

use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension};

use certledger_core::{
    Clock, Fingerprint, IdGenerator, RandomIdGenerator, Record, RecordId, SystemClock,
};

use crate::alloc::allocate;
use crate::error::{Result, StoreError};
use crate::migration;
use crate::traits::{InsertResult, RecordStore, DEFAULT_MAX_ID_ATTEMPTS};

/// SQLite-based record store.
///
/// Thread-safe via an internal Mutex: writes from concurrent callers are
/// serialized on the connection. All operations use spawn_blocking to
/// avoid blocking the async runtime.
pub struct SqliteStore {
    conn: Arc<Mutex<Connection>>,
    ids: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
    max_id_attempts: u32,
}

impl SqliteStore {
    /// Open a SQLite database at the given path.
    ///
    /// Creates the file and runs migrations if needed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut conn = Connection::open(path)?;
        migration::migrate(&mut conn)?;
        tracing::info!(path = %path.display(), "opened sqlite record store");
        Ok(Self::from_connection(conn))
    }

    /// Open an in-memory SQLite database.
    ///
    /// Useful for testing.
    pub fn open_memory() -> Result<Self> {
        let mut conn = Connection::open_in_memory()?;
        migration::migrate(&mut conn)?;
        Ok(Self::from_connection(conn))
    }

    fn from_connection(conn: Connection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
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

    /// Run `f` against the connection on the blocking pool.
    async fn blocking<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let conn = lock(&conn)?;
            f(&conn)
        })
        .await
        .map_err(|e| StoreError::Background(e.to_string()))?
    }
}

fn lock(conn: &Mutex<Connection>) -> Result<MutexGuard<'_, Connection>> {
    conn.lock()
        .map_err(|e| StoreError::Poisoned(e.to_string()))
}

/// Insert one record unless its id is taken.
///
/// A single statement, so the database enforces uniqueness and the write is
/// all-or-nothing.
fn insert_record(conn: &Connection, record: &Record) -> Result<InsertResult> {
    let changed = conn.execute(
        "INSERT INTO records (id, fingerprint, issuer, issued_at)
         VALUES (?1, ?2, ?3, ?4)
         ON CONFLICT(id) DO NOTHING",
        params![
            record.id.as_str(),
            record.fingerprint.to_hex(),
            record.issuer,
            record.issued_at,
        ],
    )?;

    Ok(if changed == 0 {
        InsertResult::Collision
    } else {
        InsertResult::Inserted
    })
}

/// Raw row contents, before fingerprint parsing.
struct RecordRow {
    id: String,
    fingerprint: String,
    issuer: String,
    issued_at: i64,
}

impl RecordRow {
    fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            fingerprint: row.get("fingerprint")?,
            issuer: row.get("issuer")?,
            issued_at: row.get("issued_at")?,
        })
    }

    fn into_record(self) -> Result<Record> {
        let fingerprint = Fingerprint::from_hex(&self.fingerprint).map_err(|e| {
            StoreError::InvalidData(format!("record {}: {}", self.id, e))
        })?;
        Ok(Record {
            id: RecordId::new(self.id),
            fingerprint,
            issuer: self.issuer,
            issued_at: self.issued_at,
        })
    }
}

#[async_trait]
impl RecordStore for SqliteStore {
    async fn append(&self, fingerprint: &Fingerprint, issuer: &str) -> Result<Record> {
        let fingerprint = *fingerprint;
        let issuer = issuer.to_owned();
        let ids = Arc::clone(&self.ids);
        let issued_at = self.clock.now_millis();
        let max_attempts = self.max_id_attempts;

        self.blocking(move |conn| {
            let mut record = Record {
                id: RecordId::new(String::new()),
                fingerprint,
                issuer,
                issued_at,
            };
            let id = allocate(ids.as_ref(), max_attempts, |id| {
                record.id = id.clone();
                insert_record(conn, &record)
            })?;
            record.id = id;
            Ok(record)
        })
        .await
    }

    async fn get(&self, id: &RecordId) -> Result<Option<Record>> {
        let id = id.clone();

        self.blocking(move |conn| {
            let row = conn
                .query_row(
                    "SELECT id, fingerprint, issuer, issued_at FROM records WHERE id = ?1",
                    params![id.as_str()],
                    RecordRow::from_row,
                )
                .optional()?;
            row.map(RecordRow::into_record).transpose()
        })
        .await
    }

    async fn contains(&self, id: &RecordId) -> Result<bool> {
        let id = id.clone();

        self.blocking(move |conn| {
            let found: Option<i64> = conn
                .query_row(
                    "SELECT 1 FROM records WHERE id = ?1",
                    params![id.as_str()],
                    |row| row.get(0),
                )
                .optional()?;
            Ok(found.is_some())
        })
        .await
    }

    async fn count(&self) -> Result<u64> {
        self.blocking(|conn| {
            let n: i64 = conn.query_row("SELECT COUNT(*) FROM records", [], |row| row.get(0))?;
            Ok(n as u64)
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use certledger_core::{FixedClock, SequentialIdGenerator};

    fn fp(byte: u8) -> Fingerprint {
        Fingerprint::from_bytes([byte; 32])
    }

    fn test_store() -> SqliteStore {
        SqliteStore::open_memory()
            .unwrap()
            .with_id_generator(Arc::new(SequentialIdGenerator::new("cert")))
            .with_clock(Arc::new(FixedClock(1_704_844_800_000)))
    }

    #[tokio::test]
    async fn test_append_and_get() {
        let store = test_store();

        let record = store.append(&fp(0xaa), "Acme").await.unwrap();
        assert_eq!(record.id.as_str(), "cert-1");
        assert_eq!(record.issued_at, 1_704_844_800_000);

        let fetched = store.get(&record.id).await.unwrap().unwrap();
        assert_eq!(fetched, record);
    }

    #[tokio::test]
    async fn test_get_missing() {
        let store = test_store();
        let missing = store.get(&RecordId::new("nonexistent-id")).await.unwrap();
        assert!(missing.is_none());
        assert!(!store.contains(&RecordId::new("nonexistent-id")).await.unwrap());
    }

    #[tokio::test]
    async fn test_same_fingerprint_gets_new_id() {
        let store = test_store();

        let r1 = store.append(&fp(0x01), "Acme").await.unwrap();
        let r2 = store.append(&fp(0x01), "Acme").await.unwrap();

        assert_ne!(r1.id, r2.id);
        assert_eq!(store.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_collision_regenerates() {
        let store = test_store();
        store.append(&fp(0x01), "Acme").await.unwrap(); // cert-1

        // A second store on the same connection restarting the sequence
        // collides on cert-1 and moves on to cert-2.
        let rival = SqliteStore {
            conn: Arc::clone(&store.conn),
            ids: Arc::new(SequentialIdGenerator::new("cert")),
            clock: Arc::new(FixedClock(0)),
            max_id_attempts: 3,
        };
        let record = rival.append(&fp(0x02), "Other").await.unwrap();
        assert_eq!(record.id.as_str(), "cert-2");

        // The original record is untouched.
        let original = store.get(&RecordId::new("cert-1")).await.unwrap().unwrap();
        assert_eq!(original.fingerprint, fp(0x01));
        assert_eq!(original.issuer, "Acme");
    }

    #[tokio::test]
    async fn test_collision_exhausted() {
        let store = test_store();
        store.append(&fp(0x01), "Acme").await.unwrap();

        let rival = SqliteStore {
            conn: Arc::clone(&store.conn),
            ids: Arc::new(SequentialIdGenerator::new("cert")),
            clock: Arc::new(FixedClock(0)),
            max_id_attempts: 1,
        };
        let err = rival.append(&fp(0x02), "Other").await.unwrap_err();
        assert!(err.is_collision());
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_corrupt_fingerprint_is_invalid_data() {
        let store = test_store();
        {
            let conn = store.conn.lock().unwrap();
            conn.execute(
                "INSERT INTO records (id, fingerprint, issuer, issued_at) VALUES ('bad', ?1, 'Acme', 0)",
                params!["z".repeat(64)],
            )
            .unwrap();
        }

        let err = store.get(&RecordId::new("bad")).await.unwrap_err();
        assert!(matches!(err, StoreError::InvalidData(_)));
    }

    #[tokio::test]
    async fn test_durable_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ledger.db");

        let id = {
            let store = SqliteStore::open(&path).unwrap();
            store.append(&fp(0x42), "Acme").await.unwrap().id
        };

        let reopened = SqliteStore::open(&path).unwrap();
        let record = reopened.get(&id).await.unwrap().unwrap();
        assert_eq!(record.fingerprint, fp(0x42));
        assert_eq!(reopened.count().await.unwrap(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_appends() {
        let store = Arc::new(SqliteStore::open_memory().unwrap());

        let handles: Vec<_> = (0..32u8)
            .map(|i| {
                let store = Arc::clone(&store);
                tokio::spawn(async move { store.append(&fp(i), "Acme").await })
            })
            .collect();

        let mut ids = std::collections::HashSet::new();
        for handle in handles {
            let record = handle.await.unwrap().unwrap();
            assert!(ids.insert(record.id));
        }
        assert_eq!(store.count().await.unwrap(), 32);
    }
}
