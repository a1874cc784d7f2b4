//! # Certificate Ledger Store
//!
//! Append-only storage for ledger records. Provides a trait-based
//! interface with SQLite and in-memory implementations.
//!
//! ## Key Types
//!
//! - [`RecordStore`] - The async trait for all storage operations
//! - [`SqliteStore`] - SQLite-based durable storage
//! - [`MemoryStore`] - In-memory storage for tests
//! - [`StoreError`] - Storage failures, including identifier collisions
//!
//! ## Usage
//!
//! ```rust,no_run
//! use certledger_store::{RecordStore, SqliteStore};
//! use certledger_core::Fingerprint;
//!
//! async fn example() {
//!     let store = SqliteStore::open("certificate_ledger.db").unwrap();
//!
//!     let fingerprint = Fingerprint::compute(b"bob lee|systems design|2024-01-10|acme");
//!     let record = store.append(&fingerprint, "Acme").await.unwrap();
//!     assert!(store.get(&record.id).await.unwrap().is_some());
//! }
//! ```
//!
//! ## Design Notes
//!
//! - **Append-only**: no update or delete is exposed, and the SQLite schema
//!   rejects both with triggers.
//! - **Insert-if-absent**: ids are placed with a single conflict-checked
//!   insert; a taken id is retried with a fresh one, never overwritten.
//! - **Injected sources**: id generation and time are trait objects, so
//!   tests can make both deterministic.

mod alloc;
pub mod error;
pub mod memory;
pub mod migration;
pub mod sqlite;
pub mod traits;

pub use error::{Result, StoreError};
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
pub use traits::{InsertResult, RecordStore, DEFAULT_MAX_ID_ATTEMPTS};
