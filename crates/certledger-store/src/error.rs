//! Error types for the store module.

use certledger_core::RecordId;
use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database error from SQLite.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Every generated identifier was already taken.
    #[error("identifier collision: {id} already exists after {attempts} attempt(s)")]
    IdentifierCollision { id: RecordId, attempts: u32 },

    /// Invalid data in storage.
    #[error("invalid data: {0}")]
    InvalidData(String),

    /// Migration error.
    #[error("migration error: {0}")]
    Migration(String),

    /// A blocking storage task failed to complete.
    #[error("background task failed: {0}")]
    Background(String),

    /// A lock guarding the store was poisoned by a panicking writer.
    #[error("store lock poisoned: {0}")]
    Poisoned(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl StoreError {
    /// Whether this is an identifier collision rather than an I/O class failure.
    pub fn is_collision(&self) -> bool {
        matches!(self, StoreError::IdentifierCollision { .. })
    }
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
