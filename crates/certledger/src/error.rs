//! Error types for the Ledger.

use certledger_core::ValidationError;
use certledger_store::StoreError;
use thiserror::Error;

/// Errors that can occur during Ledger operations.
///
/// An unknown record id is not an error; `verify` reports it as a
/// [`Verification::NotFound`](crate::Verification::NotFound) verdict.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// The document is missing required fields or is not well-formed.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The record store failed.
    #[error("storage error: {0}")]
    Storage(#[from] StoreError),

    /// The configuration could not be read.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Coarse classification of a [`LedgerError`] for callers that map errors
/// onto responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Storage,
    IdentifierCollision,
    Config,
}

impl LedgerError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LedgerError::Validation(_) => ErrorKind::Validation,
            LedgerError::Storage(e) if e.is_collision() => ErrorKind::IdentifierCollision,
            LedgerError::Storage(_) => ErrorKind::Storage,
            LedgerError::Config(_) => ErrorKind::Config,
        }
    }
}

/// Result type for Ledger operations.
pub type Result<T> = std::result::Result<T, LedgerError>;
