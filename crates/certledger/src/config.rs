//! Ledger configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use certledger_store::DEFAULT_MAX_ID_ATTEMPTS;

use crate::error::{LedgerError, Result};

/// Default database file, kept from the original deployment.
pub const DEFAULT_DATABASE_PATH: &str = "certificate_ledger.db";

/// Where records are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "backend", rename_all = "lowercase")]
pub enum StorageConfig {
    /// Volatile, for tests and demos.
    Memory,
    /// A SQLite database file.
    Sqlite { path: PathBuf },
}

impl Default for StorageConfig {
    fn default() -> Self {
        StorageConfig::Sqlite {
            path: PathBuf::from(DEFAULT_DATABASE_PATH),
        }
    }
}

/// Configuration for the Ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    /// Storage backend.
    pub storage: StorageConfig,
    /// Fresh ids drawn per issuance before a collision is reported.
    pub max_id_attempts: u32,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            storage: StorageConfig::default(),
            max_id_attempts: DEFAULT_MAX_ID_ATTEMPTS,
        }
    }
}

impl LedgerConfig {
    /// An in-memory configuration.
    pub fn memory() -> Self {
        Self {
            storage: StorageConfig::Memory,
            ..Self::default()
        }
    }

    /// A SQLite configuration at `path`.
    pub fn sqlite(path: impl Into<PathBuf>) -> Self {
        Self {
            storage: StorageConfig::Sqlite { path: path.into() },
            ..Self::default()
        }
    }

    /// Parse a JSON configuration. Missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| LedgerError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check values that serde cannot.
    pub fn validate(&self) -> Result<()> {
        if self.max_id_attempts == 0 {
            return Err(LedgerError::Config(
                "max_id_attempts must be at least 1".into(),
            ));
        }
        if let StorageConfig::Sqlite { path } = &self.storage {
            if path.as_os_str().is_empty() {
                return Err(LedgerError::Config("sqlite path is empty".into()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LedgerConfig::default();
        assert_eq!(config.max_id_attempts, 3);
        assert_eq!(
            config.storage,
            StorageConfig::Sqlite {
                path: PathBuf::from("certificate_ledger.db")
            }
        );
    }

    #[test]
    fn test_from_json() {
        let config = LedgerConfig::from_json(
            r#"{"storage":{"backend":"sqlite","path":"/var/lib/ledger.db"},"max_id_attempts":5}"#,
        )
        .unwrap();
        assert_eq!(config, {
            let mut expected = LedgerConfig::sqlite("/var/lib/ledger.db");
            expected.max_id_attempts = 5;
            expected
        });
    }

    #[test]
    fn test_from_json_defaults() {
        let config = LedgerConfig::from_json(r#"{"storage":{"backend":"memory"}}"#).unwrap();
        assert_eq!(config, LedgerConfig::memory());

        let config = LedgerConfig::from_json("{}").unwrap();
        assert_eq!(config, LedgerConfig::default());
    }

    #[test]
    fn test_from_json_rejects_zero_attempts() {
        let err = LedgerConfig::from_json(r#"{"max_id_attempts":0}"#).unwrap_err();
        assert!(matches!(err, LedgerError::Config(_)));
    }

    #[test]
    fn test_from_json_rejects_unknown_backend() {
        assert!(LedgerConfig::from_json(r#"{"storage":{"backend":"s3"}}"#).is_err());
    }
}
