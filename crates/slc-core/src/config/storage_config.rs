//! State store configuration.

use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_DB_PATH, DEFAULT_READ_POOL_SIZE, MAX_READ_POOL_SIZE};

/// Where class state lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// One shared in-process state for every caller, lost on restart.
    Memory,
    /// Per-user records in a SQLite file.
    Sqlite,
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "sqlite" => Ok(Self::Sqlite),
            other => Err(format!("unknown storage backend {other:?} (use memory|sqlite)")),
        }
    }
}

/// Configuration for the state store.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StorageConfig {
    /// `memory` or `sqlite`. Default: `sqlite`.
    pub backend: Option<String>,
    /// SQLite database file. Default: `slc.db`.
    pub path: Option<String>,
    /// Read connections kept open. Default: 4, clamped to 8.
    pub read_pool_size: Option<usize>,
}

impl StorageConfig {
    /// Returns the effective backend. Unknown values are rejected by
    /// `SlcConfig::validate` before this is called.
    pub fn effective_backend(&self) -> StorageBackend {
        self.backend
            .as_deref()
            .and_then(|b| b.parse().ok())
            .unwrap_or(StorageBackend::Sqlite)
    }

    pub fn effective_path(&self) -> PathBuf {
        PathBuf::from(self.path.as_deref().unwrap_or(DEFAULT_DB_PATH))
    }

    pub fn effective_read_pool_size(&self) -> usize {
        self.read_pool_size
            .unwrap_or(DEFAULT_READ_POOL_SIZE)
            .clamp(1, MAX_READ_POOL_SIZE)
    }
}
