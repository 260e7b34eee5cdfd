//! State store errors.

use super::error_code::{self, SlcErrorCode};

/// Failures against the external state store. Never retried by the core.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("SQLite error: {message}")]
    Sqlite { message: String },

    #[error("migration failed at version {version}: {message}")]
    MigrationFailed { version: u32, message: String },

    #[error("corrupt record for user {user_id}: {message}")]
    CorruptRecord { user_id: String, message: String },

    #[error("lock poisoned: {message}")]
    LockPoisoned { message: String },
}

impl SlcErrorCode for StoreError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::CorruptRecord { .. } => error_code::CORRUPT_RECORD,
            Self::MigrationFailed { .. } => error_code::MIGRATION_FAILED,
            _ => error_code::STORE_ERROR,
        }
    }
}
