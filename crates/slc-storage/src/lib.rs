//! # slc-storage
//!
//! SQLite-backed `IStateStore`: one row per user, property collections
//! stored as JSON arrays. Single write connection, round-robin read pool,
//! `user_version`-tracked migrations.

pub mod engine;
pub mod migrations;
pub mod pool;
pub mod queries;

pub use engine::StateStoreEngine;

use slc_core::errors::{SlcError, StoreError};

/// Wrap a SQLite failure message as a store error.
pub(crate) fn to_storage_err(message: String) -> SlcError {
    StoreError::Sqlite { message }.into()
}
