//! StateStoreEngine: owns the ConnectionPool and implements IStateStore.

use std::path::Path;

use chrono::Utc;
use rusqlite::Connection;

use slc_core::constants::DEFAULT_READ_POOL_SIZE;
use slc_core::errors::SlcResult;
use slc_core::models::UserRecord;
use slc_core::traits::IStateStore;

use crate::pool::ConnectionPool;
use crate::queries::user_state;

pub struct StateStoreEngine {
    pool: ConnectionPool,
}

impl StateStoreEngine {
    /// Open a file-backed store with the default read pool size.
    pub fn open(path: &Path) -> SlcResult<Self> {
        Self::open_with_pool_size(path, DEFAULT_READ_POOL_SIZE)
    }

    pub fn open_with_pool_size(path: &Path, read_pool_size: usize) -> SlcResult<Self> {
        let pool = ConnectionPool::open(path, read_pool_size)?;
        tracing::info!(path = %path.display(), readers = read_pool_size, "state store opened");
        Ok(Self { pool })
    }

    /// Open an in-memory store (for testing). Nothing survives the process.
    pub fn open_in_memory() -> SlcResult<Self> {
        Ok(Self {
            pool: ConnectionPool::open_in_memory()?,
        })
    }

    /// Database file path, `None` in memory.
    pub fn path(&self) -> Option<&Path> {
        self.pool.db_path.as_deref()
    }

    /// Number of stored users.
    pub fn count(&self) -> SlcResult<u64> {
        self.with_reader(user_state::count_user_states)
    }

    /// Read through the pool when file-backed, through the writer in memory.
    fn with_reader<F, T>(&self, f: F) -> SlcResult<T>
    where
        F: FnOnce(&Connection) -> SlcResult<T>,
    {
        match &self.pool.readers {
            Some(readers) => readers.with_conn(f),
            None => self.pool.writer.with_conn(f),
        }
    }
}

impl IStateStore for StateStoreEngine {
    fn load(&self, user_id: &str) -> SlcResult<Option<UserRecord>> {
        self.with_reader(|conn| user_state::get_user_state(conn, user_id))
    }

    fn save(&self, record: &UserRecord) -> SlcResult<()> {
        self.pool
            .writer
            .with_conn(|conn| user_state::upsert_user_state(conn, record, Utc::now()))
    }

    fn delete(&self, user_id: &str) -> SlcResult<()> {
        let existed = self
            .pool
            .writer
            .with_conn(|conn| user_state::delete_user_state(conn, user_id))?;
        tracing::debug!(user_id, existed, "user state deleted");
        Ok(())
    }
}
