//! Connection pool managing read/write connections.

pub mod pragmas;
pub mod read_pool;
pub mod write_connection;

use std::path::{Path, PathBuf};

use slc_core::errors::SlcResult;

use crate::migrations;

pub use read_pool::ReadPool;
pub use write_connection::WriteConnection;

/// One write connection plus, for file-backed databases, a read pool.
pub struct ConnectionPool {
    pub writer: WriteConnection,
    /// `None` in memory: separate in-memory connections are separate databases,
    /// so reads go through the writer.
    pub readers: Option<ReadPool>,
    pub db_path: Option<PathBuf>,
}

impl ConnectionPool {
    /// Open the writer, migrate, then open readers against the migrated file.
    pub fn open(path: &Path, read_pool_size: usize) -> SlcResult<Self> {
        let writer = WriteConnection::open(path)?;
        writer.with_conn(migrations::run_migrations)?;
        let readers = ReadPool::open(path, read_pool_size)?;
        Ok(Self {
            writer,
            readers: Some(readers),
            db_path: Some(path.to_path_buf()),
        })
    }

    pub fn open_in_memory() -> SlcResult<Self> {
        let writer = WriteConnection::open_in_memory()?;
        writer.with_conn(migrations::run_migrations)?;
        Ok(Self {
            writer,
            readers: None,
            db_path: None,
        })
    }
}
