//! Schema migrations, tracked with `PRAGMA user_version`.

pub mod v001_initial;

use rusqlite::Connection;

use slc_core::errors::{SlcResult, StoreError};

use crate::to_storage_err;

/// Ordered `(version, sql)` pairs. Append only.
const MIGRATIONS: &[(u32, &str)] = &[(1, v001_initial::MIGRATION_SQL)];

/// Highest schema version this build knows about.
pub const LATEST_VERSION: u32 = 1;

/// Current schema version of the database.
pub fn current_version(conn: &Connection) -> SlcResult<u32> {
    conn.pragma_query_value(None, "user_version", |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))
}

/// Apply every migration newer than the database's `user_version`.
/// Each one runs in its own transaction together with the version bump.
pub fn run_migrations(conn: &Connection) -> SlcResult<()> {
    let current = current_version(conn)?;
    for &(version, sql) in MIGRATIONS {
        if version <= current {
            continue;
        }
        let batch = format!("BEGIN;\n{sql}\nPRAGMA user_version = {version};\nCOMMIT;");
        if let Err(e) = conn.execute_batch(&batch) {
            let _ = conn.execute_batch("ROLLBACK;");
            return Err(StoreError::MigrationFailed {
                version,
                message: e.to_string(),
            }
            .into());
        }
        tracing::info!(version = version, "applied migration");
    }
    Ok(())
}
