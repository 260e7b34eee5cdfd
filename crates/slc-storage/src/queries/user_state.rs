//! Queries for the user_state table.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};

use slc_core::errors::{SlcResult, StoreError};
use slc_core::models::UserRecord;

use crate::to_storage_err;

/// Insert or replace the row for `record.user_id`, stamped with `updated_at`.
pub fn upsert_user_state(
    conn: &Connection,
    record: &UserRecord,
    updated_at: DateTime<Utc>,
) -> SlcResult<()> {
    conn.execute(
        "INSERT INTO user_state (
            user_id, class1_name, class2_name,
            class1_props, class2_props, general_props, none_props, updated_at
         ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
         ON CONFLICT(user_id) DO UPDATE SET
            class1_name = excluded.class1_name,
            class2_name = excluded.class2_name,
            class1_props = excluded.class1_props,
            class2_props = excluded.class2_props,
            general_props = excluded.general_props,
            none_props = excluded.none_props,
            updated_at = excluded.updated_at",
        params![
            record.user_id,
            record.class1_name,
            record.class2_name,
            encode(&record.class1_props)?,
            encode(&record.class2_props)?,
            encode(&record.general_props)?,
            encode(&record.none_props)?,
            updated_at.timestamp(),
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Raw column values of one row, before JSON decoding.
struct RawRow {
    class1_name: String,
    class2_name: String,
    class1_props: String,
    class2_props: String,
    general_props: String,
    none_props: String,
    updated_at: i64,
}

/// Load the row for `user_id`. A missing row is `Ok(None)`.
pub fn get_user_state(conn: &Connection, user_id: &str) -> SlcResult<Option<UserRecord>> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT class1_name, class2_name, class1_props, class2_props,
                    general_props, none_props, updated_at
             FROM user_state WHERE user_id = ?1",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    let raw = stmt
        .query_row(params![user_id], |row| {
            Ok(RawRow {
                class1_name: row.get(0)?,
                class2_name: row.get(1)?,
                class1_props: row.get(2)?,
                class2_props: row.get(3)?,
                general_props: row.get(4)?,
                none_props: row.get(5)?,
                updated_at: row.get(6)?,
            })
        })
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;

    let Some(raw) = raw else {
        return Ok(None);
    };

    Ok(Some(UserRecord {
        user_id: user_id.to_string(),
        class1_name: raw.class1_name,
        class2_name: raw.class2_name,
        class1_props: decode(user_id, "class1_props", &raw.class1_props)?,
        class2_props: decode(user_id, "class2_props", &raw.class2_props)?,
        general_props: decode(user_id, "general_props", &raw.general_props)?,
        none_props: decode(user_id, "none_props", &raw.none_props)?,
        updated_at: DateTime::from_timestamp(raw.updated_at, 0),
    }))
}

/// Delete the row for `user_id`. Returns whether a row existed.
pub fn delete_user_state(conn: &Connection, user_id: &str) -> SlcResult<bool> {
    let affected = conn
        .execute("DELETE FROM user_state WHERE user_id = ?1", params![user_id])
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(affected > 0)
}

/// Number of stored users.
pub fn count_user_states(conn: &Connection) -> SlcResult<u64> {
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM user_state", [], |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(count as u64)
}

fn encode(props: &[String]) -> SlcResult<String> {
    serde_json::to_string(props).map_err(|e| to_storage_err(format!("encode properties: {e}")))
}

fn decode(user_id: &str, column: &str, json: &str) -> SlcResult<Vec<String>> {
    serde_json::from_str(json).map_err(|e| {
        StoreError::CorruptRecord {
            user_id: user_id.to_string(),
            message: format!("{column}: {e}"),
        }
        .into()
    })
}
