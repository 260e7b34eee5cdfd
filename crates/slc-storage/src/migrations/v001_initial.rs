//! V001: per-user state table.

pub const MIGRATION_SQL: &str = r#"
-- One row per user. Property collections are JSON arrays of strings;
-- normalization and uniqueness are re-applied when a row is loaded.
CREATE TABLE IF NOT EXISTS user_state (
    user_id TEXT PRIMARY KEY,
    class1_name TEXT NOT NULL DEFAULT '',
    class2_name TEXT NOT NULL DEFAULT '',
    class1_props TEXT NOT NULL DEFAULT '[]',
    class2_props TEXT NOT NULL DEFAULT '[]',
    general_props TEXT NOT NULL DEFAULT '[]',
    none_props TEXT NOT NULL DEFAULT '[]',
    updated_at INTEGER NOT NULL
) STRICT;

CREATE INDEX IF NOT EXISTS idx_user_state_updated
    ON user_state(updated_at);
"#;
