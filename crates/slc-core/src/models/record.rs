//! UserRecord: durable projection of a class state, one row per user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Persisted per-user state. Collections are stored as plain string arrays;
/// uniqueness and normalization are re-applied on load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub user_id: String,
    pub class1_name: String,
    pub class2_name: String,
    pub class1_props: Vec<String>,
    pub class2_props: Vec<String>,
    pub general_props: Vec<String>,
    pub none_props: Vec<String>,
    /// Stamped by the store on write; `None` for records not yet persisted.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl UserRecord {
    /// An empty record for `user_id`.
    pub fn empty(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            ..Default::default()
        }
    }

    /// Both names empty means no session was started; collections may still hold edits.
    pub fn is_initialized(&self) -> bool {
        !self.class1_name.is_empty() || !self.class2_name.is_empty()
    }
}
