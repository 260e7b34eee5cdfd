use crate::errors::SlcResult;
use crate::models::UserRecord;

/// Durable per-user state, one record per user id, no history.
///
/// Implementations own their connections. A missing record is a normal
/// outcome (`Ok(None)`), not an error.
pub trait IStateStore: Send + Sync {
    fn load(&self, user_id: &str) -> SlcResult<Option<UserRecord>>;

    /// Insert or replace the record keyed by `record.user_id`.
    fn save(&self, record: &UserRecord) -> SlcResult<()>;

    /// Remove the record. Deleting an absent user is not an error.
    fn delete(&self, user_id: &str) -> SlcResult<()>;
}
