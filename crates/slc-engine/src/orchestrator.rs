//! UserStateOrchestrator: per-user load, mutate, persist.
//!
//! Each operation reconstructs a fresh `ClassState` from the store, runs one
//! engine operation against it, and writes it back. Calls for the same user
//! are serialized by an in-process lock table so two concurrent feedbacks
//! cannot both read the pre-update record and lose one write. Writers in
//! other processes are not coordinated.

use std::sync::{Arc, Mutex, PoisonError};

use dashmap::DashMap;

use slc_core::errors::SlcResult;
use slc_core::traits::IStateStore;

use crate::service::{ClassifierService, Inspection, Mutation};
use crate::state::ClassState;

pub struct UserStateOrchestrator {
    store: Arc<dyn IStateStore>,
    locks: DashMap<String, Arc<Mutex<()>>>,
}

impl UserStateOrchestrator {
    pub fn new(store: Arc<dyn IStateStore>) -> Self {
        Self {
            store,
            locks: DashMap::new(),
        }
    }

    /// Number of users with an operation currently in flight or waiting.
    pub fn active_users(&self) -> usize {
        self.locks.len()
    }

    /// Run `f` inside the user's critical section.
    ///
    /// The lock entry is dropped again once nobody else holds or waits on
    /// it, so the table only tracks users with work in flight.
    fn serialized<T>(&self, user_id: &str, f: impl FnOnce() -> SlcResult<T>) -> SlcResult<T> {
        let lock = self.locks.entry(user_id.to_string()).or_default().clone();
        let result = {
            // The mutex guards no data, so a panic elsewhere leaves nothing to repair.
            let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);
            f()
        };
        drop(lock);
        self.locks
            .remove_if(user_id, |_, entry| Arc::strong_count(entry) == 1);
        result
    }

    fn load(&self, user_id: &str) -> SlcResult<ClassState> {
        match self.store.load(user_id) {
            Ok(Some(record)) => Ok(ClassState::from_record(&record)),
            Ok(None) => Ok(ClassState::default()),
            Err(e) => {
                tracing::warn!(user_id, error = %e, "load state failed");
                Err(e)
            }
        }
    }

    fn persist(&self, user_id: &str, state: &ClassState) -> SlcResult<()> {
        self.store.save(&state.to_record(user_id)).map_err(|e| {
            tracing::warn!(user_id, error = %e, "save state failed");
            e
        })
    }
}

impl ClassifierService for UserStateOrchestrator {
    fn read_state(&self, user_id: &str, f: &mut Inspection<'_>) -> SlcResult<()> {
        self.serialized(user_id, || {
            let state = self.load(user_id)?;
            f(&state);
            self.persist(user_id, &state)
        })
    }

    fn update_state(&self, user_id: &str, f: &mut Mutation<'_>) -> SlcResult<()> {
        self.serialized(user_id, || {
            let mut state = self.load(user_id)?;
            f(&mut state)?;
            self.persist(user_id, &state)?;
            tracing::debug!(user_id, "state committed");
            Ok(())
        })
    }

    fn reset(&self, user_id: &str) -> SlcResult<()> {
        self.serialized(user_id, || {
            self.store.delete(user_id).map_err(|e| {
                tracing::warn!(user_id, error = %e, "reset failed");
                e
            })?;
            tracing::info!(user_id, "user state reset");
            Ok(())
        })
    }
}
