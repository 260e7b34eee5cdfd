//! SharedClassifier: one in-process class state for every caller.
//!
//! Reads take the shared lock, mutations the exclusive one. The user id is
//! ignored. Constructed by the entry point and injected; there is no global.

use std::sync::RwLock;

use slc_core::errors::{SlcResult, StoreError};

use crate::service::{ClassifierService, Inspection, Mutation};
use crate::state::ClassState;

#[derive(Debug, Default)]
pub struct SharedClassifier {
    state: RwLock<ClassState>,
}

impl SharedClassifier {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned(e: impl std::fmt::Display) -> StoreError {
    StoreError::LockPoisoned {
        message: format!("shared classifier state: {e}"),
    }
}

impl ClassifierService for SharedClassifier {
    fn read_state(&self, _user_id: &str, f: &mut Inspection<'_>) -> SlcResult<()> {
        let guard = self.state.read().map_err(poisoned)?;
        f(&*guard);
        Ok(())
    }

    fn update_state(&self, _user_id: &str, f: &mut Mutation<'_>) -> SlcResult<()> {
        let mut guard = self.state.write().map_err(poisoned)?;
        let mut working = guard.clone();
        f(&mut working)?;
        *guard = working;
        Ok(())
    }

    fn reset(&self, _user_id: &str) -> SlcResult<()> {
        let mut guard = self.state.write().map_err(poisoned)?;
        *guard = ClassState::default();
        tracing::info!("shared classifier state reset");
        Ok(())
    }
}
