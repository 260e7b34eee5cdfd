//! ClassifierService: the operation surface exposed to the transport.
//!
//! Implementors provide three primitives (read access, write access, reset);
//! every classifier operation is built on top of them, so the in-memory and
//! per-user persisted front-ends stay behaviorally identical.

use slc_core::errors::{SlcResult, ValidationError};
use slc_core::models::{Area, Class, ClassifyOutcome, Slot, Snapshot, Variant};

use crate::state::ClassState;

/// Mutation callback. A validation error aborts the mutation: the state the
/// callback was working on is discarded.
pub type Mutation<'a> = dyn FnMut(&mut ClassState) -> Result<(), ValidationError> + 'a;

/// Read-only callback.
pub type Inspection<'a> = dyn FnMut(&ClassState) + 'a;

pub trait ClassifierService: Send + Sync {
    /// Run `f` against the user's current state.
    fn read_state(&self, user_id: &str, f: &mut Inspection<'_>) -> SlcResult<()>;

    /// Run `f` against the user's state and commit the result if it succeeds.
    fn update_state(&self, user_id: &str, f: &mut Mutation<'_>) -> SlcResult<()>;

    /// Return the user to the uninitialized state.
    fn reset(&self, user_id: &str) -> SlcResult<()>;

    fn init(&self, user_id: &str, class1: Class, class2: Class) -> SlcResult<()> {
        self.update_state(user_id, &mut |state| {
            state.init(class1.clone(), class2.clone());
            Ok(())
        })
    }

    fn classify(&self, user_id: &str, properties: &[String]) -> SlcResult<ClassifyOutcome> {
        let mut outcome = ClassifyOutcome::default();
        self.read_state(user_id, &mut |state| outcome = state.classify(properties))?;
        Ok(outcome)
    }

    fn feedback(&self, user_id: &str, variant: Variant, properties: &[String]) -> SlcResult<()> {
        self.update_state(user_id, &mut |state| {
            state.feedback(variant, properties);
            Ok(())
        })
    }

    fn snapshot(&self, user_id: &str) -> SlcResult<Snapshot> {
        let mut snapshot = Snapshot::default();
        self.read_state(user_id, &mut |state| snapshot = state.snapshot())?;
        Ok(snapshot)
    }

    fn add_property(&self, user_id: &str, area: Area, property: &str) -> SlcResult<()> {
        self.update_state(user_id, &mut |state| state.add_property(area, property))
    }

    fn remove_property(&self, user_id: &str, area: Area, property: &str) -> SlcResult<()> {
        self.update_state(user_id, &mut |state| {
            state.remove_property(area, property);
            Ok(())
        })
    }

    fn move_property(&self, user_id: &str, from: Area, to: Area, property: &str) -> SlcResult<()> {
        self.update_state(user_id, &mut |state| state.move_property(from, to, property))
    }

    fn rename_class(&self, user_id: &str, slot: Slot, name: &str) -> SlcResult<()> {
        self.update_state(user_id, &mut |state| state.rename_class(slot, name))
    }

    fn rename_property(&self, user_id: &str, area: Area, from: &str, to: &str) -> SlcResult<()> {
        self.update_state(user_id, &mut |state| {
            state.rename_property(area, from, to);
            Ok(())
        })
    }
}
