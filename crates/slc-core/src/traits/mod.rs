//! Seams between the engine and its collaborators.

pub mod state_store;

pub use state_store::IStateStore;
