//! # slc-engine
//!
//! The classification/feedback engine: set algebra over property lists,
//! overlap scoring, the two-class state with its exclusivity invariant,
//! and the two service front-ends (one shared in-memory state, or per-user
//! state loaded from and persisted to an `IStateStore`).

pub mod classification;
pub mod orchestrator;
pub mod service;
pub mod set_algebra;
pub mod shared;
pub mod state;

pub use orchestrator::UserStateOrchestrator;
pub use service::ClassifierService;
pub use shared::SharedClassifier;
pub use state::ClassState;
