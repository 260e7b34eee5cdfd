//! # slc-core
//!
//! Foundation crate for the self-learning classifier.
//! Defines the shared models, errors, config, store trait, and tracing setup.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod tracing;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::SlcConfig;
pub use errors::{SlcError, SlcResult};
pub use models::{Area, Class, ClassifyOutcome, Slot, Snapshot, UserRecord, Variant};
pub use traits::IStateStore;
