//! Data model shared by the engine, the store, and the transport.

pub mod area;
pub mod class;
pub mod outcome;
pub mod record;

pub use area::{Area, Slot, Variant};
pub use class::Class;
pub use outcome::{ClassifyOutcome, Snapshot};
pub use record::UserRecord;
