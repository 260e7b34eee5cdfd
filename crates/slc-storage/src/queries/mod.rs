//! Query modules, one per table.

pub mod user_state;
