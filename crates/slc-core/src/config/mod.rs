//! Configuration system for the classifier.
//! TOML-based, layered resolution: CLI > env > project file > defaults.

pub mod server_config;
pub mod slc_config;
pub mod storage_config;

pub use server_config::ServerConfig;
pub use slc_config::{CliOverrides, SlcConfig};
pub use storage_config::{StorageBackend, StorageConfig};
