//! Error handling for the classifier.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod slc_error;
pub mod store_error;
pub mod validation_error;

pub use config_error::ConfigError;
pub use error_code::SlcErrorCode;
pub use slc_error::{SlcError, SlcResult};
pub use store_error::StoreError;
pub use validation_error::ValidationError;
