//! Top-level error aggregating the subsystem errors via `From` conversions.

use super::error_code::SlcErrorCode;
use super::{ConfigError, StoreError, ValidationError};

/// Any error a classifier operation can surface.
#[derive(Debug, thiserror::Error)]
pub enum SlcError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

pub type SlcResult<T> = Result<T, SlcError>;

impl SlcError {
    /// True when the caller supplied bad input (maps to a client error).
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl SlcErrorCode for SlcError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(e) => e.error_code(),
            Self::Store(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}
