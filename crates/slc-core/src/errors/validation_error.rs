//! Validation errors for caller-supplied tokens and names.

use super::error_code::{self, SlcErrorCode};

/// Structural input errors. State is never touched when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("class name must not be empty")]
    EmptyClassName,

    #[error("bad area {token:?} (use class1|class2|general|none|all)")]
    UnknownArea { token: String },

    #[error("bad class {token:?} (use class1|class2)")]
    UnknownSlot { token: String },

    #[error("variant must be one of: class1|class2|none (got {token:?})")]
    UnknownVariant { token: String },

    #[error("area {area} is not allowed for {operation}")]
    AreaNotAllowed {
        area: &'static str,
        operation: &'static str,
    },
}

impl SlcErrorCode for ValidationError {
    fn error_code(&self) -> &'static str {
        error_code::VALIDATION_ERROR
    }
}
