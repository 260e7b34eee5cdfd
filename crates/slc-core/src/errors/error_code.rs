//! SlcErrorCode trait for transport-facing error codes.

/// Maps an error to a stable code string.
/// The HTTP layer sends it next to the message so clients can branch
/// without parsing prose.
pub trait SlcErrorCode {
    /// Returns the error code string (e.g., "VALIDATION_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

// Error code constants.
pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
pub const STORE_ERROR: &str = "STORE_ERROR";
pub const CORRUPT_RECORD: &str = "CORRUPT_RECORD";
pub const MIGRATION_FAILED: &str = "MIGRATION_FAILED";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
