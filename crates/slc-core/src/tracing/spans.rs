//! Span definitions per orchestrated operation.

/// Create a span for one classifier operation on behalf of a user.
#[macro_export]
macro_rules! operation_span {
    ($op:expr, $user_id:expr) => {
        tracing::info_span!("slc.operation", op = %$op, user_id = %$user_id)
    };
}
