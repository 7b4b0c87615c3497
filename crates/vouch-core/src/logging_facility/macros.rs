//! Canonical logging macros

/// Log a failed assertion
///
/// Emits a single `ERROR` event carrying the operation name, the stable
/// error code, the caller's message and the full diagnostic.
///
/// # Example
///
/// ```
/// # use vouch_core::log_assertion_failure;
/// use vouch_core::AssertionFailure;
///
/// let failure = AssertionFailure::NotTrue {
///     message: "queue drained".to_string(),
/// };
/// log_assertion_failure!(failure);
/// ```
#[macro_export]
macro_rules! log_assertion_failure {
    ($failure:expr) => {{
        let failure: &$crate::errors::AssertionFailure = &$failure;
        tracing::error!(
            component = vouch_core_types::COMPONENT,
            op = failure.op(),
            event = vouch_core_types::schema::EVENT_ASSERTION_FAILED,
            err.code = failure.code(),
            message = failure.message(),
            diagnostic = %failure,
        );
    }};
}
