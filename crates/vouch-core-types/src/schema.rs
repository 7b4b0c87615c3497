//! Canonical schema constants for structured logging
//!
//! These constants keep assertion failure events consistent across callers.

/// Component name reported on every event emitted by the library
pub const COMPONENT: &str = "vouch";

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_MESSAGE: &str = "message";

// Error fields
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_ASSERTION_FAILED: &str = "assertion_failed";
