//! Structured logging facility for Vouch
//!
//! This module provides:
//! - Single initialization point via `init(profile)`
//! - The `log_assertion_failure!` macro, emitted once per failed assertion
//! - Test capture mode for deterministic assertions on emitted events
//!
//! # Usage
//!
//! ```rust
//! use vouch_core::logging_facility::{init, Profile};
//!
//! // Initialize once at application startup
//! init(Profile::Development);
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
