//! Core types shared across Vouch facilities
//!
//! This crate holds the canonical schema constants used by the logging
//! facility and by tests that assert on captured events.

pub mod schema;

pub use schema::COMPONENT;
