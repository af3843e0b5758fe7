//! waypost-core: Shared types, configuration, and error handling for Waypost.
//!
//! This crate provides the foundational pieces used by the other crates:
//! - The `Client` record and its field bounds
//! - The fixed directory capacity
//! - Configuration loading
//! - The shared error type

pub mod config;
pub mod error;
pub mod types;

pub use config::WaypostConfig;
pub use error::CoreError;
pub use types::{Client, CAPACITY, MAX_FIELD_LEN};
