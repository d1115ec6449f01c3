//! # Psyche Shared
//!
//! Configuration, error and logging types used across all Psyche crates.

pub mod config;
pub mod error;
pub mod logger;

// Re-exports
pub use config::*;
pub use error::*;
pub use logger::*;
