//! # Psyche Adapter Layer
//!
//! External system integrations (Hexagonal Architecture adapters).
//!
//! ## Structure
//!
//! - `repository/` - Persistence implementations (in-memory, JSON file, JSON lines)
//! - `signal_files` - Raw producer signals read from disk

pub mod repository;
pub mod signal_files;

pub use repository::*;
pub use signal_files::{SignalFileError, SignalFileLoader};
