//! Repository Traits - The "Ports" of Hexagonal Architecture
//!
//! These traits define what the engine needs from persistence,
//! not how it is done. That's the adapter's job.
//!
//! ```text
//! Domain Layer             │  Adapter Layer
//! ─────────────────────────┼────────────────────────────
//! trait SnapshotRepository │  InMemorySnapshotRepository
//!   fn append()            │  JsonFileStore
//!   fn history()           │
//! ```
//!
//! All methods take `&self`: implementations are shared between
//! concurrent scoring tasks and provide their own interior locking.

pub mod feature_repository;
pub mod signal_repository;
pub mod snapshot_repository;
pub mod triple_repository;

use thiserror::Error;

/// Errors that can occur during repository operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// Record not found
    #[error("Not found: {id}")]
    NotFound { id: String },

    /// Store could not be reached; the caller may retry
    #[error("Store unavailable: {message}")]
    Unavailable { message: String },

    /// Append would break the non-decreasing timestamp order of a domain
    #[error("Snapshot for '{domain_id}' at {attempted} is older than latest {latest}")]
    OutOfOrder {
        domain_id: String,
        attempted: String,
        latest: String,
    },

    /// Failed to persist
    #[error("Persistence error: {message}")]
    Persistence { message: String },
}

impl RepositoryError {
    /// Whether retrying the same call may succeed
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            RepositoryError::Unavailable { .. } | RepositoryError::Persistence { .. }
        )
    }
}
