//! Use case errors

use psyche_domain::{ProjectionError, RepositoryError, SignalRejection};
use thiserror::Error;

/// Errors from signal intake and re-scoring
///
/// `Clone` so callers coalesced onto an in-flight rescore receive the
/// leader's outcome.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoringError {
    #[error("Unknown domain '{0}'")]
    UnknownDomain(String),

    #[error("Signal rejected: {0}")]
    Rejected(#[from] SignalRejection),

    #[error("Store failed for '{domain_id}' after {attempts} attempt(s): {source}")]
    Store {
        domain_id: String,
        attempts: u32,
        #[source]
        source: RepositoryError,
    },

    #[error("Scoring of '{domain_id}' was aborted before it completed")]
    Aborted { domain_id: String },
}

impl ScoringError {
    /// Whether the caller may retry the same request
    pub fn is_retryable(&self) -> bool {
        match self {
            ScoringError::Store { source, .. } => source.is_transient(),
            ScoringError::Aborted { .. } => true,
            _ => false,
        }
    }
}

/// Errors from read-side profile queries
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProfileError {
    #[error("Unknown domain '{0}'")]
    UnknownDomain(String),

    #[error(transparent)]
    Store(#[from] RepositoryError),
}

/// Errors from fact publishing
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PublishError {
    #[error(transparent)]
    Projection(#[from] ProjectionError),

    #[error(transparent)]
    Store(#[from] RepositoryError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable() {
        let transient = ScoringError::Store {
            domain_id: "moral_care".into(),
            attempts: 3,
            source: RepositoryError::Unavailable {
                message: "disk busy".into(),
            },
        };
        assert!(transient.is_retryable());
        assert!(transient.to_string().contains("3 attempt"));

        let out_of_order = ScoringError::Store {
            domain_id: "moral_care".into(),
            attempts: 1,
            source: RepositoryError::OutOfOrder {
                domain_id: "moral_care".into(),
                attempted: "a".into(),
                latest: "b".into(),
            },
        };
        assert!(!out_of_order.is_retryable());
        assert!(!ScoringError::UnknownDomain("x".into()).is_retryable());
    }
}
