//! Triple Repository - Sink for projected facts

use super::RepositoryError;
use crate::model::fact::Fact;

/// Triple Repository Trait
pub trait TripleRepository: Send + Sync {
    /// Ingest facts in order; returns how many were stored
    fn ingest(&self, facts: &[Fact]) -> Result<usize, RepositoryError>;
}
