//! Signal Repository - The current signal per (domain, signal type)

use super::RepositoryError;
use crate::model::signal::{SignalScore, SignalType};

/// Signal Repository Trait
///
/// Holds at most one current signal per type for each domain. Storing a
/// signal replaces the previous one of the same type unless the stored one
/// is more current (see `SignalScore::supersedes`).
pub trait SignalRepository: Send + Sync {
    /// Store a signal as the current one for its (domain, type), ignoring it
    /// when the stored signal is more current
    fn put(&self, signal: SignalScore) -> Result<(), RepositoryError>;

    /// Current signals of a domain, ordered dictionary, embedding, qualitative
    fn current(&self, domain_id: &str) -> Result<Vec<SignalScore>, RepositoryError>;

    /// Drop the current signal of one type
    fn clear(&self, domain_id: &str, signal_type: SignalType) -> Result<(), RepositoryError>;
}
