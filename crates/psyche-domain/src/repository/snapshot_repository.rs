//! Snapshot Repository - Persisted domain score history

use super::RepositoryError;
use crate::model::snapshot::DomainScoreSnapshot;
use chrono::{DateTime, Utc};
use std::collections::BTreeSet;

/// Snapshot Repository Trait
///
/// Owns all persisted snapshots. History is returned oldest first and
/// timestamps never decrease within a domain.
pub trait SnapshotRepository: Send + Sync {
    /// Append a snapshot; rejects one older than the latest of its domain
    fn append(&self, snapshot: &DomainScoreSnapshot) -> Result<(), RepositoryError>;

    /// History of a domain, ascending time, optionally from `since` (inclusive)
    fn history(
        &self,
        domain_id: &str,
        since: Option<DateTime<Utc>>,
    ) -> Result<Vec<DomainScoreSnapshot>, RepositoryError>;

    /// Ids of every domain with at least one snapshot
    fn domains_with_history(&self) -> Result<BTreeSet<String>, RepositoryError>;

    /// History bounded on both sides (inclusive), for consistent reads
    fn history_between(
        &self,
        domain_id: &str,
        since: Option<DateTime<Utc>>,
        until: DateTime<Utc>,
    ) -> Result<Vec<DomainScoreSnapshot>, RepositoryError> {
        let mut history = self.history(domain_id, since)?;
        history.retain(|s| s.timestamp <= until);
        Ok(history)
    }

    /// Most recent snapshot at or before `until`
    fn latest(
        &self,
        domain_id: &str,
        until: DateTime<Utc>,
    ) -> Result<Option<DomainScoreSnapshot>, RepositoryError> {
        Ok(self.history_between(domain_id, None, until)?.pop())
    }

    /// Total snapshots across all domains
    fn count(&self) -> Result<usize, RepositoryError> {
        let mut total = 0;
        for domain_id in self.domains_with_history()? {
            total += self.history(&domain_id, None)?.len();
        }
        Ok(total)
    }
}

/// Check the ordering invariant against the current latest snapshot
pub fn ensure_in_order(
    latest: Option<&DomainScoreSnapshot>,
    snapshot: &DomainScoreSnapshot,
) -> Result<(), RepositoryError> {
    match latest {
        Some(latest) if snapshot.timestamp < latest.timestamp => Err(RepositoryError::OutOfOrder {
            domain_id: snapshot.domain_id.clone(),
            attempted: snapshot.timestamp.to_rfc3339(),
            latest: latest.timestamp.to_rfc3339(),
        }),
        _ => Ok(()),
    }
}
