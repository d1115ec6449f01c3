//! In-Memory Repository Implementations
//!
//! Simple in-memory implementations of repository traits.
//! Useful for testing and development.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};
use psyche_domain::{
    ensure_in_order, DomainScoreSnapshot, Fact, FeatureCount, FeatureRepository, RepositoryError,
    SignalRepository, SignalScore, SignalType, SnapshotRepository, TripleRepository,
};

fn read<T>(lock: &RwLock<T>) -> Result<RwLockReadGuard<'_, T>, RepositoryError> {
    lock.read().map_err(|_| RepositoryError::Persistence {
        message: "Failed to acquire read lock".to_string(),
    })
}

fn write<T>(lock: &RwLock<T>) -> Result<RwLockWriteGuard<'_, T>, RepositoryError> {
    lock.write().map_err(|_| RepositoryError::Persistence {
        message: "Failed to acquire write lock".to_string(),
    })
}

/// In-memory Snapshot Repository
///
/// Thread-safe implementation using RwLock.
#[derive(Debug, Clone, Default)]
pub struct InMemorySnapshotRepository {
    snapshots: Arc<RwLock<HashMap<String, Vec<DomainScoreSnapshot>>>>,
}

impl InMemorySnapshotRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotRepository for InMemorySnapshotRepository {
    fn append(&self, snapshot: &DomainScoreSnapshot) -> Result<(), RepositoryError> {
        let mut snapshots = write(&self.snapshots)?;
        let history = snapshots.entry(snapshot.domain_id.clone()).or_default();
        ensure_in_order(history.last(), snapshot)?;
        history.push(snapshot.clone());
        Ok(())
    }

    fn history(
        &self,
        domain_id: &str,
        since: Option<DateTime<Utc>>,
    ) -> Result<Vec<DomainScoreSnapshot>, RepositoryError> {
        let snapshots = read(&self.snapshots)?;
        Ok(snapshots
            .get(domain_id)
            .map(|history| {
                history
                    .iter()
                    .filter(|s| since.map_or(true, |since| s.timestamp >= since))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    fn domains_with_history(&self) -> Result<BTreeSet<String>, RepositoryError> {
        let snapshots = read(&self.snapshots)?;
        Ok(snapshots
            .iter()
            .filter(|(_, history)| !history.is_empty())
            .map(|(domain_id, _)| domain_id.clone())
            .collect())
    }

    fn count(&self) -> Result<usize, RepositoryError> {
        Ok(read(&self.snapshots)?.values().map(Vec::len).sum())
    }
}

/// In-memory Signal Repository (one current signal per domain and type)
#[derive(Debug, Clone, Default)]
pub struct InMemorySignalRepository {
    signals: Arc<RwLock<BTreeMap<(String, SignalType), SignalScore>>>,
}

impl InMemorySignalRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SignalRepository for InMemorySignalRepository {
    fn put(&self, signal: SignalScore) -> Result<(), RepositoryError> {
        let key = (signal.domain_id().to_string(), signal.signal_type());
        let mut signals = write(&self.signals)?;
        if signals.get(&key).map_or(true, |current| signal.supersedes(current)) {
            signals.insert(key, signal);
        }
        Ok(())
    }

    fn current(&self, domain_id: &str) -> Result<Vec<SignalScore>, RepositoryError> {
        let signals = read(&self.signals)?;
        Ok(SignalType::ALL
            .iter()
            .filter_map(|signal_type| signals.get(&(domain_id.to_string(), *signal_type)))
            .cloned()
            .collect())
    }

    fn clear(&self, domain_id: &str, signal_type: SignalType) -> Result<(), RepositoryError> {
        write(&self.signals)?.remove(&(domain_id.to_string(), signal_type));
        Ok(())
    }
}

/// In-memory Feature Repository
#[derive(Debug, Clone, Default)]
pub struct InMemoryFeatureRepository {
    counts: Arc<RwLock<BTreeMap<(String, String), u64>>>,
}

impl InMemoryFeatureRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FeatureRepository for InMemoryFeatureRepository {
    fn record(&self, category: &str, feature_name: &str, count: u64) -> Result<(), RepositoryError> {
        let mut counts = write(&self.counts)?;
        let total = counts
            .entry((category.to_string(), feature_name.to_string()))
            .or_default();
        *total = total.saturating_add(count);
        Ok(())
    }

    fn all(&self) -> Result<Vec<FeatureCount>, RepositoryError> {
        Ok(read(&self.counts)?
            .iter()
            .map(|((category, feature_name), count)| FeatureCount {
                category: category.clone(),
                feature_name: feature_name.clone(),
                count: *count,
            })
            .collect())
    }
}

/// In-memory Triple Repository (append-only fact log)
#[derive(Debug, Clone, Default)]
pub struct InMemoryTripleRepository {
    facts: Arc<RwLock<Vec<Fact>>>,
}

impl InMemoryTripleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every ingested fact, in ingestion order
    pub fn facts(&self) -> Result<Vec<Fact>, RepositoryError> {
        Ok(read(&self.facts)?.clone())
    }
}

impl TripleRepository for InMemoryTripleRepository {
    fn ingest(&self, facts: &[Fact]) -> Result<usize, RepositoryError> {
        write(&self.facts)?.extend_from_slice(facts);
        Ok(facts.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use psyche_domain::{EntityRef, Predicate, RawSignal};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 4, 1, 0, 0, 0).unwrap()
    }

    // ============== Snapshot Repository Tests ==============

    #[test]
    fn test_snapshot_history_ascending_and_since() {
        let repo = InMemorySnapshotRepository::new();
        for day in 0..4 {
            repo.append(&DomainScoreSnapshot::new(
                "moral_loyalty",
                0.2 * day as f64,
                0.5,
                1,
                t0() + Duration::days(day),
            ))
            .unwrap();
        }

        let all = repo.history("moral_loyalty", None).unwrap();
        assert_eq!(all.len(), 4);
        assert!(all.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));

        let recent = repo
            .history("moral_loyalty", Some(t0() + Duration::days(2)))
            .unwrap();
        assert_eq!(recent.len(), 2);

        assert!(repo.history("moral_care", None).unwrap().is_empty());
    }

    #[test]
    fn test_snapshot_out_of_order_rejected() {
        let repo = InMemorySnapshotRepository::new();
        repo.append(&DomainScoreSnapshot::new("moral_loyalty", 0.5, 0.5, 0, t0()))
            .unwrap();

        let stale = DomainScoreSnapshot::new("moral_loyalty", 0.5, 0.5, 0, t0() - Duration::seconds(1));
        assert!(matches!(
            repo.append(&stale),
            Err(RepositoryError::OutOfOrder { .. })
        ));
        assert_eq!(repo.count().unwrap(), 1);
    }

    #[test]
    fn test_domains_with_history() {
        let repo = InMemorySnapshotRepository::new();
        repo.append(&DomainScoreSnapshot::new("social_trust", 0.5, 0.5, 0, t0()))
            .unwrap();
        repo.append(&DomainScoreSnapshot::new("moral_care", 0.5, 0.5, 0, t0()))
            .unwrap();

        let domains: Vec<_> = repo.domains_with_history().unwrap().into_iter().collect();
        assert_eq!(domains, vec!["moral_care", "social_trust"]);
    }

    #[test]
    fn test_clones_share_state() {
        let repo = InMemorySnapshotRepository::new();
        let other = repo.clone();
        repo.append(&DomainScoreSnapshot::new("social_trust", 0.5, 0.5, 0, t0()))
            .unwrap();
        assert_eq!(other.count().unwrap(), 1);
    }

    // ============== Signal Repository Tests ==============

    #[test]
    fn test_signal_replaces_same_type() {
        let repo = InMemorySignalRepository::new();
        let first = RawSignal::new("moral_care", "llm", 0.2, 0.5).validate(t0()).unwrap();
        let second = RawSignal::new("moral_care", "llm", 0.9, 0.5)
            .validate(t0() + Duration::minutes(1))
            .unwrap();
        let dictionary = RawSignal::new("moral_care", "liwc", 0.4, 0.5).validate(t0()).unwrap();

        repo.put(first).unwrap();
        repo.put(second).unwrap();
        repo.put(dictionary).unwrap();

        let current = repo.current("moral_care").unwrap();
        assert_eq!(current.len(), 2);
        assert_eq!(current[0].signal_type(), SignalType::Dictionary);
        assert_eq!(current[1].score(), 0.9);

        repo.clear("moral_care", SignalType::Dictionary).unwrap();
        assert_eq!(repo.current("moral_care").unwrap().len(), 1);
    }

    #[test]
    fn test_older_signal_does_not_replace_newer() {
        let repo = InMemorySignalRepository::new();
        let newer = RawSignal::new("social_trust", "embedding", 0.9, 0.6)
            .validate(t0())
            .unwrap();
        let older = RawSignal::new("social_trust", "embedding", 0.1, 0.6)
            .validate(t0() - Duration::days(3))
            .unwrap();

        repo.put(newer.clone()).unwrap();
        repo.put(older.clone()).unwrap();

        let current = repo.current("social_trust").unwrap();
        assert_eq!(current.len(), 1);
        assert_eq!(current[0].score(), 0.9);

        // Stored state scores the same as aggregating every signal seen
        let aggregator = psyche_domain::SignalAggregator::new();
        assert_eq!(
            aggregator.aggregate(&current).score,
            aggregator.aggregate(&[newer, older]).score
        );
    }

    // ============== Feature Repository Tests ==============

    #[test]
    fn test_feature_counts_accumulate() {
        let repo = InMemoryFeatureRepository::new();
        repo.record("pronoun", "we", 3).unwrap();
        repo.record("pronoun", "we", 4).unwrap();
        repo.record("affect", "anger", 1).unwrap();

        let all = repo.all().unwrap();
        assert_eq!(all.len(), 2);
        let we = all.iter().find(|c| c.feature_name == "we").unwrap();
        assert_eq!(we.count, 7);
    }

    // ============== Triple Repository Tests ==============

    #[test]
    fn test_triples_keep_order() {
        let repo = InMemoryTripleRepository::new();
        let facts = vec![
            Fact::new(EntityRef::user("1"), Predicate::Discusses, EntityRef::topic("chess")),
            Fact::new(EntityRef::user("1"), Predicate::InterestedIn, EntityRef::topic("chess")),
        ];

        assert_eq!(repo.ingest(&facts).unwrap(), 2);
        assert_eq!(repo.facts().unwrap(), facts);
    }
}
