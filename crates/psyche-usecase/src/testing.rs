//! Store doubles for use case tests

use chrono::{DateTime, TimeZone, Utc};
use psyche_domain::{
    ensure_in_order, DomainScoreSnapshot, Fact, FeatureCount, FeatureRepository, FixedClock,
    RepositoryError, SignalRepository, SignalScore, SignalType, SnapshotRepository,
    TripleRepository,
};
use shared::{EngineConfig, NullLogger};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Condvar, Mutex};

use crate::context::ProfileContext;

pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

#[derive(Default)]
pub struct MemSnapshots {
    pub by_domain: Mutex<BTreeMap<String, Vec<DomainScoreSnapshot>>>,
}

impl SnapshotRepository for MemSnapshots {
    fn append(&self, snapshot: &DomainScoreSnapshot) -> Result<(), RepositoryError> {
        let mut by_domain = self.by_domain.lock().unwrap();
        let history = by_domain.entry(snapshot.domain_id.clone()).or_default();
        ensure_in_order(history.last(), snapshot)?;
        history.push(snapshot.clone());
        Ok(())
    }

    fn history(
        &self,
        domain_id: &str,
        since: Option<DateTime<Utc>>,
    ) -> Result<Vec<DomainScoreSnapshot>, RepositoryError> {
        let by_domain = self.by_domain.lock().unwrap();
        Ok(by_domain
            .get(domain_id)
            .map(|h| {
                h.iter()
                    .filter(|s| since.map_or(true, |since| s.timestamp >= since))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    fn domains_with_history(&self) -> Result<BTreeSet<String>, RepositoryError> {
        Ok(self.by_domain.lock().unwrap().keys().cloned().collect())
    }
}

/// Fails the first `failures` appends with `Unavailable`
pub struct FlakySnapshots {
    pub inner: MemSnapshots,
    pub failures: AtomicUsize,
    pub attempts: AtomicUsize,
}

impl FlakySnapshots {
    pub fn new(failures: usize) -> Self {
        Self {
            inner: MemSnapshots::default(),
            failures: AtomicUsize::new(failures),
            attempts: AtomicUsize::new(0),
        }
    }
}

impl SnapshotRepository for FlakySnapshots {
    fn append(&self, snapshot: &DomainScoreSnapshot) -> Result<(), RepositoryError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        let remaining = self.failures.load(Ordering::SeqCst);
        if remaining > 0 {
            self.failures.store(remaining - 1, Ordering::SeqCst);
            return Err(RepositoryError::Unavailable {
                message: "store offline".to_string(),
            });
        }
        self.inner.append(snapshot)
    }

    fn history(
        &self,
        domain_id: &str,
        since: Option<DateTime<Utc>>,
    ) -> Result<Vec<DomainScoreSnapshot>, RepositoryError> {
        self.inner.history(domain_id, since)
    }

    fn domains_with_history(&self) -> Result<BTreeSet<String>, RepositoryError> {
        self.inner.domains_with_history()
    }
}

/// Blocks every append until the gate is opened
pub struct GatedSnapshots {
    pub inner: MemSnapshots,
    pub entered: AtomicUsize,
    gate: (Mutex<bool>, Condvar),
}

impl GatedSnapshots {
    pub fn new() -> Self {
        Self {
            inner: MemSnapshots::default(),
            entered: AtomicUsize::new(0),
            gate: (Mutex::new(false), Condvar::new()),
        }
    }

    pub fn open(&self) {
        let (lock, condvar) = &self.gate;
        *lock.lock().unwrap() = true;
        condvar.notify_all();
    }
}

impl SnapshotRepository for GatedSnapshots {
    fn append(&self, snapshot: &DomainScoreSnapshot) -> Result<(), RepositoryError> {
        self.entered.fetch_add(1, Ordering::SeqCst);
        let (lock, condvar) = &self.gate;
        let mut open = lock.lock().unwrap();
        while !*open {
            open = condvar.wait(open).unwrap();
        }
        drop(open);
        self.inner.append(snapshot)
    }

    fn history(
        &self,
        domain_id: &str,
        since: Option<DateTime<Utc>>,
    ) -> Result<Vec<DomainScoreSnapshot>, RepositoryError> {
        self.inner.history(domain_id, since)
    }

    fn domains_with_history(&self) -> Result<BTreeSet<String>, RepositoryError> {
        self.inner.domains_with_history()
    }
}

#[derive(Default)]
pub struct MemSignals {
    current: Mutex<BTreeMap<(String, SignalType), SignalScore>>,
}

impl SignalRepository for MemSignals {
    fn put(&self, signal: SignalScore) -> Result<(), RepositoryError> {
        let key = (signal.domain_id().to_string(), signal.signal_type());
        let mut current = self.current.lock().unwrap();
        if current.get(&key).map_or(true, |stored| signal.supersedes(stored)) {
            current.insert(key, signal);
        }
        Ok(())
    }

    fn current(&self, domain_id: &str) -> Result<Vec<SignalScore>, RepositoryError> {
        Ok(self
            .current
            .lock()
            .unwrap()
            .iter()
            .filter(|((domain, _), _)| domain == domain_id)
            .map(|(_, signal)| signal.clone())
            .collect())
    }

    fn clear(&self, domain_id: &str, signal_type: SignalType) -> Result<(), RepositoryError> {
        self.current
            .lock()
            .unwrap()
            .remove(&(domain_id.to_string(), signal_type));
        Ok(())
    }
}

#[derive(Default)]
pub struct MemFeatures {
    counts: Mutex<BTreeMap<(String, String), u64>>,
}

impl FeatureRepository for MemFeatures {
    fn record(&self, category: &str, feature_name: &str, count: u64) -> Result<(), RepositoryError> {
        *self
            .counts
            .lock()
            .unwrap()
            .entry((category.to_string(), feature_name.to_string()))
            .or_default() += count;
        Ok(())
    }

    fn all(&self) -> Result<Vec<FeatureCount>, RepositoryError> {
        Ok(self
            .counts
            .lock()
            .unwrap()
            .iter()
            .map(|((category, feature_name), count)| FeatureCount {
                category: category.clone(),
                feature_name: feature_name.clone(),
                count: *count,
            })
            .collect())
    }
}

#[derive(Default)]
pub struct MemTriples {
    pub facts: Mutex<Vec<Fact>>,
}

impl TripleRepository for MemTriples {
    fn ingest(&self, facts: &[Fact]) -> Result<usize, RepositoryError> {
        self.facts.lock().unwrap().extend_from_slice(facts);
        Ok(facts.len())
    }
}

/// Context over the given snapshot store, fresh signal/feature stores and a fixed clock
pub fn context_with(snapshots: Arc<dyn SnapshotRepository>) -> (ProfileContext, Arc<FixedClock>) {
    let clock = Arc::new(FixedClock::new(t0()));
    let context = ProfileContext::new(
        snapshots,
        Arc::new(MemSignals::default()),
        Arc::new(MemFeatures::default()),
    )
    .with_clock(clock.clone())
    .with_logger(Arc::new(NullLogger))
    .with_config(EngineConfig::default());
    (context, clock)
}
