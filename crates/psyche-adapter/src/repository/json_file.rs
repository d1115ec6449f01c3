//! JSON File Store - Snapshot, signal and feature persistence in one file
//!
//! The whole store is rewritten on every mutation: serialized to a
//! sibling temp file, then renamed over the original. A failed write
//! leaves both the file and the in-memory state as they were.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};
use psyche_domain::{
    ensure_in_order, DomainScoreSnapshot, FeatureCount, FeatureRepository, RawSignal,
    RepositoryError, SignalRepository, SignalScore, SignalType, SnapshotRepository,
};
use serde::{Deserialize, Serialize};

/// On-disk layout
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct StoreDocument {
    snapshots: Vec<DomainScoreSnapshot>,
    signals: Vec<RawSignal>,
    features: Vec<FeatureCount>,
}

#[derive(Debug, Default)]
struct StoreState {
    snapshots: BTreeMap<String, Vec<DomainScoreSnapshot>>,
    signals: BTreeMap<(String, SignalType), SignalScore>,
    features: BTreeMap<(String, String), u64>,
}

impl StoreState {
    fn from_document(document: StoreDocument, loaded_at: DateTime<Utc>) -> Result<Self, RepositoryError> {
        let mut state = StoreState::default();

        for snapshot in document.snapshots {
            state
                .snapshots
                .entry(snapshot.domain_id.clone())
                .or_default()
                .push(snapshot);
        }
        for history in state.snapshots.values_mut() {
            history.sort_by_key(|s| s.timestamp);
        }

        for raw in document.signals {
            let signal = raw.validate(loaded_at).map_err(|e| RepositoryError::Persistence {
                message: format!("Stored signal is invalid: {}", e),
            })?;
            state
                .signals
                .insert((signal.domain_id().to_string(), signal.signal_type()), signal);
        }

        for count in document.features {
            let total = state
                .features
                .entry((count.category, count.feature_name))
                .or_default();
            *total = total.saturating_add(count.count);
        }

        Ok(state)
    }

    fn to_document(&self) -> StoreDocument {
        StoreDocument {
            snapshots: self.snapshots.values().flatten().cloned().collect(),
            signals: self.signals.values().map(RawSignal::from).collect(),
            features: self
                .features
                .iter()
                .map(|((category, feature_name), count)| FeatureCount {
                    category: category.clone(),
                    feature_name: feature_name.clone(),
                    count: *count,
                })
                .collect(),
        }
    }
}

/// File-backed store implementing the snapshot, signal and feature ports
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    state: RwLock<StoreState>,
}

impl JsonFileStore {
    /// Open a store, loading the file if it exists
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, RepositoryError> {
        let path = path.into();
        let state = if path.exists() {
            let content = std::fs::read_to_string(&path).map_err(|e| io_error(&path, e))?;
            let document: StoreDocument =
                serde_json::from_str(&content).map_err(|e| RepositoryError::Persistence {
                    message: format!("Failed to parse {}: {}", path.display(), e),
                })?;
            StoreState::from_document(document, Utc::now())?
        } else {
            StoreState::default()
        };

        Ok(Self {
            path,
            state: RwLock::new(state),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, StoreState>, RepositoryError> {
        self.state.read().map_err(|_| RepositoryError::Persistence {
            message: "Failed to acquire read lock".to_string(),
        })
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, StoreState>, RepositoryError> {
        self.state.write().map_err(|_| RepositoryError::Persistence {
            message: "Failed to acquire write lock".to_string(),
        })
    }

    /// Write the state to a temp file and rename it over the store
    fn persist(&self, state: &StoreState) -> Result<(), RepositoryError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| io_error(parent, e))?;
        }

        let content = serde_json::to_string_pretty(&state.to_document()).map_err(|e| {
            RepositoryError::Persistence {
                message: format!("Failed to serialize store: {}", e),
            }
        })?;

        let mut temp = self.path.clone().into_os_string();
        temp.push(".tmp");
        let temp = PathBuf::from(temp);

        std::fs::write(&temp, content).map_err(|e| io_error(&temp, e))?;
        std::fs::rename(&temp, &self.path).map_err(|e| io_error(&self.path, e))
    }
}

fn io_error(path: &Path, error: std::io::Error) -> RepositoryError {
    RepositoryError::Persistence {
        message: format!("{}: {}", path.display(), error),
    }
}

impl SnapshotRepository for JsonFileStore {
    fn append(&self, snapshot: &DomainScoreSnapshot) -> Result<(), RepositoryError> {
        let mut state = self.write()?;
        ensure_in_order(
            state
                .snapshots
                .get(&snapshot.domain_id)
                .and_then(|history| history.last()),
            snapshot,
        )?;

        state
            .snapshots
            .entry(snapshot.domain_id.clone())
            .or_default()
            .push(snapshot.clone());

        if let Err(e) = self.persist(&state) {
            if let Some(history) = state.snapshots.get_mut(&snapshot.domain_id) {
                history.pop();
                if history.is_empty() {
                    state.snapshots.remove(&snapshot.domain_id);
                }
            }
            return Err(e);
        }
        Ok(())
    }

    fn history(
        &self,
        domain_id: &str,
        since: Option<DateTime<Utc>>,
    ) -> Result<Vec<DomainScoreSnapshot>, RepositoryError> {
        let state = self.read()?;
        Ok(state
            .snapshots
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
        Ok(self.read()?.snapshots.keys().cloned().collect())
    }

    fn count(&self) -> Result<usize, RepositoryError> {
        Ok(self.read()?.snapshots.values().map(Vec::len).sum())
    }
}

impl SignalRepository for JsonFileStore {
    fn put(&self, signal: SignalScore) -> Result<(), RepositoryError> {
        let mut state = self.write()?;
        let key = (signal.domain_id().to_string(), signal.signal_type());
        if let Some(current) = state.signals.get(&key) {
            if !signal.supersedes(current) {
                return Ok(());
            }
        }
        let previous = state.signals.insert(key.clone(), signal);

        if let Err(e) = self.persist(&state) {
            match previous {
                Some(previous) => state.signals.insert(key, previous),
                None => state.signals.remove(&key),
            };
            return Err(e);
        }
        Ok(())
    }

    fn current(&self, domain_id: &str) -> Result<Vec<SignalScore>, RepositoryError> {
        let state = self.read()?;
        Ok(SignalType::ALL
            .iter()
            .filter_map(|signal_type| state.signals.get(&(domain_id.to_string(), *signal_type)))
            .cloned()
            .collect())
    }

    fn clear(&self, domain_id: &str, signal_type: SignalType) -> Result<(), RepositoryError> {
        let mut state = self.write()?;
        let key = (domain_id.to_string(), signal_type);
        let Some(previous) = state.signals.remove(&key) else {
            return Ok(());
        };

        if let Err(e) = self.persist(&state) {
            state.signals.insert(key, previous);
            return Err(e);
        }
        Ok(())
    }
}

impl FeatureRepository for JsonFileStore {
    fn record(&self, category: &str, feature_name: &str, count: u64) -> Result<(), RepositoryError> {
        let mut state = self.write()?;
        let key = (category.to_string(), feature_name.to_string());
        let previous = state.features.get(&key).copied();
        let total = previous.unwrap_or_default().saturating_add(count);
        state.features.insert(key.clone(), total);

        if let Err(e) = self.persist(&state) {
            match previous {
                Some(previous) => state.features.insert(key, previous),
                None => state.features.remove(&key),
            };
            return Err(e);
        }
        Ok(())
    }

    fn all(&self) -> Result<Vec<FeatureCount>, RepositoryError> {
        Ok(self.read()?.to_document().features)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use tempfile::TempDir;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap()
    }

    // ============== Persistence Tests ==============

    #[test]
    fn test_reopen_restores_everything() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("store.json");

        {
            let store = JsonFileStore::open(&path).unwrap();
            store
                .append(&DomainScoreSnapshot::new("big_five_openness", 0.6, 0.7, 2, t0()))
                .unwrap();
            store
                .append(&DomainScoreSnapshot::new(
                    "big_five_openness",
                    0.65,
                    0.7,
                    3,
                    t0() + Duration::days(1),
                ))
                .unwrap();

            let mut raw = RawSignal::new("big_five_openness", "liwc", 0.6, 0.5);
            raw.matched_words = Some(vec!["curious".to_string()]);
            store.put(raw.validate(t0()).unwrap()).unwrap();
            store.record("pronoun", "i", 5).unwrap();
        }

        let store = JsonFileStore::open(&path).unwrap();
        let history = store.history("big_five_openness", None).unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[1].score, 0.65);

        let signals = store.current("big_five_openness").unwrap();
        assert_eq!(signals.len(), 1);
        assert_eq!(signals[0].produced_at(), t0());
        assert_eq!(signals[0].matched_words(), ["curious".to_string()]);

        assert_eq!(store.all().unwrap()[0].count, 5);
    }

    #[test]
    fn test_missing_file_is_empty_store() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::open(dir.path().join("nested/store.json")).unwrap();

        assert_eq!(store.count().unwrap(), 0);
        assert!(store.domains_with_history().unwrap().is_empty());

        store
            .append(&DomainScoreSnapshot::new("moral_care", 0.5, 0.5, 0, t0()))
            .unwrap();
        assert!(dir.path().join("nested/store.json").exists());
        assert!(!dir.path().join("nested/store.json.tmp").exists());
    }

    #[test]
    fn test_out_of_order_append_leaves_file_unchanged() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("store.json");
        let store = JsonFileStore::open(&path).unwrap();
        store
            .append(&DomainScoreSnapshot::new("moral_care", 0.5, 0.5, 0, t0()))
            .unwrap();
        let before = std::fs::read_to_string(&path).unwrap();

        let stale = DomainScoreSnapshot::new("moral_care", 0.9, 0.5, 0, t0() - Duration::hours(1));
        assert!(matches!(
            store.append(&stale),
            Err(RepositoryError::OutOfOrder { .. })
        ));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
    }

    #[test]
    fn test_corrupt_file_is_a_persistence_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("store.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            JsonFileStore::open(&path),
            Err(RepositoryError::Persistence { .. })
        ));
    }

    #[test]
    fn test_failed_write_rolls_back_memory() {
        let dir = TempDir::new().unwrap();
        // A directory where the store file should be makes the rename fail
        let path = dir.path().join("store.json");
        std::fs::create_dir(&path).unwrap();
        let store = JsonFileStore {
            path: path.clone(),
            state: RwLock::new(StoreState::default()),
        };

        let result = store.append(&DomainScoreSnapshot::new("moral_care", 0.5, 0.5, 0, t0()));
        assert!(matches!(result, Err(RepositoryError::Persistence { .. })));
        assert_eq!(store.count().unwrap(), 0);
        assert!(store.domains_with_history().unwrap().is_empty());

        let signal = RawSignal::new("moral_care", "llm", 0.5, 0.5).validate(t0()).unwrap();
        assert!(store.put(signal).is_err());
        assert!(store.current("moral_care").unwrap().is_empty());
    }

    // ============== Signal Tests ==============

    #[test]
    fn test_older_signal_is_ignored_and_not_persisted() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("store.json");
        let store = JsonFileStore::open(&path).unwrap();
        store
            .put(RawSignal::new("social_trust", "llm", 0.9, 0.8).validate(t0()).unwrap())
            .unwrap();
        store
            .put(
                RawSignal::new("social_trust", "llm", 0.1, 0.8)
                    .validate(t0() - Duration::days(3))
                    .unwrap(),
            )
            .unwrap();

        assert_eq!(store.current("social_trust").unwrap()[0].score(), 0.9);
        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(reopened.current("social_trust").unwrap()[0].score(), 0.9);
    }

    #[test]
    fn test_clear_persists() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("store.json");
        let store = JsonFileStore::open(&path).unwrap();
        store
            .put(RawSignal::new("moral_care", "embedding", 0.4, 0.5).validate(t0()).unwrap())
            .unwrap();
        store.clear("moral_care", SignalType::Embedding).unwrap();
        // Clearing an absent signal is a no-op
        store.clear("moral_care", SignalType::Embedding).unwrap();

        let reopened = JsonFileStore::open(&path).unwrap();
        assert!(reopened.current("moral_care").unwrap().is_empty());
    }
}
