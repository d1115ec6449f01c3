//! RejectionLog - Bounded record of producer contract violations

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::sync::Mutex;

/// What was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionKind {
    Signal,
    Fact,
}

/// One rejected signal or fact
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RejectionEntry {
    pub timestamp: DateTime<Utc>,
    pub kind: RejectionKind,
    pub domain_id: Option<String>,
    pub reason: String,
}

/// Rejection statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RejectionStats {
    pub total_entries: usize,
    pub signal_count: usize,
    pub fact_count: usize,
}

/// Ring buffer of rejections, oldest evicted first
///
/// Shared between concurrent scoring tasks, so it locks internally.
#[derive(Debug)]
pub struct RejectionLog {
    entries: Mutex<VecDeque<RejectionEntry>>,
    max_entries: usize,
}

impl RejectionLog {
    pub fn new(max_entries: usize) -> Self {
        let max_entries = max_entries.max(1);
        Self {
            entries: Mutex::new(VecDeque::with_capacity(max_entries.min(1024))),
            max_entries,
        }
    }

    /// Record an entry
    pub fn record(&self, entry: RejectionEntry) {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        if entries.len() >= self.max_entries {
            entries.pop_front();
        }
        entries.push_back(entry);
    }

    /// Record a rejected signal
    pub fn record_signal(&self, at: DateTime<Utc>, domain_id: &str, reason: impl Into<String>) {
        self.record(RejectionEntry {
            timestamp: at,
            kind: RejectionKind::Signal,
            domain_id: (!domain_id.is_empty()).then(|| domain_id.to_string()),
            reason: reason.into(),
        });
    }

    /// Record a rejected fact
    pub fn record_fact(&self, at: DateTime<Utc>, reason: impl Into<String>) {
        self.record(RejectionEntry {
            timestamp: at,
            kind: RejectionKind::Fact,
            domain_id: None,
            reason: reason.into(),
        });
    }

    /// Most recent entries first
    pub fn recent(&self, limit: usize) -> Vec<RejectionEntry> {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.iter().rev().take(limit).cloned().collect()
    }

    pub fn stats(&self) -> RejectionStats {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        let signal_count = entries
            .iter()
            .filter(|e| e.kind == RejectionKind::Signal)
            .count();

        RejectionStats {
            total_entries: entries.len(),
            signal_count,
            fact_count: entries.len() - signal_count,
        }
    }

    /// Export as JSON, oldest first
    pub fn export_json(&self) -> serde_json::Value {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        serde_json::to_value(entries.iter().collect::<Vec<_>>()).unwrap_or_default()
    }
}

impl Default for RejectionLog {
    fn default() -> Self {
        Self::new(1000)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap()
    }

    #[test]
    fn test_record_and_stats() {
        let log = RejectionLog::new(10);
        log.record_signal(at(), "moral_care", "score 1.2 is outside [0, 1]");
        log.record_fact(at(), "Unknown predicate 'likes'");

        let stats = log.stats();
        assert_eq!(stats.total_entries, 2);
        assert_eq!(stats.signal_count, 1);
        assert_eq!(stats.fact_count, 1);
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let log = RejectionLog::new(2);
        log.record_signal(at(), "a", "first");
        log.record_signal(at(), "b", "second");
        log.record_signal(at(), "c", "third");

        let recent = log.recent(10);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].reason, "third");
        assert_eq!(recent[1].reason, "second");
    }

    #[test]
    fn test_empty_domain_is_none() {
        let log = RejectionLog::default();
        log.record_signal(at(), "", "missing domain");
        assert_eq!(log.recent(1)[0].domain_id, None);
    }

    #[test]
    fn test_export_json() {
        let log = RejectionLog::default();
        log.record_signal(at(), "moral_care", "bad");

        let json = log.export_json();
        assert_eq!(json.as_array().map(Vec::len), Some(1));
        assert_eq!(json[0]["kind"], "signal");
        assert_eq!(json[0]["domainId"], "moral_care");
    }
}
