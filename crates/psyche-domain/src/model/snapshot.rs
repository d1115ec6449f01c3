//! DomainScoreSnapshot - The unit of persisted history
//!
//! One timestamped (score, confidence) reading for one domain, created
//! after every re-scoring event.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SnapshotId(Uuid);

impl SnapshotId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for SnapshotId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for SnapshotId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A scored reading for one domain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainScoreSnapshot {
    pub id: SnapshotId,
    pub domain_id: String,
    pub score: f64,
    pub confidence: f64,
    pub data_points_count: u32,
    pub timestamp: DateTime<Utc>,
}

impl DomainScoreSnapshot {
    pub fn new(
        domain_id: impl Into<String>,
        score: f64,
        confidence: f64,
        data_points_count: u32,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: SnapshotId::new(),
            domain_id: domain_id.into(),
            score,
            confidence,
            data_points_count,
            timestamp,
        }
    }

    /// True when no signal backed this reading
    pub fn is_awaiting_analysis(&self) -> bool {
        self.confidence == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_ids_are_unique() {
        let now = Utc::now();
        let a = DomainScoreSnapshot::new("moral_care", 0.5, 0.0, 0, now);
        let b = DomainScoreSnapshot::new("moral_care", 0.5, 0.0, 0, now);
        assert_ne!(a.id, b.id);
        assert!(a.is_awaiting_analysis());
    }

    #[test]
    fn test_snapshot_json_roundtrip() {
        let snapshot = DomainScoreSnapshot::new("moral_care", 0.61, 0.8, 4, Utc::now());
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"dataPointsCount\":4"));

        let parsed: DomainScoreSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, snapshot);
    }
}
