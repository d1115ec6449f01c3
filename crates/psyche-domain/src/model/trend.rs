//! TrendRecord - Short-window direction of one domain (derived, never persisted)

use super::snapshot::DomainScoreSnapshot;
use serde::Serialize;

/// Direction of a domain over the short window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Improving,
    Stable,
    Declining,
}

impl TrendDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrendDirection::Improving => "improving",
            TrendDirection::Stable => "stable",
            TrendDirection::Declining => "declining",
        }
    }
}

impl core::fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trend of one domain within a window
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendRecord {
    pub domain_id: String,
    pub trend: TrendDirection,
    pub current_score: f64,
    /// current - baseline (earliest in window)
    pub change: f64,
    /// change / max(baseline, epsilon), as a ratio
    pub change_percent: f64,
    /// Snapshots in the window
    pub data_points: usize,
    /// Confidence of the most recent snapshot
    pub confidence: f64,
    /// Snapshots in the window, oldest first
    pub history: Vec<DomainScoreSnapshot>,
}

impl TrendRecord {
    /// Record for a domain without evidence in the window
    pub fn flat(domain_id: impl Into<String>) -> Self {
        Self {
            domain_id: domain_id.into(),
            trend: TrendDirection::Stable,
            current_score: 0.0,
            change: 0.0,
            change_percent: 0.0,
            data_points: 0,
            confidence: 0.0,
            history: Vec::new(),
        }
    }
}
