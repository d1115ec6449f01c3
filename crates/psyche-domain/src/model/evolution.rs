//! ProfileEvolutionSummary - Long-window stability and shifts (derived)

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

/// Direction of a significant change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeDirection {
    Up,
    Down,
}

/// A domain that moved beyond the significance threshold
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignificantChange {
    pub domain: String,
    pub direction: ChangeDirection,
    pub change: f64,
}

/// Per-domain statistics over the window
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainEvolution {
    /// Snapshots inside the window
    pub snapshot_count: usize,
    pub first_score: f64,
    pub last_score: f64,
    pub min_score: f64,
    pub max_score: f64,
    pub mean_score: f64,
    /// Population standard deviation of in-window scores
    pub std_dev: f64,
    /// std_dev normalized to [0, 1]; None with fewer than 2 snapshots
    pub volatility: Option<f64>,
    /// Change used for significance (None when no baseline exists)
    pub change: Option<f64>,
}

impl DomainEvolution {
    /// Whether the domain took part in the stability computation
    pub fn counts_toward_stability(&self) -> bool {
        self.volatility.is_some()
    }
}

/// Summary of how the profile moved over the long window
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileEvolutionSummary {
    pub window_days: u32,
    pub as_of: DateTime<Utc>,
    /// Snapshots across all domains inside the window
    pub snapshots: usize,
    pub domains: BTreeMap<String, DomainEvolution>,
    /// Ordered by |change| descending
    pub significant_changes: Vec<SignificantChange>,
    pub overall_stability: f64,
}
