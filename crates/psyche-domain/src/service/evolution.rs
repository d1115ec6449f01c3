//! Evolution Summarizer - Long-window stability and significant shifts
//!
//! For each domain with evidence in the window:
//!
//! - two or more snapshots: volatility is the population standard deviation
//!   of the in-window scores normalized by 0.5 (the largest deviation a
//!   [0, 1] score can have) and the change is last minus first;
//! - exactly one snapshot: no volatility, the change is measured against
//!   the latest snapshot before the window, if there is one.
//!
//! `overall_stability = 1 - mean(volatility)` over domains with a
//! volatility, or 1.0 when no domain has one.

use crate::model::evolution::{
    ChangeDirection, DomainEvolution, ProfileEvolutionSummary, SignificantChange,
};
use crate::model::snapshot::DomainScoreSnapshot;
use crate::service::trend_analyzer::{in_window, window_start};
use chrono::{DateTime, Utc};
use shared::EvolutionConfig;
use std::collections::BTreeMap;

/// Largest population standard deviation of values in [0, 1]
const MAX_STD_DEV: f64 = 0.5;

/// Evolution summary engine
#[derive(Debug, Clone)]
pub struct EvolutionSummarizer {
    config: EvolutionConfig,
}

impl EvolutionSummarizer {
    pub fn new(config: EvolutionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EvolutionConfig {
        &self.config
    }

    /// Summarize full per-domain histories as of `as_of`
    ///
    /// Histories may extend before the window; earlier snapshots are only
    /// used as a baseline for single-snapshot domains.
    pub fn summarize(
        &self,
        histories: &BTreeMap<String, Vec<DomainScoreSnapshot>>,
        as_of: DateTime<Utc>,
        window_days: u32,
    ) -> ProfileEvolutionSummary {
        let start = window_start(as_of, window_days);

        let mut domains = BTreeMap::new();
        let mut significant_changes = Vec::new();
        let mut snapshots = 0;

        for (domain_id, history) in histories {
            let window = in_window(history, start, as_of);
            if window.is_empty() {
                continue;
            }
            snapshots += window.len();

            let baseline = if window.len() == 1 {
                history
                    .iter()
                    .filter(|s| s.timestamp < start)
                    .max_by_key(|s| s.timestamp)
            } else {
                None
            };
            let evolution = domain_evolution(&window, baseline);

            if let Some(change) = evolution.change {
                if change.abs() > self.config.significance_threshold {
                    significant_changes.push(SignificantChange {
                        domain: domain_id.clone(),
                        direction: if change > 0.0 {
                            ChangeDirection::Up
                        } else {
                            ChangeDirection::Down
                        },
                        change,
                    });
                }
            }

            domains.insert(domain_id.clone(), evolution);
        }

        significant_changes.sort_by(|a, b| {
            b.change
                .abs()
                .total_cmp(&a.change.abs())
                .then_with(|| a.domain.cmp(&b.domain))
        });

        let volatilities: Vec<f64> = domains.values().filter_map(|d| d.volatility).collect();
        let overall_stability = if volatilities.is_empty() {
            1.0
        } else {
            let mean = volatilities.iter().sum::<f64>() / volatilities.len() as f64;
            (1.0 - mean).clamp(0.0, 1.0)
        };

        ProfileEvolutionSummary {
            window_days,
            as_of,
            snapshots,
            domains,
            significant_changes,
            overall_stability,
        }
    }
}

impl Default for EvolutionSummarizer {
    fn default() -> Self {
        Self::new(EvolutionConfig::default())
    }
}

/// Statistics over a non-empty, time-ordered window
fn domain_evolution(
    window: &[DomainScoreSnapshot],
    baseline: Option<&DomainScoreSnapshot>,
) -> DomainEvolution {
    let scores: Vec<f64> = window.iter().map(|s| s.score).collect();
    let count = scores.len() as f64;

    let first_score = scores[0];
    let last_score = scores[scores.len() - 1];
    let min_score = scores.iter().copied().fold(f64::INFINITY, f64::min);
    let max_score = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let mean_score = scores.iter().sum::<f64>() / count;
    let variance = scores.iter().map(|s| (s - mean_score).powi(2)).sum::<f64>() / count;
    let std_dev = variance.sqrt();

    let (volatility, change) = if scores.len() >= 2 {
        // Constant series must read as perfectly stable despite rounding
        let volatility = if max_score == min_score {
            0.0
        } else {
            (std_dev / MAX_STD_DEV).clamp(0.0, 1.0)
        };
        (Some(volatility), Some(last_score - first_score))
    } else {
        (None, baseline.map(|b| last_score - b.score))
    };

    DomainEvolution {
        snapshot_count: scores.len(),
        first_score,
        last_score,
        min_score,
        max_score,
        mean_score,
        std_dev,
        volatility,
        change,
    }
}
