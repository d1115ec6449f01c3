//! Trend Analyzer - Short-window direction per domain
//!
//! Baseline is the earliest snapshot inside the window, current is the
//! latest. A domain without snapshots in the window is reported flat:
//! absence of evidence is never a decline.

use crate::model::snapshot::DomainScoreSnapshot;
use crate::model::trend::{TrendDirection, TrendRecord};
use chrono::{DateTime, Duration, Utc};
use shared::TrendConfig;

/// Trend classification engine (stateless apart from its thresholds)
#[derive(Debug, Clone)]
pub struct TrendAnalyzer {
    config: TrendConfig,
}

impl TrendAnalyzer {
    pub fn new(config: TrendConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TrendConfig {
        &self.config
    }

    /// Classify a change against the thresholds
    ///
    /// `improving` if change > up, `declining` if change < -down, else `stable`.
    pub fn classify(&self, change: f64) -> TrendDirection {
        if change > self.config.threshold_up {
            TrendDirection::Improving
        } else if change < -self.config.threshold_down {
            TrendDirection::Declining
        } else {
            TrendDirection::Stable
        }
    }

    /// Analyze one domain's history over `[as_of - window_days, as_of]`
    pub fn analyze(
        &self,
        domain_id: &str,
        history: &[DomainScoreSnapshot],
        as_of: DateTime<Utc>,
        window_days: u32,
    ) -> TrendRecord {
        let window = in_window(history, window_start(as_of, window_days), as_of);

        let (baseline, current) = match (window.first(), window.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return TrendRecord::flat(domain_id),
        };

        let change = current.score - baseline.score;
        let change_percent = change / baseline.score.max(self.config.epsilon);

        TrendRecord {
            domain_id: domain_id.to_string(),
            trend: self.classify(change),
            current_score: current.score,
            change,
            change_percent,
            data_points: window.len(),
            confidence: current.confidence,
            history: window,
        }
    }
}

impl Default for TrendAnalyzer {
    fn default() -> Self {
        Self::new(TrendConfig::default())
    }
}

/// Inclusive start of a window ending at `as_of`
///
/// Windows reaching past the representable range start at the earliest
/// representable instant.
pub fn window_start(as_of: DateTime<Utc>, window_days: u32) -> DateTime<Utc> {
    Duration::try_days(i64::from(window_days))
        .and_then(|span| as_of.checked_sub_signed(span))
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// Snapshots with `start <= timestamp <= end`, oldest first
pub fn in_window(
    history: &[DomainScoreSnapshot],
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Vec<DomainScoreSnapshot> {
    let mut window: Vec<DomainScoreSnapshot> = history
        .iter()
        .filter(|s| s.timestamp >= start && s.timestamp <= end)
        .cloned()
        .collect();
    window.sort_by_key(|s| s.timestamp);
    window
}
