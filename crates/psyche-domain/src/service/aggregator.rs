//! Signal Aggregator - Fuses up to three signals into one domain score
//!
//! Each signal's effective influence is its nominal weight scaled by its
//! own confidence:
//!
//! ```text
//! adjusted(s)  = s.weight * s.confidence
//! score        = Σ s.score * adjusted(s) / Σ adjusted(s)      (0.5 if Σ adjusted = 0)
//! confidence   = Σ s.confidence * s.weight / Σ s.weight        (0   if Σ weight = 0)
//! ```
//!
//! No signal at all yields the neutral midpoint with zero confidence.
//! Sums are taken in canonical signal-type order so the result does not
//! depend on the order signals were supplied in.

use crate::model::domain::Domain;
use crate::model::signal::{SignalScore, SignalType};
use crate::model::snapshot::DomainScoreSnapshot;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeSet;

/// Score reported when no signal carries any weight
pub const NEUTRAL_SCORE: f64 = 0.5;

/// Result of fusing the signals of one domain
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateScore {
    pub score: f64,
    pub confidence: f64,
    /// Signals that took part (after keeping one per type)
    pub signal_count: usize,
}

impl AggregateScore {
    pub fn neutral() -> Self {
        Self {
            score: NEUTRAL_SCORE,
            confidence: 0.0,
            signal_count: 0,
        }
    }
}

/// The aggregation engine (stateless)
#[derive(Debug, Clone, Copy, Default)]
pub struct SignalAggregator;

impl SignalAggregator {
    pub fn new() -> Self {
        Self
    }

    /// Fuse the given signals into one (score, confidence) pair
    pub fn aggregate(&self, signals: &[SignalScore]) -> AggregateScore {
        let current = current_per_type(signals);
        if current.is_empty() {
            return AggregateScore::neutral();
        }

        let mut weighted_score_sum = 0.0;
        let mut total_adjusted_weight = 0.0;
        let mut confidence_numerator = 0.0;
        let mut total_base_weight = 0.0;

        for signal in &current {
            let adjusted_weight = signal.weight_used() * signal.confidence();
            weighted_score_sum += signal.score() * adjusted_weight;
            total_adjusted_weight += adjusted_weight;
            confidence_numerator += signal.confidence() * signal.weight_used();
            total_base_weight += signal.weight_used();
        }

        let score = if total_adjusted_weight > 0.0 {
            weighted_score_sum / total_adjusted_weight
        } else {
            NEUTRAL_SCORE
        };
        let confidence = if total_base_weight > 0.0 {
            confidence_numerator / total_base_weight
        } else {
            0.0
        };

        AggregateScore {
            score,
            confidence,
            signal_count: current.len(),
        }
    }

    /// Markers detected for a domain
    ///
    /// Distinct dictionary matches plus catalog markers named in the
    /// qualitative evidence.
    pub fn markers_detected(&self, domain: &Domain, signals: &[SignalScore]) -> u32 {
        let current = current_per_type(signals);

        let matched: BTreeSet<String> = current
            .iter()
            .flat_map(|s| s.matched_words().iter())
            .map(|w| w.trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();

        let mentioned: usize = current
            .iter()
            .filter_map(|s| s.evidence_text())
            .map(|text| domain.markers_mentioned_in(text))
            .sum();

        u32::try_from(matched.len() + mentioned).unwrap_or(u32::MAX)
    }

    /// Aggregate the domain's signals into a snapshot stamped `at`
    ///
    /// Signals addressed to another domain are ignored.
    pub fn snapshot(
        &self,
        domain: &Domain,
        signals: &[SignalScore],
        at: DateTime<Utc>,
    ) -> (DomainScoreSnapshot, AggregateScore) {
        let own: Vec<SignalScore> = signals
            .iter()
            .filter(|s| s.domain_id() == domain.id)
            .cloned()
            .collect();

        let aggregate = self.aggregate(&own);
        let snapshot = DomainScoreSnapshot::new(
            domain.id,
            aggregate.score,
            aggregate.confidence,
            self.markers_detected(domain, &own),
            at,
        );
        (snapshot, aggregate)
    }
}

/// One signal per type in canonical order, keeping the latest
/// (ties broken by confidence, then score)
fn current_per_type(signals: &[SignalScore]) -> Vec<&SignalScore> {
    SignalType::ALL
        .iter()
        .filter_map(|signal_type| {
            signals
                .iter()
                .filter(|s| s.signal_type() == *signal_type)
                .max_by(|a, b| a.recency_cmp(b))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::signal::SignalEvidence;
    use crate::registry::DomainRegistry;
    use chrono::{Duration, TimeZone};

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()
    }

    fn signal(signal_type: SignalType, score: f64, confidence: f64) -> SignalScore {
        SignalScore::new("big_five_extraversion", signal_type, score, confidence, at()).unwrap()
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    // ============== Scoring Contract Tests ==============

    #[test]
    fn test_three_signal_scenario() {
        let signals = vec![
            signal(SignalType::Dictionary, 0.8, 0.5),
            signal(SignalType::Embedding, 0.6, 0.9),
            signal(SignalType::Qualitative, 0.4, 0.7),
        ];

        let result = SignalAggregator::new().aggregate(&signals);

        // adjusted 0.10, 0.27, 0.35 → 0.382 / 0.72
        assert!(close(result.score, 0.382 / 0.72));
        assert!((result.score - 0.5306).abs() < 1e-4);
        assert!(close(result.confidence, 0.72));
        assert_eq!(result.signal_count, 3);
    }

    #[test]
    fn test_no_signals_is_neutral() {
        let result = SignalAggregator::new().aggregate(&[]);
        assert_eq!(result.score, 0.5);
        assert_eq!(result.confidence, 0.0);
        assert_eq!(result.signal_count, 0);
    }

    #[test]
    fn test_single_signal_is_identity() {
        let aggregator = SignalAggregator::new();
        for signal_type in SignalType::ALL {
            for (score, confidence) in [(0.0, 0.3), (0.37, 0.9), (1.0, 1.0), (0.81, 0.01)] {
                let result = aggregator.aggregate(&[signal(signal_type, score, confidence)]);
                assert!(close(result.score, score), "{} {}", signal_type, score);
                assert!(close(result.confidence, confidence));
            }
        }
    }

    #[test]
    fn test_single_signal_with_zero_confidence() {
        // No adjusted weight: neutral score, confidence passes through as 0
        let result = SignalAggregator::new().aggregate(&[signal(SignalType::Qualitative, 0.9, 0.0)]);
        assert_eq!(result.score, 0.5);
        assert_eq!(result.confidence, 0.0);
    }

    #[test]
    fn test_zero_weight_signal_contributes_nothing() {
        let aggregator = SignalAggregator::new();
        let embedding = signal(SignalType::Embedding, 0.6, 0.9);
        let silent = signal(SignalType::Dictionary, 0.1, 0.8).with_weight(0.0).unwrap();

        let alone = aggregator.aggregate(&[embedding.clone()]);
        let with_silent = aggregator.aggregate(&[embedding, silent]);

        assert!(close(alone.score, with_silent.score));
        assert!(close(alone.confidence, with_silent.confidence));
    }

    #[test]
    fn test_confident_dictionary_beats_unconfident_qualitative() {
        let result = SignalAggregator::new().aggregate(&[
            signal(SignalType::Dictionary, 0.9, 1.0),
            signal(SignalType::Qualitative, 0.1, 0.1),
        ]);
        // adjusted 0.2 vs 0.05
        assert!(result.score > 0.7);
    }

    #[test]
    fn test_order_independence() {
        let signals = vec![
            signal(SignalType::Dictionary, 0.13, 0.47),
            signal(SignalType::Embedding, 0.71, 0.33),
            signal(SignalType::Qualitative, 0.29, 0.91),
        ];
        let aggregator = SignalAggregator::new();
        let expected = aggregator.aggregate(&signals);

        let permutations = [[0, 1, 2], [0, 2, 1], [1, 0, 2], [1, 2, 0], [2, 0, 1], [2, 1, 0]];
        for order in permutations {
            let permuted: Vec<_> = order.iter().map(|&i| signals[i].clone()).collect();
            let result = aggregator.aggregate(&permuted);
            assert_eq!(result.score, expected.score);
            assert_eq!(result.confidence, expected.confidence);
        }
    }

    #[test]
    fn test_duplicate_type_keeps_latest() {
        let older = signal(SignalType::Qualitative, 0.1, 0.9);
        let newer = SignalScore::new(
            "big_five_extraversion",
            SignalType::Qualitative,
            0.8,
            0.6,
            at() + Duration::minutes(5),
        )
        .unwrap();

        let aggregator = SignalAggregator::new();
        let a = aggregator.aggregate(&[older.clone(), newer.clone()]);
        let b = aggregator.aggregate(&[newer, older]);

        assert_eq!(a, b);
        assert!(close(a.score, 0.8));
        assert_eq!(a.signal_count, 1);
    }

    // ============== Snapshot Tests ==============

    #[test]
    fn test_snapshot_counts_markers() {
        let registry = DomainRegistry::standard();
        let domain = registry.get("big_five_extraversion").unwrap();

        let dictionary = signal(SignalType::Dictionary, 0.8, 0.5)
            .with_evidence(SignalEvidence::Dictionary {
                matched_words: vec!["party".into(), "Party".into(), "crowd".into()],
            })
            .unwrap();
        let qualitative = signal(SignalType::Qualitative, 0.4, 0.7)
            .with_evidence(SignalEvidence::Qualitative {
                evidence_text: Some("Mentions friends and feeling energized".into()),
            })
            .unwrap();

        let (snapshot, aggregate) =
            SignalAggregator::new().snapshot(domain, &[dictionary, qualitative], at());

        // {party, crowd} + {friends, energized}
        assert_eq!(snapshot.data_points_count, 4);
        assert_eq!(snapshot.domain_id, "big_five_extraversion");
        assert_eq!(snapshot.timestamp, at());
        assert_eq!(snapshot.score, aggregate.score);
    }

    #[test]
    fn test_snapshot_ignores_foreign_domain_signals() {
        let registry = DomainRegistry::standard();
        let domain = registry.get("big_five_openness").unwrap();

        let foreign = signal(SignalType::Qualitative, 0.9, 0.9);
        let (snapshot, aggregate) = SignalAggregator::new().snapshot(domain, &[foreign], at());

        assert_eq!(aggregate.signal_count, 0);
        assert_eq!(snapshot.score, 0.5);
        assert!(snapshot.is_awaiting_analysis());
    }
}
