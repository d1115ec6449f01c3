//! ProfileService - Read-side views over the snapshot history
//!
//! Every operation reads the clock once and ignores snapshots stamped
//! after that instant, so a view computed while scoring continues never
//! mixes two states of the same domain.

use crate::context::ProfileContext;
use crate::error::ProfileError;
use chrono::{DateTime, Utc};
use psyche_domain::service::trend_analyzer::window_start;
use psyche_domain::{
    top_features, Category, EvolutionSummarizer, FeatureShare, ProfileEvolutionSummary,
    SignalScore, TrendAnalyzer, TrendRecord, NEUTRAL_SCORE,
};
use serde::Serialize;
use std::collections::BTreeMap;

/// Latest reading of one catalog domain
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainScoreEntry {
    pub domain_id: String,
    pub name: String,
    pub category: Category,
    pub score: f64,
    pub confidence: f64,
    pub data_points_count: u32,
    /// No signal has backed this domain yet
    pub awaiting_analysis: bool,
    pub last_updated: Option<DateTime<Utc>>,
}

/// Profile overview for presentation layers
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhancedProfileSummary {
    pub as_of: DateTime<Utc>,
    /// Every catalog domain, catalog order
    pub domain_scores: Vec<DomainScoreEntry>,
    pub top_features: Vec<FeatureShare>,
}

/// Read-only profile queries
pub struct ProfileService {
    context: ProfileContext,
    trends: TrendAnalyzer,
    evolution: EvolutionSummarizer,
}

impl ProfileService {
    pub fn new(context: ProfileContext) -> Self {
        let trends = TrendAnalyzer::new(context.config.trend.clone());
        let evolution = EvolutionSummarizer::new(context.config.evolution.clone());
        Self {
            context,
            trends,
            evolution,
        }
    }

    pub fn context(&self) -> &ProfileContext {
        &self.context
    }

    /// Latest score of every catalog domain plus the top linguistic features
    pub fn enhanced_profile_summary(&self) -> Result<EnhancedProfileSummary, ProfileError> {
        let as_of = self.context.clock.now();

        let mut domain_scores = Vec::with_capacity(self.context.registry.len());
        for domain in self.context.registry.list() {
            let latest = self.context.snapshots.latest(domain.id, as_of)?;
            let entry = match latest {
                Some(snapshot) => DomainScoreEntry {
                    domain_id: domain.id.to_string(),
                    name: domain.name.to_string(),
                    category: domain.category,
                    score: snapshot.score,
                    confidence: snapshot.confidence,
                    data_points_count: snapshot.data_points_count,
                    awaiting_analysis: snapshot.is_awaiting_analysis(),
                    last_updated: Some(snapshot.timestamp),
                },
                None => DomainScoreEntry {
                    domain_id: domain.id.to_string(),
                    name: domain.name.to_string(),
                    category: domain.category,
                    score: NEUTRAL_SCORE,
                    confidence: 0.0,
                    data_points_count: 0,
                    awaiting_analysis: true,
                    last_updated: None,
                },
            };
            domain_scores.push(entry);
        }

        let features = self.context.features.all()?;

        Ok(EnhancedProfileSummary {
            as_of,
            domain_scores,
            top_features: top_features(&features, self.context.config.summary.top_features),
        })
    }

    /// Trend of one catalog domain (`None` uses the configured window)
    pub fn analyze_trend(
        &self,
        domain_id: &str,
        window_days: Option<u32>,
    ) -> Result<TrendRecord, ProfileError> {
        if !self.context.registry.contains(domain_id) {
            return Err(ProfileError::UnknownDomain(domain_id.to_string()));
        }
        let as_of = self.context.clock.now();
        self.trend_as_of(domain_id, self.trend_window(window_days), as_of)
    }

    /// Trends of every domain with at least one snapshot
    pub fn analyze_all_trends(
        &self,
        window_days: Option<u32>,
    ) -> Result<BTreeMap<String, TrendRecord>, ProfileError> {
        let as_of = self.context.clock.now();
        let window_days = self.trend_window(window_days);

        let mut trends = BTreeMap::new();
        for domain_id in self.context.snapshots.domains_with_history()? {
            let record = self.trend_as_of(&domain_id, window_days, as_of)?;
            trends.insert(domain_id, record);
        }
        Ok(trends)
    }

    /// Stability and significant shifts over the long window
    pub fn analyze_profile_evolution(
        &self,
        window_days: Option<u32>,
    ) -> Result<ProfileEvolutionSummary, ProfileError> {
        let as_of = self.context.clock.now();
        let window_days = window_days.unwrap_or(self.context.config.evolution.window_days);

        let mut histories = BTreeMap::new();
        for domain_id in self.context.snapshots.domains_with_history()? {
            let history = self
                .context
                .snapshots
                .history_between(&domain_id, None, as_of)?;
            histories.insert(domain_id, history);
        }

        Ok(self.evolution.summarize(&histories, as_of, window_days))
    }

    /// Current signals of a domain, dictionary, embedding, qualitative
    pub fn hybrid_signals_for_domain(&self, domain_id: &str) -> Result<Vec<SignalScore>, ProfileError> {
        if !self.context.registry.contains(domain_id) {
            return Err(ProfileError::UnknownDomain(domain_id.to_string()));
        }
        let mut signals = self.context.signals.current(domain_id)?;
        signals.sort_by_key(|s| s.signal_type());
        Ok(signals)
    }

    fn trend_window(&self, window_days: Option<u32>) -> u32 {
        window_days.unwrap_or(self.context.config.trend.window_days)
    }

    fn trend_as_of(
        &self,
        domain_id: &str,
        window_days: u32,
        as_of: DateTime<Utc>,
    ) -> Result<TrendRecord, ProfileError> {
        let history = self.context.snapshots.history_between(
            domain_id,
            Some(window_start(as_of, window_days)),
            as_of,
        )?;
        Ok(self.trends.analyze(domain_id, &history, as_of, window_days))
    }
}
