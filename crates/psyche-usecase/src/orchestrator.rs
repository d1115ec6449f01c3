//! RescoreOrchestrator - Drives signal producers and re-scoring
//!
//! Producers are external collaborators (dictionary matcher, embedding
//! model, qualitative judge). The orchestrator asks each of them about
//! every catalog domain when the rescan policy fires, hands their signals
//! to the scoring service and rescores every domain that received one.

use crate::error::ScoringError;
use crate::rescan::{RescanPolicy, SessionState};
use crate::scoring::ScoringService;
use async_trait::async_trait;
use psyche_domain::{DomainScoreSnapshot, RawSignal};
use serde::Serialize;
use shared::meta;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Recent conversation handed to producers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversationWindow {
    pub messages: Vec<String>,
}

impl ConversationWindow {
    pub fn new(messages: Vec<String>) -> Self {
        Self { messages }
    }

    pub fn push(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// All messages joined by newlines
    pub fn text(&self) -> String {
        self.messages.join("\n")
    }
}

/// An external signal source
#[async_trait]
pub trait SignalProducer: Send + Sync {
    /// Short name for logs
    fn name(&self) -> &str;

    /// Estimate one domain; `None` means no evidence yet (not an error)
    async fn produce(&self, domain_id: &str, window: &ConversationWindow) -> Option<RawSignal>;
}

/// Outcome of one scan
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RescanReport {
    pub signals_accepted: usize,
    pub signals_rejected: usize,
    pub rescored: BTreeMap<String, DomainScoreSnapshot>,
    #[serde(skip)]
    pub failed: BTreeMap<String, ScoringError>,
}

/// Runs producers and re-scoring according to a rescan policy
pub struct RescoreOrchestrator {
    scoring: Arc<ScoringService>,
    producers: Vec<Arc<dyn SignalProducer>>,
    policy: Box<dyn RescanPolicy>,
}

impl RescoreOrchestrator {
    pub fn new(scoring: Arc<ScoringService>, policy: Box<dyn RescanPolicy>) -> Self {
        Self {
            scoring,
            producers: Vec::new(),
            policy,
        }
    }

    /// Builder: add a producer
    pub fn with_producer(mut self, producer: Arc<dyn SignalProducer>) -> Self {
        self.producers.push(producer);
        self
    }

    pub fn producer_names(&self) -> Vec<&str> {
        self.producers.iter().map(|p| p.name()).collect()
    }

    /// Count a new message and scan if the policy says so
    pub async fn observe(
        &self,
        state: &mut SessionState,
        window: &ConversationWindow,
    ) -> Result<Option<RescanReport>, ScoringError> {
        state.record_message();
        let now = self.scoring.context().clock.now();
        if !self.policy.should_rescan(state, now) {
            return Ok(None);
        }

        let report = self.scan(window).await?;
        state.mark_scanned(now);
        Ok(Some(report))
    }

    /// Ask every producer about every catalog domain, then rescore
    pub async fn scan(&self, window: &ConversationWindow) -> Result<RescanReport, ScoringError> {
        let context = self.scoring.context();

        let mut raws = Vec::new();
        for domain_id in context.registry.ids() {
            for producer in &self.producers {
                if let Some(raw) = producer.produce(domain_id, window).await {
                    raws.push(raw);
                }
            }
        }

        let submitted = self.scoring.submit_batch(raws)?;
        let mut report = RescanReport {
            signals_accepted: submitted.accepted,
            signals_rejected: submitted.rejected.len(),
            ..RescanReport::default()
        };

        for (domain_id, outcome) in self.scoring.rescore_many(submitted.touched).await {
            match outcome {
                Ok(snapshot) => {
                    report.rescored.insert(domain_id, snapshot);
                }
                Err(e) => {
                    report.failed.insert(domain_id, e);
                }
            }
        }

        context.logger.info(
            "Rescan complete",
            Some(&meta([
                ("accepted", report.signals_accepted.to_string()),
                ("rejected", report.signals_rejected.to_string()),
                ("rescored", report.rescored.len().to_string()),
                ("failed", report.failed.len().to_string()),
            ])),
        );
        Ok(report)
    }
}
