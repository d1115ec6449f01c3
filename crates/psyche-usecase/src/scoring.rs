//! ScoringService - Signal intake and per-domain re-scoring
//!
//! ```text
//! RawSignal ──validate──▶ SignalRepository ──current()──▶ SignalAggregator
//!                                                              │
//!                                  SnapshotRepository ◀──append┘
//! ```
//!
//! Re-scoring is single flight per domain: while one rescore of a domain
//! is running, further requests for it wait and share its outcome. Distinct
//! domains score in parallel. A domain stays in flight until its store
//! append has finished, even if the leading request is dropped first.

use crate::context::ProfileContext;
use crate::error::ScoringError;
use crate::rejection_log::RejectionLog;
use psyche_domain::{
    Domain, DomainScoreSnapshot, RawSignal, RepositoryError, SignalAggregator, SignalRejection,
    SignalScore,
};
use serde::Serialize;
use shared::meta;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::{Arc, Mutex};
use tokio::sync::watch;
use tokio::task::JoinSet;

type Outcome = Option<Result<DomainScoreSnapshot, ScoringError>>;
type InFlight = Arc<Mutex<HashMap<String, watch::Receiver<Outcome>>>>;

/// Result of submitting a batch of raw signals
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitReport {
    pub accepted: usize,
    #[serde(skip)]
    pub rejected: Vec<SignalRejection>,
    /// Domains that received at least one accepted signal
    pub touched: BTreeSet<String>,
}

/// Signal intake and single-flight re-scoring
pub struct ScoringService {
    context: ProfileContext,
    aggregator: SignalAggregator,
    rejections: Arc<RejectionLog>,
    in_flight: InFlight,
}

impl ScoringService {
    pub fn new(context: ProfileContext) -> Self {
        let rejections = Arc::new(RejectionLog::new(context.config.rejection_log_capacity));
        Self::with_rejection_log(context, rejections)
    }

    /// Share a rejection log with other services
    pub fn with_rejection_log(context: ProfileContext, rejections: Arc<RejectionLog>) -> Self {
        Self {
            context,
            aggregator: SignalAggregator::new(),
            rejections,
            in_flight: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn context(&self) -> &ProfileContext {
        &self.context
    }

    pub fn rejections(&self) -> &Arc<RejectionLog> {
        &self.rejections
    }

    /// Validate and store one producer signal as the current one of its type
    ///
    /// Contract violations and unknown domains are logged and recorded,
    /// then returned to the caller.
    pub fn submit_signal(&self, raw: RawSignal) -> Result<SignalScore, ScoringError> {
        let now = self.context.clock.now();
        let domain_id = raw.domain_id.clone();

        let signal = match raw.validate(now) {
            Ok(signal) => signal,
            Err(rejection) => {
                self.reject(&domain_id, &rejection.to_string());
                return Err(rejection.into());
            }
        };

        if !self.context.registry.contains(signal.domain_id()) {
            self.reject(&domain_id, "unknown domain");
            return Err(ScoringError::UnknownDomain(domain_id));
        }

        self.context
            .signals
            .put(signal.clone())
            .map_err(|source| ScoringError::Store {
                domain_id: domain_id.clone(),
                attempts: 1,
                source,
            })?;

        self.context.logger.debug(
            "Signal accepted",
            Some(&meta([
                ("domainId", domain_id.as_str()),
                ("signalType", signal.signal_type().as_str()),
            ])),
        );
        Ok(signal)
    }

    /// Submit many signals; a rejected signal never stops the rest
    ///
    /// Store failures are returned as errors since later signals would
    /// most likely fail the same way.
    pub fn submit_batch(
        &self,
        raws: impl IntoIterator<Item = RawSignal>,
    ) -> Result<SubmitReport, ScoringError> {
        let mut report = SubmitReport::default();
        for raw in raws {
            match self.submit_signal(raw) {
                Ok(signal) => {
                    report.accepted += 1;
                    report.touched.insert(signal.domain_id().to_string());
                }
                Err(ScoringError::Rejected(rejection)) => report.rejected.push(rejection),
                Err(ScoringError::UnknownDomain(domain_id)) => {
                    report
                        .rejected
                        .push(SignalRejection::UnknownDomain { domain_id });
                }
                Err(other) => return Err(other),
            }
        }
        Ok(report)
    }

    /// Aggregate the current signals of a domain and append a snapshot
    ///
    /// Concurrent calls for the same domain share one aggregation and one
    /// append.
    pub async fn rescore(&self, domain_id: &str) -> Result<DomainScoreSnapshot, ScoringError> {
        let domain = self
            .context
            .registry
            .get(domain_id)
            .ok_or_else(|| ScoringError::UnknownDomain(domain_id.to_string()))?;

        let sender = {
            let mut in_flight = self.in_flight.lock().unwrap_or_else(|e| e.into_inner());
            match in_flight.get(domain_id) {
                Some(receiver) => Err(receiver.clone()),
                None => {
                    let (sender, receiver) = watch::channel(None);
                    in_flight.insert(domain_id.to_string(), receiver);
                    Ok(sender)
                }
            }
        };

        match sender {
            Ok(sender) => {
                let guard = Arc::new(InFlightGuard {
                    in_flight: Arc::clone(&self.in_flight),
                    domain_id: domain_id.to_string(),
                });
                let outcome = self.score_and_append(domain, &guard).await;
                drop(guard);
                let _ = sender.send(Some(outcome.clone()));
                outcome
            }
            Err(mut receiver) => {
                self.context.logger.debug(
                    "Rescore coalesced onto in-flight request",
                    Some(&meta([("domainId", domain_id)])),
                );
                let aborted = || ScoringError::Aborted {
                    domain_id: domain_id.to_string(),
                };
                match receiver.wait_for(Option::is_some).await {
                    Ok(outcome) => outcome.clone().unwrap_or_else(|| Err(aborted())),
                    Err(_) => Err(aborted()),
                }
            }
        }
    }

    /// Rescore several domains in parallel, one task per distinct domain
    pub async fn rescore_many(
        self: &Arc<Self>,
        domain_ids: impl IntoIterator<Item = String>,
    ) -> BTreeMap<String, Result<DomainScoreSnapshot, ScoringError>> {
        let distinct: BTreeSet<String> = domain_ids.into_iter().collect();
        let mut tasks = JoinSet::new();
        for domain_id in distinct.iter().cloned() {
            let service = Arc::clone(self);
            tasks.spawn(async move {
                let outcome = service.rescore(&domain_id).await;
                (domain_id, outcome)
            });
        }

        let mut results = BTreeMap::new();
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((domain_id, outcome)) => {
                    results.insert(domain_id, outcome);
                }
                Err(e) => self
                    .context
                    .logger
                    .error(&format!("Rescore task failed: {}", e), None),
            }
        }

        // A panicked task leaves its domain without an entry
        for domain_id in distinct {
            results.entry(domain_id.clone()).or_insert_with(|| {
                Err(ScoringError::Aborted { domain_id })
            });
        }
        results
    }

    async fn score_and_append(
        &self,
        domain: &'static Domain,
        guard: &Arc<InFlightGuard>,
    ) -> Result<DomainScoreSnapshot, ScoringError> {
        let signals = self
            .context
            .signals
            .current(domain.id)
            .map_err(|source| ScoringError::Store {
                domain_id: domain.id.to_string(),
                attempts: 1,
                source,
            })?;

        let (snapshot, aggregate) =
            self.aggregator
                .snapshot(domain, &signals, self.context.clock.now());

        let max_attempts = self.context.config.scoring.append_retries + 1;
        let mut attempts = 0;
        loop {
            attempts += 1;
            match self.append(&snapshot, guard).await {
                Ok(()) => break,
                Err(source) if source.is_transient() && attempts < max_attempts => {
                    self.context.logger.warn(
                        &format!("Snapshot append failed, retrying: {}", source),
                        Some(&meta([
                            ("domainId", domain.id.to_string()),
                            ("attempt", attempts.to_string()),
                        ])),
                    );
                }
                Err(source) => {
                    self.context.logger.error(
                        &format!("Snapshot append failed: {}", source),
                        Some(&meta([
                            ("domainId", domain.id.to_string()),
                            ("attempts", attempts.to_string()),
                        ])),
                    );
                    return Err(ScoringError::Store {
                        domain_id: domain.id.to_string(),
                        attempts,
                        source,
                    });
                }
            }
        }

        self.context.logger.debug(
            "Snapshot appended",
            Some(&meta([
                ("domainId", domain.id.to_string()),
                ("score", format!("{:.4}", snapshot.score)),
                ("confidence", format!("{:.4}", snapshot.confidence)),
                ("signals", aggregate.signal_count.to_string()),
            ])),
        );
        Ok(snapshot)
    }

    /// Stores may block on I/O, so appends run on the blocking pool
    ///
    /// The blocking task holds its own reference to the in-flight guard.
    async fn append(
        &self,
        snapshot: &DomainScoreSnapshot,
        guard: &Arc<InFlightGuard>,
    ) -> Result<(), RepositoryError> {
        let store = Arc::clone(&self.context.snapshots);
        let snapshot = snapshot.clone();
        let guard = Arc::clone(guard);
        tokio::task::spawn_blocking(move || {
            let appended = store.append(&snapshot);
            drop(guard);
            appended
        })
            .await
            .unwrap_or_else(|e| {
                Err(RepositoryError::Persistence {
                    message: format!("append task failed: {}", e),
                })
            })
    }

    fn reject(&self, domain_id: &str, reason: &str) {
        self.context.logger.warn(
            &format!("Signal rejected: {}", reason),
            Some(&meta([("domainId", domain_id)])),
        );
        self.rejections
            .record_signal(self.context.clock.now(), domain_id, reason);
    }
}

/// Clears the in-flight entry once the leader and any append it started
/// are both gone
struct InFlightGuard {
    in_flight: InFlight,
    domain_id: String,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.in_flight
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(&self.domain_id);
    }
}
