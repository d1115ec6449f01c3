//! FactPublisher - Projects snapshots and topics into the triple store

use crate::error::PublishError;
use crate::rejection_log::RejectionLog;
use psyche_domain::{
    Clock, DomainScoreSnapshot, Fact, RawFact, RelationshipProjector, TripleRepository,
};
use serde::Serialize;
use shared::{meta, Logger};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Result of publishing producer-supplied triples
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishReport {
    pub ingested: usize,
    pub rejected: usize,
}

/// Sends projected facts to a triple store
pub struct FactPublisher {
    projector: RelationshipProjector,
    triples: Arc<dyn TripleRepository>,
    rejections: Arc<RejectionLog>,
    clock: Arc<dyn Clock>,
    logger: Arc<dyn Logger>,
}

impl FactPublisher {
    pub fn new(
        projector: RelationshipProjector,
        triples: Arc<dyn TripleRepository>,
        rejections: Arc<RejectionLog>,
        clock: Arc<dyn Clock>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            projector,
            triples,
            rejections,
            clock,
            logger,
        }
    }

    pub fn projector(&self) -> &RelationshipProjector {
        &self.projector
    }

    /// Project one snapshot and ingest its facts
    pub fn publish_snapshot(
        &self,
        user_id: &str,
        snapshot: &DomainScoreSnapshot,
    ) -> Result<Vec<Fact>, PublishError> {
        let facts = self.projector.project_facts(user_id, snapshot)?;
        let ingested = self.triples.ingest(&facts)?;
        self.logger.debug(
            "Snapshot facts published",
            Some(&meta([
                ("domainId", snapshot.domain_id.clone()),
                ("facts", ingested.to_string()),
            ])),
        );
        Ok(facts)
    }

    /// Project topic mentions and ingest the facts
    pub fn publish_topics(
        &self,
        user_id: &str,
        mentions: &BTreeMap<String, u32>,
    ) -> Result<usize, PublishError> {
        let facts = self.projector.project_topics(user_id, mentions)?;
        Ok(self.triples.ingest(&facts)?)
    }

    /// Validate producer triples, ingesting the valid ones in order
    ///
    /// Unknown predicates and malformed entities are logged, recorded and
    /// skipped.
    pub fn publish_raw(
        &self,
        raw_facts: impl IntoIterator<Item = RawFact>,
    ) -> Result<PublishReport, PublishError> {
        let mut valid = Vec::new();
        let mut rejected = 0;

        for raw in raw_facts {
            let described = format!("{} {} {}", raw.subject, raw.predicate, raw.object);
            match raw.validate() {
                Ok(fact) => valid.push(fact),
                Err(e) => {
                    rejected += 1;
                    self.logger.warn(
                        &format!("Fact rejected: {}", e),
                        Some(&meta([("fact", described.as_str())])),
                    );
                    self.rejections
                        .record_fact(self.clock.now(), format!("{} ({})", e, described));
                }
            }
        }

        let ingested = if valid.is_empty() {
            0
        } else {
            self.triples.ingest(&valid)?
        };
        Ok(PublishReport { ingested, rejected })
    }
}
