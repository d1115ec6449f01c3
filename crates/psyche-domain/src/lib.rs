//! # Psyche Domain Layer
//!
//! The scoring core - domain catalog, signal fusion and temporal analysis.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Domain Layer (This Crate)                     │
//! │  ┌─────────────────────────────────────────────────────────────┐│
//! │  │  model/     - Entities & Value Objects                      ││
//! │  │  registry/  - The 39-domain catalog                         ││
//! │  │  repository/- Trait definitions (not implementations)       ││
//! │  │  service/   - Aggregation, trends, evolution, projection    ││
//! │  │  clock      - The only source of "now"                      ││
//! │  └─────────────────────────────────────────────────────────────┘│
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing in this crate performs I/O. Stores, signal producers and the
//! triple store sit behind the traits in `repository/` and are provided
//! by the adapter layer.

pub mod clock;
pub mod model;
pub mod registry;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use model::{
    domain::{Category, DataPoint, Domain, VoiceIndicator},
    evolution::{ChangeDirection, DomainEvolution, ProfileEvolutionSummary, SignificantChange},
    fact::{EntityKind, EntityRef, Fact, Predicate, ProjectionError, RawFact},
    feature::{top_features, FeatureCount, FeatureShare},
    signal::{RawSignal, SignalEvidence, SignalRejection, SignalScore, SignalType},
    snapshot::{DomainScoreSnapshot, SnapshotId},
    trend::{TrendDirection, TrendRecord},
};

pub use registry::DomainRegistry;

pub use repository::{
    feature_repository::FeatureRepository,
    signal_repository::SignalRepository,
    snapshot_repository::{ensure_in_order, SnapshotRepository},
    triple_repository::TripleRepository,
    RepositoryError,
};

pub use clock::{Clock, FixedClock, SystemClock};

pub use service::{
    aggregator::{AggregateScore, SignalAggregator, NEUTRAL_SCORE},
    evolution::EvolutionSummarizer,
    projection::{snapshot_from_facts, RelationshipProjector},
    trend_analyzer::TrendAnalyzer,
};
