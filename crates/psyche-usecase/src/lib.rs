//! # Psyche Use Case Layer
//!
//! Application-specific business rules.
//! This layer orchestrates the flow of data between the domain and adapters:
//!
//! - `ScoringService` - signal intake and single-flight re-scoring
//! - `ProfileService` - summary, trend and evolution views
//! - `RescoreOrchestrator` - producers + rescan policy
//! - `FactPublisher` - relationship facts to the triple store

pub mod context;
pub mod error;
pub mod orchestrator;
pub mod profile;
pub mod publisher;
pub mod rejection_log;
pub mod rescan;
pub mod scoring;

#[cfg(test)]
mod testing;

pub use psyche_domain;

pub use context::ProfileContext;
pub use error::{ProfileError, PublishError, ScoringError};
pub use orchestrator::{ConversationWindow, RescanReport, RescoreOrchestrator, SignalProducer};
pub use profile::{DomainScoreEntry, EnhancedProfileSummary, ProfileService};
pub use publisher::{FactPublisher, PublishReport};
pub use rejection_log::{RejectionEntry, RejectionKind, RejectionLog, RejectionStats};
pub use rescan::{MessageCountOrInterval, RescanPolicy, SessionState};
pub use scoring::{ScoringService, SubmitReport};
