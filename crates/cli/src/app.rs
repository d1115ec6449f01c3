//! Dependency wiring for store-backed commands
//!
//! ```text
//! App
//!   ├── JsonFileStore (snapshots, signals, features)
//!   ├── JsonLinesTripleRepository (facts.jsonl next to the store)
//!   ├── ScoringService ─┐
//!   ├── ProfileService ─┼── ProfileContext (shared)
//!   └── FactPublisher ──┘
//! ```

use anyhow::Context;
use psyche_adapter::{JsonFileStore, JsonLinesTripleRepository};
use psyche_usecase::psyche_domain::RelationshipProjector;
use psyche_usecase::{FactPublisher, ProfileContext, ProfileService, RejectionLog, ScoringService};
use shared::EngineConfig;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub const DEFAULT_STORE: &str = ".psyche/store.json";

/// Configuration files looked up in the working directory
const CONFIG_CANDIDATES: [&str; 3] = ["psyche.yaml", "psyche.yml", "psyche.json"];

pub struct App {
    pub config: EngineConfig,
    pub triples: Arc<JsonLinesTripleRepository>,
    pub scoring: Arc<ScoringService>,
    pub profile: ProfileService,
    pub publisher: FactPublisher,
}

impl App {
    pub fn open(config_path: Option<&Path>, store_path: &Path) -> anyhow::Result<Self> {
        let config = load_config(config_path, Path::new("."))?;

        let store = Arc::new(
            JsonFileStore::open(store_path)
                .with_context(|| format!("Failed to open store {}", store_path.display()))?,
        );
        let triples = Arc::new(JsonLinesTripleRepository::new(facts_path(store_path)));

        let context = ProfileContext::new(store.clone(), store.clone(), store)
            .with_config(config.clone());
        let rejections = Arc::new(RejectionLog::new(config.rejection_log_capacity));

        let publisher = FactPublisher::new(
            RelationshipProjector::new(context.registry.clone()),
            triples.clone(),
            rejections.clone(),
            context.clock.clone(),
            context.logger.clone(),
        );
        let profile = ProfileService::new(context.clone());
        let scoring = Arc::new(ScoringService::with_rejection_log(context, rejections));

        Ok(Self {
            config,
            triples,
            scoring,
            profile,
            publisher,
        })
    }
}

/// Explicit path, else the first candidate found in `dir`, else defaults
pub fn load_config(path: Option<&Path>, dir: &Path) -> anyhow::Result<EngineConfig> {
    let path = match path {
        Some(path) => Some(path.to_path_buf()),
        None => CONFIG_CANDIDATES
            .iter()
            .map(|name| dir.join(name))
            .find(|candidate| candidate.exists()),
    };

    match path {
        Some(path) => EngineConfig::from_file(&path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Ok(EngineConfig::default()),
    }
}

/// Fact log kept beside the store file
pub fn facts_path(store_path: &Path) -> PathBuf {
    store_path.with_file_name("facts.jsonl")
}
