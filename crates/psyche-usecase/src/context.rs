//! ProfileContext - Everything an operation needs, passed explicitly
//!
//! Holds the domain catalog and handles to the stores. Nothing here is a
//! process-wide singleton: tests build a context around isolated stores.

use psyche_domain::{
    Clock, DomainRegistry, FeatureRepository, SignalRepository, SnapshotRepository, SystemClock,
};
use shared::{EngineConfig, Logger, TracingLogger};
use std::sync::Arc;

/// Catalog, stores, clock, logger and configuration for one profile
#[derive(Clone)]
pub struct ProfileContext {
    pub registry: DomainRegistry,
    pub snapshots: Arc<dyn SnapshotRepository>,
    pub signals: Arc<dyn SignalRepository>,
    pub features: Arc<dyn FeatureRepository>,
    pub clock: Arc<dyn Clock>,
    pub logger: Arc<dyn Logger>,
    pub config: EngineConfig,
}

impl ProfileContext {
    /// Context over the standard catalog with the wall clock and tracing logger
    pub fn new(
        snapshots: Arc<dyn SnapshotRepository>,
        signals: Arc<dyn SignalRepository>,
        features: Arc<dyn FeatureRepository>,
    ) -> Self {
        Self {
            registry: DomainRegistry::standard(),
            snapshots,
            signals,
            features,
            clock: Arc::new(SystemClock),
            logger: Arc::new(TracingLogger),
            config: EngineConfig::default(),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_registry(mut self, registry: DomainRegistry) -> Self {
        self.registry = registry;
        self
    }
}
