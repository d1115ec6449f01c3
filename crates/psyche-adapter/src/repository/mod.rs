//! Persistence Adapters - Repository implementations
//!
//! These implement the repository traits from psyche-domain.

pub mod in_memory;
pub mod json_file;
pub mod jsonl_triples;

pub use in_memory::{
    InMemoryFeatureRepository, InMemorySignalRepository, InMemorySnapshotRepository,
    InMemoryTripleRepository,
};
pub use json_file::JsonFileStore;
pub use jsonl_triples::JsonLinesTripleRepository;
