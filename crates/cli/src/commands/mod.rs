//! CLI Commands

pub mod domains;
pub mod evolution;
pub mod facts;
pub mod ingest;
pub mod init;
pub mod signals;
pub mod summary;
pub mod trends;

pub use domains::DomainsCommand;
pub use evolution::EvolutionCommand;
pub use facts::{FactsCommand, TopicsCommand};
pub use ingest::IngestCommand;
pub use init::InitCommand;
pub use signals::SignalsCommand;
pub use summary::SummaryCommand;
pub use trends::TrendsCommand;
