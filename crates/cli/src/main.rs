//! Psyche CLI - Domain scoring and profile evolution from the command line
//!
//! Usage:
//!   psyche init [dir]                   - Write a default psyche.yaml
//!   psyche domains list [--category C]  - Browse the domain catalog
//!   psyche domains show <id>            - Describe one domain
//!   psyche ingest <glob>                - Submit signal files and rescore
//!   psyche trends [--domain ID]         - Short-window trends
//!   psyche evolution                    - Long-window stability
//!   psyche summary                      - Current score of every domain
//!   psyche signals <domain>             - Current signals of a domain
//!   psyche facts <domain>               - Relationship facts of a domain
//!   psyche topics name=count...         - Topic facts

mod app;
mod commands;
mod output;

use clap::{Parser, Subcommand};
use commands::{
    DomainsCommand, EvolutionCommand, FactsCommand, IngestCommand, InitCommand, SignalsCommand,
    SummaryCommand, TopicsCommand, TrendsCommand,
};
use output::Output;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "psyche")]
#[command(about = "Psyche - Psychological domain scoring and profile evolution")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Engine configuration (YAML or JSON); psyche.yaml is used if present
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Profile store file
    #[arg(short, long, global = true, default_value = app::DEFAULT_STORE)]
    store: PathBuf,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default configuration
    Init(InitCommand),
    /// Browse the domain catalog
    Domains(DomainsCommand),
    /// Submit raw signal files and rescore the touched domains
    Ingest(IngestCommand),
    /// Short-window trend per domain
    Trends(TrendsCommand),
    /// Long-window stability and significant changes
    Evolution(EvolutionCommand),
    /// Current score of every catalog domain
    Summary(SummaryCommand),
    /// Current signals of one domain
    Signals(SignalsCommand),
    /// Relationship facts projected from a domain's latest score
    Facts(FactsCommand),
    /// Topic facts from mention counts
    Topics(TopicsCommand),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so --json output stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let out = Output::new(cli.json);

    match cli.command {
        Commands::Init(cmd) => cmd.run(&out),
        Commands::Domains(cmd) => cmd.run(&out),
        command => {
            let app = app::App::open(cli.config.as_deref(), &cli.store)?;
            match command {
                Commands::Ingest(cmd) => cmd.run(&app, &out).await,
                Commands::Trends(cmd) => cmd.run(&app, &out),
                Commands::Evolution(cmd) => cmd.run(&app, &out),
                Commands::Summary(cmd) => cmd.run(&app, &out),
                Commands::Signals(cmd) => cmd.run(&app, &out),
                Commands::Facts(cmd) => cmd.run(&app, &out),
                Commands::Topics(cmd) => cmd.run(&app, &out),
                Commands::Init(_) | Commands::Domains(_) => Ok(()),
            }
        }
    }
}
