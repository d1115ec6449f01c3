//! psyche evolution command

use crate::app::App;
use crate::output::{styled_change, Output};
use clap::Args;
use console::style;

#[derive(Debug, Args)]
pub struct EvolutionCommand {
    /// Window in days (defaults to the configured evolution window)
    #[arg(short, long)]
    pub window: Option<u32>,
}

impl EvolutionCommand {
    pub fn run(&self, app: &App, out: &Output) -> anyhow::Result<()> {
        let summary = app.profile.analyze_profile_evolution(self.window)?;
        if out.is_json() {
            return out.json(&summary);
        }

        println!(
            "{} over {} day(s): {} snapshot(s) across {} domain(s)",
            style("Profile evolution").bold(),
            summary.window_days,
            summary.snapshots,
            summary.domains.len()
        );
        println!("  Overall stability: {:.3}", summary.overall_stability);

        if summary.significant_changes.is_empty() {
            println!("  No significant changes");
            return Ok(());
        }
        println!("  {}", style("Significant changes").underlined());
        for change in &summary.significant_changes {
            println!(
                "    {:<36} {}",
                change.domain,
                styled_change(change.direction, change.change)
            );
        }
        Ok(())
    }
}
