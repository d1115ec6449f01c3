//! psyche summary command

use crate::app::App;
use crate::output::{score_bar, Output};
use clap::Args;
use console::style;

#[derive(Debug, Args)]
pub struct SummaryCommand {
    /// Hide domains that have not been analyzed yet
    #[arg(long)]
    pub analyzed_only: bool,
}

impl SummaryCommand {
    pub fn run(&self, app: &App, out: &Output) -> anyhow::Result<()> {
        let mut summary = app.profile.enhanced_profile_summary()?;
        if self.analyzed_only {
            summary.domain_scores.retain(|entry| !entry.awaiting_analysis);
        }
        if out.is_json() {
            return out.json(&summary);
        }

        let mut current = None;
        for entry in &summary.domain_scores {
            if current != Some(entry.category) {
                current = Some(entry.category);
                println!("{}", style(entry.category.label()).bold().cyan());
            }
            if entry.awaiting_analysis {
                println!(
                    "  {:<36} {}",
                    entry.name,
                    style("awaiting analysis").dim()
                );
            } else {
                println!(
                    "  {:<36} {} {:.3}  confidence {:.2}  {} data point(s)",
                    entry.name,
                    score_bar(entry.score),
                    entry.score,
                    entry.confidence,
                    entry.data_points_count
                );
            }
        }

        if !summary.top_features.is_empty() {
            println!("{}", style("Top linguistic features").bold());
            for feature in &summary.top_features {
                println!(
                    "  {:<12} {:<20} {:5.1}%",
                    feature.category, feature.feature_name, feature.percentage
                );
            }
        }
        Ok(())
    }
}
