//! psyche trends command

use crate::app::App;
use crate::output::{styled_trend, Output};
use clap::Args;
use console::style;
use psyche_usecase::psyche_domain::TrendRecord;

#[derive(Debug, Args)]
pub struct TrendsCommand {
    /// Window in days (defaults to the configured trend window)
    #[arg(short, long)]
    pub window: Option<u32>,

    /// Only this domain
    #[arg(short, long)]
    pub domain: Option<String>,
}

impl TrendsCommand {
    pub fn run(&self, app: &App, out: &Output) -> anyhow::Result<()> {
        let window = self.window.unwrap_or(app.config.trend.window_days);

        if let Some(domain_id) = &self.domain {
            let record = app.profile.analyze_trend(domain_id, Some(window))?;
            if out.is_json() {
                return out.json(&record);
            }
            print_header(window);
            print_record(&record);
            return Ok(());
        }

        let trends = app.profile.analyze_all_trends(Some(window))?;
        if out.is_json() {
            return out.json(&trends);
        }
        if trends.is_empty() {
            println!("No snapshots yet. Run `psyche ingest` first.");
            return Ok(());
        }
        print_header(window);
        for record in trends.values() {
            print_record(record);
        }
        Ok(())
    }
}

fn print_header(window: u32) {
    println!(
        "{}",
        style(format!("Trends over the last {} day(s)", window)).bold()
    );
}

fn print_record(record: &TrendRecord) {
    println!(
        "  {:<36} {:<14} {:.3}  {:+.3} ({:+.1}%)  {} point(s)",
        record.domain_id,
        styled_trend(record.trend).to_string(),
        record.current_score,
        record.change,
        record.change_percent * 100.0,
        record.data_points
    );
}
