//! psyche ingest command

use crate::app::App;
use crate::output::{ok, score_bar, warn, Output};
use anyhow::Context;
use clap::Args;
use console::style;
use psyche_adapter::SignalFileLoader;
use psyche_usecase::psyche_domain::DomainScoreSnapshot;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Args)]
pub struct IngestCommand {
    /// Glob pattern of signal files (JSON or YAML)
    pub pattern: String,

    /// Also publish relationship facts for this user
    #[arg(short, long, value_parser = super::facts::parse_user_id)]
    pub user: Option<String>,
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
struct IngestReport {
    files: usize,
    unreadable_files: Vec<String>,
    accepted: usize,
    rejected: Vec<String>,
    rescored: BTreeMap<String, DomainScoreSnapshot>,
    failed: BTreeMap<String, String>,
    facts_published: usize,
}

impl IngestCommand {
    pub async fn run(&self, app: &App, out: &Output) -> anyhow::Result<()> {
        let report = self.ingest(app).await?;

        if out.is_json() {
            return out.json(&report);
        }

        for failure in &report.unreadable_files {
            warn(failure);
        }
        for rejection in &report.rejected {
            warn(format!("Rejected: {}", rejection));
        }
        for (domain_id, error) in &report.failed {
            warn(format!("{}: {}", domain_id, error));
        }
        for (domain_id, snapshot) in &report.rescored {
            println!(
                "  {:<36} {} {:.3} (confidence {:.2})",
                domain_id,
                score_bar(snapshot.score),
                snapshot.score,
                snapshot.confidence
            );
        }
        ok(format!(
            "{} file(s), {} signal(s) accepted, {} rejected, {} domain(s) rescored",
            report.files,
            report.accepted,
            style(report.rejected.len()).yellow(),
            report.rescored.len()
        ));
        if self.user.is_some() {
            ok(format!("{} fact(s) published", report.facts_published));
        }
        Ok(())
    }

    async fn ingest(&self, app: &App) -> anyhow::Result<IngestReport> {
        let mut loader = SignalFileLoader::new();
        loader
            .load_glob(&self.pattern)
            .with_context(|| format!("Failed to load signals from '{}'", self.pattern))?;

        let mut report = IngestReport {
            files: loader.files().len(),
            unreadable_files: loader.failures().iter().map(|e| e.to_string()).collect(),
            ..IngestReport::default()
        };

        let submitted = app
            .scoring
            .submit_batch(loader.take_signals())
            .context("Failed to store signals")?;
        report.accepted = submitted.accepted;
        report.rejected = submitted.rejected.iter().map(|r| r.to_string()).collect();

        for (domain_id, outcome) in app.scoring.rescore_many(submitted.touched).await {
            match outcome {
                Ok(snapshot) => {
                    report.rescored.insert(domain_id, snapshot);
                }
                Err(e) => {
                    report.failed.insert(domain_id, e.to_string());
                }
            }
        }

        if let Some(user) = &self.user {
            for snapshot in report.rescored.values() {
                report.facts_published += app
                    .publisher
                    .publish_snapshot(user, snapshot)
                    .with_context(|| format!("Failed to publish facts for {}", snapshot.domain_id))?
                    .len();
            }
        }
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_ingest_scores_and_rejects() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("batch.json"),
            r#"[
                { "domainId": "big_five_openness", "signalType": "liwc", "score": 0.6, "confidence": 0.5 },
                { "domainId": "big_five_openness", "signalType": "llm", "score": 0.8, "confidence": 0.9 },
                { "domainId": "moral_care", "signalType": "llm", "score": 1.4, "confidence": 0.5 },
                { "domainId": "horoscope", "signalType": "llm", "score": 0.4, "confidence": 0.5 }
            ]"#,
        )
        .unwrap();
        let app = App::open(None, &dir.path().join("store.json")).unwrap();

        let cmd = IngestCommand {
            pattern: format!("{}/*.json", dir.path().display()),
            user: Some("1".to_string()),
        };
        let report = cmd.ingest(&app).await.unwrap();

        assert_eq!(report.files, 1);
        assert_eq!(report.accepted, 2);
        assert_eq!(report.rejected.len(), 2);
        assert_eq!(
            report.rescored.keys().cloned().collect::<Vec<_>>(),
            vec!["big_five_openness".to_string()]
        );
        assert!(report.facts_published >= 2);
        assert_eq!(app.triples.read_all().unwrap().len(), report.facts_published);

        // Persisted: a second app over the same store sees the snapshot
        let reopened = App::open(None, &dir.path().join("store.json")).unwrap();
        let trend = reopened.profile.analyze_trend("big_five_openness", None).unwrap();
        assert_eq!(trend.data_points, 1);
    }

    #[tokio::test]
    async fn test_ingest_no_matches() {
        let dir = TempDir::new().unwrap();
        let app = App::open(None, &dir.path().join("store.json")).unwrap();

        let cmd = IngestCommand {
            pattern: format!("{}/*.json", dir.path().display()),
            user: None,
        };
        let report = cmd.ingest(&app).await.unwrap();
        assert_eq!(report.files, 0);
        assert!(report.rescored.is_empty());
    }
}
