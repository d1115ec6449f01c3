//! psyche init command

use crate::output::{ok, Output};
use anyhow::{bail, Context};
use clap::Args;
use serde_json::json;
use shared::EngineConfig;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct InitCommand {
    /// Directory to initialize
    #[arg(default_value = ".")]
    pub directory: PathBuf,

    /// Overwrite an existing psyche.yaml
    #[arg(long)]
    pub force: bool,

    /// Skip the example signal file
    #[arg(long)]
    pub minimal: bool,
}

impl InitCommand {
    pub fn run(&self, out: &Output) -> anyhow::Result<()> {
        let written = self.write_files()?;

        if out.is_json() {
            return out.json(&json!({ "written": written }));
        }
        for path in &written {
            ok(format!("Wrote {}", path.display()));
        }
        Ok(())
    }

    fn write_files(&self) -> anyhow::Result<Vec<PathBuf>> {
        let config_path = self.directory.join("psyche.yaml");
        if config_path.exists() && !self.force {
            bail!(
                "{} already exists (use --force to overwrite)",
                config_path.display()
            );
        }

        std::fs::create_dir_all(&self.directory)
            .with_context(|| format!("Failed to create {}", self.directory.display()))?;
        std::fs::write(&config_path, EngineConfig::default().to_yaml()?)?;
        let mut written = vec![config_path];

        if !self.minimal {
            written.push(self.create_example_signals(&self.directory.join("signals"))?);
        }
        Ok(written)
    }

    fn create_example_signals(&self, signals_dir: &Path) -> anyhow::Result<PathBuf> {
        std::fs::create_dir_all(signals_dir)?;
        let path = signals_dir.join("example.json");
        let example = json!([
            {
                "domainId": "big_five_openness",
                "signalType": "liwc",
                "score": 0.62,
                "confidence": 0.4,
                "matchedWords": ["curious", "imagine"]
            },
            {
                "domainId": "big_five_openness",
                "signalType": "embedding",
                "score": 0.7,
                "confidence": 0.6,
                "prototypeSimilarity": 0.81
            },
            {
                "domainId": "big_five_openness",
                "signalType": "llm",
                "score": 0.75,
                "confidence": 0.8,
                "evidenceText": "Enjoys exploring new ideas and abstract art"
            }
        ]);
        std::fs::write(&path, serde_json::to_string_pretty(&example)?)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn command(directory: &Path, force: bool) -> InitCommand {
        InitCommand {
            directory: directory.to_path_buf(),
            force,
            minimal: false,
        }
    }

    #[test]
    fn test_init_writes_config_and_example() {
        let dir = TempDir::new().unwrap();
        let written = command(dir.path(), false).write_files().unwrap();

        assert_eq!(written.len(), 2);
        let config = EngineConfig::from_file(&dir.path().join("psyche.yaml")).unwrap();
        assert_eq!(config, EngineConfig::default());

        let signals = psyche_adapter::SignalFileLoader::load_file(&written[1]).unwrap();
        assert_eq!(signals.len(), 3);
    }

    #[test]
    fn test_init_refuses_overwrite_without_force() {
        let dir = TempDir::new().unwrap();
        command(dir.path(), false).write_files().unwrap();

        assert!(command(dir.path(), false).write_files().is_err());
        assert!(command(dir.path(), true).write_files().is_ok());
    }

    #[test]
    fn test_init_minimal() {
        let dir = TempDir::new().unwrap();
        let cmd = InitCommand {
            directory: dir.path().join("fresh"),
            force: false,
            minimal: true,
        };
        assert_eq!(cmd.write_files().unwrap().len(), 1);
        assert!(!dir.path().join("fresh/signals").exists());
    }
}
