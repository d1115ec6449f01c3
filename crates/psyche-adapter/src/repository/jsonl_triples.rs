//! Triple log - Facts appended as JSON lines

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use psyche_domain::{Fact, RepositoryError, TripleRepository};

/// Append-only JSON-lines file of facts
#[derive(Debug)]
pub struct JsonLinesTripleRepository {
    path: PathBuf,
    writer: Mutex<()>,
}

impl JsonLinesTripleRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            writer: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every fact back, in ingestion order
    pub fn read_all(&self) -> Result<Vec<Fact>, RepositoryError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = std::fs::read_to_string(&self.path).map_err(|e| persistence(&self.path, e))?;
        content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .enumerate()
            .map(|(n, line)| {
                serde_json::from_str(line).map_err(|e| RepositoryError::Persistence {
                    message: format!("{} line {}: {}", self.path.display(), n + 1, e),
                })
            })
            .collect()
    }
}

fn persistence(path: &Path, error: impl std::fmt::Display) -> RepositoryError {
    RepositoryError::Persistence {
        message: format!("{}: {}", path.display(), error),
    }
}

impl TripleRepository for JsonLinesTripleRepository {
    fn ingest(&self, facts: &[Fact]) -> Result<usize, RepositoryError> {
        let mut buffer = String::new();
        for fact in facts {
            let line = serde_json::to_string(fact).map_err(|e| persistence(&self.path, e))?;
            buffer.push_str(&line);
            buffer.push('\n');
        }

        let _guard = self.writer.lock().map_err(|_| RepositoryError::Persistence {
            message: "Failed to acquire write lock".to_string(),
        })?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| persistence(parent, e))?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| persistence(&self.path, e))?;
        file.write_all(buffer.as_bytes())
            .map_err(|e| persistence(&self.path, e))?;

        Ok(facts.len())
    }
}
