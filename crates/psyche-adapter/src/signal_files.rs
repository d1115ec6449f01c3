//! SignalFileLoader - Load raw producer signals from JSON/YAML files
//!
//! A file holds either one signal object or an array of them. Files are
//! selected with a glob pattern and read in path order.

use psyche_domain::RawSignal;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading signal files
#[derive(Debug, Error)]
pub enum SignalFileError {
    #[error("Invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Unsupported signal file extension: {0}")]
    UnsupportedFormat(PathBuf),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SignalFile {
    Many(Vec<RawSignal>),
    One(RawSignal),
}

impl From<SignalFile> for Vec<RawSignal> {
    fn from(file: SignalFile) -> Self {
        match file {
            SignalFile::Many(signals) => signals,
            SignalFile::One(signal) => vec![signal],
        }
    }
}

/// Signal file loader
#[derive(Debug, Default)]
pub struct SignalFileLoader {
    signals: Vec<RawSignal>,
    files: Vec<PathBuf>,
    failures: Vec<SignalFileError>,
}

impl SignalFileLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every file matching `pattern`
    ///
    /// Only a bad pattern fails the call. Unreadable or malformed files are
    /// kept in `failures()` and the rest still load.
    pub fn load_glob(&mut self, pattern: &str) -> Result<usize, SignalFileError> {
        let mut paths: Vec<PathBuf> = glob::glob(pattern)?
            .filter_map(|entry| match entry {
                Ok(path) => Some(path),
                Err(e) => {
                    self.failures.push(SignalFileError::Io {
                        path: e.path().to_path_buf(),
                        source: e.into_error(),
                    });
                    None
                }
            })
            .filter(|path| path.is_file())
            .collect();
        paths.sort();

        let before = self.signals.len();
        for path in paths {
            match Self::load_file(&path) {
                Ok(signals) => {
                    self.signals.extend(signals);
                    self.files.push(path);
                }
                Err(e) => self.failures.push(e),
            }
        }
        Ok(self.signals.len() - before)
    }

    /// Load one file, chosen by extension
    pub fn load_file(path: &Path) -> Result<Vec<RawSignal>, SignalFileError> {
        let content = std::fs::read_to_string(path).map_err(|source| SignalFileError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let parse_error = |message: String| SignalFileError::Parse {
            path: path.to_path_buf(),
            message,
        };

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();

        let file: SignalFile = match extension.as_str() {
            "json" => serde_json::from_str(&content).map_err(|e| parse_error(e.to_string()))?,
            "yaml" | "yml" => serde_yaml::from_str(&content).map_err(|e| parse_error(e.to_string()))?,
            _ => return Err(SignalFileError::UnsupportedFormat(path.to_path_buf())),
        };
        Ok(file.into())
    }

    /// Loaded signals, in file order
    pub fn signals(&self) -> &[RawSignal] {
        &self.signals
    }

    /// Take the loaded signals, leaving the loader empty
    pub fn take_signals(&mut self) -> Vec<RawSignal> {
        std::mem::take(&mut self.signals)
    }

    /// Files that loaded successfully
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    pub fn failures(&self) -> &[SignalFileError] {
        &self.failures
    }
}
