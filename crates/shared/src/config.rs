//! Configuration types for the scoring and evolution engine

use crate::error::{InvalidConfigError, Result, SharedError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Short-window trend classification settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrendConfig {
    /// Window length in days
    pub window_days: u32,

    /// Minimum positive change classified as improving
    pub threshold_up: f64,

    /// Minimum negative change (absolute) classified as declining
    pub threshold_down: f64,

    /// Floor for the baseline when computing the relative change
    pub epsilon: f64,
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            window_days: 7,
            threshold_up: 0.05,
            threshold_down: 0.05,
            epsilon: 1e-6,
        }
    }
}

/// Long-window evolution settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EvolutionConfig {
    /// Window length in days
    pub window_days: u32,

    /// Absolute change above which a domain shift is reported
    pub significance_threshold: f64,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            window_days: 30,
            significance_threshold: 0.10,
        }
    }
}

/// Scoring settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScoringConfig {
    /// Extra append attempts after the first failure
    pub append_retries: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self { append_retries: 2 }
    }
}

/// Re-scan trigger settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RescanConfig {
    /// Re-scan after this many new messages
    pub every_messages: u32,

    /// Re-scan after this many seconds (if anything new arrived)
    pub every_seconds: u64,
}

impl Default for RescanConfig {
    fn default() -> Self {
        Self {
            every_messages: 5,
            every_seconds: 300,
        }
    }
}

/// Profile summary settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SummaryConfig {
    /// Number of linguistic features reported in the summary
    pub top_features: usize,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self { top_features: 10 }
    }
}

/// Engine configuration (psyche.yaml / psyche.json)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineConfig {
    pub trend: TrendConfig,
    pub evolution: EvolutionConfig,
    pub scoring: ScoringConfig,
    pub rescan: RescanConfig,
    pub summary: SummaryConfig,

    /// Maximum number of rejected signals/facts kept in memory
    pub rejection_log_capacity: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            trend: TrendConfig::default(),
            evolution: EvolutionConfig::default(),
            scoring: ScoringConfig::default(),
            rescan: RescanConfig::default(),
            summary: SummaryConfig::default(),
            rejection_log_capacity: 1000,
        }
    }
}

impl EngineConfig {
    /// Load configuration from a YAML or JSON file, chosen by extension
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();

        let config: Self = match extension.as_str() {
            "yaml" | "yml" => serde_yaml::from_str(&content)?,
            "json" => serde_json::from_str(&content)?,
            other => return Err(SharedError::UnsupportedFormat(other.to_string())),
        };

        config.validate()?;
        Ok(config)
    }

    /// Serialize as YAML (used by `psyche init`)
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Check that thresholds and windows are usable
    pub fn validate(&self) -> Result<()> {
        check_unit("trend.thresholdUp", self.trend.threshold_up)?;
        check_unit("trend.thresholdDown", self.trend.threshold_down)?;
        check_unit("evolution.significanceThreshold", self.evolution.significance_threshold)?;

        if !(self.trend.epsilon.is_finite() && self.trend.epsilon > 0.0) {
            return Err(invalid("trend.epsilon", "must be a positive number"));
        }
        if self.trend.window_days == 0 {
            return Err(invalid("trend.windowDays", "must be at least 1"));
        }
        if self.evolution.window_days == 0 {
            return Err(invalid("evolution.windowDays", "must be at least 1"));
        }
        if self.rejection_log_capacity == 0 {
            return Err(invalid("rejectionLogCapacity", "must be at least 1"));
        }
        Ok(())
    }
}

fn check_unit(field: &str, value: f64) -> Result<()> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(invalid(field, &format!("{} is outside [0, 1]", value)))
    }
}

fn invalid(field: &str, reason: &str) -> SharedError {
    InvalidConfigError {
        field: field.to_string(),
        reason: reason.to_string(),
    }
    .into()
}
