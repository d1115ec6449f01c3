//! Feature Repository - Accumulated linguistic feature counts

use super::RepositoryError;
use crate::model::feature::FeatureCount;

/// Feature Repository Trait
pub trait FeatureRepository: Send + Sync {
    /// Add `count` occurrences of a feature
    fn record(&self, category: &str, feature_name: &str, count: u64) -> Result<(), RepositoryError>;

    /// Every counted feature
    fn all(&self) -> Result<Vec<FeatureCount>, RepositoryError>;
}
