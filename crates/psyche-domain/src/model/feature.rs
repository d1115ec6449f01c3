//! Linguistic feature counts reported by the dictionary producer

use serde::{Deserialize, Serialize};

/// Accumulated count of one linguistic feature
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureCount {
    pub category: String,
    pub feature_name: String,
    pub count: u64,
}

/// Share of one feature among all counted features
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureShare {
    pub category: String,
    pub feature_name: String,
    pub percentage: f64,
}

/// Rank features by count and express each as a percentage of the total
///
/// Ties are ordered by category, then name.
pub fn top_features(counts: &[FeatureCount], limit: usize) -> Vec<FeatureShare> {
    let total: u64 = counts.iter().map(|c| c.count).sum();
    if total == 0 {
        return Vec::new();
    }

    let mut ranked: Vec<&FeatureCount> = counts.iter().filter(|c| c.count > 0).collect();
    ranked.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.category.cmp(&b.category))
            .then_with(|| a.feature_name.cmp(&b.feature_name))
    });

    ranked
        .into_iter()
        .take(limit)
        .map(|c| FeatureShare {
            category: c.category.clone(),
            feature_name: c.feature_name.clone(),
            percentage: c.count as f64 / total as f64 * 100.0,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(category: &str, name: &str, count: u64) -> FeatureCount {
        FeatureCount {
            category: category.to_string(),
            feature_name: name.to_string(),
            count,
        }
    }

    #[test]
    fn test_top_features_percentages() {
        let counts = vec![
            count("affect", "posemo", 30),
            count("social", "family", 10),
            count("cognitive", "insight", 60),
        ];

        let top = top_features(&counts, 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].feature_name, "insight");
        assert!((top[0].percentage - 60.0).abs() < 1e-9);
        assert_eq!(top[1].feature_name, "posemo");
        assert!((top[1].percentage - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_top_features_ties_are_deterministic() {
        let counts = vec![count("b", "x", 5), count("a", "y", 5), count("a", "x", 5)];

        let top = top_features(&counts, 10);
        let names: Vec<_> = top
            .iter()
            .map(|f| format!("{}/{}", f.category, f.feature_name))
            .collect();
        assert_eq!(names, vec!["a/x", "a/y", "b/x"]);
    }

    #[test]
    fn test_top_features_empty() {
        assert!(top_features(&[], 5).is_empty());
        assert!(top_features(&[count("a", "b", 0)], 5).is_empty());
    }
}
