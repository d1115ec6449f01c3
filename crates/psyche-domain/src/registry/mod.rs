//! Domain Registry - Read-only access to the domain catalog
//!
//! Pure and side-effect free. The only failure mode is an unknown id.

pub mod catalog;

use crate::model::domain::{Category, Domain};
use std::collections::{BTreeMap, HashMap};

/// Lookup over a fixed set of domains, preserving catalog order
#[derive(Debug, Clone)]
pub struct DomainRegistry {
    domains: &'static [Domain],
    index: HashMap<&'static str, usize>,
}

impl DomainRegistry {
    /// Registry over the standard 39-domain catalog
    pub fn standard() -> Self {
        Self::from_static(&catalog::CATALOG)
    }

    /// Registry over any static domain list (first entry wins on duplicate ids)
    pub fn from_static(domains: &'static [Domain]) -> Self {
        let mut index = HashMap::with_capacity(domains.len());
        for (position, domain) in domains.iter().enumerate() {
            index.entry(domain.id).or_insert(position);
        }
        Self { domains, index }
    }

    /// Look up a domain by id
    pub fn get(&self, id: &str) -> Option<&'static Domain> {
        let domains = self.domains;
        self.index.get(id).map(|&position| &domains[position])
    }

    /// Check whether a domain id exists
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// All domains in catalog order
    pub fn list(&self) -> &'static [Domain] {
        self.domains
    }

    /// All domain ids in catalog order
    pub fn ids(&self) -> impl Iterator<Item = &'static str> {
        self.domains.iter().map(|d| d.id)
    }

    /// Domains grouped by category, each group in catalog order
    pub fn by_category(&self) -> BTreeMap<Category, Vec<&'static Domain>> {
        let mut grouped: BTreeMap<Category, Vec<&'static Domain>> = BTreeMap::new();
        for domain in self.domains {
            grouped.entry(domain.category).or_default().push(domain);
        }
        grouped
    }

    /// Domains of a single category
    pub fn in_category(&self, category: Category) -> Vec<&'static Domain> {
        self.domains
            .iter()
            .filter(|d| d.category == category)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }
}

impl Default for DomainRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::domain::DataPoint;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_size() {
        let registry = DomainRegistry::standard();
        assert_eq!(registry.len(), 39);
        assert_eq!(registry.by_category().len(), 13);
    }

    #[test]
    fn test_catalog_ids_are_unique_snake_case() {
        let registry = DomainRegistry::standard();
        let mut seen = HashSet::new();
        for id in registry.ids() {
            assert!(seen.insert(id), "duplicate id {}", id);
            assert!(
                id.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'),
                "id {} is not snake_case",
                id
            );
        }
    }

    #[test]
    fn test_every_domain_is_described() {
        for domain in DomainRegistry::standard().list() {
            assert!(!domain.name.is_empty());
            assert!(!domain.description.is_empty());
            assert!(!domain.psychometric_source.is_empty());
            assert!(!domain.markers.is_empty(), "{} has no markers", domain.id);
            assert!(!domain.data_points.is_empty(), "{} has no data points", domain.id);
        }
    }

    #[test]
    fn test_get_known_and_unknown() {
        let registry = DomainRegistry::standard();

        let domain = registry.get("big_five_openness").unwrap();
        assert_eq!(domain.category, Category::BigFive);
        assert_eq!(domain.name, "Openness to Experience");

        assert!(registry.get("astrology_sign").is_none());
        assert!(!registry.contains("astrology_sign"));
    }

    #[test]
    fn test_list_preserves_catalog_order() {
        let registry = DomainRegistry::standard();
        let ids: Vec<_> = registry.ids().take(3).collect();
        assert_eq!(
            ids,
            vec![
                "big_five_openness",
                "big_five_conscientiousness",
                "big_five_extraversion"
            ]
        );
    }

    #[test]
    fn test_by_category_groups_in_order() {
        let registry = DomainRegistry::standard();
        let grouped = registry.by_category();

        let first = grouped.keys().next().copied();
        assert_eq!(first, Some(Category::BigFive));

        let dark: Vec<_> = grouped[&Category::DarkTriad].iter().map(|d| d.id).collect();
        assert_eq!(
            dark,
            vec![
                "dark_triad_narcissism",
                "dark_triad_machiavellianism",
                "dark_triad_psychopathy"
            ]
        );

        let total: usize = grouped.values().map(Vec::len).sum();
        assert_eq!(total, registry.len());
    }

    #[test]
    fn test_data_point_shapes_present_in_catalog() {
        let registry = DomainRegistry::standard();
        let kinds: HashSet<_> = registry
            .list()
            .iter()
            .flat_map(|d| d.data_points.iter().map(DataPoint::kind))
            .collect();
        for kind in ["indicator", "contrast", "mindset", "orientation"] {
            assert!(kinds.contains(kind), "no {} data point in catalog", kind);
        }
    }

    #[test]
    fn test_from_static_first_duplicate_wins() {
        static DUPES: [Domain; 2] = [
            Domain {
                id: "dup",
                category: Category::Values,
                name: "First",
                description: "",
                psychometric_source: "",
                markers: &[],
                data_points: &[],
                voice_indicators: &[],
            },
            Domain {
                id: "dup",
                category: Category::Values,
                name: "Second",
                description: "",
                psychometric_source: "",
                markers: &[],
                data_points: &[],
                voice_indicators: &[],
            },
        ];

        let registry = DomainRegistry::from_static(&DUPES);
        assert_eq!(registry.get("dup").unwrap().name, "First");
    }
}
