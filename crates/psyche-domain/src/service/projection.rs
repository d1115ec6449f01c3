//! Relationship Projection - Domain scores as subject-predicate-object facts
//!
//! Pure translation, no I/O. Publishing the facts is the use case layer's job.

use crate::model::domain::Category;
use crate::model::fact::{EntityRef, Fact, Predicate, ProjectionError};
use crate::model::snapshot::DomainScoreSnapshot;
use crate::registry::DomainRegistry;
use serde_json::{json, Map, Value};
use std::collections::BTreeMap;

/// Minimum confidence before a score is read as a trait, value or belief
pub const CONFIDENT: f64 = 0.5;
/// Score at or above which a domain is expressed
pub const HIGH_SCORE: f64 = 0.7;
/// Score at or below which a domain is expressed as its opposite
pub const LOW_SCORE: f64 = 0.3;
/// Mentions after which discussing a topic becomes interest in it
pub const INTEREST_MENTIONS: u32 = 3;

/// Known relationships between domains (symmetric, strength in [-1, 1])
pub const CORRELATIONS: &[(&str, &str, f64)] = &[
    ("big_five_neuroticism", "wellbeing_life_satisfaction", -0.5),
    ("big_five_neuroticism", "attachment_anxiety", 0.4),
    ("big_five_agreeableness", "emotional_intelligence_empathy", 0.5),
    ("big_five_agreeableness", "dark_triad_machiavellianism", -0.5),
    ("dark_triad_psychopathy", "emotional_intelligence_empathy", -0.6),
    ("big_five_openness", "cognitive_need_for_cognition", 0.5),
    ("big_five_openness", "cognitive_tolerance_for_ambiguity", 0.4),
    ("big_five_conscientiousness", "mindset_grit", 0.6),
    ("big_five_extraversion", "interpersonal_assertiveness", 0.5),
    ("mindset_growth", "mindset_grit", 0.4),
    ("wellbeing_optimism", "wellbeing_resilience", 0.5),
    ("social_locus_of_control", "wellbeing_resilience", 0.4),
    ("moral_authority", "political_social", 0.5),
    ("dark_triad_narcissism", "values_achievement", 0.3),
    ("attachment_avoidance", "social_trust", -0.4),
];

/// Correlated domains of `domain_id` with their strength
pub fn correlations_of(domain_id: &str) -> impl Iterator<Item = (&'static str, f64)> + '_ {
    CORRELATIONS.iter().filter_map(move |&(a, b, strength)| {
        if a == domain_id {
            Some((b, strength))
        } else if b == domain_id {
            Some((a, strength))
        } else {
            None
        }
    })
}

/// Topic slug usable as an entity id, or None if nothing usable remains
pub fn topic_slug(topic: &str) -> Option<String> {
    let slug: String = topic
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
        .collect();
    let slug = slug.trim_start_matches(|c| matches!(c, '_' | '-' | '.')).to_string();
    (!slug.is_empty()).then_some(slug)
}

/// Builds facts from snapshots and topic mentions
#[derive(Debug, Clone, Default)]
pub struct RelationshipProjector {
    registry: DomainRegistry,
}

impl RelationshipProjector {
    pub fn new(registry: DomainRegistry) -> Self {
        Self { registry }
    }

    /// Facts describing one snapshot of `user_id`
    pub fn project_facts(
        &self,
        user_id: &str,
        snapshot: &DomainScoreSnapshot,
    ) -> Result<Vec<Fact>, ProjectionError> {
        let domain = self
            .registry
            .get(&snapshot.domain_id)
            .ok_or_else(|| ProjectionError::UnknownDomain(snapshot.domain_id.clone()))?;

        let user = EntityRef::try_user(user_id)?;
        let domain_ref = EntityRef::domain(domain.id);
        let mut facts = Vec::new();

        facts.push(
            Fact::new(user.clone(), Predicate::BelongsToDomain, domain_ref.clone())
                .with_metadata(snapshot_metadata(snapshot)),
        );
        facts.push(Fact::new(
            domain_ref.clone(),
            Predicate::RelatedTo,
            EntityRef::category(domain.category.as_str()),
        ));

        let confident = snapshot.confidence >= CONFIDENT;
        if confident && snapshot.score >= HIGH_SCORE {
            facts.push(Fact::new(
                user.clone(),
                Predicate::Indicates,
                EntityRef::trait_(format!("high_{}", domain.id)),
            ));
        } else if confident && snapshot.score <= LOW_SCORE {
            facts.push(Fact::new(
                user.clone(),
                Predicate::Indicates,
                EntityRef::trait_(format!("low_{}", domain.id)),
            ));
        }

        for (other, strength) in correlations_of(domain.id) {
            let predicate = if strength >= 0.0 {
                Predicate::CorrelatesWith
            } else {
                Predicate::Contradicts
            };
            let mut metadata = Map::new();
            metadata.insert("strength".to_string(), json!(strength));
            facts.push(
                Fact::new(domain_ref.clone(), predicate, EntityRef::domain(other))
                    .with_metadata(metadata),
            );
        }

        if confident && snapshot.score >= HIGH_SCORE {
            let predicate = match domain.category {
                Category::Values => Some(Predicate::Values),
                Category::MoralFoundations | Category::PoliticalOrientation => {
                    Some(Predicate::Believes)
                }
                _ => None,
            };
            if let Some(predicate) = predicate {
                facts.push(Fact::new(user, predicate, domain_ref));
            }
        }

        Ok(facts)
    }

    /// Facts for topic mentions of `user_id`, in topic order
    ///
    /// Topics that leave no usable slug are skipped.
    pub fn project_topics(
        &self,
        user_id: &str,
        mentions: &BTreeMap<String, u32>,
    ) -> Result<Vec<Fact>, ProjectionError> {
        let user = EntityRef::try_user(user_id)?;
        let mut facts = Vec::new();

        for (topic, &count) in mentions {
            if count == 0 {
                continue;
            }
            let Some(slug) = topic_slug(topic) else {
                continue;
            };
            let mut metadata = Map::new();
            metadata.insert("mentions".to_string(), json!(count));

            facts.push(
                Fact::new(user.clone(), Predicate::Discusses, EntityRef::topic(slug.clone()))
                    .with_metadata(metadata),
            );
            if count >= INTEREST_MENTIONS {
                facts.push(Fact::new(
                    user.clone(),
                    Predicate::InterestedIn,
                    EntityRef::topic(slug),
                ));
            }
        }

        Ok(facts)
    }
}

fn snapshot_metadata(snapshot: &DomainScoreSnapshot) -> Map<String, Value> {
    let mut metadata = Map::new();
    metadata.insert("domainId".to_string(), json!(snapshot.domain_id));
    metadata.insert("score".to_string(), json!(snapshot.score));
    metadata.insert("confidence".to_string(), json!(snapshot.confidence));
    metadata.insert("dataPointsCount".to_string(), json!(snapshot.data_points_count));
    metadata.insert("timestamp".to_string(), json!(snapshot.timestamp.to_rfc3339()));
    metadata
}

/// Recover `(domain_id, score)` from projected facts
///
/// Reads the metadata of the first `belongs_to_domain` fact.
pub fn snapshot_from_facts(facts: &[Fact]) -> Result<(String, f64), ProjectionError> {
    let membership = facts
        .iter()
        .find(|f| f.predicate == Predicate::BelongsToDomain)
        .ok_or(ProjectionError::MissingMetadata("domainId"))?;

    let domain_id = membership
        .meta("domainId")
        .and_then(Value::as_str)
        .ok_or(ProjectionError::MissingMetadata("domainId"))?;
    let score = membership
        .meta("score")
        .and_then(Value::as_f64)
        .ok_or(ProjectionError::MissingMetadata("score"))?;

    Ok((domain_id.to_string(), score))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn projector() -> RelationshipProjector {
        RelationshipProjector::default()
    }

    fn predicates(facts: &[Fact]) -> Vec<Predicate> {
        facts.iter().map(|f| f.predicate).collect()
    }

    // ============== Fact Projection Tests ==============

    #[test]
    fn test_membership_and_category_always_emitted() {
        let snapshot = DomainScoreSnapshot::new("big_five_openness", 0.5, 0.2, 0, Utc::now());
        let facts = projector().project_facts("1", &snapshot).unwrap();

        assert_eq!(facts[0].subject.to_string(), "user:1");
        assert_eq!(facts[0].predicate, Predicate::BelongsToDomain);
        assert_eq!(facts[0].object.to_string(), "domain:big_five_openness");
        assert_eq!(facts[1].predicate, Predicate::RelatedTo);
        assert_eq!(facts[1].object.to_string(), "category:big_five");
        assert!(!predicates(&facts).contains(&Predicate::Indicates));
    }

    #[test]
    fn test_confident_extremes_indicate_traits() {
        let high = DomainScoreSnapshot::new("big_five_openness", 0.82, 0.6, 3, Utc::now());
        let facts = projector().project_facts("1", &high).unwrap();
        let indicated: Vec<_> = facts
            .iter()
            .filter(|f| f.predicate == Predicate::Indicates)
            .map(|f| f.object.to_string())
            .collect();
        assert_eq!(indicated, vec!["trait:high_big_five_openness"]);

        let low = DomainScoreSnapshot::new("big_five_openness", 0.2, 0.9, 3, Utc::now());
        let facts = projector().project_facts("1", &low).unwrap();
        assert!(facts
            .iter()
            .any(|f| f.object.to_string() == "trait:low_big_five_openness"));

        let unsure = DomainScoreSnapshot::new("big_five_openness", 0.95, 0.3, 3, Utc::now());
        let facts = projector().project_facts("1", &unsure).unwrap();
        assert!(!predicates(&facts).contains(&Predicate::Indicates));
    }

    #[test]
    fn test_correlations_become_facts() {
        let snapshot = DomainScoreSnapshot::new("big_five_agreeableness", 0.5, 0.5, 0, Utc::now());
        let facts = projector().project_facts("1", &snapshot).unwrap();

        let empathy = facts
            .iter()
            .find(|f| f.object.to_string() == "domain:emotional_intelligence_empathy")
            .unwrap();
        assert_eq!(empathy.predicate, Predicate::CorrelatesWith);
        assert_eq!(empathy.meta("strength"), Some(&json!(0.5)));

        let machiavellianism = facts
            .iter()
            .find(|f| f.object.to_string() == "domain:dark_triad_machiavellianism")
            .unwrap();
        assert_eq!(machiavellianism.predicate, Predicate::Contradicts);
    }

    #[test]
    fn test_values_and_beliefs() {
        let value = DomainScoreSnapshot::new("values_benevolence", 0.8, 0.7, 2, Utc::now());
        let facts = projector().project_facts("7", &value).unwrap();
        assert_eq!(facts.last().unwrap().predicate, Predicate::Values);
        assert_eq!(facts.last().unwrap().object.to_string(), "domain:values_benevolence");

        let belief = DomainScoreSnapshot::new("moral_fairness", 0.75, 0.7, 2, Utc::now());
        let facts = projector().project_facts("7", &belief).unwrap();
        assert_eq!(facts.last().unwrap().predicate, Predicate::Believes);

        let weak = DomainScoreSnapshot::new("moral_fairness", 0.6, 0.9, 2, Utc::now());
        let facts = projector().project_facts("7", &weak).unwrap();
        assert!(!predicates(&facts).contains(&Predicate::Believes));
    }

    #[test]
    fn test_unknown_domain_is_an_error() {
        let snapshot = DomainScoreSnapshot::new("zodiac", 0.5, 0.5, 0, Utc::now());
        assert_eq!(
            projector().project_facts("1", &snapshot),
            Err(ProjectionError::UnknownDomain("zodiac".to_string()))
        );
    }

    #[test]
    fn test_round_trip_recovers_domain_and_score() {
        let projector = projector();
        for (domain_id, score) in [
            ("big_five_openness", 0.0),
            ("moral_care", 0.5306122448979592),
            ("social_trust", 1.0),
            ("values_security", 0.123456789),
        ] {
            let snapshot = DomainScoreSnapshot::new(domain_id, score, 0.8, 1, Utc::now());
            let facts = projector.project_facts("42", &snapshot).unwrap();
            let (recovered_id, recovered_score) = snapshot_from_facts(&facts).unwrap();
            assert_eq!(recovered_id, domain_id);
            assert_eq!(recovered_score, score);
        }
    }

    #[test]
    fn test_snapshot_from_facts_without_membership() {
        assert_eq!(
            snapshot_from_facts(&[]),
            Err(ProjectionError::MissingMetadata("domainId"))
        );
    }

    // ============== Topic Projection Tests ==============

    #[test]
    fn test_topics_become_interest_after_repeated_mentions() {
        let mut mentions = BTreeMap::new();
        mentions.insert("Jazz Music".to_string(), 3);
        mentions.insert("hiking".to_string(), 1);

        let facts = projector().project_topics("1", &mentions).unwrap();
        let rendered: Vec<_> = facts
            .iter()
            .map(|f| format!("{} {} {}", f.subject, f.predicate, f.object))
            .collect();

        assert_eq!(
            rendered,
            vec![
                "user:1 discusses topic:jazz_music",
                "user:1 interested_in topic:jazz_music",
                "user:1 discusses topic:hiking",
            ]
        );
    }

    #[test]
    fn test_malformed_user_is_rejected() {
        let snapshot = DomainScoreSnapshot::new("big_five_openness", 0.8, 0.8, 2, Utc::now());
        assert_eq!(
            projector().project_facts("jane doe", &snapshot),
            Err(ProjectionError::MalformedEntity("user:jane doe".to_string()))
        );

        let mut mentions = BTreeMap::new();
        mentions.insert("chess".to_string(), 1);
        assert!(matches!(
            projector().project_topics("", &mentions),
            Err(ProjectionError::MalformedEntity(_))
        ));
    }

    #[test]
    fn test_projected_facts_parse_back() {
        let snapshot = DomainScoreSnapshot::new("moral_care", 0.9, 0.9, 2, Utc::now());
        let facts = projector().project_facts("jane.doe-1", &snapshot).unwrap();
        for fact in &facts {
            let line = serde_json::to_string(fact).unwrap();
            let parsed: Fact = serde_json::from_str(&line).unwrap();
            assert_eq!(&parsed, fact);
        }
    }

    #[test]
    fn test_topic_slug() {
        assert_eq!(topic_slug("  Rock  Climbing "), Some("rock_climbing".to_string()));
        assert_eq!(topic_slug("C++"), Some("c".to_string()));
        assert_eq!(topic_slug("???"), None);
    }

    #[test]
    fn test_correlation_table_references_catalog() {
        let registry = DomainRegistry::standard();
        for (a, b, strength) in CORRELATIONS {
            assert!(registry.contains(a), "{} not in catalog", a);
            assert!(registry.contains(b), "{} not in catalog", b);
            assert!((-1.0..=1.0).contains(strength));
        }
    }
}
