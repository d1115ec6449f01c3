//! Fact - A subject-predicate-object triple for the external triple store

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::str::FromStr;
use std::sync::OnceLock;
use thiserror::Error;

/// Errors raised while building or reading facts
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProjectionError {
    #[error("Unknown predicate '{0}'")]
    UnknownPredicate(String),

    #[error("Malformed entity reference '{0}' (expected kind:id)")]
    MalformedEntity(String),

    #[error("Fact is missing metadata field '{0}'")]
    MissingMetadata(&'static str),

    #[error("Unknown domain '{0}'")]
    UnknownDomain(String),
}

/// Fixed predicate vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Predicate {
    Discusses,
    InterestedIn,
    BelongsToDomain,
    RelatedTo,
    Indicates,
    CorrelatesWith,
    Contradicts,
    Values,
    Believes,
}

impl Predicate {
    pub const ALL: [Predicate; 9] = [
        Predicate::Discusses,
        Predicate::InterestedIn,
        Predicate::BelongsToDomain,
        Predicate::RelatedTo,
        Predicate::Indicates,
        Predicate::CorrelatesWith,
        Predicate::Contradicts,
        Predicate::Values,
        Predicate::Believes,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Predicate::Discusses => "discusses",
            Predicate::InterestedIn => "interested_in",
            Predicate::BelongsToDomain => "belongs_to_domain",
            Predicate::RelatedTo => "related_to",
            Predicate::Indicates => "indicates",
            Predicate::CorrelatesWith => "correlates_with",
            Predicate::Contradicts => "contradicts",
            Predicate::Values => "values",
            Predicate::Believes => "believes",
        }
    }
}

impl FromStr for Predicate {
    type Err = ProjectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Predicate::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| ProjectionError::UnknownPredicate(s.to_string()))
    }
}

impl core::fmt::Display for Predicate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of entity a fact talks about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    User,
    Domain,
    Category,
    Topic,
    Trait,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::User => "user",
            EntityKind::Domain => "domain",
            EntityKind::Category => "category",
            EntityKind::Topic => "topic",
            EntityKind::Trait => "trait",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "user" => Some(EntityKind::User),
            "domain" => Some(EntityKind::Domain),
            "category" => Some(EntityKind::Category),
            "topic" => Some(EntityKind::Topic),
            "trait" => Some(EntityKind::Trait),
            _ => None,
        }
    }
}

fn entity_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| {
            Regex::new(r"^(user|domain|category|topic|trait):([A-Za-z0-9][A-Za-z0-9_.\-]*)$").ok()
        })
        .as_ref()
}

/// `kind:id` reference, e.g. `domain:big_five_openness`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EntityRef {
    kind: EntityKind,
    id: String,
}

impl EntityRef {
    pub fn user(id: impl Into<String>) -> Self {
        Self::new(EntityKind::User, id)
    }

    /// User reference from an untrusted id, held to the same grammar as `from_str`
    pub fn try_user(id: &str) -> Result<Self, ProjectionError> {
        format!("{}:{}", EntityKind::User.as_str(), id).parse()
    }

    pub fn domain(id: impl Into<String>) -> Self {
        Self::new(EntityKind::Domain, id)
    }

    pub fn category(id: impl Into<String>) -> Self {
        Self::new(EntityKind::Category, id)
    }

    pub fn topic(id: impl Into<String>) -> Self {
        Self::new(EntityKind::Topic, id)
    }

    pub fn trait_(id: impl Into<String>) -> Self {
        Self::new(EntityKind::Trait, id)
    }

    fn new(kind: EntityKind, id: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
        }
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

impl FromStr for EntityRef {
    type Err = ProjectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let captures = entity_pattern()
            .and_then(|pattern| pattern.captures(s.trim()))
            .ok_or_else(|| ProjectionError::MalformedEntity(s.to_string()))?;
        let kind = EntityKind::parse(&captures[1])
            .ok_or_else(|| ProjectionError::MalformedEntity(s.to_string()))?;
        Ok(Self::new(kind, &captures[2]))
    }
}

impl TryFrom<String> for EntityRef {
    type Error = ProjectionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<EntityRef> for String {
    fn from(value: EntityRef) -> Self {
        value.to_string()
    }
}

impl core::fmt::Display for EntityRef {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}:{}", self.kind.as_str(), self.id)
    }
}

/// A validated triple
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fact {
    pub subject: EntityRef,
    pub predicate: Predicate,
    pub object: EntityRef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
}

impl Fact {
    pub fn new(subject: EntityRef, predicate: Predicate, object: EntityRef) -> Self {
        Self {
            subject,
            predicate,
            object,
            metadata: None,
        }
    }

    /// Builder: attach metadata
    pub fn with_metadata(mut self, metadata: Map<String, Value>) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Read a metadata field
    pub fn meta(&self, key: &str) -> Option<&Value> {
        self.metadata.as_ref().and_then(|m| m.get(key))
    }
}

/// Triple as supplied by a producer, not yet validated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawFact {
    pub subject: String,
    pub predicate: String,
    pub object: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
}

impl RawFact {
    /// Validate the predicate and both entity references
    pub fn validate(self) -> Result<Fact, ProjectionError> {
        Ok(Fact {
            subject: self.subject.parse()?,
            predicate: self.predicate.parse()?,
            object: self.object.parse()?,
            metadata: self.metadata,
        })
    }
}
