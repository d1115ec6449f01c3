//! Signal - One independent estimate of a domain score
//!
//! Three producers exist (dictionary word matching, embedding similarity,
//! qualitative judgment). Each emits at most one current signal per domain.
//! Producers speak `RawSignal`; the domain only ever handles validated
//! `SignalScore` values.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The kind of analysis that produced a signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalType {
    /// LIWC-style dictionary matching
    Dictionary,
    /// Prototype similarity over embeddings
    Embedding,
    /// LLM qualitative judgment
    Qualitative,
}

impl SignalType {
    /// Canonical order (also the aggregation order)
    pub const ALL: [SignalType; 3] = [
        SignalType::Dictionary,
        SignalType::Embedding,
        SignalType::Qualitative,
    ];

    /// Nominal weight of this signal type
    pub fn nominal_weight(&self) -> f64 {
        match self {
            SignalType::Dictionary => 0.2,
            SignalType::Embedding => 0.3,
            SignalType::Qualitative => 0.5,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SignalType::Dictionary => "dictionary",
            SignalType::Embedding => "embedding",
            SignalType::Qualitative => "qualitative",
        }
    }

    /// Parse a producer-supplied type name (aliases accepted)
    pub fn parse(name: &str) -> Option<SignalType> {
        match name.trim().to_ascii_lowercase().as_str() {
            "dictionary" | "liwc" => Some(SignalType::Dictionary),
            "embedding" | "embeddings" => Some(SignalType::Embedding),
            "qualitative" | "llm" => Some(SignalType::Qualitative),
            _ => None,
        }
    }
}

impl core::fmt::Display for SignalType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Signal-specific evidence
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SignalEvidence {
    Dictionary {
        matched_words: Vec<String>,
    },
    Embedding {
        prototype_similarity: Option<f64>,
    },
    Qualitative {
        evidence_text: Option<String>,
    },
}

impl SignalEvidence {
    /// Empty evidence for a signal type
    pub fn empty(signal_type: SignalType) -> Self {
        match signal_type {
            SignalType::Dictionary => SignalEvidence::Dictionary {
                matched_words: Vec::new(),
            },
            SignalType::Embedding => SignalEvidence::Embedding {
                prototype_similarity: None,
            },
            SignalType::Qualitative => SignalEvidence::Qualitative {
                evidence_text: None,
            },
        }
    }

    fn signal_type(&self) -> SignalType {
        match self {
            SignalEvidence::Dictionary { .. } => SignalType::Dictionary,
            SignalEvidence::Embedding { .. } => SignalType::Embedding,
            SignalEvidence::Qualitative { .. } => SignalType::Qualitative,
        }
    }
}

/// A producer contract violation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SignalRejection {
    #[error("Signal has an empty domain id '{domain_id}'")]
    MissingDomain { domain_id: String },

    #[error("Unknown domain '{domain_id}'")]
    UnknownDomain { domain_id: String },

    #[error("Unknown signal type '{signal_type}' for domain '{domain_id}'")]
    UnknownSignalType {
        domain_id: String,
        signal_type: String,
    },

    #[error("{signal_type} signal for '{domain_id}': {field} {value} is outside [{min}, {max}]")]
    OutOfRange {
        domain_id: String,
        signal_type: SignalType,
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{signal_type} signal for '{domain_id}' carries {evidence} evidence")]
    EvidenceMismatch {
        domain_id: String,
        signal_type: SignalType,
        evidence: &'static str,
    },
}

impl SignalRejection {
    /// Domain the rejected signal was meant for
    pub fn domain_id(&self) -> &str {
        match self {
            SignalRejection::MissingDomain { domain_id }
            | SignalRejection::UnknownDomain { domain_id }
            | SignalRejection::UnknownSignalType { domain_id, .. }
            | SignalRejection::OutOfRange { domain_id, .. }
            | SignalRejection::EvidenceMismatch { domain_id, .. } => domain_id,
        }
    }
}

/// A validated signal
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignalScore {
    domain_id: String,
    signal_type: SignalType,
    score: f64,
    confidence: f64,
    weight_used: f64,
    evidence: SignalEvidence,
    produced_at: DateTime<Utc>,
}

impl SignalScore {
    /// Create a signal with the nominal weight of its type and empty evidence
    pub fn new(
        domain_id: impl Into<String>,
        signal_type: SignalType,
        score: f64,
        confidence: f64,
        produced_at: DateTime<Utc>,
    ) -> Result<Self, SignalRejection> {
        let domain_id = domain_id.into();
        if domain_id.trim().is_empty() {
            return Err(SignalRejection::MissingDomain { domain_id });
        }
        check_range(&domain_id, signal_type, "score", score, 0.0, 1.0)?;
        check_range(&domain_id, signal_type, "confidence", confidence, 0.0, 1.0)?;

        Ok(Self {
            domain_id,
            signal_type,
            score,
            confidence,
            weight_used: signal_type.nominal_weight(),
            evidence: SignalEvidence::empty(signal_type),
            produced_at,
        })
    }

    /// Builder: override the weight
    pub fn with_weight(mut self, weight: f64) -> Result<Self, SignalRejection> {
        check_range(&self.domain_id, self.signal_type, "weightUsed", weight, 0.0, 1.0)?;
        self.weight_used = weight;
        Ok(self)
    }

    /// Builder: attach evidence (must match the signal type)
    pub fn with_evidence(mut self, evidence: SignalEvidence) -> Result<Self, SignalRejection> {
        if evidence.signal_type() != self.signal_type {
            return Err(SignalRejection::EvidenceMismatch {
                domain_id: self.domain_id,
                signal_type: self.signal_type,
                evidence: evidence.signal_type().as_str(),
            });
        }
        if let SignalEvidence::Embedding {
            prototype_similarity: Some(similarity),
        } = evidence
        {
            check_range(
                &self.domain_id,
                self.signal_type,
                "prototypeSimilarity",
                similarity,
                -1.0,
                1.0,
            )?;
        }
        self.evidence = evidence;
        Ok(self)
    }

    // ========== Getters ==========

    pub fn domain_id(&self) -> &str {
        &self.domain_id
    }

    pub fn signal_type(&self) -> SignalType {
        self.signal_type
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    pub fn weight_used(&self) -> f64 {
        self.weight_used
    }

    pub fn evidence(&self) -> &SignalEvidence {
        &self.evidence
    }

    pub fn produced_at(&self) -> DateTime<Utc> {
        self.produced_at
    }

    /// Matched dictionary words (empty for other types)
    pub fn matched_words(&self) -> &[String] {
        match &self.evidence {
            SignalEvidence::Dictionary { matched_words } => matched_words,
            _ => &[],
        }
    }

    /// Qualitative evidence text, if any
    pub fn evidence_text(&self) -> Option<&str> {
        match &self.evidence {
            SignalEvidence::Qualitative { evidence_text } => evidence_text.as_deref(),
            _ => None,
        }
    }

    /// Which of two signals is more current: later `produced_at`, then
    /// higher confidence, then higher score
    pub fn recency_cmp(&self, other: &SignalScore) -> std::cmp::Ordering {
        self.produced_at
            .cmp(&other.produced_at)
            .then_with(|| self.confidence.total_cmp(&other.confidence))
            .then_with(|| self.score.total_cmp(&other.score))
    }

    /// Whether this signal should replace `current` as the stored one
    ///
    /// Equal signals replace, so the last of a tie wins.
    pub fn supersedes(&self, current: &SignalScore) -> bool {
        self.recency_cmp(current) != std::cmp::Ordering::Less
    }
}

fn check_range(
    domain_id: &str,
    signal_type: SignalType,
    field: &'static str,
    value: f64,
    min: f64,
    max: f64,
) -> Result<(), SignalRejection> {
    if value.is_finite() && value >= min && value <= max {
        Ok(())
    } else {
        Err(SignalRejection::OutOfRange {
            domain_id: domain_id.to_string(),
            signal_type,
            field,
            value,
            min,
            max,
        })
    }
}

/// Signal as emitted by an external producer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSignal {
    pub domain_id: String,
    pub signal_type: String,
    pub score: f64,
    pub confidence: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_used: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched_words: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prototype_similarity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidence_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub produced_at: Option<DateTime<Utc>>,
}

impl RawSignal {
    /// Minimal raw signal (no weight override, no evidence)
    pub fn new(
        domain_id: impl Into<String>,
        signal_type: impl Into<String>,
        score: f64,
        confidence: f64,
    ) -> Self {
        Self {
            domain_id: domain_id.into(),
            signal_type: signal_type.into(),
            score,
            confidence,
            weight_used: None,
            matched_words: None,
            prototype_similarity: None,
            evidence_text: None,
            produced_at: None,
        }
    }

    /// Validate into a `SignalScore`, stamping `now` if the producer gave no time
    ///
    /// Out-of-range values are rejected, never clamped.
    pub fn validate(self, now: DateTime<Utc>) -> Result<SignalScore, SignalRejection> {
        let signal_type = SignalType::parse(&self.signal_type).ok_or_else(|| {
            SignalRejection::UnknownSignalType {
                domain_id: self.domain_id.clone(),
                signal_type: self.signal_type.clone(),
            }
        })?;

        let evidence = match signal_type {
            SignalType::Dictionary => {
                self.reject_foreign_evidence(
                    signal_type,
                    &[
                        ("embedding", self.prototype_similarity.is_some()),
                        ("qualitative", self.evidence_text.is_some()),
                    ],
                )?;
                SignalEvidence::Dictionary {
                    matched_words: self.matched_words.unwrap_or_default(),
                }
            }
            SignalType::Embedding => {
                self.reject_foreign_evidence(
                    signal_type,
                    &[
                        ("dictionary", self.matched_words.is_some()),
                        ("qualitative", self.evidence_text.is_some()),
                    ],
                )?;
                SignalEvidence::Embedding {
                    prototype_similarity: self.prototype_similarity,
                }
            }
            SignalType::Qualitative => {
                self.reject_foreign_evidence(
                    signal_type,
                    &[
                        ("dictionary", self.matched_words.is_some()),
                        ("embedding", self.prototype_similarity.is_some()),
                    ],
                )?;
                SignalEvidence::Qualitative {
                    evidence_text: self.evidence_text,
                }
            }
        };

        let signal = SignalScore::new(
            self.domain_id,
            signal_type,
            self.score,
            self.confidence,
            self.produced_at.unwrap_or(now),
        )?;
        let signal = match self.weight_used {
            Some(weight) => signal.with_weight(weight)?,
            None => signal,
        };
        signal.with_evidence(evidence)
    }

    fn reject_foreign_evidence(
        &self,
        signal_type: SignalType,
        present: &[(&'static str, bool)],
    ) -> Result<(), SignalRejection> {
        match present.iter().find(|(_, is_present)| *is_present) {
            Some((evidence, _)) => Err(SignalRejection::EvidenceMismatch {
                domain_id: self.domain_id.clone(),
                signal_type,
                evidence: *evidence,
            }),
            None => Ok(()),
        }
    }
}

impl From<&SignalScore> for RawSignal {
    fn from(signal: &SignalScore) -> Self {
        let mut raw = RawSignal::new(
            signal.domain_id.clone(),
            signal.signal_type.as_str(),
            signal.score,
            signal.confidence,
        );
        raw.weight_used = Some(signal.weight_used);
        raw.produced_at = Some(signal.produced_at);
        match &signal.evidence {
            SignalEvidence::Dictionary { matched_words } => {
                raw.matched_words = Some(matched_words.clone());
            }
            SignalEvidence::Embedding {
                prototype_similarity,
            } => raw.prototype_similarity = *prototype_similarity,
            SignalEvidence::Qualitative { evidence_text } => {
                raw.evidence_text = evidence_text.clone();
            }
        }
        raw
    }
}
