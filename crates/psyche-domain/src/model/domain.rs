//! Domain - A psychological dimension from the fixed catalog
//!
//! Domains are static reference data. They are built once into the
//! catalog and never mutated at runtime, so every field borrows from
//! `'static` data.

use serde::Serialize;

/// The 13 domain categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    BigFive,
    DarkTriad,
    EmotionalIntelligence,
    CognitiveStyle,
    Values,
    MoralFoundations,
    Attachment,
    Motivation,
    Mindset,
    PoliticalOrientation,
    Wellbeing,
    SocialCognition,
    Interpersonal,
}

impl Category {
    /// All categories in catalog order
    pub const ALL: [Category; 13] = [
        Category::BigFive,
        Category::DarkTriad,
        Category::EmotionalIntelligence,
        Category::CognitiveStyle,
        Category::Values,
        Category::MoralFoundations,
        Category::Attachment,
        Category::Motivation,
        Category::Mindset,
        Category::PoliticalOrientation,
        Category::Wellbeing,
        Category::SocialCognition,
        Category::Interpersonal,
    ];

    /// Stable snake_case key
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::BigFive => "big_five",
            Category::DarkTriad => "dark_triad",
            Category::EmotionalIntelligence => "emotional_intelligence",
            Category::CognitiveStyle => "cognitive_style",
            Category::Values => "values",
            Category::MoralFoundations => "moral_foundations",
            Category::Attachment => "attachment",
            Category::Motivation => "motivation",
            Category::Mindset => "mindset",
            Category::PoliticalOrientation => "political_orientation",
            Category::Wellbeing => "wellbeing",
            Category::SocialCognition => "social_cognition",
            Category::Interpersonal => "interpersonal",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Category::BigFive => "Big Five Personality",
            Category::DarkTriad => "Dark Triad",
            Category::EmotionalIntelligence => "Emotional Intelligence",
            Category::CognitiveStyle => "Cognitive Style",
            Category::Values => "Personal Values",
            Category::MoralFoundations => "Moral Foundations",
            Category::Attachment => "Attachment",
            Category::Motivation => "Motivation",
            Category::Mindset => "Mindset",
            Category::PoliticalOrientation => "Political Orientation",
            Category::Wellbeing => "Wellbeing",
            Category::SocialCognition => "Social Cognition",
            Category::Interpersonal => "Interpersonal Style",
        }
    }

    /// Parse a snake_case key
    pub fn parse(key: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.as_str() == key)
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One descriptor of how a domain shows up in conversation
///
/// Exactly one shape per data point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DataPoint {
    /// Free-text cue
    Indicator { text: &'static str },
    /// What high and low expression look like
    Contrast { high: &'static str, low: &'static str },
    /// Growth vs fixed framing
    Mindset {
        growth: &'static str,
        fixed: &'static str,
    },
    /// Conservative vs liberal framing
    Orientation {
        conservative: &'static str,
        liberal: &'static str,
    },
}

impl DataPoint {
    pub const fn indicator(text: &'static str) -> Self {
        DataPoint::Indicator { text }
    }

    pub const fn contrast(high: &'static str, low: &'static str) -> Self {
        DataPoint::Contrast { high, low }
    }

    pub const fn mindset(growth: &'static str, fixed: &'static str) -> Self {
        DataPoint::Mindset { growth, fixed }
    }

    pub const fn orientation(conservative: &'static str, liberal: &'static str) -> Self {
        DataPoint::Orientation {
            conservative,
            liberal,
        }
    }

    /// Short tag naming the shape
    pub fn kind(&self) -> &'static str {
        match self {
            DataPoint::Indicator { .. } => "indicator",
            DataPoint::Contrast { .. } => "contrast",
            DataPoint::Mindset { .. } => "mindset",
            DataPoint::Orientation { .. } => "orientation",
        }
    }
}

/// Paralinguistic cue for voice input
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceIndicator {
    pub feature: &'static str,
    pub high: &'static str,
    pub low: &'static str,
    /// Signed contribution of the feature to the domain score
    pub weight: f64,
}

/// Domain - one of the 39 catalog entries
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Domain {
    pub id: &'static str,
    pub category: Category,
    pub name: &'static str,
    pub description: &'static str,
    pub psychometric_source: &'static str,
    pub markers: &'static [&'static str],
    pub data_points: &'static [DataPoint],
    #[serde(skip_serializing_if = "no_voice")]
    pub voice_indicators: &'static [VoiceIndicator],
}

fn no_voice(indicators: &&'static [VoiceIndicator]) -> bool {
    indicators.is_empty()
}

impl Domain {
    /// Markers mentioned in a piece of text (case-insensitive)
    pub fn markers_mentioned_in(&self, text: &str) -> usize {
        let lower = text.to_lowercase();
        self.markers
            .iter()
            .filter(|m| lower.contains(&m.to_lowercase()))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: Domain = Domain {
        id: "sample",
        category: Category::Mindset,
        name: "Sample",
        description: "A sample domain",
        psychometric_source: "Nobody (2024)",
        markers: &["effort", "Learning from failure"],
        data_points: &[
            DataPoint::indicator("talks about practice"),
            DataPoint::mindset("can improve", "born with it"),
        ],
        voice_indicators: &[],
    };

    #[test]
    fn test_category_roundtrip_keys() {
        for category in Category::ALL {
            assert_eq!(Category::parse(category.as_str()), Some(category));
        }
        assert_eq!(Category::parse("astrology"), None);
    }

    #[test]
    fn test_markers_mentioned_in_is_case_insensitive() {
        assert_eq!(SAMPLE.markers_mentioned_in("So much EFFORT went in"), 1);
        assert_eq!(
            SAMPLE.markers_mentioned_in("effort and learning from failure"),
            2
        );
        assert_eq!(SAMPLE.markers_mentioned_in(""), 0);
    }

    #[test]
    fn test_data_point_serializes_with_kind_tag() {
        let json = serde_json::to_value(DataPoint::contrast("bold", "shy")).unwrap();
        assert_eq!(json["kind"], "contrast");
        assert_eq!(json["high"], "bold");

        let json = serde_json::to_value(DataPoint::orientation("tradition", "reform")).unwrap();
        assert_eq!(json["kind"], "orientation");
        assert_eq!(json["liberal"], "reform");
    }

    #[test]
    fn test_domain_serialization_skips_empty_voice() {
        let json = serde_json::to_value(SAMPLE).unwrap();
        assert_eq!(json["psychometricSource"], "Nobody (2024)");
        assert!(json.get("voiceIndicators").is_none());
    }
}
