use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of named mention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Competitor,
    Product,
    Brand,
    Unknown,
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EntityType::Competitor => "competitor",
            EntityType::Product => "product",
            EntityType::Brand => "brand",
            EntityType::Unknown => "unknown",
        };
        write!(f, "{}", label)
    }
}

/// Which matcher produced an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchSource {
    /// Name or alias found in the known-brand table
    KnownBrand,
    /// Participant of a comparison cue ("X vs Y", "alternative to X")
    Comparison,
    /// Bare capitalized token run
    Capitalization,
    /// Lone capitalized word opening a sentence
    SentenceStart,
}

impl MatchSource {
    /// Heuristic confidence attached to entities from this source
    pub fn confidence(&self) -> f32 {
        match self {
            MatchSource::KnownBrand => 0.95,
            MatchSource::Comparison => 0.85,
            MatchSource::Capitalization => 0.6,
            MatchSource::SentenceStart => 0.4,
        }
    }
}

/// A named mention recognized in free text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Name as written in the query
    pub name: String,
    #[serde(rename = "type")]
    pub entity_type: EntityType,
    /// Confidence in `[0, 1]`
    pub confidence: f32,
    pub source: MatchSource,
    /// Set by the brand linker
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked: Option<bool>,
    /// Category of the matched known brand
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Entity {
    /// Unlinked competitor entity with the source's confidence
    pub fn competitor(name: impl Into<String>, source: MatchSource) -> Self {
        Self {
            name: name.into(),
            entity_type: EntityType::Competitor,
            confidence: source.confidence(),
            source,
            linked: None,
            category: None,
        }
    }

    /// `true` only after a successful link
    pub fn is_linked(&self) -> bool {
        self.linked.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_ordering() {
        assert!(MatchSource::KnownBrand.confidence() > MatchSource::Comparison.confidence());
        assert!(MatchSource::Comparison.confidence() > MatchSource::Capitalization.confidence());
        assert!(MatchSource::Capitalization.confidence() > MatchSource::SentenceStart.confidence());
        assert!(MatchSource::SentenceStart.confidence() > 0.0);
    }

    #[test]
    fn test_serialization_skips_unset_link() {
        let entity = Entity::competitor("Asana", MatchSource::Comparison);
        let json = serde_json::to_value(&entity).unwrap();

        assert_eq!(json["type"], "competitor");
        assert_eq!(json["source"], "comparison");
        assert!(json.get("linked").is_none());
        assert!(json.get("category").is_none());
        assert!(!entity.is_linked());
    }
}
