//! Commercial-intent classification of search queries.
//!
//! Each query fragment is assigned to the first keyword tier it contains
//! (high, then medium, then low). Matching is plain substring containment on
//! the lower-cased fragment, so "buyer" also counts as "buy".

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

use super::scale::{round_score, MAX_SCORE};

/// Buying-intent tier of a query fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentTier {
    /// Transactional wording (buy, price, discount, etc.)
    High,
    /// Evaluation wording (best, vs, alternative, etc.)
    Medium,
    /// Informational wording (how, tutorial, etc.)
    Low,
    /// No keyword matched
    Unmatched,
}

impl IntentTier {
    /// Per-fragment score contributed to the average
    pub fn score(&self) -> u8 {
        match self {
            IntentTier::High => 80,
            IntentTier::Medium => 55,
            IntentTier::Low => 20,
            IntentTier::Unmatched => 20,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            IntentTier::High => "high",
            IntentTier::Medium => "medium",
            IntentTier::Low => "low",
            IntentTier::Unmatched => "unmatched",
        }
    }
}

impl fmt::Display for IntentTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Result of classifying a single fragment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntentMatch {
    /// Winning tier
    pub tier: IntentTier,
    /// Keyword that decided the tier, if any
    pub keyword: Option<&'static str>,
}

const HIGH_INTENT_KEYWORDS: &[&str] = &[
    "buy",
    "price",
    "pricing",
    "cost",
    "discount",
    "coupon",
    "deal",
    "cheap",
    "purchase",
    "subscription",
    "order",
];

const MEDIUM_INTENT_KEYWORDS: &[&str] = &[
    "best",
    "vs",
    "versus",
    "alternative",
    "review",
    "compare",
    "comparison",
    "top",
    "recommend",
];

const LOW_INTENT_KEYWORDS: &[&str] = &[
    "how", "what", "why", "tutorial", "guide", "learn", "tips", "example",
];

/// Keyword list for one tier
struct TierKeywords {
    tier: IntentTier,
    keywords: &'static [&'static str],
}

/// Rule-based commercial-intent classifier.
pub struct CommercialIntentClassifier {
    // Priority order: first match wins.
    tiers: Vec<TierKeywords>,
}

static DEFAULT_CLASSIFIER: LazyLock<CommercialIntentClassifier> =
    LazyLock::new(CommercialIntentClassifier::new);

impl Default for CommercialIntentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl CommercialIntentClassifier {
    /// Create a classifier with the built-in keyword tiers
    pub fn new() -> Self {
        let tiers = vec![
            TierKeywords {
                tier: IntentTier::High,
                keywords: HIGH_INTENT_KEYWORDS,
            },
            TierKeywords {
                tier: IntentTier::Medium,
                keywords: MEDIUM_INTENT_KEYWORDS,
            },
            TierKeywords {
                tier: IntentTier::Low,
                keywords: LOW_INTENT_KEYWORDS,
            },
        ];

        Self { tiers }
    }

    /// Shared instance with the built-in tiers
    pub fn shared() -> &'static CommercialIntentClassifier {
        &DEFAULT_CLASSIFIER
    }

    /// Classify one fragment, reporting the keyword that decided it
    pub fn classify_fragment(&self, fragment: &str) -> IntentMatch {
        let lower = fragment.to_lowercase();

        for group in &self.tiers {
            if let Some(keyword) = group.keywords.iter().copied().find(|k| lower.contains(k)) {
                return IntentMatch {
                    tier: group.tier,
                    keyword: Some(keyword),
                };
            }
        }

        IntentMatch {
            tier: IntentTier::Unmatched,
            keyword: None,
        }
    }

    /// Average intent score over all fragments, `0` for an empty list
    pub fn score<S: AsRef<str>>(&self, queries: &[S]) -> u8 {
        if queries.is_empty() {
            return 0;
        }

        let total: f64 = queries
            .iter()
            .map(|q| f64::from(self.classify_fragment(q.as_ref()).tier.score()))
            .sum();
        let mean = total / queries.len() as f64;

        round_score(mean.min(MAX_SCORE))
    }
}

/// Average commercial intent of `queries` on the 0-100 scale.
pub fn calculate_commercial_intent<S: AsRef<str>>(queries: &[S]) -> u8 {
    CommercialIntentClassifier::shared().score(queries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_queries() {
        let empty: [&str; 0] = [];
        assert_eq!(calculate_commercial_intent(&empty), 0);
    }

    #[test]
    fn test_tier_detection() {
        let classifier = CommercialIntentClassifier::new();

        assert_eq!(classifier.classify_fragment("Buy CRM software").tier, IntentTier::High);
        assert_eq!(classifier.classify_fragment("asana pricing").tier, IntentTier::High);
        assert_eq!(classifier.classify_fragment("best crm for startups").tier, IntentTier::Medium);
        assert_eq!(classifier.classify_fragment("trello alternative").tier, IntentTier::Medium);
        assert_eq!(classifier.classify_fragment("kanban tutorial").tier, IntentTier::Low);
        assert_eq!(classifier.classify_fragment("kanban board").tier, IntentTier::Unmatched);
    }

    #[test]
    fn test_high_wins_over_medium() {
        let classifier = CommercialIntentClassifier::new();

        let result = classifier.classify_fragment("best price for project tools");
        assert_eq!(result.tier, IntentTier::High);
        assert_eq!(result.keyword, Some("price"));
    }

    #[test]
    fn test_average_score() {
        // 80 + 55 + 20 = 155 / 3 = 51.67
        let queries = ["buy now", "best option", "how it works"];
        assert_eq!(calculate_commercial_intent(&queries), 52);

        let all_high = vec!["discount code".to_string(), "cheap plan".to_string()];
        assert_eq!(calculate_commercial_intent(&all_high), 80);
    }

    #[test]
    fn test_unmatched_uses_base_score() {
        assert_eq!(calculate_commercial_intent(&["zzz"]), 20);
    }
}
