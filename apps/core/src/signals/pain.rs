//! Forum pain-point normalization.
//!
//! A pain mention is a forum post whose text carries complaint language:
//! struggle, frustration, breakage, wishes, fatigue, wasted time, cost or
//! complexity complaints. The score rewards both the absolute number of such
//! posts and their share of the sampled discussion.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use tracing::debug;

use super::scale::{ratio_score, round_score, LogScale};
use super::traits::{SignalKind, SignalNormalizer};

/// One pain mention scores 20; a thousand saturate the scale.
const MENTION_SCALE: LogScale = LogScale::new(0.0, 3.0, 20.0);
/// Average engagement of 1000 per pain post saturates the scale.
const ENGAGEMENT_SCALE: LogScale = LogScale::new(0.0, 3.0, 0.0);

const MENTION_WEIGHT: f64 = 0.4;
const FREQUENCY_WEIGHT: f64 = 0.4;
const ENGAGEMENT_WEIGHT: f64 = 0.2;

// NOTE: expect() is acceptable here: the patterns are literals and a failure is a build-time bug.
static PAIN_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"(?i)\b(struggle|struggling|difficult|hard to|can't|cannot|unable to)\b").expect("Invalid regex: struggle pattern"),
        Regex::new(r"(?i)\b(frustrated|frustrating|annoying|annoyed|hate|hating)\b").expect("Invalid regex: frustration pattern"),
        Regex::new(r"(?i)\b(problem|issue|bug|broken|doesn't work|not working)\b").expect("Invalid regex: breakage pattern"),
        Regex::new(r"(?i)\b(wish there was|if only|would be nice if)\b").expect("Invalid regex: wish pattern"),
        Regex::new(r"(?i)\b(tired of|sick of|fed up with)\b").expect("Invalid regex: fatigue pattern"),
        Regex::new(r"(?i)\b(waste of time|time consuming|takes forever)\b").expect("Invalid regex: time pattern"),
        Regex::new(r"(?i)\b(expensive|overpriced|costs too much|can't afford)\b").expect("Invalid regex: cost pattern"),
        Regex::new(r"(?i)\b(complicated|confusing|complex|overwhelming)\b").expect("Invalid regex: complexity pattern"),
    ]
});

/// A forum post as fetched by the collection layer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForumPost {
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub upvotes: u64,
    #[serde(default)]
    pub comments: u64,
}

impl ForumPost {
    /// Whether the post contains complaint language
    pub fn is_pain_point(&self) -> bool {
        let text = format!("{}. {}", self.title, self.body);
        PAIN_PATTERNS.iter().any(|p| p.is_match(&text))
    }

    fn engagement(&self) -> u64 {
        self.upvotes.saturating_add(self.comments)
    }
}

/// Aggregated pain-point observation for a niche
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PainMeasurement {
    /// Posts sampled from the niche's communities
    pub post_count: u64,
    /// Sampled posts that carry complaint language
    pub pain_mentions: u64,
    /// Average upvotes + comments per pain post
    #[serde(default)]
    pub avg_engagement: f64,
}

impl PainMeasurement {
    /// Build a measurement by scanning raw posts for complaint language.
    pub fn from_posts(posts: &[ForumPost]) -> Self {
        let pain_posts: Vec<&ForumPost> = posts.iter().filter(|p| p.is_pain_point()).collect();

        let avg_engagement = if pain_posts.is_empty() {
            0.0
        } else {
            let total: f64 = pain_posts.iter().map(|p| p.engagement() as f64).sum();
            total / pain_posts.len() as f64
        };

        Self {
            post_count: posts.len() as u64,
            pain_mentions: pain_posts.len() as u64,
            avg_engagement,
        }
    }
}

/// Pain score; `0` when nothing was sampled or nothing hurts.
pub fn calculate_pain_score(measurement: &PainMeasurement) -> u8 {
    if measurement.post_count == 0 || measurement.pain_mentions == 0 {
        return 0;
    }

    let mentions = measurement.pain_mentions as f64;
    let mention_score = MENTION_SCALE.score(mentions);
    let frequency_score = ratio_score(mentions / measurement.post_count as f64, 1.0);
    let engagement_score = ENGAGEMENT_SCALE.score(measurement.avg_engagement);

    let score = round_score(
        mention_score * MENTION_WEIGHT
            + frequency_score * FREQUENCY_WEIGHT
            + engagement_score * ENGAGEMENT_WEIGHT,
    );

    debug!(
        mention_score,
        frequency_score, engagement_score, score, "pain signal normalized"
    );

    score
}

impl SignalNormalizer for PainMeasurement {
    fn kind(&self) -> SignalKind {
        SignalKind::Pain
    }

    fn normalize(&self) -> u8 {
        calculate_pain_score(self)
    }
}
