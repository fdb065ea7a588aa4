//! Content and video mention normalization.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::scale::{ratio_score, round_score, LogScale};
use super::traits::{SignalKind, SignalNormalizer};

/// 1k views score 20, 100M views saturate.
const VIEWS_SCALE: LogScale = LogScale::new(3.0, 5.0, 20.0);
const VIDEO_SCALE: LogScale = LogScale::new(0.0, 3.0, 20.0);
/// A 10% engagement rate earns full credit.
const FULL_ENGAGEMENT_RATE: f64 = 0.10;

const VIEWS_WEIGHT: f64 = 0.5;
const VIDEO_WEIGHT: f64 = 0.2;
const ENGAGEMENT_WEIGHT: f64 = 0.3;

/// Content observation aggregated across platforms
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentMeasurement {
    /// Videos and posts mentioning the niche
    pub video_count: u64,
    /// Total views across those videos
    pub total_views: u64,
    /// (likes + comments + shares) / views, as a ratio
    #[serde(default)]
    pub engagement_rate: f64,
}

/// Content score; `0` when there is no content at all.
pub fn calculate_content_score(measurement: &ContentMeasurement) -> u8 {
    if measurement.video_count == 0 && measurement.total_views == 0 {
        return 0;
    }

    let views_score = VIEWS_SCALE.score(measurement.total_views as f64);
    let video_score = VIDEO_SCALE.score(measurement.video_count as f64);
    let engagement_score = ratio_score(measurement.engagement_rate, FULL_ENGAGEMENT_RATE);

    let score = round_score(
        views_score * VIEWS_WEIGHT + video_score * VIDEO_WEIGHT + engagement_score * ENGAGEMENT_WEIGHT,
    );

    debug!(views_score, video_score, engagement_score, score, "content signal normalized");

    score
}

impl SignalNormalizer for ContentMeasurement {
    fn kind(&self) -> SignalKind {
        SignalKind::Content
    }

    fn normalize(&self) -> u8 {
        calculate_content_score(self)
    }
}
