//! # Signals Module
//!
//! Pure normalizers that map one raw market signal onto the common 0-100
//! scale. Every normalizer is total: absent or zero data scores `0`, and no
//! input can push a score past `100`.
//!
//! ## Components
//! - `search`: search volume, growth and related-query intent
//! - `intent`: commercial-intent classification of query fragments
//! - `pain`: forum pain points, including complaint detection on raw posts
//! - `spend`: ad-library observations
//! - `content`: video and content mentions
//! - `app`: app-store reviews and ratings
//! - `scale`: shared clamping, rounding and log-scale helpers
//! - `traits`: `SignalKind` and the `SignalNormalizer` contract

pub mod app;
pub mod content;
pub mod intent;
pub mod pain;
pub mod scale;
pub mod search;
pub mod spend;
pub mod traits;

pub use app::{calculate_app_score, AppMeasurement};
pub use content::{calculate_content_score, ContentMeasurement};
pub use intent::{calculate_commercial_intent, CommercialIntentClassifier, IntentMatch, IntentTier};
pub use pain::{calculate_pain_score, ForumPost, PainMeasurement};
pub use search::{calculate_search_score, normalize_growth, normalize_volume, SearchMeasurement};
pub use spend::{calculate_spend_score, SpendMeasurement};
pub use traits::{SignalKind, SignalNormalizer};
