use serde::{Deserialize, Serialize};
use std::fmt;

/// The five kinds of market evidence tracked per niche.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalKind {
    /// Forum pain points (complaints, frustrations, wishes)
    Pain,
    /// Ad-spend observations
    Spend,
    /// Search demand and trends
    Search,
    /// Content and video mentions
    Content,
    /// App-store signals
    App,
}

impl SignalKind {
    /// Every signal kind, in aggregation order.
    pub const ALL: [SignalKind; 5] = [
        SignalKind::Pain,
        SignalKind::Spend,
        SignalKind::Search,
        SignalKind::Content,
        SignalKind::App,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SignalKind::Pain => "pain",
            SignalKind::Spend => "spend",
            SignalKind::Search => "search",
            SignalKind::Content => "content",
            SignalKind::App => "app",
        }
    }
}

impl fmt::Display for SignalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A raw measurement that can reduce itself to a 0-100 score.
///
/// Implementations must be pure and total: absent or zero data yields `0`,
/// and no input produces a value above `100`.
pub trait SignalNormalizer {
    /// Which signal this measurement feeds.
    fn kind(&self) -> SignalKind;

    /// Normalized score in `0..=100`.
    fn normalize(&self) -> u8;
}
