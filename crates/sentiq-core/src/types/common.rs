//! Sentiment and ranking primitives shared by the loader, engine and CLI

use serde::{Deserialize, Serialize};

/// Sentiment label attached to a post.
///
/// Variant order is significant: it is the deterministic tie-break order for
/// dominant-sentiment computation (`Ord` derives from declaration order).
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
  Negative,
  Neutral,
  Positive,
}

impl std::fmt::Display for Sentiment {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Sentiment::Negative => write!(f, "negative"),
      Sentiment::Neutral => write!(f, "neutral"),
      Sentiment::Positive => write!(f, "positive"),
    }
  }
}

impl Sentiment {
  /// All labels, in tie-break order
  pub const ALL: [Sentiment; 3] = [Sentiment::Negative, Sentiment::Neutral, Sentiment::Positive];

  /// Parse from a raw dataset label, case-insensitively
  pub fn from_label(s: &str) -> Option<Self> {
    match s.trim().to_lowercase().as_str() {
      "negative" => Some(Sentiment::Negative),
      "neutral" => Some(Sentiment::Neutral),
      "positive" => Some(Sentiment::Positive),
      _ => None,
    }
  }

  /// Fixed numeric mapping used for chart series: negative -1, neutral 0, positive 1
  pub fn numeric(&self) -> i8 {
    match self {
      Sentiment::Negative => -1,
      Sentiment::Neutral => 0,
      Sentiment::Positive => 1,
    }
  }
}

/// Direction of a cross-asset ranking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankDirection {
  /// Highest mean score first
  Best,
  /// Lowest mean score first
  Worst,
}

impl std::fmt::Display for RankDirection {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      RankDirection::Best => write!(f, "best"),
      RankDirection::Worst => write!(f, "worst"),
    }
  }
}

impl RankDirection {
  /// Whether entries sort by ascending mean score
  pub fn is_ascending(&self) -> bool {
    matches!(self, RankDirection::Worst)
  }
}
