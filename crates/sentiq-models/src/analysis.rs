//! Analytics result types: per-asset summaries, rankings and chart series

use chrono::NaiveDateTime;
use sentiq_core::Sentiment;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-asset summary over a date+hour window.
///
/// `sentiment_counts` only carries labels actually observed in the window;
/// formatting callers report absent labels as 0 via [`AssetSummary::count`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetSummary {
  /// Canonical asset symbol
  pub asset: String,

  /// Most frequent label in the window (ties broken by label order)
  pub dominant_sentiment: Sentiment,

  /// Arithmetic mean of post scores, rounded to 3 decimals
  pub mean_score: f64,

  /// Number of posts in the window
  pub volume: u64,

  /// Observed label frequencies
  pub sentiment_counts: BTreeMap<Sentiment, u64>,
}

impl AssetSummary {
  /// Count for a label, 0 when the label never occurred in the window
  pub fn count(&self, sentiment: Sentiment) -> u64 {
    self.sentiment_counts.get(&sentiment).copied().unwrap_or(0)
  }
}

/// One entry of a cross-asset ranking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingEntry {
  pub asset: String,

  /// Mean score over the window, rounded to 3 decimals
  pub mean_score: f64,
}

impl RankingEntry {
  pub fn new(asset: impl Into<String>, mean_score: f64) -> Self {
    Self { asset: asset.into(), mean_score }
  }
}

/// One point of a sentiment chart series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
  pub timestamp: NaiveDateTime,

  /// Numeric sentiment: -1 negative, 0 neutral, 1 positive
  pub sentiment_numeric: i8,
}

impl ChartPoint {
  pub fn new(timestamp: NaiveDateTime, sentiment_numeric: i8) -> Self {
    Self { timestamp, sentiment_numeric }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_count_reports_absent_labels_as_zero() {
    let mut counts = BTreeMap::new();
    counts.insert(Sentiment::Positive, 4);
    let summary = AssetSummary {
      asset: "BTC".to_string(),
      dominant_sentiment: Sentiment::Positive,
      mean_score: 0.812,
      volume: 4,
      sentiment_counts: counts,
    };
    assert_eq!(summary.count(Sentiment::Positive), 4);
    assert_eq!(summary.count(Sentiment::Neutral), 0);
    assert_eq!(summary.count(Sentiment::Negative), 0);
  }

  #[test]
  fn test_summary_serializes_with_lowercase_labels() {
    let mut counts = BTreeMap::new();
    counts.insert(Sentiment::Negative, 1);
    let summary = AssetSummary {
      asset: "ETH".to_string(),
      dominant_sentiment: Sentiment::Negative,
      mean_score: -0.25,
      volume: 1,
      sentiment_counts: counts,
    };
    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["dominant_sentiment"], "negative");
    assert_eq!(json["sentiment_counts"]["negative"], 1);
  }
}
