//! Pure aggregation functions over the loaded dataset.
//!
//! Everything here filters by the fixed analysis date plus an inclusive
//! hour window and aggregates in a single pass. Inverted or out-of-range
//! windows are legal inputs that simply match nothing.

use chrono::NaiveDate;
use sentiq_core::{RankDirection, Sentiment};
use sentiq_loaders::Dataset;
use sentiq_models::{AssetSummary, ChartPoint, Post, RankingEntry};
use std::collections::BTreeMap;

/// User-visible scores are rounded to 3 decimals, half away from zero
/// (`f64::round` semantics)
fn round3(value: f64) -> f64 {
  (value * 1000.0).round() / 1000.0
}

fn in_window(post: &Post, date: NaiveDate, start_hour: u32, end_hour: u32) -> bool {
  post.date() == date && post.hour() >= start_hour && post.hour() <= end_hour
}

/// Summarize one asset over a date+hour window.
///
/// Returns `None` when no rows match, the defined no-data outcome. The
/// dominant sentiment is the most frequent label, ties broken by label
/// order (negative, neutral, positive); `sentiment_counts` holds observed
/// labels only.
pub fn summarize(
  dataset: &Dataset,
  date: NaiveDate,
  asset: &str,
  start_hour: u32,
  end_hour: u32,
) -> Option<AssetSummary> {
  let mut counts: BTreeMap<Sentiment, u64> = BTreeMap::new();
  let mut score_sum = 0.0;
  let mut volume: u64 = 0;

  for post in dataset.posts() {
    if post.asset == asset && in_window(post, date, start_hour, end_hour) {
      *counts.entry(post.sentiment).or_insert(0) += 1;
      score_sum += post.score;
      volume += 1;
    }
  }

  if volume == 0 {
    return None;
  }

  // Strictly-greater scan over the label-ordered map keeps the first
  // label on ties (negative < neutral < positive)
  let mut dominant: Option<(Sentiment, u64)> = None;
  for (&sentiment, &count) in &counts {
    if dominant.map_or(true, |(_, best)| count > best) {
      dominant = Some((sentiment, count));
    }
  }
  let (dominant_sentiment, _) = dominant.expect("volume > 0 implies a non-empty count map");

  Some(AssetSummary {
    asset: asset.to_string(),
    dominant_sentiment,
    mean_score: round3(score_sum / volume as f64),
    volume,
    sentiment_counts: counts,
  })
}

/// Rank all assets by mean score over a date+hour window.
///
/// Ascending for [`RankDirection::Worst`], descending for
/// [`RankDirection::Best`]; equal means break by symbol ascending.
/// Truncated to `top_n` when given. An empty window yields an empty
/// vector, never `None`.
pub fn rank(
  dataset: &Dataset,
  date: NaiveDate,
  start_hour: u32,
  end_hour: u32,
  top_n: Option<usize>,
  direction: RankDirection,
) -> Vec<RankingEntry> {
  // BTreeMap keys the groups in symbol order; the stable sort below then
  // preserves that order across equal means
  let mut groups: BTreeMap<&str, (f64, u64)> = BTreeMap::new();
  for post in dataset.posts() {
    if in_window(post, date, start_hour, end_hour) {
      let entry = groups.entry(post.asset.as_str()).or_insert((0.0, 0));
      entry.0 += post.score;
      entry.1 += 1;
    }
  }

  let mut means: Vec<(&str, f64)> =
    groups.into_iter().map(|(asset, (sum, count))| (asset, sum / count as f64)).collect();
  if direction.is_ascending() {
    means.sort_by(|a, b| a.1.total_cmp(&b.1));
  } else {
    means.sort_by(|a, b| b.1.total_cmp(&a.1));
  }

  if let Some(n) = top_n {
    means.truncate(n);
  }

  means.into_iter().map(|(asset, mean)| RankingEntry::new(asset, round3(mean))).collect()
}

/// Full-day sentiment series for one asset, ordered by timestamp.
///
/// No hour filter: charts always show the whole analysis date.
pub fn chart_series(dataset: &Dataset, date: NaiveDate, asset: &str) -> Vec<ChartPoint> {
  let mut points: Vec<ChartPoint> = dataset
    .posts()
    .iter()
    .filter(|post| post.asset == asset && post.date() == date)
    .map(|post| ChartPoint::new(post.timestamp, post.sentiment_numeric()))
    .collect();
  points.sort_by_key(|point| point.timestamp);
  points
}
