//! Tagged response payloads handed to the presentation layer

use crate::analysis::{AssetSummary, ChartPoint, RankingEntry};
use crate::query::Query;
use sentiq_core::RankDirection;
use serde::{Deserialize, Serialize};

/// Outcome of a two-asset comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonOutcome {
  FirstBetter,
  SecondBetter,
  Equivalent,
}

/// What the core answered, tagged by kind.
///
/// No-data, ambiguous-input and unrecognized-intent are values here, never
/// errors: the only fatal path in the pipeline is dataset loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Response {
  /// Cross-asset ranking, ordered per `direction`
  Ranking { direction: RankDirection, items: Vec<RankingEntry> },

  /// Single-asset summary over the requested window
  SingleSummary { summary: AssetSummary },

  /// Two-asset comparison; both sides had data
  Comparison { first: AssetSummary, second: AssetSummary, outcome: ComparisonOutcome },

  /// Full-day sentiment series for one asset
  ChartSeries { asset: String, points: Vec<ChartPoint> },

  /// Valid request, zero matching rows. `assets` names the side(s) without
  /// data; empty when a chart was requested with no recognizable asset.
  NoData { assets: Vec<String> },

  /// Chart requested with two or more assets
  AmbiguousInput,

  /// No keyword rule matched and the asset count fits no fallback
  UnrecognizedIntent,
}

/// A response together with the query it was computed from, so callers can
/// phrase replies ("entre 9h et 12h") without re-parsing the question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
  pub query: Query,
  pub response: Response,
}

impl Answer {
  pub fn new(query: Query, response: Response) -> Self {
    Self { query, response }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_response_kind_tags() {
    let json = serde_json::to_value(Response::AmbiguousInput).unwrap();
    assert_eq!(json["kind"], "ambiguous_input");

    let json = serde_json::to_value(Response::UnrecognizedIntent).unwrap();
    assert_eq!(json["kind"], "unrecognized_intent");

    let json =
      serde_json::to_value(Response::NoData { assets: vec!["BTC".to_string()] }).unwrap();
    assert_eq!(json["kind"], "no_data");
    assert_eq!(json["assets"][0], "BTC");
  }

  #[test]
  fn test_ranking_payload_shape() {
    let response = Response::Ranking {
      direction: RankDirection::Best,
      items: vec![RankingEntry::new("BTC", 0.512), RankingEntry::new("ETH", 0.33)],
    };
    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["kind"], "ranking");
    assert_eq!(json["direction"], "best");
    assert_eq!(json["items"][0]["asset"], "BTC");
  }

  #[test]
  fn test_comparison_outcome_tags() {
    assert_eq!(
      serde_json::to_value(ComparisonOutcome::Equivalent).unwrap(),
      serde_json::Value::String("equivalent".to_string())
    );
  }
}
