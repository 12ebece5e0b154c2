//! The `QueryEngine` facade: one immutable dataset, one compiled
//! extraction pipeline, one `answer` call per question

use crate::analytics::{chart_series, rank, summarize};
use crate::dispatch::{classify, Intent};
use crate::extract::QueryExtractor;
use crate::resolve::AssetResolver;
use chrono::NaiveDate;
use sentiq_core::RankDirection;
use sentiq_loaders::Dataset;
use sentiq_models::{Answer, ComparisonOutcome, Query, Response};
use tracing::debug;

/// Answers free-text questions over a loaded dataset.
///
/// Explicitly constructed and passed around; there is no module-level
/// dataset. Stateless across questions, so a shared reference can serve
/// concurrent callers.
#[derive(Debug, Clone)]
pub struct QueryEngine {
  dataset: Dataset,
  analysis_date: NaiveDate,
  extractor: QueryExtractor,
}

impl QueryEngine {
  pub fn new(dataset: Dataset, analysis_date: NaiveDate) -> Self {
    let extractor = QueryExtractor::new(AssetResolver::new(dataset.symbols()));
    Self { dataset, analysis_date, extractor }
  }

  pub fn dataset(&self) -> &Dataset {
    &self.dataset
  }

  pub fn analysis_date(&self) -> NaiveDate {
    self.analysis_date
  }

  /// Answer one question: extract entities, classify the intent, compute
  /// the payload. Never fails; every unhappy path is a [`Response`] value.
  pub fn answer(&self, question: &str) -> Answer {
    let query = self.extractor.extract(question);
    let intent = classify(question);
    debug!(?intent, assets = ?query.assets, "dispatching question");

    let response = match intent {
      Some(Intent::Ranking { direction, top_n }) => {
        self.ranking(direction, Some(top_n), query.start_hour, query.end_hour)
      }
      Some(Intent::Chart) => match query.assets.as_slice() {
        [asset] => self.chart(asset),
        // No recognizable chart target: a no-data outcome without an
        // asset, distinct from the ambiguous multi-asset case
        [] => Response::NoData { assets: vec![] },
        _ => Response::AmbiguousInput,
      },
      None => match query.assets.as_slice() {
        [asset] => self.summary(asset, query.start_hour, query.end_hour),
        [first, second] => self.compare(first, second, query.start_hour, query.end_hour),
        _ => Response::UnrecognizedIntent,
      },
    };

    Answer::new(query, response)
  }

  /// Single-asset summary over an explicit window (out-of-band selection)
  pub fn summary(&self, asset: &str, start_hour: u32, end_hour: u32) -> Response {
    match summarize(&self.dataset, self.analysis_date, asset, start_hour, end_hour) {
      Some(summary) => Response::SingleSummary { summary },
      None => Response::NoData { assets: vec![asset.to_string()] },
    }
  }

  /// Two-asset comparison over an explicit window.
  ///
  /// Sides without data are reported independently; the winner is the
  /// strictly higher mean score, equal means are an equivalent outcome.
  pub fn compare(&self, first: &str, second: &str, start_hour: u32, end_hour: u32) -> Response {
    let left = summarize(&self.dataset, self.analysis_date, first, start_hour, end_hour);
    let right = summarize(&self.dataset, self.analysis_date, second, start_hour, end_hour);

    match (left, right) {
      (Some(first), Some(second)) => {
        let outcome = if first.mean_score > second.mean_score {
          ComparisonOutcome::FirstBetter
        } else if second.mean_score > first.mean_score {
          ComparisonOutcome::SecondBetter
        } else {
          ComparisonOutcome::Equivalent
        };
        Response::Comparison { first, second, outcome }
      }
      (Some(_), None) => Response::NoData { assets: vec![second.to_string()] },
      (None, Some(_)) => Response::NoData { assets: vec![first.to_string()] },
      (None, None) => Response::NoData { assets: vec![first.to_string(), second.to_string()] },
    }
  }

  /// Cross-asset ranking over an explicit window
  pub fn ranking(
    &self,
    direction: RankDirection,
    top_n: Option<usize>,
    start_hour: u32,
    end_hour: u32,
  ) -> Response {
    let items = rank(&self.dataset, self.analysis_date, start_hour, end_hour, top_n, direction);
    Response::Ranking { direction, items }
  }

  /// Full-day chart series for one asset
  pub fn chart(&self, asset: &str) -> Response {
    let points = chart_series(&self.dataset, self.analysis_date, asset);
    if points.is_empty() {
      Response::NoData { assets: vec![asset.to_string()] }
    } else {
      Response::ChartSeries { asset: asset.to_string(), points }
    }
  }

  /// Extract entities without answering (diagnostics)
  pub fn extract(&self, question: &str) -> Query {
    self.extractor.extract(question)
  }
}
