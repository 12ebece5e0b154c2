//! Entity extraction: asset mentions and the hour window of a question

use crate::resolve::AssetResolver;
use regex::Regex;
use sentiq_core::{DEFAULT_END_HOUR, DEFAULT_START_HOUR};
use sentiq_models::Query;
use tracing::debug;

/// Extracts a [`Query`] from a free-text question.
///
/// Patterns are compiled once at construction; extraction itself is
/// allocation-light and stateless.
#[derive(Debug, Clone)]
pub struct QueryExtractor {
  resolver: AssetResolver,
  range_pattern: Regex,
  single_pattern: Regex,
}

impl QueryExtractor {
  pub fn new(resolver: AssetResolver) -> Self {
    // Hour values are 1-2 digits and deliberately not range-validated:
    // "25h" passes through and matches no rows downstream.
    let range_pattern =
      Regex::new(r"(\d{1,2})h\s*(?:et|-|à)\s*(\d{1,2})h").expect("hour-range pattern is valid");
    let single_pattern = Regex::new(r"(\d{1,2})h").expect("single-hour pattern is valid");
    Self { resolver, range_pattern, single_pattern }
  }

  /// Scan a question for asset mentions and an hour range.
  ///
  /// Assets are collected distinct in first-seen order; callers must treat
  /// the list as an unordered set. Without any hour pattern the default
  /// 9h-12h window applies. No asset-count cap is enforced here.
  pub fn extract(&self, question: &str) -> Query {
    let question = question.to_lowercase();

    let mut assets: Vec<String> = Vec::new();
    for token in question.split_whitespace() {
      if let Some(symbol) = self.resolver.resolve(token) {
        if !assets.contains(&symbol) {
          assets.push(symbol);
        }
      }
    }

    let (start_hour, end_hour) = self.extract_hours(&question);
    debug!(?assets, start_hour, end_hour, "extracted query");
    Query::new(assets, start_hour, end_hour)
  }

  fn extract_hours(&self, question: &str) -> (u32, u32) {
    if let Some(caps) = self.range_pattern.captures(question) {
      let start = caps[1].parse().expect("1-2 digits fit u32");
      let end = caps[2].parse().expect("1-2 digits fit u32");
      return (start, end);
    }
    if let Some(caps) = self.single_pattern.captures(question) {
      let hour = caps[1].parse().expect("1-2 digits fit u32");
      return (hour, hour);
    }
    (DEFAULT_START_HOUR, DEFAULT_END_HOUR)
  }
}
