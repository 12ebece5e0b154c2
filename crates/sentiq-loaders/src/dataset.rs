/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Marc Lefevre
 * marc[-dot-]lefevre[-at-]proton[-dot-]me
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! The immutable in-memory post table and its symbol registry

use crate::error::{DatasetError, DatasetResult};
use chrono::{NaiveDateTime, ParseError};
use csv::Reader;
use sentiq_core::Sentiment;
use sentiq_models::Post;
use std::collections::BTreeMap;
use std::fs::File;
use std::path::Path;
use tracing::info;

/// Required CSV columns, checked before any row is read
const REQUIRED_COLUMNS: [&str; 4] = ["Date", "cryptos", "sentiment", "score"];

/// Timestamp formats accepted in the `Date` column
const TIMESTAMP_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

/// The loaded post table.
///
/// Constructed once, never mutated: every consumer works through `&`-views.
/// `symbols` is the registry of canonical symbols present in the data,
/// sorted and deduplicated at load time.
#[derive(Debug, Clone)]
pub struct Dataset {
  posts: Vec<Post>,
  symbols: Vec<String>,
}

impl Dataset {
  /// Load the dataset from a CSV file, failing fast on any malformed row.
  ///
  /// Symbol normalization strips a leading `$` and uppercases; sentiment
  /// labels outside {negative, neutral, positive} are load errors, never
  /// coerced.
  pub fn load<P: AsRef<Path>>(path: P) -> DatasetResult<Self> {
    let file = File::open(path.as_ref())?;
    let mut reader = Reader::from_reader(file);

    let headers = reader.headers()?.clone();
    let mut indices = [0usize; REQUIRED_COLUMNS.len()];
    for (slot, column) in indices.iter_mut().zip(REQUIRED_COLUMNS) {
      *slot = headers
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| DatasetError::MissingColumn(column.to_string()))?;
    }
    let [date_idx, crypto_idx, sentiment_idx, score_idx] = indices;

    let mut posts = Vec::new();
    for (i, result) in reader.records().enumerate() {
      // Row numbers are 1-based and count data rows, not the header
      let row = i + 1;
      let record = result?;

      let raw_date = record.get(date_idx).unwrap_or("");
      let timestamp = parse_timestamp(raw_date).map_err(|_| DatasetError::InvalidTimestamp {
        row,
        value: raw_date.to_string(),
      })?;

      let asset = canonical_symbol(record.get(crypto_idx).unwrap_or(""));

      let raw_sentiment = record.get(sentiment_idx).unwrap_or("");
      let sentiment =
        Sentiment::from_label(raw_sentiment).ok_or_else(|| DatasetError::InvalidSentiment {
          row,
          value: raw_sentiment.to_string(),
        })?;

      let raw_score = record.get(score_idx).unwrap_or("");
      let score: f64 = raw_score.trim().parse().map_err(|_| DatasetError::InvalidScore {
        row,
        value: raw_score.to_string(),
      })?;

      posts.push(Post::new(timestamp, asset, sentiment, score));
    }

    let dataset = Self::from_posts(posts);
    info!(
      rows = dataset.posts.len(),
      symbols = dataset.symbols.len(),
      "dataset loaded"
    );
    Ok(dataset)
  }

  /// Build a dataset from already-validated posts (synthetic data in tests)
  pub fn from_posts(posts: Vec<Post>) -> Self {
    let mut symbols: Vec<String> = posts.iter().map(|p| p.asset.clone()).collect();
    symbols.sort();
    symbols.dedup();
    Self { posts, symbols }
  }

  /// All posts, in load order
  pub fn posts(&self) -> &[Post] {
    &self.posts
  }

  /// The registry of canonical symbols, sorted ascending
  pub fn symbols(&self) -> &[String] {
    &self.symbols
  }

  pub fn len(&self) -> usize {
    self.posts.len()
  }

  pub fn is_empty(&self) -> bool {
    self.posts.is_empty()
  }

  /// Earliest and latest timestamps, `None` for an empty dataset
  pub fn time_span(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
    let first = self.posts.iter().map(|p| p.timestamp).min()?;
    let last = self.posts.iter().map(|p| p.timestamp).max()?;
    Some((first, last))
  }

  /// Post count per symbol, keyed in symbol order
  pub fn volume_by_symbol(&self) -> BTreeMap<&str, u64> {
    let mut volumes: BTreeMap<&str, u64> = BTreeMap::new();
    for post in &self.posts {
      *volumes.entry(post.asset.as_str()).or_insert(0) += 1;
    }
    volumes
  }
}

/// Strip a leading `$` and uppercase
fn canonical_symbol(raw: &str) -> String {
  raw.trim().trim_start_matches('$').to_uppercase()
}

fn parse_timestamp(raw: &str) -> Result<NaiveDateTime, ParseError> {
  let raw = raw.trim();
  let mut last_err = None;
  for format in TIMESTAMP_FORMATS {
    match NaiveDateTime::parse_from_str(raw, format) {
      Ok(ts) => return Ok(ts),
      Err(e) => last_err = Some(e),
    }
  }
  Err(last_err.expect("format list is non-empty"))
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::io::Write;
  use tempfile::NamedTempFile;

  fn write_csv(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
  }

  const VALID_CSV: &str = "\
Date,cryptos,sentiment,score
2022-11-30 09:15:00,$BTC,positive,0.91
2022-11-30 09:40:00,$eth,negative,-0.42
2022-11-30 10:05:00,$BTC,neutral,0.05
";

  #[test]
  fn test_load_normalizes_symbols() {
    let file = write_csv(VALID_CSV);
    let dataset = Dataset::load(file.path()).unwrap();
    assert_eq!(dataset.len(), 3);
    assert_eq!(dataset.symbols(), &["BTC".to_string(), "ETH".to_string()]);
    assert_eq!(dataset.posts()[1].asset, "ETH");
    assert_eq!(dataset.posts()[1].sentiment, Sentiment::Negative);
  }

  #[test]
  fn test_load_accepts_t_separator_and_minute_precision() {
    let file = write_csv(
      "Date,cryptos,sentiment,score\n2022-11-30T09:15:00,$BTC,positive,0.9\n2022-11-30 10:05,$BTC,neutral,0.1\n",
    );
    let dataset = Dataset::load(file.path()).unwrap();
    assert_eq!(dataset.len(), 2);
    assert_eq!(dataset.posts()[1].hour(), 10);
  }

  #[test]
  fn test_load_rejects_missing_column() {
    let file = write_csv("Date,cryptos,score\n2022-11-30 09:15:00,$BTC,0.9\n");
    let err = Dataset::load(file.path()).unwrap_err();
    assert!(matches!(err, DatasetError::MissingColumn(ref c) if c == "sentiment"));
  }

  #[test]
  fn test_load_rejects_unknown_sentiment() {
    let file =
      write_csv("Date,cryptos,sentiment,score\n2022-11-30 09:15:00,$BTC,bullish,0.9\n");
    let err = Dataset::load(file.path()).unwrap_err();
    assert!(matches!(err, DatasetError::InvalidSentiment { row: 1, ref value } if value == "bullish"));
  }

  #[test]
  fn test_load_rejects_bad_timestamp() {
    let file = write_csv("Date,cryptos,sentiment,score\n30/11/2022 9h,$BTC,positive,0.9\n");
    let err = Dataset::load(file.path()).unwrap_err();
    assert!(matches!(err, DatasetError::InvalidTimestamp { row: 1, .. }));
  }

  #[test]
  fn test_load_rejects_non_numeric_score() {
    let file = write_csv("Date,cryptos,sentiment,score\n2022-11-30 09:15:00,$BTC,positive,n/a\n");
    let err = Dataset::load(file.path()).unwrap_err();
    assert!(matches!(err, DatasetError::InvalidScore { row: 1, .. }));
  }

  #[test]
  fn test_load_missing_file_is_io_error() {
    let err = Dataset::load("definitely/not/here.csv").unwrap_err();
    assert!(matches!(err, DatasetError::IoError(_)));
  }

  #[test]
  fn test_from_posts_builds_sorted_registry() {
    let ts = chrono::NaiveDate::from_ymd_opt(2022, 11, 30)
      .unwrap()
      .and_hms_opt(9, 0, 0)
      .unwrap();
    let posts = vec![
      Post::new(ts, "ETH", Sentiment::Positive, 0.5),
      Post::new(ts, "BTC", Sentiment::Neutral, 0.0),
      Post::new(ts, "ETH", Sentiment::Negative, -0.5),
    ];
    let dataset = Dataset::from_posts(posts);
    assert_eq!(dataset.symbols(), &["BTC".to_string(), "ETH".to_string()]);
    assert_eq!(dataset.volume_by_symbol().get("ETH"), Some(&2));
  }

  #[test]
  fn test_time_span() {
    let file = write_csv(VALID_CSV);
    let dataset = Dataset::load(file.path()).unwrap();
    let (first, last) = dataset.time_span().unwrap();
    assert!(first < last);
    assert_eq!(first.format("%H:%M").to_string(), "09:15");

    assert!(Dataset::from_posts(vec![]).time_span().is_none());
  }
}
