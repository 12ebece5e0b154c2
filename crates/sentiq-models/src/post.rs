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

//! One row of the loaded dataset

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use sentiq_core::Sentiment;
use serde::{Deserialize, Serialize};

/// A single social-media post about one asset.
///
/// The asset symbol is canonical (leading `$` stripped, uppercased) and the
/// sentiment label has already been validated against the fixed three-label
/// set. The numeric sentiment is derived from the label on demand, so the
/// mapping invariant (negative -1, neutral 0, positive 1) holds by
/// construction and cannot drift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
  /// Post timestamp, timezone-naive
  pub timestamp: NaiveDateTime,

  /// Canonical asset symbol, e.g. `BTC`
  pub asset: String,

  /// Sentiment label from the dataset
  pub sentiment: Sentiment,

  /// Continuous sentiment strength
  pub score: f64,
}

impl Post {
  pub fn new(
    timestamp: NaiveDateTime,
    asset: impl Into<String>,
    sentiment: Sentiment,
    score: f64,
  ) -> Self {
    Self { timestamp, asset: asset.into(), sentiment, score }
  }

  /// Numeric image of the sentiment label: -1, 0 or 1
  pub fn sentiment_numeric(&self) -> i8 {
    self.sentiment.numeric()
  }

  /// Calendar day of the post
  pub fn date(&self) -> NaiveDate {
    self.timestamp.date()
  }

  /// Hour-of-day of the post, 0-23
  pub fn hour(&self) -> u32 {
    self.timestamp.hour()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::NaiveDate;

  fn ts(h: u32, m: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2022, 11, 30).unwrap().and_hms_opt(h, m, 0).unwrap()
  }

  #[test]
  fn test_post_accessors() {
    let post = Post::new(ts(9, 30), "BTC", Sentiment::Positive, 0.91);
    assert_eq!(post.asset, "BTC");
    assert_eq!(post.hour(), 9);
    assert_eq!(post.date(), NaiveDate::from_ymd_opt(2022, 11, 30).unwrap());
  }

  #[test]
  fn test_sentiment_numeric_mirrors_label() {
    let negative = Post::new(ts(10, 0), "ETH", Sentiment::Negative, 0.4);
    let neutral = Post::new(ts(10, 0), "ETH", Sentiment::Neutral, 0.4);
    let positive = Post::new(ts(10, 0), "ETH", Sentiment::Positive, 0.4);
    assert_eq!(negative.sentiment_numeric(), -1);
    assert_eq!(neutral.sentiment_numeric(), 0);
    assert_eq!(positive.sentiment_numeric(), 1);
  }
}
