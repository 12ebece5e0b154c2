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

//! Raw token to canonical symbol resolution: alias table first, fuzzy
//! matching against the registry second

use sentiq_core::SIMILARITY_THRESHOLD;

/// Hand-maintained synonym table: lowercase token -> canonical symbol.
/// Configuration data, not derived from the dataset.
const ALIASES: &[(&str, &str)] = &[
  ("bitcoin", "BTC"),
  ("btc", "BTC"),
  ("eth", "ETH"),
  ("ethereum", "ETH"),
  ("bnb", "BNB"),
  ("binance", "BNB"),
  ("op", "OP"),
  ("optimism", "OP"),
  ("matic", "MATIC"),
  ("polygon", "MATIC"),
];

/// Maps raw tokens (possibly misspelled or aliased) to canonical symbols
/// known to the dataset.
#[derive(Debug, Clone)]
pub struct AssetResolver {
  /// Registry of canonical symbols, kept sorted so fuzzy ties fall to the
  /// lexicographically smallest candidate
  registry: Vec<String>,
}

impl AssetResolver {
  pub fn new(symbols: &[String]) -> Self {
    let mut registry = symbols.to_vec();
    registry.sort();
    registry.dedup();
    Self { registry }
  }

  /// Resolve one token.
  ///
  /// Non-alphabetic characters are stripped and the token lowercased before
  /// the alias lookup; the fuzzy fallback accepts the best registry match
  /// only at similarity >= 0.8 (inclusive). Ties break by similarity
  /// descending then symbol ascending, which the sorted registry scan
  /// guarantees. An unresolvable token is a miss, not an error.
  pub fn resolve(&self, token: &str) -> Option<String> {
    let cleaned: String =
      token.chars().filter(|c| c.is_ascii_alphabetic()).collect::<String>().to_lowercase();
    if cleaned.is_empty() {
      return None;
    }

    if let Some((_, symbol)) = ALIASES.iter().find(|(alias, _)| *alias == cleaned) {
      return Some((*symbol).to_string());
    }

    let candidate = cleaned.to_uppercase();
    let mut best: Option<(&str, f64)> = None;
    for symbol in &self.registry {
      let ratio = similarity(&candidate, symbol);
      // Strictly-greater keeps the first (smallest) symbol on equal ratios
      if best.map_or(true, |(_, b)| ratio > b) {
        best = Some((symbol, ratio));
      }
    }

    match best {
      Some((symbol, ratio)) if ratio >= SIMILARITY_THRESHOLD => Some(symbol.to_string()),
      _ => None,
    }
  }
}

/// Normalized edit-similarity over full strings: `2 * lcs(a, b) / (|a| + |b|)`.
/// 1.0 for identical strings, 0.0 when nothing aligns.
fn similarity(a: &str, b: &str) -> f64 {
  let total = a.len() + b.len();
  if total == 0 {
    return 0.0;
  }
  2.0 * lcs_len(a.as_bytes(), b.as_bytes()) as f64 / total as f64
}

/// Longest-common-subsequence length, single-row DP
fn lcs_len(a: &[u8], b: &[u8]) -> usize {
  let mut row = vec![0usize; b.len() + 1];
  for &ca in a {
    let mut prev_diag = 0;
    for (j, &cb) in b.iter().enumerate() {
      let prev_row = row[j + 1];
      row[j + 1] = if ca == cb { prev_diag + 1 } else { row[j + 1].max(row[j]) };
      prev_diag = prev_row;
    }
  }
  row[b.len()]
}
