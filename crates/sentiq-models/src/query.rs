//! The transient query extracted from one question

use serde::{Deserialize, Serialize};

/// Assets and hour window referenced by a question.
///
/// `assets` holds distinct canonical symbols in first-seen order; callers
/// must treat it as an unordered set. Hours are not range-validated: an
/// inverted or out-of-range window is legal and simply matches no rows
/// downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
  pub assets: Vec<String>,
  pub start_hour: u32,
  pub end_hour: u32,
}

impl Query {
  pub fn new(assets: Vec<String>, start_hour: u32, end_hour: u32) -> Self {
    Self { assets, start_hour, end_hour }
  }
}
