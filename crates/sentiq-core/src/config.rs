//! Configuration for the sentiq analysis pipeline

use crate::error::Result;
use chrono::NaiveDate;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;

/// Main configuration struct for the sentiq pipeline
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
  /// Path to the post dataset CSV
  pub dataset_path: String,

  /// The single calendar day all analysis windows are evaluated against
  pub analysis_date: NaiveDate,
}

impl Config {
  /// Load configuration from environment variables
  pub fn from_env() -> Result<Self> {
    dotenv().ok();

    let dataset_path =
      env::var("SENTIQ_DATASET").unwrap_or_else(|_| crate::DEFAULT_DATASET_PATH.to_string());

    let analysis_date = env::var("SENTIQ_ANALYSIS_DATE")
      .unwrap_or_else(|_| crate::DEFAULT_ANALYSIS_DATE.to_string());
    let analysis_date = NaiveDate::parse_from_str(&analysis_date, "%Y-%m-%d")?;

    Ok(Config { dataset_path, analysis_date })
  }

  /// Create a config with default values and an explicit dataset path (for testing)
  pub fn default_with_dataset(dataset_path: String) -> Self {
    Config { dataset_path, analysis_date: default_analysis_date() }
  }
}

/// The pinned analysis date (the day the bundled dataset covers)
pub fn default_analysis_date() -> NaiveDate {
  NaiveDate::from_ymd_opt(2022, 11, 30).expect("built-in analysis date is valid")
}
