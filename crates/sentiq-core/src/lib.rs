pub mod config;
pub mod error;
pub mod types;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::Config;
pub use error::{Error, Result};
pub use types::{RankDirection, Sentiment};

/// Default location of the post dataset CSV
pub const DEFAULT_DATASET_PATH: &str = "data/tweet_analysis.csv";

/// The dataset covers a single day; analysis is pinned to it unless overridden
pub const DEFAULT_ANALYSIS_DATE: &str = "2022-11-30";

/// Default hour window applied when a question carries no hour range
pub const DEFAULT_START_HOUR: u32 = 9;
pub const DEFAULT_END_HOUR: u32 = 12;

/// Minimum similarity ratio for a fuzzy symbol match to be accepted.
/// Tuned against the regression suite; do not adjust ad hoc.
pub const SIMILARITY_THRESHOLD: f64 = 0.8;
