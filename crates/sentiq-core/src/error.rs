use thiserror::Error;

/// The main error type for sentiq-* crates
#[derive(Error, Debug)]
pub enum Error {
  /// Date/Time parsing error
  #[error("Date parsing error: {0}")]
  ParseDate(#[from] chrono::ParseError),
}

/// Result type alias for sentiq-* crates
pub type Result<T> = std::result::Result<T, Error>;
