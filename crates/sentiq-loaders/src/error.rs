use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DatasetError {
  #[error("IO error: {0}")]
  IoError(String),

  #[error("CSV parsing error: {0}")]
  CsvError(String),

  #[error("Required column missing: {0}")]
  MissingColumn(String),

  #[error("Row {row}: invalid sentiment label '{value}' (expected negative, neutral or positive)")]
  InvalidSentiment { row: usize, value: String },

  #[error("Row {row}: unparseable timestamp '{value}'")]
  InvalidTimestamp { row: usize, value: String },

  #[error("Row {row}: non-numeric score '{value}'")]
  InvalidScore { row: usize, value: String },
}

impl From<std::io::Error> for DatasetError {
  fn from(err: std::io::Error) -> Self {
    DatasetError::IoError(err.to_string())
  }
}

impl From<csv::Error> for DatasetError {
  fn from(err: csv::Error) -> Self {
    DatasetError::CsvError(err.to_string())
  }
}

pub type DatasetResult<T> = std::result::Result<T, DatasetError>;
