//! # sentiq-loaders
//!
//! Dataset loading for the sentiq question-answering pipeline.
//!
//! The loader reads the post CSV exactly once, validates every row against
//! the fixed schema (timestamp, `$`-prefixed symbol, one of three sentiment
//! labels, numeric score) and produces an immutable [`Dataset`]. Anything
//! malformed aborts the load; there is no partial or degraded dataset.

pub mod dataset;
pub mod error;

// Re-export commonly used types
pub use dataset::Dataset;
pub use error::{DatasetError, DatasetResult};
