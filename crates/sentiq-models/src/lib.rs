//! # sentiq-models
//!
//! Data models for the sentiq question-answering pipeline.
//!
//! This crate provides the strongly-typed structures that flow between the
//! dataset loader, the query engine and the presentation layer:
//! - `Post`: one row of the loaded dataset
//! - `Query`: the assets and hour window extracted from a question
//! - `AssetSummary`, `RankingEntry`, `ChartPoint`: analytics results
//! - `Response` / `Answer`: the tagged payloads handed to the caller

#![warn(clippy::all)]

pub mod analysis;
pub mod post;
pub mod query;
pub mod response;

// Re-export all model types
pub use analysis::*;
pub use post::*;
pub use query::*;
pub use response::*;
