//! Common types used across sentiq-* crates

pub mod common;

pub use common::{RankDirection, Sentiment};
