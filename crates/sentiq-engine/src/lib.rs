//! # sentiq-engine
//!
//! The question-answering core: asset resolution, query extraction,
//! analytics and intent dispatch.
//!
//! The pipeline is stateless per request. A [`QueryEngine`] owns the
//! immutable dataset and the compiled extraction machinery; each call to
//! [`QueryEngine::answer`] is an independent, side-effect-free read over
//! that shared snapshot:
//!
//! ```text
//! question -> extract (uses resolve) -> dispatch -> analytics -> Response
//! ```

pub mod analytics;
pub mod dispatch;
pub mod engine;
pub mod extract;
pub mod resolve;

// Re-export the public surface
pub use analytics::{chart_series, rank, summarize};
pub use dispatch::{classify, Intent, KeywordRule, KEYWORD_RULES};
pub use engine::QueryEngine;
pub use extract::QueryExtractor;
pub use resolve::AssetResolver;
