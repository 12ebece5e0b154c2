//! Keyword-driven intent classification.
//!
//! The priority order of the rules is a user-visible contract: rules are
//! checked top-down and the first hit wins, so a question containing both
//! "top 3" and "graph" is a ranking request. Questions that hit no rule
//! fall through to the asset-count fallback in the engine (one asset:
//! summary, two: comparison, otherwise unrecognized).

use sentiq_core::RankDirection;

/// What a keyword rule classifies a question as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
  /// Cross-asset ranking, truncated to `top_n`
  Ranking { direction: RankDirection, top_n: usize },

  /// Sentiment-evolution chart for a single asset
  Chart,
}

/// One dispatch rule: the intent fires when any keyword occurs as a
/// substring of the lowercased question
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule {
  pub intent: Intent,
  pub keywords: &'static [&'static str],
}

/// The dispatch table, in priority order
pub const KEYWORD_RULES: &[KeywordRule] = &[
  KeywordRule {
    intent: Intent::Ranking { direction: RankDirection::Best, top_n: 3 },
    keywords: &["top 3", "meilleures cryptos"],
  },
  KeywordRule {
    intent: Intent::Ranking { direction: RankDirection::Worst, top_n: 1 },
    keywords: &["moins noté", "moins bien", "pire"],
  },
  KeywordRule {
    intent: Intent::Ranking { direction: RankDirection::Best, top_n: 1 },
    keywords: &["mieux noté", "meilleure"],
  },
  KeywordRule { intent: Intent::Chart, keywords: &["graph", "évolution", "montre", "affiche"] },
];

/// Classify a question against [`KEYWORD_RULES`], first match wins.
/// `None` means no rule fired and the asset-count fallback applies.
pub fn classify(question: &str) -> Option<Intent> {
  let question = question.to_lowercase();
  KEYWORD_RULES
    .iter()
    .find(|rule| rule.keywords.iter().any(|kw| question.contains(kw)))
    .map(|rule| rule.intent)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_ranking_keywords() {
    assert_eq!(
      classify("top 3 cryptos les mieux notées"),
      Some(Intent::Ranking { direction: RankDirection::Best, top_n: 3 })
    );
    assert_eq!(
      classify("quelle est la pire crypto"),
      Some(Intent::Ranking { direction: RankDirection::Worst, top_n: 1 })
    );
    assert_eq!(
      classify("crypto la moins bien notée à 10h"),
      Some(Intent::Ranking { direction: RankDirection::Worst, top_n: 1 })
    );
    assert_eq!(
      classify("quelle est la meilleure crypto"),
      Some(Intent::Ranking { direction: RankDirection::Best, top_n: 1 })
    );
  }

  #[test]
  fn test_chart_keywords() {
    assert_eq!(classify("montre l'évolution de btc"), Some(Intent::Chart));
    assert_eq!(classify("affiche un graphique de eth"), Some(Intent::Chart));
  }

  #[test]
  fn test_priority_ranking_beats_chart() {
    // Rule 1 precedes rule 4
    assert_eq!(
      classify("montre le top 3 en graphique"),
      Some(Intent::Ranking { direction: RankDirection::Best, top_n: 3 })
    );
  }

  #[test]
  fn test_priority_worst_beats_best() {
    // "moins bien notée" also contains no best keyword, but "la moins bien
    // notée ou la mieux notée" contains both; worst is checked first
    assert_eq!(
      classify("la moins bien notée ou la mieux notée ?"),
      Some(Intent::Ranking { direction: RankDirection::Worst, top_n: 1 })
    );
  }

  #[test]
  fn test_no_keyword_falls_through() {
    assert_eq!(classify("score moyen eth"), None);
    assert_eq!(classify("que pense-t-on de btc ?"), None);
    assert_eq!(classify(""), None);
  }

  #[test]
  fn test_classification_is_case_insensitive() {
    assert_eq!(
      classify("TOP 3 des cryptos"),
      Some(Intent::Ranking { direction: RankDirection::Best, top_n: 3 })
    );
  }
}
