//! Plain-text rendering of response payloads.
//!
//! The wording mirrors the chatbot the core was built for, so messages are
//! French. The window comes from the answered query, not re-parsed text.

use sentiq_core::{RankDirection, Sentiment};
use sentiq_models::{Answer, AssetSummary, ComparisonOutcome, Response};
use std::fmt::Write;

/// Detail lines list labels in display order, absent ones as 0
const DISPLAY_ORDER: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative];

pub fn render_answer(answer: &Answer) -> String {
  let window = format!("entre {}h et {}h", answer.query.start_hour, answer.query.end_hour);
  let mut out = String::new();

  match &answer.response {
    Response::Ranking { direction, items } if items.len() == 1 => {
      let entry = &items[0];
      let _ = match direction {
        RankDirection::Best => writeln!(
          out,
          "La crypto la mieux notée {window} est {} avec un score de {}.",
          entry.asset, entry.mean_score
        ),
        RankDirection::Worst => writeln!(
          out,
          "La crypto la moins bien notée {window} est {} avec un score de {}.",
          entry.asset, entry.mean_score
        ),
      };
    }
    Response::Ranking { direction, items } => {
      if items.is_empty() {
        let _ = writeln!(out, "Aucune donnée {window}.");
      } else {
        let label = match direction {
          RankDirection::Best => "les mieux notées",
          RankDirection::Worst => "les moins bien notées",
        };
        let _ = writeln!(out, "Cryptos {label} {window} :");
        for (position, entry) in items.iter().enumerate() {
          let _ = writeln!(out, "{}. {} – score : {}", position + 1, entry.asset, entry.mean_score);
        }
      }
    }
    Response::SingleSummary { summary } => {
      let _ = writeln!(out, "Pour {} {window} :", summary.asset);
      render_summary(&mut out, summary);
    }
    Response::Comparison { first, second, outcome } => {
      let _ = writeln!(out, "Comparaison entre {} et {} {window} :", first.asset, second.asset);
      for side in [first, second] {
        let _ = writeln!(out, "  {} : score {} ({})", side.asset, side.mean_score, side.dominant_sentiment);
      }
      let verdict = match outcome {
        ComparisonOutcome::FirstBetter => format!("{} est mieux perçue.", first.asset),
        ComparisonOutcome::SecondBetter => format!("{} est mieux perçue.", second.asset),
        ComparisonOutcome::Equivalent => {
          "Les deux cryptos sont perçues de manière équivalente.".to_string()
        }
      };
      let _ = writeln!(out, "{verdict}");
    }
    Response::ChartSeries { asset, points } => {
      let _ = writeln!(out, "Évolution du sentiment – {asset} :");
      for point in points {
        let label = match point.sentiment_numeric {
          -1 => "négatif",
          1 => "positif",
          _ => "neutre",
        };
        let _ = writeln!(out, "  {}  {:>2}  {label}", point.timestamp.format("%H:%M"), point.sentiment_numeric);
      }
    }
    Response::NoData { assets } if assets.is_empty() => {
      let _ = writeln!(out, "Aucune crypto détectée pour la visualisation.");
    }
    Response::NoData { assets } => {
      for asset in assets {
        let _ = writeln!(out, "Aucune donnée disponible pour {asset}.");
      }
    }
    Response::AmbiguousInput => {
      let _ = writeln!(out, "Merci de spécifier une seule crypto pour la visualisation.");
    }
    Response::UnrecognizedIntent => {
      let _ = writeln!(out, "Je ne comprends pas la question ou aucune crypto détectée.");
    }
  }

  out
}

fn render_summary(out: &mut String, summary: &AssetSummary) {
  let _ = writeln!(out, "  Sentiment dominant : {}", summary.dominant_sentiment);
  let _ = writeln!(out, "  Score moyen : {}", summary.mean_score);
  let _ = writeln!(out, "  Volume de posts : {}", summary.volume);
  let _ = writeln!(out, "  Détail des sentiments :");
  for sentiment in DISPLAY_ORDER {
    let _ = writeln!(out, "    {} : {} post(s)", sentiment, summary.count(sentiment));
  }
}
