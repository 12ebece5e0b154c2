//! The `query` command family: explicit out-of-band selection of symbols
//! and windows, bypassing question extraction

use crate::render;
use anyhow::Result;
use clap::{Args, Subcommand};
use sentiq_core::{RankDirection, DEFAULT_END_HOUR, DEFAULT_START_HOUR};
use sentiq_engine::QueryEngine;
use sentiq_models::{Answer, Query, Response};

#[derive(Args, Debug)]
pub struct QueryCommand {
  #[command(subcommand)]
  command: QuerySubcommand,
}

#[derive(Subcommand, Debug)]
enum QuerySubcommand {
  /// Summarize one asset over an hour window
  Summary {
    /// Asset symbol, e.g. BTC
    symbol: String,

    #[command(flatten)]
    window: Window,
  },
  /// Compare two assets over an hour window
  Compare {
    first: String,
    second: String,

    #[command(flatten)]
    window: Window,
  },
  /// Rank all assets by mean score over an hour window
  Rank {
    /// Rank worst-first instead of best-first
    #[arg(long)]
    worst: bool,

    /// Keep only the first N entries
    #[arg(long)]
    top: Option<usize>,

    #[command(flatten)]
    window: Window,
  },
  /// Full-day sentiment series for one or more assets
  Chart {
    /// Asset symbols, e.g. BTC ETH
    #[arg(required = true)]
    symbols: Vec<String>,
  },
}

#[derive(Args, Debug)]
struct Window {
  /// First hour of the window, inclusive
  #[arg(long, default_value_t = DEFAULT_START_HOUR)]
  from: u32,

  /// Last hour of the window, inclusive
  #[arg(long, default_value_t = DEFAULT_END_HOUR)]
  to: u32,
}

pub fn execute(engine: &QueryEngine, cmd: QueryCommand, json: bool) -> Result<()> {
  match cmd.command {
    QuerySubcommand::Summary { symbol, window } => {
      let symbol = symbol.to_uppercase();
      let response = engine.summary(&symbol, window.from, window.to);
      emit(vec![symbol], window, response, json)
    }
    QuerySubcommand::Compare { first, second, window } => {
      let first = first.to_uppercase();
      let second = second.to_uppercase();
      let response = engine.compare(&first, &second, window.from, window.to);
      emit(vec![first, second], window, response, json)
    }
    QuerySubcommand::Rank { worst, top, window } => {
      let direction = if worst { RankDirection::Worst } else { RankDirection::Best };
      let response = engine.ranking(direction, top, window.from, window.to);
      emit(vec![], window, response, json)
    }
    QuerySubcommand::Chart { symbols } => {
      // One series per requested symbol, all over the full day
      for symbol in symbols {
        let symbol = symbol.to_uppercase();
        let response = engine.chart(&symbol);
        emit(
          vec![symbol],
          Window { from: DEFAULT_START_HOUR, to: DEFAULT_END_HOUR },
          response,
          json,
        )?;
      }
      Ok(())
    }
  }
}

fn emit(assets: Vec<String>, window: Window, response: Response, json: bool) -> Result<()> {
  let answer = Answer::new(Query::new(assets, window.from, window.to), response);
  if json {
    println!("{}", serde_json::to_string_pretty(&answer)?);
  } else {
    print!("{}", render::render_answer(&answer));
  }
  Ok(())
}
