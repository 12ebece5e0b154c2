/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Marc Lefevre
 * marc[-dot-]lefevre[-at-]proton[-dot-]me
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use sentiq_core::Config;
use sentiq_engine::QueryEngine;
use sentiq_loaders::Dataset;

mod commands;
mod render;

use commands::query::QueryCommand;

#[derive(Parser, Debug)]
#[command(author, version, about = "Question-answering over a day of crypto sentiment posts")]
#[command(name = "sentiq")]
#[command(propagate_version = true)]
struct Cli {
  #[command(subcommand)]
  command: Commands,

  /// Path to the dataset CSV (overrides SENTIQ_DATASET)
  #[arg(long, global = true)]
  dataset: Option<String>,

  /// Analysis date, YYYY-MM-DD (overrides SENTIQ_ANALYSIS_DATE)
  #[arg(long, global = true)]
  date: Option<NaiveDate>,

  /// Emit the raw payload as JSON instead of formatted text
  #[arg(long, global = true)]
  json: bool,

  /// Verbose output
  #[arg(short, long, global = true)]
  verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
  /// Ask a free-text question
  Ask {
    /// The question, e.g. "score moyen eth entre 9h et 12h"
    question: Vec<String>,
  },
  /// Query the dataset directly with explicit symbols, bypassing extraction
  Query(QueryCommand),
  /// Show dataset overview: rows, time span, symbols and volumes
  Info,
}

fn main() -> Result<()> {
  // Load environment variables
  dotenv().ok();

  // Parse CLI arguments
  let cli = Cli::parse();

  // Initialize logging
  let log_level = if cli.verbose { "debug" } else { "info" };
  tracing_subscriber::fmt().with_env_filter(log_level).init();

  // Load configuration, flags override env
  let mut config = Config::from_env()?;
  if let Some(dataset) = cli.dataset {
    config.dataset_path = dataset;
  }
  if let Some(date) = cli.date {
    config.analysis_date = date;
  }

  let dataset = Dataset::load(&config.dataset_path)
    .with_context(|| format!("failed to load dataset from {}", config.dataset_path))?;
  let engine = QueryEngine::new(dataset, config.analysis_date);

  match cli.command {
    Commands::Ask { question } => commands::ask::execute(&engine, &question.join(" "), cli.json),
    Commands::Query(cmd) => commands::query::execute(&engine, cmd, cli.json),
    Commands::Info => commands::info::execute(&engine, cli.json),
  }
}
