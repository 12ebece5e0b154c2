//! The `ask` command: forward a free-text question to the engine

use crate::render;
use anyhow::Result;
use sentiq_engine::QueryEngine;
use tracing::debug;

pub fn execute(engine: &QueryEngine, question: &str, json: bool) -> Result<()> {
  debug!(question, "answering question");
  let answer = engine.answer(question);

  if json {
    println!("{}", serde_json::to_string_pretty(&answer)?);
  } else {
    print!("{}", render::render_answer(&answer));
  }
  Ok(())
}
