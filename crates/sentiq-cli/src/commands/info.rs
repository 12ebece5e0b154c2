//! The `info` command: dataset overview for symbol selection

use anyhow::Result;
use sentiq_engine::QueryEngine;
use serde_json::json;

pub fn execute(engine: &QueryEngine, json: bool) -> Result<()> {
  let dataset = engine.dataset();
  let volumes = dataset.volume_by_symbol();

  if json {
    let payload = json!({
      "rows": dataset.len(),
      "analysis_date": engine.analysis_date(),
      "time_span": dataset.time_span(),
      "symbols": volumes,
    });
    println!("{}", serde_json::to_string_pretty(&payload)?);
    return Ok(());
  }

  println!("Dataset : {} posts", dataset.len());
  println!("Date d'analyse : {}", engine.analysis_date());
  if let Some((first, last)) = dataset.time_span() {
    println!("Période couverte : {first} → {last}");
  }
  println!("Cryptos ({}) :", dataset.symbols().len());
  for (symbol, volume) in volumes {
    println!("  {symbol:<8} {volume} post(s)");
  }
  Ok(())
}
