use anyhow::{Context, Result};
use tracing::info;

use siman_processor::stats::RunStats;
use siman_processor::{batch, input, sql, Settings};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn main() -> Result<()> {
    init_tracing();
    let settings = Settings::load().context("Failed to load settings")?;
    info!(settings = ?settings, msg = "Starting siman processor");

    println!("Shulchan Aruch Siman Processor");
    println!("==============================\n");

    println!("Input: {:?}", settings.input_path);
    let rows = input::read_rows(&settings.input_path)
        .with_context(|| format!("Failed to read {:?}", settings.input_path))?;
    println!("Loaded {} rows ({:?} heuristics)\n", rows.len(), settings.variant);

    let out = batch::run(rows, settings.variant);
    println!("\nProcessed {} simanim", out.simanim.len());

    let stats = RunStats::collect(&out.simanim, out.failed);
    println!("Original subjects: {}", stats.original_subjects);
    println!("Generated subjects: {}", stats.generated_subjects);

    println!("Generating SQL...");
    let sql_text = sql::render(&out.simanim, settings.variant);
    let output_path = settings.output_path();
    std::fs::write(&output_path, sql_text)
        .with_context(|| format!("Failed to write {:?}", output_path))?;
    println!("Wrote {:?}", output_path);

    stats.print();
    println!("Done.");
    Ok(())
}
