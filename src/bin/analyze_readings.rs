//! Analyze Readings
//!
//! Runs the crop scorer over a sensor reading and prints a per-crop summary
//! followed by the JSON analysis the dashboard consumes.
//!
//! Run with: cargo run --features cli --bin analyze_readings
//!
//! Configuration (environment):
//! - `CROP_DATA_PATH` - alternative crop reference JSON (default: built-in table)
//! - `CROP_ID` - analyze a single crop (default: every crop)
//! - `READING_JSON` - reading as JSON, e.g. `{"soilMoisture": 30, "temperature": 24}`
//!   (default: the dashboard's starting values)
//! - `RUST_LOG` - log filter

use anyhow::{Context, Result};
use crop_scorer_rust::{CropCatalog, CropScorer, Parameter, Reading};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Dashboard starting values
fn default_reading() -> Reading {
    Reading::new(45.0, 24.0, 65.0, 6.8, 75.0)
}

fn main() -> Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "crop_scorer_rust=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let data_path = std::env::var("CROP_DATA_PATH").ok().map(PathBuf::from);
    let crop_id = std::env::var("CROP_ID").ok();
    let reading = match std::env::var("READING_JSON") {
        Ok(json) => serde_json::from_str::<Reading>(&json)
            .with_context(|| format!("Failed to parse READING_JSON: {}", json))?,
        Err(_) => default_reading(),
    };

    tracing::info!("Configuration:");
    tracing::info!("  CROP_DATA_PATH: {:?}", data_path);
    tracing::info!("  CROP_ID: {:?}", crop_id);

    // Loaded once; everything below borrows it
    let loaded;
    let catalog: &CropCatalog = match &data_path {
        Some(path) => {
            loaded = CropCatalog::load(path)
                .with_context(|| format!("Failed to load crop data: {:?}", path))?;
            &loaded
        }
        None => CropCatalog::builtin().context("Failed to parse built-in crop data")?,
    };
    let scorer = CropScorer::new(catalog);

    let crop_ids: Vec<&str> = match &crop_id {
        Some(id) => vec![id.as_str()],
        None => scorer.list_crops(),
    };

    println!("Crop Health Analysis\n");
    println!("Reading:");
    for parameter in Parameter::ALL {
        match reading.get(parameter) {
            Some(value) => {
                let (lo, hi) = parameter.input_bounds();
                if !(lo..=hi).contains(&value) {
                    tracing::warn!(
                        "{} = {} is outside the input range {}-{}",
                        parameter.label(),
                        value,
                        lo,
                        hi
                    );
                }
                println!("  {}: {}{}", parameter.label(), value, parameter.unit())
            }
            None => println!("  {}: (no data)", parameter.label()),
        }
    }

    for id in crop_ids {
        let analysis = scorer
            .analyze(id, &reading)
            .with_context(|| format!("Analysis failed for crop '{}'", id))?;

        println!("\n## {} ({})\n", analysis.crop_name, id);
        println!("  Health score: {}% ({})", analysis.health_score, analysis.status.display_text());
        println!(
            "  Predicted yield: {}{}",
            analysis.predicted_yield.display_text(),
            if analysis.predicted_yield.is_favorable() { " (trending up)" } else { "" }
        );
        println!("  Critical issues: {}", analysis.critical_issue_count());

        if let Some(statuses) = scorer.reading_status(id, &reading) {
            let conditions = scorer.optimal_conditions(id);
            for (parameter, status) in statuses {
                let range = conditions
                    .and_then(|c| c.get(parameter))
                    .map(|r| r.format_with_unit(parameter.unit()))
                    .unwrap_or_else(|| "no range".to_string());
                println!("    {:<16} {:<11} {}", parameter.label(), status.display_text(), range);
            }
        }

        println!("  Top recommendations:");
        for rec in analysis.top_recommendations(3) {
            println!("    - {}", rec);
        }

        println!("\n{}", serde_json::to_string_pretty(&analysis)?);
    }

    Ok(())
}
