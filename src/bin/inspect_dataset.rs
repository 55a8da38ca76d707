//! Prints a structure report for a raw dataset file.
//!
//! Run this before pointing the bot at a new dataset to verify its columns,
//! missing values, and genre distribution. The path comes from the first
//! argument, falling back to the configured dataset path.

use std::path::Path;

use cinebot::config::Config;
use cinebot::dataset;

use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let path = match std::env::args().nth(1) {
        Some(path) => path,
        None => Config::from_env()?.dataset_path,
    };

    info!(path = %path, "reading dataset");
    let summary = dataset::summarize(Path::new(&path))?;
    print!("{summary}");

    Ok(())
}
