use std::env;

use anyhow::{Context, Result};
use log::{info, warn};
use tokio::fs;

use vgmcon_parser::parse_schedule;

use crate::config::{Config, OutputFormat};
use crate::loader::Loader;

mod cli;
mod config;
mod error;
mod loader;

#[tokio::main]
async fn main() -> Result<()> {
    let config = cli::parse(env::args().skip(1).collect());
    setup_logging();

    run(&config).await
}

fn setup_logging() {
    const LOG: &str = "LOG";

    if env::var(LOG).is_err() {
        env::set_var(LOG, "vgmcon_ics=info,vgmcon_parser=info");
    }

    pretty_env_logger::init_custom_env(LOG);
}

async fn run(config: &Config) -> Result<()> {
    let html = Loader::new(config)?
        .load()
        .await
        .context("Failed to load schedule")?;

    let schedule = parse_schedule(&html, config.timezone, config.layout);

    if schedule.events.is_empty() && schedule.dropped.is_empty() {
        warn!("No sessions found, is this a schedule page?");
    }

    if !schedule.dropped.is_empty() {
        warn!(
            "Dropped {} sessions without a valid time range (LOG=vgmcon_parser=debug lists them)",
            schedule.dropped.len()
        );
    }

    let contents = match config.format {
        OutputFormat::Ics => schedule.to_ics(config.calendar_name()).to_string(),
        OutputFormat::Json => serde_json::to_string_pretty(&schedule)?,
    };

    fs::write(&config.output_path, contents)
        .await
        .with_context(|| format!("Failed to write {}", config.output_path.display()))?;

    info!(
        "Wrote {} events to {}",
        schedule.events.len(),
        config.output_path.display()
    );

    Ok(())
}
