mod app;
mod services;
mod types;
mod utils;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{filter::LevelFilter, EnvFilter};
use types::app_config::AppConfig;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();
    info!("Starting station info export...");

    let summary = app::run(&AppConfig::default())
        .await
        .context("Station info export failed")?;

    info!(
        "Done: {} stations from {} stop points, saved: {}",
        summary.stations, summary.fetched, summary.saved
    );

    Ok(())
}
