//! Terminal client for the sandtable board.
//!
//! Binds the interaction engine to a Ratatui frontend: mouse and key events
//! feed per-tick snapshots, and each tick's scene is painted onto a canvas.

mod app;
mod config;
mod input;
mod presentation;

use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::app::App;
use crate::config::ClientConfig;

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    setup_logging(&log_directory())?;

    let config = ClientConfig::from_env();
    tracing::info!(?config, "configuration loaded");

    App::new(&config)?.run().await
}

/// Directory receiving `sandtable.log`.
fn log_directory() -> PathBuf {
    std::env::var("SANDTABLE_LOG_DIR").map_or_else(|_| PathBuf::from("logs"), PathBuf::from)
}

/// Routes logging to a file only; writing to stderr would corrupt the
/// alternate screen while the UI owns it.
fn setup_logging(log_dir: &Path) -> Result<()> {
    std::fs::create_dir_all(log_dir)?;

    let file_appender = tracing_appender::rolling::never(log_dir, "sandtable.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    // Keep the background writer alive for the process lifetime.
    std::mem::forget(guard);

    Ok(())
}
