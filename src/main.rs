//! Xinsheng-Pulse main entry point
//!
//! Loads configuration, wires up logging, and runs the dashboard server.

use anyhow::Context;
use clap::Parser;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};
use xinsheng_pulse::config::load_config;
use xinsheng_pulse::server::build_router;

/// Xinsheng-Pulse: a forum search activity dashboard
///
/// Polls a remote forum search endpoint for four time-window categories,
/// extracts post counts and today's post list, and serves the aggregate
/// as an HTML dashboard.
#[derive(Parser, Debug)]
#[command(name = "xinsheng-pulse")]
#[command(version = "1.0.0")]
#[command(about = "A forum search activity dashboard", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logging needs the log file path, so configuration loads first;
    // failures here can only go to stderr
    let config = match load_config(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    setup_logging(cli.verbose, cli.quiet, Path::new(&config.server.log_path))
        .context("failed to open error log file")?;

    tracing::info!("Configuration loaded from: {}", cli.config.display());
    tracing::info!("Search endpoint: {}", config.search.url_template);

    let app = build_router(&config)?;

    let listener = tokio::net::TcpListener::bind(&config.server.bind_address)
        .await
        .with_context(|| format!("failed to bind {}", config.server.bind_address))?;
    tracing::info!("Dashboard listening on {}", config.server.bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Sets up the tracing subscriber based on verbosity level
///
/// Two layers: a stdout layer honoring the verbosity flags, and an
/// ERROR-filtered layer appending to the configured log file. The file is
/// opened once here and held for the life of the process; the subscriber is
/// owned by this entry point rather than by any module.
fn setup_logging(verbose: u8, quiet: bool, log_path: &Path) -> std::io::Result<()> {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("xinsheng_pulse=info,warn"),
            1 => EnvFilter::new("xinsheng_pulse=debug,info"),
            2 => EnvFilter::new("xinsheng_pulse=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    if let Some(parent) = log_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let log_file = OpenOptions::new().create(true).append(true).open(log_path)?;

    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_filter(filter);
    let file_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(Arc::new(log_file))
        .with_filter(LevelFilter::ERROR);

    tracing_subscriber::registry()
        .with(stdout_layer)
        .with(file_layer)
        .init();

    Ok(())
}
