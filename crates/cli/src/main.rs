//! Linesift - sorts the lines of a text file into domains, email addresses
//! and phone numbers, resolving each domain to an IPv4 address

mod config;
mod logging;
mod summary;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};

use config::{AppConfig, LogFormat};
use linesift_core::application::{Producer, Resolver, ResolverOptions};
use linesift_core::domain::Queue;
use linesift_infra_system::{
    standard_classifiers, FileLineSource, FileSinkFactory, SystemDnsResolver,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "linesift")]
#[command(about = "Classify lines into domains, emails and phone numbers", long_about = None)]
#[command(version)]
struct Cli {
    /// Input text file, one candidate per line
    input: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1. Load configuration and initialize logging
    let config = AppConfig::from_env()?;
    logging::init(config.log_format).context("Failed to initialize logging")?;
    info!("Linesift v{} starting...", VERSION);

    // 2. Build collaborators (DI wiring)
    let classifiers = Arc::new(standard_classifiers().context("Invalid classifier pattern")?);
    let resolver = Resolver::new(
        classifiers,
        Arc::new(SystemDnsResolver::new()),
        Arc::new(FileSinkFactory::new(&config.output_dir)),
        ResolverOptions {
            lookup_timeout: config.lookup_timeout,
            fail_on_sink_error: config.strict_sinks,
            ..Default::default()
        },
    );

    // 3. Populate the queue; input failures leave it empty or partial
    let queue = Queue::new();
    match FileLineSource::open(&cli.input).await {
        Ok(mut source) => match Producer::populate(&queue, &mut source).await {
            Ok(lines) => info!(lines, input = %cli.input.display(), "Input read"),
            Err(e) => error!(error = %e, queued = queue.len(), "Input read failed"),
        },
        Err(e) => error!(error = %e, "Input unavailable"),
    }

    // 4. Drain, classify and route
    let report = resolver.drain(&queue).await.context("Drain aborted")?;

    match config.log_format {
        LogFormat::Json => info!(summary = %serde_json::to_string(&report)?, "Run summary"),
        LogFormat::Text => summary::print(&report, &config.output_dir),
    }

    Ok(())
}
