//! Runtime configuration, read once from `LINESIFT_*` environment variables

use anyhow::{Context, Result};
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_OUTPUT_DIR: &str = ".";
const DEFAULT_LOOKUP_TIMEOUT_MS: u64 = 5000;

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines (development)
    Text,
    /// JSON structured logging (machine consumption)
    Json,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory the three output files are created in
    pub output_dir: PathBuf,
    pub log_format: LogFormat,
    pub lookup_timeout: Duration,
    /// Abort the run when an output file cannot be created
    pub strict_sinks: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let output_dir = get("LINESIFT_OUTPUT_DIR")
            .map(|dir| shellexpand::tilde(&dir).into_owned())
            .unwrap_or_else(|| DEFAULT_OUTPUT_DIR.to_string());

        let log_format = match get("LINESIFT_LOG_FORMAT").as_deref() {
            Some("json") => LogFormat::Json,
            Some("text") | Some("pretty") | None => LogFormat::Text,
            Some(other) => anyhow::bail!("Unknown LINESIFT_LOG_FORMAT: {}", other),
        };

        let lookup_timeout_ms = match get("LINESIFT_LOOKUP_TIMEOUT_MS") {
            Some(raw) => raw
                .parse::<u64>()
                .with_context(|| format!("Invalid LINESIFT_LOOKUP_TIMEOUT_MS: {}", raw))?,
            None => DEFAULT_LOOKUP_TIMEOUT_MS,
        };

        let strict_sinks = matches!(
            get("LINESIFT_STRICT_SINKS").as_deref(),
            Some("1") | Some("true") | Some("yes")
        );

        Ok(Self {
            output_dir: PathBuf::from(output_dir),
            log_format,
            lookup_timeout: Duration::from_millis(lookup_timeout_ms),
            strict_sinks,
        })
    }
}
