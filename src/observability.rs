// 📝 Logging - tracing subscriber setup

use crate::config::LogConfig;
use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

/// Where log lines should go for this run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// Plain stderr (CLI commands)
    Stderr,
    /// The terminal belongs to the UI; only log if a file is configured
    FileOnly,
}

/// Create an EnvFilter from config, with RUST_LOG taking precedence
pub fn create_env_filter(config: &LogConfig) -> EnvFilter {
    let directive = std::env::var("RUST_LOG")
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| config.filter.clone());

    EnvFilter::try_new(&directive).unwrap_or_else(|_| {
        eprintln!(
            "Failed to parse log filter {:?}. Falling back to default: info",
            directive
        );
        EnvFilter::new("info")
    })
}

/// Install the global subscriber. Returns false when nothing was installed
/// (UI mode without a log file).
pub fn init_logging(config: &LogConfig, target: LogTarget) -> Result<bool> {
    let filter = create_env_filter(config);

    match (&config.file, target) {
        (Some(path), _) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {:?}", path))?;

            let fmt_layer = fmt::layer()
                .with_target(true)
                .with_ansi(false)
                .with_writer(Mutex::new(file));

            tracing_subscriber::registry()
                .with(filter)
                .with(fmt_layer)
                .try_init()
                .ok();
        }
        (None, LogTarget::Stderr) => {
            let fmt_layer = fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr);

            tracing_subscriber::registry()
                .with(filter)
                .with(fmt_layer)
                .try_init()
                .ok();
        }
        (None, LogTarget::FileOnly) => return Ok(false),
    }

    Ok(true)
}
