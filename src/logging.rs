//! Logging setup
//!
//! `tracing-subscriber` initialisation. The interactive dashboard owns the
//! terminal, so it always writes logs to a file; one-shot commands use stderr.

use anyhow::Context;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{LoggingConfig, APP_DIR};

/// Where log lines go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

impl LogTarget {
    /// Target for the full-screen dashboard: configured file or the default one
    pub fn interactive(config: &LoggingConfig) -> Self {
        LogTarget::File(
            config
                .file
                .as_ref()
                .map(PathBuf::from)
                .unwrap_or_else(default_log_file),
        )
    }

    /// Target for one-shot commands: configured file or stderr
    pub fn one_shot(config: &LoggingConfig) -> Self {
        match &config.file {
            Some(file) => LogTarget::File(PathBuf::from(file)),
            None => LogTarget::Stderr,
        }
    }
}

/// `<data_local_dir>/boatrace-dashboard/dashboard.log`, or `./dashboard.log`
pub fn default_log_file() -> PathBuf {
    dirs::data_local_dir()
        .map(|p| p.join(APP_DIR))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("dashboard.log")
}

/// Install the global subscriber. `RUST_LOG` takes precedence over the
/// configured level.
pub fn init(config: &LoggingConfig, target: &LogTarget) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| format!("boatrace_dashboard={}", config.level)),
    );

    let (writer, ansi) = match target {
        LogTarget::Stderr => (BoxMakeWriter::new(std::io::stderr), true),
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create log directory {:?}", parent))?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {:?}", path))?;
            (BoxMakeWriter::new(Mutex::new(file)), false)
        }
    };

    let registry = tracing_subscriber::registry().with(filter);

    if config.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(writer))
            .try_init()?;
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_ansi(ansi).with_writer(writer))
            .try_init()?;
    }

    Ok(())
}
