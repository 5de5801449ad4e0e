use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};

/// Log to stderr, used by the plain command-line subcommands.
pub fn setup_logger(level: tracing::Level) -> Result<(), tracing::subscriber::SetGlobalDefaultError> {
    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .without_time()
            .with_target(false)
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .finish(),
    )
}

/// Append log lines to `path`; the interactive form owns the terminal.
pub fn setup_file_logger(level: tracing::Level, path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("cannot open log file '{}'", path.display()))?;

    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_ansi(false)
            .with_max_level(level)
            .with_writer(Mutex::new(file))
            .finish(),
    )?;
    Ok(())
}
