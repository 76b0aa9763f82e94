//! Logger setup
//!
//! The library logs through the `log` facade; binaries pick where it goes.
//! `RUST_LOG` overrides the default `warn` filter, except under [`LogTarget::Off`].

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};
use log::LevelFilter;
use std::fs::OpenOptions;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    /// Append to a file, for modes that own the terminal
    File(PathBuf),
    Off,
}

/// Build a logger for `target` without installing it
///
/// # Errors
/// Returns an error if the log file cannot be opened.
pub fn builder(target: &LogTarget) -> Result<Builder> {
    builder_from_env(target, Env::default().default_filter_or("warn"))
}

/// `Off` ignores `env` entirely; module directives would otherwise survive
/// a global `Off` level and write over the TUI.
fn builder_from_env(target: &LogTarget, env: Env<'_>) -> Result<Builder> {
    if *target == LogTarget::Off {
        let mut builder = Builder::new();
        builder.filter_level(LevelFilter::Off);
        return Ok(builder);
    }

    let mut builder = Builder::from_env(env);
    match target {
        LogTarget::Stderr => {
            builder.target(Target::Stderr);
        }
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            builder.target(Target::Pipe(Box::new(file)));
        }
        LogTarget::Off => {}
    }

    Ok(builder)
}

/// Install the global logger
///
/// # Errors
/// Returns an error if the log file cannot be opened or a logger is already set.
pub fn init(target: &LogTarget) -> Result<()> {
    builder(target)?
        .try_init()
        .context("Failed to install logger")
}
