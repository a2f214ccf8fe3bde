//! Diagnostic logging setup.
//!
//! Diagnostics go through `tracing`. The chat window owns the terminal, so it
//! only logs when given a file; the one-shot `say` command logs to stderr.

use std::error::Error;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Install no subscriber at all.
    Silent,
    Stderr,
    /// Append to a file, creating it when missing.
    File(PathBuf),
}

impl LogTarget {
    /// A log file wins; otherwise fall back to `default`.
    pub fn from_option(log_file: Option<&Path>, default: LogTarget) -> Self {
        match log_file {
            Some(path) => LogTarget::File(path.to_path_buf()),
            None => default,
        }
    }
}

/// Filter used when `RUST_LOG` is not set.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "portfolio_assistant=debug"
    } else {
        "warn"
    }
}

fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)))
}

pub fn init_tracing(target: &LogTarget, verbose: bool) -> Result<(), Box<dyn Error>> {
    match target {
        LogTarget::Silent => Ok(()),
        LogTarget::Stderr => {
            let subscriber = tracing_subscriber::fmt()
                .with_env_filter(env_filter(verbose))
                .with_writer(std::io::stderr)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
            Ok(())
        }
        LogTarget::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            let subscriber = tracing_subscriber::fmt()
                .with_env_filter(env_filter(verbose))
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
            Ok(())
        }
    }
}
