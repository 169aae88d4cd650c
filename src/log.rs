// src/log.rs
use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::consts::DEFAULT_LOG_FILTER;

fn filter_for(verbosity: u8) -> EnvFilter {
    // RUST_LOG wins over -v
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = match verbosity {
            0 => DEFAULT_LOG_FILTER,
            1 => "debug",
            _ => "trace",
        };
        EnvFilter::new(level)
    })
}

/// Install the global subscriber: stderr, or append to `log_file`.
/// Timestamps are elapsed time since start.
pub fn init(verbosity: u8, log_file: Option<&Path>) -> io::Result<()> {
    let builder = fmt()
        .with_env_filter(filter_for(verbosity))
        .with_timer(fmt::time::uptime())
        .with_target(false);

    let installed = match log_file {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    crate::file::ensure_directory(parent)?;
                }
            }
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).try_init()
        }
        None => builder.with_writer(io::stderr).try_init(),
    };
    installed.map_err(|e| io::Error::other(e.to_string()))
}
