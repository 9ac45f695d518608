use std::fs::OpenOptions;
use std::io;
use std::sync::Arc;

use anyhow::Result;
use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Diagnostics duplicated here when `--log-to-file` is set. Appended, not
/// truncated, across runs.
pub const LOG_FILE: &str = "csvnorm.log";

// -v counts map to severity thresholds: 0-1 warn, 2 info, 3+ debug
fn level_for(verbosity: u8) -> Level {
    match verbosity {
        0 | 1 => Level::WARN,
        2 => Level::INFO,
        _ => Level::DEBUG,
    }
}

/// Install the global subscriber. Diagnostics always go to stderr (stdout
/// carries the normalized CSV) and are duplicated to [`LOG_FILE`] when
/// requested. `RUST_LOG` overrides the verbosity-derived filter.
pub fn init(verbosity: u8, log_to_file: bool) -> Result<()> {
    let level = level_for(verbosity);
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_lowercase()));

    let stderr_layer = fmt::layer().with_writer(io::stderr);

    let file_layer = if log_to_file {
        let file = OpenOptions::new().create(true).append(true).open(LOG_FILE)?;
        Some(fmt::layer().with_writer(Arc::new(file)).with_ansi(false))
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    Ok(())
}
