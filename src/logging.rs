//! Diagnostic logging on stderr.
//!
//! `RUST_LOG` takes priority; otherwise the `-v` count picks the level for this
//! crate. Report output goes to stdout and is never mixed with log lines.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Filter directive used when `RUST_LOG` is not set.
#[must_use]
pub fn default_filter(verbose: u8) -> String {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    format!("warn,header_guard={level}")
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .with(filter)
        .try_init();
}
