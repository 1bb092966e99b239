//! Tracing setup.

use crate::console::Transcript;
use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*, EnvFilter};

/// Environment variable holding the stderr log filter.
pub const LOG_ENV: &str = "FLASHCARDS_LOG";

/// Install the global subscriber.
///
/// Stderr output is filtered by `FLASHCARDS_LOG`, or `default_filter` when it
/// is unset or invalid. INFO and above are also copied into the transcript so
/// the `log` command saves them with the session.
pub fn init(default_filter: &str, transcript: Transcript) {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_filter));

    let stderr = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(filter);

    let capture = fmt::layer()
        .with_writer(transcript)
        .with_ansi(false)
        .with_target(false)
        .without_time()
        .with_filter(LevelFilter::INFO);

    // A subscriber may already be installed when embedded in tests.
    let _ = tracing_subscriber::registry()
        .with(stderr)
        .with(capture)
        .try_init();
}
