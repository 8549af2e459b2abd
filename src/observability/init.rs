//! Tracing initialization and subscriber setup.
//!
//! Wires `tracing` macros to a plain-text `fmt` layer that writes through the
//! rotating [`FileWriter`](super::FileWriter).

use super::file_writer::FileWriter;
use crate::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log file name inside the data directory.
pub const LOG_FILE_NAME: &str = "jobboard.log";

const DEFAULT_LEVEL: &str = "info";

/// Initializes the global tracing subscriber.
///
/// # Trace Level Resolution
///
/// 1. `RUST_LOG` if set and valid
/// 2. `config.trace_level` if set
/// 3. Default: `"info"`
///
/// # File Location
///
/// `config.log_file` if set, else `jobboard.log` in
/// [`get_data_dir`](crate::infrastructure::paths::get_data_dir).
///
/// # Initialization Behavior
///
/// - Creates the log directory if it doesn't exist
/// - Silently returns if directory creation fails (logging is optional)
/// - Idempotent: only the first successful call installs a subscriber
///
/// # Example
///
/// ```rust
/// use jobboard::observability::init_tracing;
/// use jobboard::Config;
///
/// let dir = tempfile::tempdir()?;
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     log_file: Some(dir.path().join("jobboard.log")),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn init_tracing(config: &Config) {
    let log_file = config
        .log_file
        .clone()
        .unwrap_or_else(|| crate::infrastructure::paths::get_data_dir().join(LOG_FILE_NAME));

    if let Some(parent) = log_file.parent() {
        if std::fs::create_dir_all(parent).is_err() {
            return;
        }
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(config.trace_level.as_deref().unwrap_or(DEFAULT_LEVEL))
    });

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_thread_names(true)
        .with_writer(FileWriter::new(log_file));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
