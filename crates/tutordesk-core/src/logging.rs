//! Logging configuration using tracing
//!
//! The terminal is owned by the TUI, so log output always goes to a file.

use std::path::{Path, PathBuf};

use chrono::{NaiveDate, Utc};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{Error, Result};

/// Used when `TUTORDESK_LOG` is unset or invalid
const DEFAULT_FILTER: &str =
    "tutordesk=info,tutordesk_core=info,tutordesk_api=info,tutordesk_app=info,tutordesk_tui=info,warn";

/// Environment variable controlling the log filter
pub const LOG_ENV_VAR: &str = "TUTORDESK_LOG";

const LOG_FILE_PREFIX: &str = "tutordesk.log";

/// Daily files kept before the oldest is removed
const MAX_LOG_FILES: usize = 14;

/// Initialize the logging subsystem
///
/// Logs are written to `<data_local_dir>/tutordesk/logs/`.
/// Log level is controlled by the `TUTORDESK_LOG` environment variable.
///
/// # Examples
/// ```bash
/// TUTORDESK_LOG=debug tutordesk --demo
/// TUTORDESK_LOG=tutordesk_app=trace tutordesk
/// ```
pub fn init() -> Result<()> {
    let log_dir = log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .max_log_files(MAX_LOG_FILES)
        .build(&log_dir)
        .map_err(|e| Error::Io(std::io::Error::other(e)))?;

    let env_filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("Logging to {}", log_file_for(&log_dir, Utc::now().date_naive()).display());

    Ok(())
}

fn log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("tutordesk").join("logs")
}

/// The appender rolls on the UTC date and suffixes it to the prefix
fn log_file_for(dir: &Path, date: NaiveDate) -> PathBuf {
    dir.join(format!("{}.{}", LOG_FILE_PREFIX, date.format("%Y-%m-%d")))
}

/// File receiving today's log output, for pointing the user at it
pub fn current_log_file() -> PathBuf {
    log_file_for(&log_directory(), Utc::now().date_naive())
}
