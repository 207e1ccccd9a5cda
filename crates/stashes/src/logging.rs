//! File-based logging bootstrap.
//!
//! Logs go to rotating files under the platform data directory. Nothing is
//! written to stderr (the UI owns the terminal) or under the notes root
//! (any directory there would surface as a stash).

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};

const LOG_FILE_BASENAME: &str = "stashes";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 1024 * 1024;
const MAX_LOG_FILES: usize = 3;

/// Start the logger. The returned handle must stay alive for the process
/// lifetime or buffered log lines are lost.
pub fn init() -> Result<LoggerHandle> {
    let dirs = ProjectDirs::from("", "", "stashes")
        .ok_or_else(|| anyhow!("could not determine a data directory for logs"))?;
    let log_dir = dirs.data_local_dir().join("logs");
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("failed to create log directory {}", log_dir.display()))?;

    let logger = Logger::try_with_str(default_level())?
        .log_to_file(
            FileSpec::default()
                .directory(&log_dir)
                .basename(LOG_FILE_BASENAME),
        )
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .start()
        .context("failed to start logger")?;

    log::info!("stashes {} started", env!("CARGO_PKG_VERSION"));
    Ok(logger)
}

/// `debug` in debug builds, `info` in release.
fn default_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}
