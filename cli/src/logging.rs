//! Logging configuration with file-based output and size-based rotation.
//!
//! Writes logs to `~/.config/notipanel/notipanel.log` (or platform equivalent)
//! with 10 MB size-based rotation. Set `DEBUG_LOGGING=1` to enable debug
//! output for notipanel crates.

use std::path::Path;

use rolling_file::{BasicRollingFileAppender, RollingConditionBasic};
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use crate::config::APP_NAME;

const MAX_LOG_SIZE: u64 = 10 * 1024 * 1024;

fn filter_directive(debug_logging: bool) -> &'static str {
    if debug_logging {
        "warn,notipanel_cli=debug,notipanel_core=debug"
    } else {
        "warn,notipanel_cli=info,notipanel_core=info"
    }
}

/// Initialize logging with dual output (file + stdout).
///
/// The returned guard must be held for the lifetime of the shell so buffered
/// lines are flushed on exit. Returns `None` and logs to stdout only when the
/// log file cannot be created.
pub fn init() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let debug_logging = std::env::var("DEBUG_LOGGING").is_ok();

    let Some(log_dir) = dirs::config_dir().map(|dir| dir.join(APP_NAME)) else {
        init_stdout_only(debug_logging);
        return None;
    };

    match init_with_file(&log_dir, debug_logging) {
        Ok(guard) => Some(guard),
        Err(e) => {
            // Subscriber not installed yet
            eprintln!("Failed to open log file in {log_dir:?}: {e}, using stdout only");
            init_stdout_only(debug_logging);
            None
        }
    }
}

fn init_with_file(
    log_dir: &Path,
    debug_logging: bool,
) -> std::io::Result<tracing_appender::non_blocking::WorkerGuard> {
    std::fs::create_dir_all(log_dir)?;

    // Keep notipanel.log and notipanel.log.1
    let log_path = log_dir.join("notipanel.log");
    let file_appender = BasicRollingFileAppender::new(
        &log_path,
        RollingConditionBasic::new().max_size(MAX_LOG_SIZE),
        1,
    )?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_span_events(FmtSpan::NONE);

    let stdout_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_span_events(FmtSpan::NONE);

    tracing_subscriber::registry()
        .with(file_layer)
        .with(stdout_layer)
        .with(EnvFilter::new(filter_directive(debug_logging)))
        .init();

    tracing::info!(log_file = ?log_path, debug_logging, "Logging initialized");
    Ok(guard)
}

fn init_stdout_only(debug_logging: bool) {
    let stdout_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_span_events(FmtSpan::NONE);

    tracing_subscriber::registry()
        .with(stdout_layer)
        .with(EnvFilter::new(filter_directive(debug_logging)))
        .init();

    tracing::info!(debug_logging, "Logging initialized (stdout only)");
}
