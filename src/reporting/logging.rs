use crate::config::Config;
use crate::reporting::RunSummary;
use log::{debug, error, info, warn};
use std::path::Path;

/// Initialize the logger with appropriate level based on verbosity
pub fn init_logger(verbose: bool, quiet: bool) {
    let level = if quiet {
        log::LevelFilter::Off
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Off // Only show structured logs in verbose mode
    };

    let mut builder = env_logger::Builder::from_default_env();
    if verbose || quiet || std::env::var_os("RUST_LOG").is_none() {
        builder.filter_level(level);
    }
    builder
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    // A second initialization (tests, embedding) keeps the first logger
    if builder.try_init().is_ok() {
        debug!("Logger initialized with level: {level:?}");
    }
}

/// Log configuration information
pub fn log_config_info(config: &Config, root: &Path) {
    info!(
        "Configuration: root={}, extension={}, keep_going={}, follow_links={}",
        root.display(),
        config.extension(),
        config.keep_going.unwrap_or(false),
        config.follow_links.unwrap_or(false)
    );
    for (i, pattern) in config.patterns().iter().enumerate() {
        debug!("  pattern {}: {pattern}", i + 1);
    }
}

/// Log the result of checking one candidate
pub fn log_candidate(path: &Path, changed: bool) {
    if changed {
        debug!("✗ {} -> header removed", path.display());
    } else {
        debug!("✓ {} -> unchanged", path.display());
    }
}

/// Log run completion
pub fn log_run_complete(summary: &RunSummary, duration_ms: u128) {
    if summary.has_failures() {
        warn!(
            "❌ Run complete: {} candidate(s) of {} file(s), {} rewritten, {} unchanged, {} failed ({}ms)",
            summary.candidates,
            summary.files_visited,
            summary.rewritten.len(),
            summary.unchanged(),
            summary.failures.len(),
            duration_ms
        );
    } else {
        info!(
            "✅ Run complete: {} candidate(s) of {} file(s), {} rewritten, {} unchanged ({}ms)",
            summary.candidates,
            summary.files_visited,
            summary.rewritten.len(),
            summary.unchanged(),
            duration_ms
        );
    }
}

/// Log error information
pub fn log_error(message: &str, source: Option<&dyn std::error::Error>) {
    match source {
        Some(err) => error!("{message}: {err}"),
        None => error!("{message}"),
    }
}

/// Log warning information
pub fn log_warning(message: &str) {
    warn!("{message}");
}
