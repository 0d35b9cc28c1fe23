// ============================================================================
// kpreport-cli/src/logging.rs
// ============================================================================
//
// LOGGING SETUP: fern dispatch for the `log` facade
//
// Log records go to stderr with a timestamp and a colored level tag. With
// `--log-file` the same records are chained to a file with ANSI codes removed.
// Stdout is left to the progress lines.
//
// Levels:
// - default: warnings and errors only
// - --verbose: debug records from kpreport-core (parsed fields, lookups,
//   probe results, bucket choice)

use crate::error::{CliErrorContext, CliResult};

use log::{Level, LevelFilter};
use owo_colors::OwoColorize;
use std::path::Path;

/// Returns the current local time formatted for log records.
pub fn get_timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Level filter for the given verbosity flag.
pub fn level_for(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

fn level_tag(level: Level, color: bool) -> String {
    let tag = format!("{level:<5}");
    if !color {
        return tag;
    }
    match level {
        Level::Error => tag.red().bold().to_string(),
        Level::Warn => tag.yellow().to_string(),
        Level::Info => tag.green().to_string(),
        Level::Debug => tag.cyan().to_string(),
        Level::Trace => tag.dimmed().to_string(),
    }
}

/// Installs the global logger. Must be called once, before any work starts.
pub fn init_logging(verbose: bool, log_file: Option<&Path>, color: bool) -> CliResult<()> {
    let console = fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} {} [{}] {}",
                get_timestamp(),
                level_tag(record.level(), color),
                record.target(),
                message
            ))
        })
        .chain(std::io::stderr());

    let mut dispatch = fern::Dispatch::new()
        .level(level_for(verbose))
        .level_for("reqwest", LevelFilter::Warn)
        .chain(console);

    if let Some(path) = log_file {
        let file = fern::log_file(path)
            .cli_with_context(|| format!("Failed to open log file '{}'", path.display()))?;
        let file_dispatch = fern::Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "{} {:<5} [{}] {}",
                    get_timestamp(),
                    record.level(),
                    record.target(),
                    strip_ansi_escapes::strip_str(message.to_string())
                ))
            })
            .chain(file);
        dispatch = dispatch.chain(file_dispatch);
    }

    dispatch.apply().cli_context("Failed to initialize logging")
}
