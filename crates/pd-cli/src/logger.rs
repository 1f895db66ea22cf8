use crate::{CliError, CliErrorResult};

use pd_config::Config;

use std::fmt::{Arguments, Display};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::{Record, info};

/// Where log lines go. Stdout carries command output, so the console
/// target is stderr.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    File(PathBuf),
    Console { colored: bool },
}

impl LogTarget {
    /// Resolve from `[logging]`. Colors are dropped when stderr is not a
    /// terminal.
    pub fn for_config(config: &Config) -> CliErrorResult<Self> {
        Ok(match config.log_file_path()? {
            Some(path) => Self::File(path),
            None => Self::Console {
                colored: config.logging.colored && std::io::stderr().is_terminal(),
            },
        })
    }
}

/// Initialize the fern logger from the loaded configuration
pub fn initialize(config: &Config) -> CliErrorResult<LogTarget> {
    let level_filter = config.logging.level.0;
    let target = LogTarget::for_config(config)?;

    let dispatch = match &target {
        LogTarget::File(path) => {
            if let Some(dir) = path.parent() {
                std::fs::create_dir_all(dir).map_err(|e| {
                    CliError::logger(format!(
                        "Failed to create log directory {}: {e}",
                        dir.display()
                    ))
                })?;
            }

            let file = fern::log_file(path).map_err(|e| {
                CliError::logger(format!("Failed to open log file {}: {e}", path.display()))
            })?;

            Dispatch::new()
                .format(|out, message, record| {
                    out.finish(format_args!("{}", format_line(&record.level(), message, record)))
                })
                .chain(file)
        }
        LogTarget::Console { colored: true } => {
            let colors = ColoredLevelConfig::new()
                .trace(Color::Magenta)
                .debug(Color::Blue)
                .info(Color::Green)
                .warn(Color::Yellow)
                .error(Color::Red);

            Dispatch::new()
                .format(move |out, message, record| {
                    let level = colors.color(record.level());
                    out.finish(format_args!("{}", format_line(&level, message, record)))
                })
                .chain(std::io::stderr())
        }
        LogTarget::Console { colored: false } => Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!("{}", format_line(&record.level(), message, record)))
            })
            .chain(std::io::stderr()),
    };

    Dispatch::new()
        .level(level_filter)
        .chain(dispatch)
        .apply()
        .map_err(|e| CliError::logger(format!("Failed to initialize logger: {e}")))?;

    match &target {
        LogTarget::File(path) => info!(
            "Logger initialized: level={:?}, file={}",
            level_filter,
            path.display()
        ),
        LogTarget::Console { .. } => info!("Logger initialized: level={:?}, stderr", level_filter),
    }

    Ok(target)
}

/// `[<rfc3339> - LEVEL] message [file:line]`
pub(crate) fn format_line(level: &dyn Display, message: &Arguments, record: &Record) -> String {
    format!(
        "[{date} - {level}] {message} [{file}:{line}]",
        date = humantime::format_rfc3339(SystemTime::now()),
        file = record.file().unwrap_or("unknown"),
        line = record.line().unwrap_or(0),
    )
}
