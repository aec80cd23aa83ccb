use chrono::Local;
use colored::{ColoredString, Colorize};
use log::{debug, Level, LevelFilter};
use std::sync::Once;

use crate::prelude::*;

fn color_from_level(level: Level) -> ColoredString {
    match level {
        log::Level::Error => "ERROR".red(),
        log::Level::Warn => "WARN".yellow(),
        log::Level::Info => "INFO".green(),
        log::Level::Debug => "DEBUG".blue(),
        log::Level::Trace => "TRACE".white(),
    }
}

fn dispatch(log_level: LevelFilter) -> fern::Dispatch {
    fern::Dispatch::new()
        .format(|out, message, record| {
            let time = Local::now().format("%H:%M:%S%.3f");
            let color = color_from_level(record.level());
            out.finish(format_args!("{time} {color} > {message}"));
        })
        .level(log_level)
        .chain(std::io::stdout())
}

static INIT: Once = Once::new();

/// Installs the stdout logger. Only the first call has any effect.
pub fn init_logging(log_level: LevelFilter) -> Result<(), CliError> {
    let mut result = Ok(());
    INIT.call_once(|| {
        result = dispatch(log_level).apply();
    });
    result.map_err(|e| CliError::LoggingInit {
        underlying: e.to_string(),
    })?;

    if let Some(log_level) = log_level.to_level() {
        debug!("🪵 Logging initialized with level: {log_level}");
    }
    Ok(())
}
