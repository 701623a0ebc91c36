//! Minimal leveled logging.
//!
//! Every [`Logger`] has a name, a threshold [`Level`] and a shared writer.
//! Messages below the threshold are dropped before any formatting; the rest
//! are written as one line each:
//!
//! ```text
//! 2024-05-01T12:34:56.789+0200 main.rs[4242]:17 INFO: listening on 8080
//! ```
//!
//! The `:file:line` segment only appears while the threshold is exactly
//! [`Level::TRACE`].
//!
//! A process-wide default logger is created on first use, named after the
//! calling file and the process id, logging everything to stderr. The
//! functions and macros at the crate root forward to it:
//!
//! ```no_run
//! lvlog::set_level(lvlog::Level::INFO);
//! lvlog::info!("listening on {}", 8080);
//! lvlog::debug!("dropped");
//! ```
mod config;
mod level;
mod logger;
mod macros;

pub use config::{Config, ConfigError, LEVEL_VAR, NAME_VAR};
pub use level::{Level, ParseLevelError};
pub use logger::{Caller, Logger, SharedWriter};

use std::fmt;
use std::io;
use std::panic::Location;
use std::sync::{Arc, Mutex, OnceLock};

static DEFAULT: OnceLock<Logger> = OnceLock::new();

fn new_default_logger(caller: &Location<'_>) -> Logger {
    let name = format!("{}[{}]", logger::base_name(caller.file()), std::process::id());
    Logger::new(name, Level::TRACE, Arc::new(Mutex::new(io::stderr())))
}

/// Returns the process-wide logger, creating it on first use.
///
/// The first caller's file names the logger.
#[track_caller]
pub fn default_logger() -> &'static Logger {
    let caller = Location::caller();
    DEFAULT.get_or_init(|| new_default_logger(caller))
}

/// Uses `logger` as the process-wide logger.
///
/// Only possible before the default logger has been used; otherwise the
/// logger is handed back.
pub fn install(logger: Logger) -> Result<(), Logger> {
    DEFAULT.set(logger)
}

/// Routes records from the `log` crate macros to the default logger.
#[track_caller]
pub fn init() -> Result<(), log::SetLoggerError> {
    log::set_logger(default_logger())?;
    log::set_max_level(log::LevelFilter::Trace);
    Ok(())
}

/// Applies `LVLOG_LEVEL` and `LVLOG_NAME` to the default logger.
#[track_caller]
pub fn init_from_env() -> Result<(), ConfigError> {
    let config = Config::from_env()?;
    let logger = default_logger();
    if let Some(name) = config.name {
        logger.set_name(name);
    }
    if let Some(level) = config.level {
        logger.set_level(level);
    }
    Ok(())
}

#[track_caller]
pub fn set_level(level: Level) {
    default_logger().set_level(level);
}

#[track_caller]
pub fn set_writer(writer: SharedWriter) {
    default_logger().set_writer(writer);
}

#[track_caller]
pub fn set_name(name: impl Into<String>) {
    default_logger().set_name(name);
}

#[track_caller]
pub fn log(level: Level, args: fmt::Arguments<'_>) {
    default_logger().log(level, args);
}

#[track_caller]
pub fn trace(args: fmt::Arguments<'_>) {
    default_logger().trace(args);
}

#[track_caller]
pub fn debug(args: fmt::Arguments<'_>) {
    default_logger().debug(args);
}

#[track_caller]
pub fn info(args: fmt::Arguments<'_>) {
    default_logger().info(args);
}

#[track_caller]
pub fn warn(args: fmt::Arguments<'_>) {
    default_logger().warn(args);
}

#[track_caller]
pub fn error(args: fmt::Arguments<'_>) {
    default_logger().error(args);
}

#[track_caller]
pub fn fatal(args: fmt::Arguments<'_>) -> ! {
    default_logger().fatal(args)
}

#[track_caller]
pub fn stats(args: fmt::Arguments<'_>) {
    default_logger().stats(args);
}
