//! Named loggers and the process-wide logger registry

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use lazy_static::lazy_static;
use parking_lot::{Mutex, RwLock};
use tracing::debug;

use crate::domain::{Context, LogEvent, LogLevel};
use crate::error::ConfigError;
use crate::sink::{FileSink, SinkSet};

lazy_static! {
    /// Process-wide registry: one shared sink set per logger name.
    ///
    /// Lives for the process lifetime; `configure` swaps a name's sink set
    /// in place so every live handle with that name follows the new routing.
    static ref REGISTRY: Mutex<HashMap<String, Arc<LoggerShared>>> = Mutex::new(HashMap::new());
}

/// State shared by every `Logger` handle with the same name
#[derive(Debug)]
struct LoggerShared {
    name: String,
    sinks: RwLock<Arc<SinkSet>>,
}

fn get_or_create(name: &str) -> Arc<LoggerShared> {
    let mut registry = REGISTRY.lock();
    registry
        .entry(name.to_string())
        .or_insert_with(|| {
            Arc::new(LoggerShared {
                name: name.to_string(),
                sinks: RwLock::new(Arc::new(SinkSet::console_only())),
            })
        })
        .clone()
}

/// Configure the sink set for a named logger
///
/// Builds the requested sinks, then replaces whatever was previously
/// registered under `name` — repeated calls never accumulate duplicate sinks,
/// and the old file handle is closed when the old set drops. If `log_file` is
/// given, parent directories are created and the file is opened for append;
/// failure to do so is a [`ConfigError`] naming the path, and the previous
/// configuration stays in effect.
pub fn configure(
    name: &str,
    log_file: Option<&Path>,
    console: bool,
) -> Result<Logger, ConfigError> {
    let file = log_file.map(FileSink::open).transpose()?;
    let set = Arc::new(SinkSet::new(console, file));

    let shared = get_or_create(name);
    *shared.sinks.write() = set;
    debug!(logger = name, console, file = ?log_file, "logger configured");

    Ok(Logger { shared })
}

/// A named structured logger
///
/// Cheap to clone; every handle with the same name shares one sink set, so a
/// later [`configure`] call re-routes all of them. Emission is synchronous:
/// when a leveled call returns, every configured sink has attempted its
/// write. Emission never panics and never returns an error — sink failures
/// are isolated per sink (see [`SinkSet::write`]).
#[derive(Debug, Clone)]
pub struct Logger {
    shared: Arc<LoggerShared>,
}

impl Logger {
    /// Handle to the named logger, console-only if not yet configured
    ///
    /// Unlike [`configure`], this never replaces an existing sink set.
    pub fn new(name: &str) -> Self {
        Self { shared: get_or_create(name) }
    }

    pub fn name(&self) -> &str {
        &self.shared.name
    }

    /// Path of the currently configured file sink, if any
    pub fn log_file(&self) -> Option<std::path::PathBuf> {
        self.shared.sinks.read().file_path().map(Path::to_path_buf)
    }

    pub fn debug(&self, message: impl Into<String>, context: Option<Context>) {
        self.emit(LogLevel::Debug, message, context);
    }

    pub fn info(&self, message: impl Into<String>, context: Option<Context>) {
        self.emit(LogLevel::Info, message, context);
    }

    pub fn warn(&self, message: impl Into<String>, context: Option<Context>) {
        self.emit(LogLevel::Warn, message, context);
    }

    pub fn error(&self, message: impl Into<String>, context: Option<Context>) {
        self.emit(LogLevel::Error, message, context);
    }

    pub fn success(&self, message: impl Into<String>, context: Option<Context>) {
        self.emit(LogLevel::Success, message, context);
    }

    fn emit(&self, level: LogLevel, message: impl Into<String>, context: Option<Context>) {
        let event = LogEvent::new(level, self.shared.name.clone(), message, context);
        // Clone the set out so sink I/O never runs under the routing lock.
        let sinks = self.shared.sinks.read().clone();
        sinks.write(&event);
    }
}
