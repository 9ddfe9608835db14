//! Output sinks: console stream and append-only log file

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use tracing::warn;

use crate::domain::LogEvent;
use crate::error::ConfigError;
use crate::format;

/// The sinks a logger writes to
///
/// The set is closed and small: an optional console stream and an optional
/// append-only file. Replaced wholesale on re-configuration; dropping a set
/// closes its file handle.
#[derive(Debug, Default)]
pub struct SinkSet {
    console: bool,
    file: Option<FileSink>,
}

impl SinkSet {
    pub fn new(console: bool, file: Option<FileSink>) -> Self {
        Self { console, file }
    }

    /// Console-only set
    pub fn console_only() -> Self {
        Self { console: true, file: None }
    }

    pub fn has_console(&self) -> bool {
        self.console
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file.as_ref().map(|f| f.path())
    }

    /// Deliver one event to every sink, in registration order
    ///
    /// A failing sink is skipped for this call; delivery to the remaining
    /// sinks and the caller are unaffected. Failures are reported through
    /// `tracing`, never through the logger itself.
    pub fn write(&self, event: &LogEvent) {
        if self.console {
            write_console(event);
        }
        if let Some(file) = &self.file {
            if let Err(e) = file.write(event) {
                warn!(path = %file.path().display(), error = %e, "log file write failed; skipping sink for this event");
            }
        }
    }
}

/// Write the console line(s) for one event to stdout
///
/// The stdout lock serializes concurrent emitters so lines never interleave.
/// Write errors on stdout are ignored (there is nowhere left to report them).
fn write_console(event: &LogEvent) {
    let mut out = std::io::stdout().lock();
    let _ = writeln!(out, "{}", format::console_line(event));
    if let Some(context_line) = format::console_context_line(event) {
        let _ = writeln!(out, "{context_line}");
    }
}

/// Append-only file sink
///
/// Opens the file (creating parent directories) at construction and keeps the
/// handle for its lifetime. Writes are newline-terminated persistent-format
/// records, serialized by the mutex so concurrent emitters cannot interleave
/// partial lines.
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    file: Mutex<File>,
}

impl FileSink {
    /// Open `path` for append, creating parent directories as needed
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| ConfigError::CreateDir {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|source| ConfigError::OpenFile { path: path.clone(), source })?;

        Ok(Self { path, file: Mutex::new(file) })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self, event: &LogEvent) -> std::io::Result<()> {
        let mut line = format::persistent_line(event);
        line.push('\n');

        let mut file = self.file.lock();
        file.write_all(line.as_bytes())?;
        file.flush()
    }
}
