//! Construction-time error taxonomy

use std::io;
use std::path::PathBuf;

/// Errors raised while configuring a logger
///
/// Only sink construction can fail; steady-state emission never returns an
/// error to the caller.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The log file's parent directory could not be created
    #[error("failed to create log directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The log file could not be opened for append
    #[error("failed to open log file {path}: {source}")]
    OpenFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
