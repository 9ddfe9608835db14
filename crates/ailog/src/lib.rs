//! # ailog
//!
//! Structured logging with colored console output, JSON-serialized context,
//! and helpers for logging AI-provider request/response/error lifecycle
//! events.
//!
//! ## Modules
//!
//! - `domain` - Value types (`LogLevel`, `LogEvent`, `Context`)
//! - `format` - Console and persistent line rendering
//! - `sink` - Console and append-only file sinks
//! - `logger` - Named loggers and the process-wide registry
//! - `ai` - `AiOperationLogger` façade for provider lifecycle events
//! - `globals` - Process-wide default logger and free convenience functions
//! - `error` - Construction-time `ConfigError`
//!
//! ## Quick start
//!
//! ```no_run
//! use ailog::{configure, Context};
//!
//! let logger = configure("api_handler", Some("logs/api.log".as_ref()), true)?;
//! logger.info("API request received", Some(Context::new().with("method", "POST")));
//!
//! ailog::log_provider_request("claude", "m1", Some(150), None);
//! # Ok::<(), ailog::ConfigError>(())
//! ```
//!
//! Every leveled call writes synchronously to all configured sinks and never
//! returns an error; only [`configure`] can fail, at construction time.

pub mod ai;
pub mod domain;
pub mod error;
pub mod format;
pub mod globals;
pub mod logger;
pub mod sink;

// Re-export commonly used types
pub use ai::AiOperationLogger;
pub use domain::{Context, LogEvent, LogLevel, Severity};
pub use error::ConfigError;
pub use logger::{configure, Logger};

// Free functions on the default logger (`error` the function lives in the
// value namespace, distinct from the `error` module)
pub use globals::{
    debug, default_logger, error, info, log_provider_error, log_provider_request,
    log_provider_response, success, warn, DEFAULT_LOGGER_NAME,
};
