//! Log levels and the event value rendered to sinks

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::Context;

/// Log level
///
/// `Success` is a display-level distinction only; it records with the same
/// underlying [`Severity`] as `Info`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
    Success,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
            Self::Success => "success",
        }
    }

    /// Uppercased form used on the console line (e.g. `SUCCESS`).
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
            Self::Success => "SUCCESS",
        }
    }

    /// Underlying severity class recorded by the persistent line.
    pub fn severity(&self) -> Severity {
        match self {
            Self::Debug => Severity::Debug,
            Self::Info | Self::Success => Severity::Info,
            Self::Warn => Severity::Warning,
            Self::Error => Severity::Error,
        }
    }
}

/// Severity class for persisted records
///
/// `WARNING` is the widest name, which is why the persistent format pads the
/// level field to 7 characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Debug,
    Info,
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
        }
    }
}

/// A single log event
///
/// Constructed at emission time, rendered to every configured sink, then
/// discarded. Never stored or mutated after creation.
#[derive(Debug, Clone)]
pub struct LogEvent {
    /// Emission instant (UTC)
    pub timestamp: DateTime<Utc>,

    /// Log level
    pub level: LogLevel,

    /// Message
    pub message: String,

    /// Name of the logger that emitted the event
    pub logger: String,

    /// Optional structured context
    pub context: Option<Context>,
}

impl LogEvent {
    /// Create a new event stamped with the current time
    pub fn new(
        level: LogLevel,
        logger: impl Into<String>,
        message: impl Into<String>,
        context: Option<Context>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            level,
            message: message.into(),
            logger: logger.into(),
            context,
        }
    }
}
