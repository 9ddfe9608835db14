//! Rendering of log events to console and persistent lines

use chrono::Local;

use crate::domain::{LogEvent, LogLevel};

const RESET: &str = "\x1b[0m";

/// ANSI color for a level's console output
fn color(level: LogLevel) -> &'static str {
    match level {
        LogLevel::Debug => "\x1b[90m",   // gray
        LogLevel::Info => "\x1b[94m",    // blue
        LogLevel::Warn => "\x1b[93m",    // yellow
        LogLevel::Error => "\x1b[91m",   // red
        LogLevel::Success => "\x1b[92m", // green
    }
}

/// Render the console message line: `[ISO-8601 UTC] LEVEL: message`
pub fn console_line(event: &LogEvent) -> String {
    format!(
        "{color}[{ts}] {level}: {msg}{reset}",
        color = color(event.level),
        ts = event.timestamp.format("%Y-%m-%dT%H:%M:%SZ"),
        level = event.level.display_name(),
        msg = event.message,
        reset = RESET,
    )
}

/// Render the console context line, if the event carries context
///
/// Pretty-printed JSON, 2-space indent, colored like the message line.
pub fn console_context_line(event: &LogEvent) -> Option<String> {
    let context = event.context.as_ref()?;
    // Serializing to a String cannot fail for JSON values.
    let pretty = serde_json::to_string_pretty(context).unwrap_or_default();
    Some(format!(
        "{color}Context: {pretty}{reset}",
        color = color(event.level),
        reset = RESET,
    ))
}

/// Render the persistent line:
/// `YYYY-MM-DD HH:MM:SS | LEVEL-padded-7 | logger | message {compact JSON}`
///
/// The context JSON is appended only when context is present; the level field
/// is the underlying severity (success records as INFO).
pub fn persistent_line(event: &LogEvent) -> String {
    let ts = event.timestamp.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S");
    let severity = event.level.severity().as_str();
    let mut line = format!(
        "{ts} | {severity:<7} | {logger} | {msg}",
        logger = event.logger,
        msg = event.message,
    );
    if let Some(context) = &event.context {
        let compact = serde_json::to_string(context).unwrap_or_default();
        line.push(' ');
        line.push_str(&compact);
    }
    line
}
