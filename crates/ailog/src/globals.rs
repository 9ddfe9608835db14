//! Process-wide default logger and free convenience functions
//!
//! The default logger is constructed lazily on first use, console-only, under
//! the name [`DEFAULT_LOGGER_NAME`]. It is never reconstructed; calling
//! [`configure`](crate::configure) with the same name re-routes it (and every
//! function here) without replacing the instance.

use std::fmt;

use lazy_static::lazy_static;

use crate::ai::AiOperationLogger;
use crate::domain::Context;
use crate::logger::Logger;

/// Registry name of the process-wide default logger
pub const DEFAULT_LOGGER_NAME: &str = "ailog";

lazy_static! {
    static ref DEFAULT_LOGGER: Logger = Logger::new(DEFAULT_LOGGER_NAME);
    static ref DEFAULT_AI: AiOperationLogger = AiOperationLogger::new(DEFAULT_LOGGER.clone());
}

/// Handle to the process-wide default logger
pub fn default_logger() -> Logger {
    DEFAULT_LOGGER.clone()
}

pub fn debug(message: impl Into<String>, context: Option<Context>) {
    DEFAULT_LOGGER.debug(message, context);
}

pub fn info(message: impl Into<String>, context: Option<Context>) {
    DEFAULT_LOGGER.info(message, context);
}

pub fn warn(message: impl Into<String>, context: Option<Context>) {
    DEFAULT_LOGGER.warn(message, context);
}

pub fn error(message: impl Into<String>, context: Option<Context>) {
    DEFAULT_LOGGER.error(message, context);
}

pub fn success(message: impl Into<String>, context: Option<Context>) {
    DEFAULT_LOGGER.success(message, context);
}

/// Log the start of a provider request on the default logger
pub fn log_provider_request(
    provider: &str,
    model: &str,
    prompt_tokens: Option<u64>,
    context: Option<Context>,
) {
    DEFAULT_AI.log_request(provider, model, prompt_tokens, context);
}

/// Log a completed provider request on the default logger
pub fn log_provider_response(
    provider: &str,
    model: &str,
    completion_tokens: Option<u64>,
    total_tokens: Option<u64>,
    duration_ms: Option<u64>,
    context: Option<Context>,
) {
    DEFAULT_AI.log_response(
        provider,
        model,
        completion_tokens,
        total_tokens,
        duration_ms,
        context,
    );
}

/// Log a failed provider request on the default logger
pub fn log_provider_error(
    provider: &str,
    model: &str,
    error: impl fmt::Display,
    context: Option<Context>,
) {
    DEFAULT_AI.log_error(provider, model, error, context);
}
