//! AI-operation logging façade
//!
//! Standardizes the context fields recorded for the lifecycle of an external
//! AI-provider call: request start, response complete, error. Each operation
//! synthesizes its fixed fields first, then overlays the caller-supplied
//! context, so on a key collision the caller's value wins.

use std::fmt;

use crate::domain::Context;
use crate::logger::Logger;

/// Context key recording which lifecycle stage an event belongs to
const OPERATION_KEY: &str = "operation";

/// Façade over a [`Logger`] for AI-provider lifecycle events
///
/// State-free: holds only a logger handle, which may be the process-wide
/// default or any caller-supplied logger. Optional token counts and durations
/// that are `None` are omitted from the serialized context entirely.
#[derive(Debug, Clone)]
pub struct AiOperationLogger {
    logger: Logger,
}

impl AiOperationLogger {
    pub fn new(logger: Logger) -> Self {
        Self { logger }
    }

    /// Log the start of a provider request at info level
    pub fn log_request(
        &self,
        provider: &str,
        model: &str,
        prompt_tokens: Option<u64>,
        context: Option<Context>,
    ) {
        let mut fields = Context::new().with("provider", provider).with("model", model);
        if let Some(tokens) = prompt_tokens {
            fields.insert("prompt_tokens", tokens);
        }
        fields.insert(OPERATION_KEY, "request_start");
        overlay(&mut fields, context);

        self.logger
            .info(format!("[AI] Starting {provider} request"), Some(fields));
    }

    /// Log a completed provider request at success level
    pub fn log_response(
        &self,
        provider: &str,
        model: &str,
        completion_tokens: Option<u64>,
        total_tokens: Option<u64>,
        duration_ms: Option<u64>,
        context: Option<Context>,
    ) {
        let mut fields = Context::new().with("provider", provider).with("model", model);
        if let Some(tokens) = completion_tokens {
            fields.insert("completion_tokens", tokens);
        }
        if let Some(tokens) = total_tokens {
            fields.insert("total_tokens", tokens);
        }
        if let Some(ms) = duration_ms {
            fields.insert("duration_ms", ms);
        }
        fields.insert(OPERATION_KEY, "response_complete");
        overlay(&mut fields, context);

        self.logger
            .success(format!("[AI] Completed {provider} request"), Some(fields));
    }

    /// Log a failed provider request at error level
    ///
    /// `error` accepts a plain message or any error value; it is recorded via
    /// its `Display` representation.
    pub fn log_error(
        &self,
        provider: &str,
        model: &str,
        error: impl fmt::Display,
        context: Option<Context>,
    ) {
        let mut fields = Context::new()
            .with("provider", provider)
            .with("model", model)
            .with("error", error.to_string())
            .with(OPERATION_KEY, "error");
        overlay(&mut fields, context);

        self.logger
            .error(format!("[AI] {provider} request failed"), Some(fields));
    }
}

/// Overlay caller-supplied context onto the synthesized fields (caller wins)
fn overlay(fields: &mut Context, context: Option<Context>) {
    if let Some(context) = context {
        fields.merge(context);
    }
}
