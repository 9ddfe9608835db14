//! AiOperationLogger integration tests
//!
//! Each test routes a fresh file-only logger through the façade and asserts
//! on the persisted record: message, severity, and exact context fields.

use ailog::{AiOperationLogger, Context};
use pretty_assertions::assert_eq;
use serde_json::json;
use tests::{context_of, file_logger, read_lines, split_record};

#[test]
fn test_log_request_record() {
    let fixture = file_logger("ai-request").unwrap();
    let ai = AiOperationLogger::new(fixture.logger.clone());

    ai.log_request(
        "claude",
        "m1",
        Some(150),
        Some(Context::new().with("task", "x")),
    );

    let lines = read_lines(&fixture.path);
    assert_eq!(lines.len(), 1);

    let (_, level, _, rest) = split_record(&lines[0]);
    assert_eq!(level.trim_end(), "INFO");
    assert!(rest.starts_with("[AI] Starting claude request"));

    assert_eq!(
        context_of(&lines[0]),
        json!({
            "provider": "claude",
            "model": "m1",
            "prompt_tokens": 150,
            "operation": "request_start",
            "task": "x",
        })
    );
}

#[test]
fn test_log_response_omits_absent_token_counts() {
    let fixture = file_logger("ai-response").unwrap();
    let ai = AiOperationLogger::new(fixture.logger.clone());

    ai.log_response(
        "gemini",
        "m2",
        None,
        None,
        Some(1800),
        Some(Context::new().with("pages", 3)),
    );

    let lines = read_lines(&fixture.path);
    let (_, level, _, rest) = split_record(&lines[0]);
    // Success records with info severity.
    assert_eq!(level.trim_end(), "INFO");
    assert!(rest.starts_with("[AI] Completed gemini request"));

    let ctx = context_of(&lines[0]);
    assert_eq!(ctx["operation"], "response_complete");
    assert_eq!(ctx["duration_ms"], 1800);
    assert_eq!(ctx["pages"], 3);
    assert!(ctx.get("completion_tokens").is_none());
    assert!(ctx.get("total_tokens").is_none());
}

#[test]
fn test_log_response_full_token_accounting() {
    let fixture = file_logger("ai-response-full").unwrap();
    let ai = AiOperationLogger::new(fixture.logger.clone());

    ai.log_response("claude", "m1", Some(420), Some(570), Some(2340), None);

    let ctx = context_of(&read_lines(&fixture.path)[0]);
    assert_eq!(
        ctx,
        json!({
            "provider": "claude",
            "model": "m1",
            "completion_tokens": 420,
            "total_tokens": 570,
            "duration_ms": 2340,
            "operation": "response_complete",
        })
    );
}

#[test]
fn test_log_error_stringifies_error_values() {
    #[derive(Debug)]
    struct RuntimeFailure(&'static str);

    impl std::fmt::Display for RuntimeFailure {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "{}", self.0)
        }
    }
    impl std::error::Error for RuntimeFailure {}

    let fixture = file_logger("ai-error").unwrap();
    let ai = AiOperationLogger::new(fixture.logger.clone());

    ai.log_error("claude", "m1", RuntimeFailure("boom"), Some(Context::new()));

    let lines = read_lines(&fixture.path);
    let (_, level, _, rest) = split_record(&lines[0]);
    assert_eq!(level.trim_end(), "ERROR");
    assert!(rest.starts_with("[AI] claude request failed"));

    let ctx = context_of(&lines[0]);
    assert_eq!(ctx["error"], "boom");
    assert_eq!(ctx["operation"], "error");
}

#[test]
fn test_log_error_accepts_plain_message() {
    let fixture = file_logger("ai-error-str").unwrap();
    let ai = AiOperationLogger::new(fixture.logger.clone());

    ai.log_error("gemini", "m2", "Quota exceeded for OCR operations", None);

    let ctx = context_of(&read_lines(&fixture.path)[0]);
    assert_eq!(ctx["error"], "Quota exceeded for OCR operations");
}

#[test]
fn test_caller_context_overrides_synthesized_fields() {
    let fixture = file_logger("ai-override").unwrap();
    let ai = AiOperationLogger::new(fixture.logger.clone());

    ai.log_request(
        "claude",
        "m1",
        Some(10),
        Some(Context::new().with("model", "replacement").with("prompt_tokens", 99)),
    );

    let ctx = context_of(&read_lines(&fixture.path)[0]);
    assert_eq!(ctx["provider"], "claude");
    assert_eq!(ctx["model"], "replacement");
    assert_eq!(ctx["prompt_tokens"], 99);
}
