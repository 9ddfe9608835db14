//! Default-logger convenience function tests
//!
//! The default logger is process-wide, so this binary holds the single test
//! that reconfigures it; sibling test binaries run in separate processes and
//! are unaffected.

use ailog::{configure, Context, DEFAULT_LOGGER_NAME};
use pretty_assertions::assert_eq;
use tests::{context_of, read_lines, split_record};

#[test]
fn test_convenience_functions_follow_default_configuration() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("default.log");

    // Redirect the default logger to a file so output can be read back.
    configure(DEFAULT_LOGGER_NAME, Some(&path), false).unwrap();

    ailog::info("System started", Some(Context::new().with("version", "3.0.0")));
    ailog::debug("Loading configuration", None);
    ailog::success("Operation completed", Some(Context::new().with("duration", 1250)));
    ailog::warn("Potential issue detected", None);
    ailog::error("Error occurred", Some(Context::new().with("error_code", 500)));

    ailog::log_provider_request("claude", "m1", Some(150), None);
    ailog::log_provider_response("gemini", "m2", None, None, Some(1800), None);
    ailog::log_provider_error("claude", "m1", "Rate limit exceeded", None);

    let lines = read_lines(&path);
    assert_eq!(lines.len(), 8);

    // All records carry the default logger's name.
    for line in &lines {
        let (_, _, logger_name, _) = split_record(line);
        assert_eq!(logger_name, DEFAULT_LOGGER_NAME);
    }

    let levels: Vec<String> = lines
        .iter()
        .map(|line| split_record(line).1.trim_end().to_string())
        .collect();
    assert_eq!(
        levels,
        ["INFO", "DEBUG", "INFO", "WARNING", "ERROR", "INFO", "INFO", "ERROR"]
    );

    assert_eq!(context_of(&lines[0])["version"], "3.0.0");
    assert_eq!(context_of(&lines[5])["operation"], "request_start");
    assert_eq!(context_of(&lines[6])["duration_ms"], 1800);
    assert_eq!(context_of(&lines[7])["error"], "Rate limit exceeded");
}
