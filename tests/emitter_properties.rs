//! Public-API tests for extraction and emission.

use trace_log::emit::Severity;
use trace_log::{extract, log_with};

mod common;

#[test]
fn test_extract_examples() {
    let p = extract("abc/def;o=1", "proj", "");
    assert_eq!((p.trace_id(), p.span_id(), p.trace()), ("abc", "def", "projects/proj/traces/abc"));

    let p = extract("abc", "proj", "");
    assert_eq!((p.trace_id(), p.span_id()), ("abc", ""));

    let p = extract("", "proj", "");
    assert_eq!((p.trace_id(), p.span_id(), p.trace()), ("", "", "projects/proj/traces/"));
}

#[test]
fn test_emit_one_line_per_call() {
    let captured = common::Captured::default();
    let emitter = captured.emitter();
    let payload = extract("abc/def;o=1", "proj", "op");

    log_with!(emitter, Some(&payload), Severity::Info, "n={}", 5);

    let lines = common::json_lines(&captured.structured);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0]["message"], "n=5");
    assert_eq!(lines[0]["severity"], "INFO");
    assert_eq!(lines[0]["traceId"], "abc");
    assert_eq!(lines[0]["logging.googleapis.com/spanId"], "def");
    assert_eq!(lines[0]["logging.googleapis.com/trace"], "projects/proj/traces/abc");
    assert_eq!(lines[0]["logging.googleapis.com/operation"]["id"], "op");
}

#[test]
fn test_all_severities_share_payload() {
    let captured = common::Captured::default();
    let emitter = captured.emitter();
    let payload = extract("t/s", "p", "op");

    for severity in Severity::ALL {
        log_with!(emitter, Some(&payload), severity, "at {}", severity);
    }

    let lines = common::json_lines(&captured.structured);
    assert_eq!(lines.len(), Severity::ALL.len());
    for (line, severity) in lines.iter().zip(Severity::ALL) {
        assert_eq!(line["severity"], severity.as_str());
        assert_eq!(line["message"], format!("at {}", severity));
        assert_eq!(line["traceId"], lines[0]["traceId"]);
        assert_eq!(line["logging.googleapis.com/operation"], lines[0]["logging.googleapis.com/operation"]);
    }
}

#[test]
fn test_plain_fallback_has_no_trace_fields() {
    let captured = common::Captured::default();
    let emitter = captured.emitter();

    emitter.warning(None, format_args!("disk at {}%", 91));

    assert!(captured.structured.is_empty());
    let lines = captured.plain.lines();
    assert_eq!(lines, vec!["Warning: disk at 91%"]);
    assert!(serde_json::from_str::<serde_json::Value>(&lines[0]).is_err());
}
