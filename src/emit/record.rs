//! Wire schema for emitted log lines.
//!
//! Field names and nesting match the special fields recognized by the
//! Cloud Logging agent for `jsonPayload` entries; they must not change.

use serde::Serialize;

use crate::emit::severity::Severity;
use crate::trace::CorrelationPayload;

/// `logging.googleapis.com/operation` sub-record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Operation {
    pub id: String,
    pub producer: String,
    pub first: bool,
    pub last: bool,
}

/// Inbound request details, attached only to request-arrival records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpRequestInfo {
    pub request_method: String,
    pub request_url: String,
    /// Body length in bytes as a decimal string; `-1` when unknown.
    pub request_size: String,
    pub user_agent: String,
    pub referer: String,
}

/// One serialized log line.
///
/// Owns copies of every correlation field so records built from the same
/// payload are fully independent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogRecord {
    #[serde(rename = "traceId")]
    pub trace_id: String,

    #[serde(rename = "logging.googleapis.com/trace")]
    pub trace: String,

    pub message: String,

    pub severity: Severity,

    #[serde(rename = "logging.googleapis.com/spanId")]
    pub span_id: String,

    #[serde(rename = "logging.googleapis.com/operation")]
    pub operation: Operation,

    #[serde(rename = "httpRequest", skip_serializing_if = "Option::is_none")]
    pub http_request: Option<HttpRequestInfo>,
}

impl LogRecord {
    /// Build an application record from a payload.
    pub fn new(payload: &CorrelationPayload, severity: Severity, message: String) -> Self {
        Self {
            trace_id: payload.trace_id().to_string(),
            trace: payload.trace().to_string(),
            message,
            severity,
            span_id: payload.span_id().to_string(),
            operation: Operation {
                id: payload.operation_id().to_string(),
                producer: payload.operation_producer().to_string(),
                first: false,
                last: false,
            },
            http_request: None,
        }
    }

    /// Build the request-arrival record for a payload.
    pub fn request_arrival(payload: &CorrelationPayload, request: HttpRequestInfo) -> Self {
        Self {
            http_request: Some(request),
            ..Self::new(payload, Severity::Default, String::new())
        }
    }

    /// Serialize as a single JSON line (no trailing newline).
    pub fn to_json_line(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
