//! Trace extraction.
//!
//! # Responsibilities
//! - Turn the trace-context and request-log-id headers into a payload
//! - Emit the request-arrival record once per request
//!
//! # Design Decisions
//! - Never fails: missing or non-UTF-8 headers read as empty strings
//! - Project id is supplied by the caller, not looked up per request

use axum::http::{HeaderMap, Request};

use crate::emit::Emitter;
use crate::http::request::{header_str, request_info};
use crate::observability::metrics;
use crate::trace::context::{TraceContext, X_CLOUD_TRACE_CONTEXT};
use crate::trace::payload::CorrelationPayload;

/// Header carrying the App Engine request log id.
pub const X_APPENGINE_REQUEST_LOG_ID: &str = "x-appengine-request-log-id";

/// Build a payload from raw header values.
pub fn extract(header: &str, project_id: &str, request_log_id: &str) -> CorrelationPayload {
    CorrelationPayload::new(TraceContext::parse(header), project_id, request_log_id)
}

/// Build a payload from a header map.
pub fn extract_from_headers(headers: &HeaderMap, project_id: &str) -> CorrelationPayload {
    extract(
        header_str(headers, X_CLOUD_TRACE_CONTEXT),
        project_id,
        header_str(headers, X_APPENGINE_REQUEST_LOG_ID),
    )
}

/// Extractor bound to a project and an emitter.
#[derive(Debug, Clone)]
pub struct TraceExtractor {
    project_id: String,
    emitter: Emitter,
}

impl TraceExtractor {
    pub fn new(project_id: impl Into<String>, emitter: Emitter) -> Self {
        Self {
            project_id: project_id.into(),
            emitter,
        }
    }

    /// Extract the payload for `request` and emit its request-arrival record.
    pub fn extract_request<B>(&self, request: &Request<B>) -> CorrelationPayload {
        let payload = extract_from_headers(request.headers(), &self.project_id);

        if !payload.is_correlated() {
            tracing::debug!(
                uri = %request.uri(),
                "No trace context on request, records will carry empty trace ids"
            );
        }
        metrics::record_request(payload.is_correlated());

        self.emitter.emit_request(&payload, request_info(request));
        payload
    }
}
