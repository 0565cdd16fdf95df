//! `X-Cloud-Trace-Context` header parsing.
//!
//! Format: `TRACE_ID/SPAN_ID;o=OPTIONS`. Both the span and the options part
//! are optional. Nothing is validated; segments are taken verbatim.

/// Header carrying the trace and span identifiers.
pub const X_CLOUD_TRACE_CONTEXT: &str = "x-cloud-trace-context";

/// The two identifier segments of a trace-context header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TraceContext {
    pub trace_id: String,
    pub span_id: String,
}

impl TraceContext {
    /// Parse a header value. Total: every input yields a context.
    pub fn parse(header: &str) -> Self {
        let ids = header.split_once(';').map_or(header, |(ids, _options)| ids);
        let (trace_id, span_id) = ids.split_once('/').unwrap_or((ids, ""));

        Self {
            trace_id: trace_id.to_string(),
            span_id: span_id.to_string(),
        }
    }
}
