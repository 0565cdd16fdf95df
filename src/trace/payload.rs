//! Per-request correlation payload.

use crate::trace::context::TraceContext;

/// Producer recorded in `logging.googleapis.com/operation`.
pub const OPERATION_PRODUCER: &str = "appengine.googleapis.com/request_id";

/// Immutable bundle of identifiers shared by every record of one request.
///
/// Fields are private; the only way to build one is [`CorrelationPayload::new`]
/// or [`crate::trace::extract`], and nothing mutates it afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorrelationPayload {
    trace_id: String,
    trace: String,
    span_id: String,
    operation_id: String,
}

impl CorrelationPayload {
    /// Build from a parsed trace context.
    ///
    /// The resource name is always `projects/{project_id}/traces/{trace_id}`,
    /// even when either part is empty.
    pub fn new(context: TraceContext, project_id: &str, operation_id: impl Into<String>) -> Self {
        let trace = format!("projects/{}/traces/{}", project_id, context.trace_id);
        Self {
            trace_id: context.trace_id,
            trace,
            span_id: context.span_id,
            operation_id: operation_id.into(),
        }
    }

    pub fn trace_id(&self) -> &str {
        &self.trace_id
    }

    /// Fully-qualified trace resource name.
    pub fn trace(&self) -> &str {
        &self.trace
    }

    pub fn span_id(&self) -> &str {
        &self.span_id
    }

    pub fn operation_id(&self) -> &str {
        &self.operation_id
    }

    pub fn operation_producer(&self) -> &'static str {
        OPERATION_PRODUCER
    }

    /// True when a trace id was extracted.
    pub fn is_correlated(&self) -> bool {
        !self.trace_id.is_empty()
    }
}
