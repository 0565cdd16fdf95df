//! Trace extraction subsystem.
//!
//! # Data Flow
//! ```text
//! X-Cloud-Trace-Context: TRACE/SPAN;o=1
//!     → context.rs (split on first ';', then first '/')
//!     → payload.rs (add projects/{id}/traces/{trace}, operation id)
//!     → extractor.rs (emit request-arrival record, hand payload to caller)
//! ```
//!
//! # Design Decisions
//! - Extraction is total; degraded input yields empty identifiers
//! - The payload is immutable and cloned by value into every record

pub mod context;
pub mod extractor;
pub mod payload;

pub use context::{TraceContext, X_CLOUD_TRACE_CONTEXT};
pub use extractor::{extract, extract_from_headers, TraceExtractor, X_APPENGINE_REQUEST_LOG_ID};
pub use payload::{CorrelationPayload, OPERATION_PRODUCER};
