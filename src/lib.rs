//! Request-correlated structured logging for Cloud Logging.
//!
//! An inbound request's `X-Cloud-Trace-Context` header is turned into an
//! immutable [`CorrelationPayload`]; every record emitted with that payload
//! carries the same trace, span and operation identifiers.

pub mod config;
pub mod emit;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod trace;

pub use config::ServiceConfig;
pub use emit::{Emitter, Severity};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use trace::{extract, CorrelationPayload, TraceExtractor};
