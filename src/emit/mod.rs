//! Payload emission subsystem.
//!
//! # Data Flow
//! ```text
//! CorrelationPayload + Severity + format_args!(..)
//!     → emitter.rs (copy payload into a record, format message)
//!     → record.rs (JSON line with Cloud Logging special fields)
//!     → sink.rs (stdout / stderr / memory, one line per call)
//!
//! No payload available:
//!     → emitter.rs writes "<Label>: <message>" to the plain sink
//! ```
//!
//! # Design Decisions
//! - One code path parameterized by severity; per-level methods are wrappers
//! - Records own copies of the correlation fields
//! - Emission is infallible for callers

pub mod emitter;
pub mod record;
pub mod severity;
pub mod sink;

pub use emitter::Emitter;
pub use record::{HttpRequestInfo, LogRecord, Operation};
pub use severity::{ParseSeverityError, Severity};
pub use sink::{LogSink, MemorySink, StderrSink, StdoutSink};
