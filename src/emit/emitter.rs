//! Payload emitter.
//!
//! Turns a correlation payload, a severity and a formatted message into one
//! serialized line. Emission never fails from the caller's point of view:
//! serialization problems degrade to a plain-text line and sink errors are
//! reported through `tracing` only.

use std::fmt;
use std::sync::Arc;

use crate::emit::record::{HttpRequestInfo, LogRecord};
use crate::emit::severity::Severity;
use crate::emit::sink::{LogSink, StderrSink, StdoutSink};
use crate::observability::metrics;
use crate::trace::CorrelationPayload;

/// Writes correlated log records to three channels.
///
/// - `structured`: application records (stdout by default)
/// - `requests`: request-arrival records (stderr by default)
/// - `plain`: uncorrelated fallback text (stdout by default)
#[derive(Debug, Clone)]
pub struct Emitter {
    structured: Arc<dyn LogSink>,
    requests: Arc<dyn LogSink>,
    plain: Arc<dyn LogSink>,
}

impl Default for Emitter {
    fn default() -> Self {
        Self::stdio()
    }
}

macro_rules! severity_methods {
    ($($(#[$doc:meta])* $name:ident => $severity:ident),* $(,)?) => {
        $(
            $(#[$doc])*
            pub fn $name(&self, payload: Option<&CorrelationPayload>, args: fmt::Arguments<'_>) {
                self.emit_or_plain(payload, Severity::$severity, args)
            }
        )*
    };
}

impl Emitter {
    /// Emitter bound to the process's standard streams.
    pub fn stdio() -> Self {
        Self {
            structured: Arc::new(StdoutSink),
            requests: Arc::new(StderrSink),
            plain: Arc::new(StdoutSink),
        }
    }

    /// Emitter with explicit sinks.
    pub fn new(
        structured: Arc<dyn LogSink>,
        requests: Arc<dyn LogSink>,
        plain: Arc<dyn LogSink>,
    ) -> Self {
        Self {
            structured,
            requests,
            plain,
        }
    }

    /// Emit one application record correlated to `payload`.
    ///
    /// If an argument's `Display` fails, the partial message is written as
    /// plain text instead.
    pub fn emit(&self, payload: &CorrelationPayload, severity: Severity, args: fmt::Arguments<'_>) {
        let message = match format_message(args) {
            Ok(message) => message,
            Err(partial) => {
                metrics::record_plain_fallback("format");
                self.write_plain(severity, &partial);
                return;
            }
        };
        let record = LogRecord::new(payload, severity, message);
        self.write_record(self.structured.as_ref(), &record);
        metrics::record_emitted(severity);
    }

    /// Emit correlated when a payload is available, plain text otherwise.
    pub fn emit_or_plain(
        &self,
        payload: Option<&CorrelationPayload>,
        severity: Severity,
        args: fmt::Arguments<'_>,
    ) {
        match payload {
            Some(payload) => self.emit(payload, severity, args),
            None => {
                metrics::record_plain_fallback("no_payload");
                let message = format_message(args).unwrap_or_else(|partial| partial);
                self.write_plain(severity, &message);
            }
        }
    }

    /// Emit the request-arrival record on the request channel.
    pub fn emit_request(&self, payload: &CorrelationPayload, request: HttpRequestInfo) {
        let record = LogRecord::request_arrival(payload, request);
        self.write_record(self.requests.as_ref(), &record);
    }

    severity_methods! {
        /// Emit at `DEFAULT`.
        default_level => Default,
        debug => Debug,
        info => Info,
        notice => Notice,
        warning => Warning,
        error => Error,
        critical => Critical,
        alert => Alert,
        /// Emit at `EMERGENCY`.
        emergency => Emergency,
    }

    fn write_record(&self, sink: &dyn LogSink, record: &LogRecord) {
        match record.to_json_line() {
            Ok(line) => {
                if let Err(e) = sink.write_line(&line) {
                    tracing::warn!(sink = sink.name(), error = %e, "Failed to write log record");
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to serialize log record, writing plain text");
                metrics::record_plain_fallback("serialize");
                self.write_plain(record.severity, &record.message);
            }
        }
    }

    /// Line breaks are escaped so one call stays one physical line.
    fn write_plain(&self, severity: Severity, message: &str) {
        let message = message.replace('\r', "\\r").replace('\n', "\\n");
        let line = format!("{}: {}", severity.label(), message);
        if let Err(e) = self.plain.write_line(&line) {
            tracing::warn!(sink = self.plain.name(), error = %e, "Failed to write plain log line");
        }
    }
}

/// Marker appended when an argument fails to format.
const FORMAT_ERROR_MARKER: &str = "<format error>";

/// Render `args`; on a `Display` error return the text written so far plus
/// a marker.
fn format_message(args: fmt::Arguments<'_>) -> Result<String, String> {
    let mut message = String::new();
    match fmt::write(&mut message, args) {
        Ok(()) => Ok(message),
        Err(_) => {
            message.push_str(FORMAT_ERROR_MARKER);
            Err(message)
        }
    }
}

/// Emit through an [`Emitter`] with `format!`-style arguments.
///
/// ```ignore
/// log_with!(emitter, Some(&payload), Severity::Info, "n={}", 5);
/// ```
#[macro_export]
macro_rules! log_with {
    ($emitter:expr, $payload:expr, $severity:expr, $($arg:tt)+) => {
        $emitter.emit_or_plain($payload, $severity, format_args!($($arg)+))
    };
}
