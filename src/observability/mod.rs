//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Service internals:
//!     → logging.rs (tracing events, stderr)
//!     → metrics.rs (emission and request counters)
//!
//! Consumers:
//!     → Log aggregation (stderr)
//!     → Metrics endpoint (Prometheus scrape, optional)
//! ```
//!
//! Correlated application records do not pass through here; see `emit`.

pub mod logging;
pub mod metrics;
