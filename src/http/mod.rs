//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, trace + timeout layers)
//!     → middleware/correlation.rs (extract payload, emit request record,
//!       store payload in request extensions)
//!     → greeting handler (emit INFO record with the payload)
//!     → "Hello World"
//! ```

pub mod middleware;
pub mod request;
pub mod server;

pub use middleware::{correlation_middleware, payload_of};
pub use request::{header_str, request_info, request_size};
pub use server::{AppState, HttpServer, GREETING};
