//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! SIGTERM/SIGINT (signals.rs)
//!     → Shutdown::trigger (shutdown.rs)
//!     → HttpServer stops accepting, drains in-flight requests, exits
//! ```

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
pub use signals::wait_for_signal;
