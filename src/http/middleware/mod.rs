pub mod correlation;

pub use correlation::{correlation_middleware, payload_of};
