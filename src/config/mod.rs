//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! optional config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → loader.rs (overlay GOOGLE_CLOUD_PROJECT, PORT)
//!     → validation.rs (semantic checks)
//!     → ServiceConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Config is read once at startup
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{apply_env, load_config, read_config_file, ConfigError, ENV_PORT, ENV_PROJECT_ID};
pub use schema::{ListenerConfig, ObservabilityConfig, ServiceConfig, TimeoutConfig};
pub use validation::{validate_config, ValidationError};
