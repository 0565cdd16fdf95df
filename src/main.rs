//! trace-log demo server.
//!
//! Answers every request with `Hello World`. Each request gets one
//! request-arrival record on stderr and one INFO record on stdout, both
//! carrying the trace from `X-Cloud-Trace-Context`.
//!
//! ```text
//!     Client Request
//!     ──────────────▶ TraceLayer ─▶ correlation middleware ─▶ greeting handler
//!                                       │                          │
//!                                       ▼                          ▼
//!                              stderr: httpRequest record   stdout: INFO record
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use trace_log::config::{load_config, read_config_file, ServiceConfig};
use trace_log::emit::Emitter;
use trace_log::http::HttpServer;
use trace_log::lifecycle::Shutdown;
use trace_log::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "trace-log")]
#[command(about = "Hello World server emitting trace-correlated Cloud Logging records", long_about = None)]
struct Cli {
    /// Optional TOML config file; GOOGLE_CLOUD_PROJECT and PORT override it.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match cli.config.as_deref() {
        Some(path) => read_config_file(path)?,
        None => ServiceConfig::default(),
    };

    logging::init_logging(&config.observability.log_level);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "trace-log starting");

    let config = load_config(config, |key| std::env::var(key).ok())?;

    tracing::info!(
        project_id = %config.project_id,
        bind_address = %config.listener.bind_address(),
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        metrics::init_metrics(config.observability.metrics_address);
    }

    let listener = TcpListener::bind(config.listener.bind_address()).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let _signals = shutdown.trigger_on_signal();

    let server = HttpServer::new(config, Emitter::stdio());
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
