//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use tokio::net::TcpListener;
use trace_log::config::ServiceConfig;
use trace_log::emit::{Emitter, MemorySink};
use trace_log::http::HttpServer;
use trace_log::lifecycle::Shutdown;

/// Sinks capturing everything an emitter writes.
#[derive(Clone, Default)]
pub struct Captured {
    pub structured: MemorySink,
    pub requests: MemorySink,
    pub plain: MemorySink,
}

impl Captured {
    pub fn emitter(&self) -> Emitter {
        Emitter::new(
            Arc::new(self.structured.clone()),
            Arc::new(self.requests.clone()),
            Arc::new(self.plain.clone()),
        )
    }
}

/// Parse every line of `sink` as JSON.
pub fn json_lines(sink: &MemorySink) -> Vec<Value> {
    sink.lines()
        .iter()
        .map(|line| serde_json::from_str(line).expect("line should be JSON"))
        .collect()
}

/// Start a server for `project_id` on `addr`, writing into fresh sinks.
#[allow(dead_code)]
pub async fn start_server(addr: SocketAddr, project_id: &str) -> (Captured, Shutdown) {
    let captured = Captured::default();

    let mut config = ServiceConfig::default();
    config.project_id = project_id.to_string();
    config.listener.host = addr.ip().to_string();
    config.listener.port = addr.port();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config, captured.emitter());
    let listener = TcpListener::bind(addr).await.unwrap();
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    tokio::time::sleep(Duration::from_millis(100)).await;
    (captured, shutdown)
}
