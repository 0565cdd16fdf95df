//! HTTP server setup.
//!
//! # Responsibilities
//! - Create the Axum router with the greeting handler on every path
//! - Wire up middleware (correlation, timeout, tracing)
//! - Serve on a listener until shutdown is signalled

use axum::{
    extract::{Request, State},
    middleware,
    routing::any,
    Router,
};
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::ServiceConfig;
use crate::emit::Emitter;
use crate::http::middleware::{correlation_middleware, payload_of};
use crate::trace::TraceExtractor;

/// Body returned for every request.
pub const GREETING: &str = "Hello World";

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub emitter: Emitter,
}

/// HTTP harness around the trace extractor and emitter.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
}

impl HttpServer {
    /// Create a server writing records through `emitter`.
    pub fn new(config: ServiceConfig, emitter: Emitter) -> Self {
        let router = Self::build_router(&config, emitter);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &ServiceConfig, emitter: Emitter) -> Router {
        let extractor = TraceExtractor::new(config.project_id.clone(), emitter.clone());
        let state = AppState { emitter };

        Router::new()
            .route("/{*path}", any(greeting_handler))
            .route("/", any(greeting_handler))
            .with_state(state)
            .layer(middleware::from_fn_with_state(extractor, correlation_middleware))
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(TraceLayer::new_for_http())
    }

    /// Clone of the router, for serving in-process.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until a shutdown message arrives.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            project_id = %self.config.project_id,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

async fn greeting_handler(State(state): State<AppState>, request: Request) -> &'static str {
    crate::log_with!(
        state.emitter,
        payload_of(&request),
        crate::emit::Severity::Info,
        "{} {}",
        request.method(),
        request.uri().path()
    );
    GREETING
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emit::MemorySink;
    use axum::body::Body;
    use std::sync::Arc;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_handler_logs_with_request_payload() {
        let structured = MemorySink::new();
        let requests = MemorySink::new();
        let emitter = Emitter::new(
            Arc::new(structured.clone()),
            Arc::new(requests.clone()),
            Arc::new(MemorySink::new()),
        );
        let mut config = ServiceConfig::default();
        config.project_id = "proj".into();
        let server = HttpServer::new(config, emitter);

        let response = server
            .router()
            .oneshot(
                axum::http::Request::builder()
                    .uri("/some/path")
                    .header("X-Cloud-Trace-Context", "abc/def;o=1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), 200);
        let body = axum::body::to_bytes(response.into_body(), 1024).await.unwrap();
        assert_eq!(&body[..], GREETING.as_bytes());

        assert_eq!(requests.len(), 1);
        let lines = structured.lines();
        assert_eq!(lines.len(), 1);
        let json: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
        assert_eq!(json["message"], "GET /some/path");
        assert_eq!(json["severity"], "INFO");
        assert_eq!(json["logging.googleapis.com/trace"], "projects/proj/traces/abc");
    }
}
