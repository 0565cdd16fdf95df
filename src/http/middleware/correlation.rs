//! Correlation middleware.
//! Runs the trace extractor once per request and stores the payload in the
//! request's extensions for handlers to pass on explicitly.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::trace::{CorrelationPayload, TraceExtractor};

pub async fn correlation_middleware(
    State(extractor): State<TraceExtractor>,
    mut request: Request,
    next: Next,
) -> Response {
    let payload = extractor.extract_request(&request);
    request.extensions_mut().insert(payload);
    next.run(request).await
}

/// Payload stored by [`correlation_middleware`], if the middleware ran.
pub fn payload_of<B>(request: &axum::http::Request<B>) -> Option<&CorrelationPayload> {
    request.extensions().get::<CorrelationPayload>()
}
