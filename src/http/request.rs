//! Request inspection.
//!
//! # Responsibilities
//! - Read header values as strings without failing
//! - Describe an inbound request for the `httpRequest` log field
//!
//! # Design Decisions
//! - Absent and non-UTF-8 header values both read as ""
//! - Body size comes from headers only; the body is never read

use axum::http::{header, HeaderMap, Request};

use crate::emit::HttpRequestInfo;

/// Header value as `&str`, or `""` when absent or not valid UTF-8.
pub fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> &'a str {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

/// Declared body length.
///
/// `Content-Length` when it parses, `-1` for bodies of unknown length
/// (chunked transfer), `0` when no body is declared.
pub fn request_size(headers: &HeaderMap) -> i64 {
    if let Some(len) = headers
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<i64>().ok())
    {
        return len;
    }
    if headers.contains_key(header::TRANSFER_ENCODING) || headers.contains_key(header::CONTENT_LENGTH) {
        return -1;
    }
    0
}

/// Build the `httpRequest` sub-record for `request`.
pub fn request_info<B>(request: &Request<B>) -> HttpRequestInfo {
    let headers = request.headers();
    HttpRequestInfo {
        request_method: request.method().to_string(),
        request_url: request.uri().to_string(),
        request_size: request_size(headers).to_string(),
        user_agent: header_str(headers, header::USER_AGENT.as_str()).to_string(),
        referer: header_str(headers, header::REFERER.as_str()).to_string(),
    }
}
