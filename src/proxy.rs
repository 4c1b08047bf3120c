//! Forwarding of `/api/*` requests to the analytics backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser only ever talks to this host, so auth cookies stay first-party
//! and the backend origin is a deployment detail. Requests and responses are
//! buffered (bounded by `K2M_PROXY_MAX_BODY_BYTES`) rather than streamed;
//! dataset uploads are the largest bodies and fit comfortably.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::HeaderMap;
use axum::response::Response;

use crate::config::ServerConfig;
use crate::error::ProxyError;

const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Headers that describe one hop and must not be forwarded. `content-length`
/// is included; the client recomputes it from the buffered body.
const HOP_BY_HOP: [&str; 10] = [
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
    "host",
    "content-length",
];

#[derive(Clone)]
pub struct ProxyState {
    client: reqwest::Client,
    base_url: Arc<str>,
    max_body_bytes: usize,
}

impl ProxyState {
    /// Build the shared HTTP client for `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialised.
    pub fn new(config: &ServerConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(config.proxy_timeout)
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .redirect(reqwest::redirect::Policy::none())
            .build()?;
        Ok(Self { client, base_url: Arc::from(config.api_base_url.as_str()), max_body_bytes: config.max_body_bytes })
    }
}

/// Backend URL for a request path (with query), e.g. `/api/datasets?x=1`.
pub fn upstream_url(base_url: &str, path_and_query: &str) -> Result<reqwest::Url, ProxyError> {
    reqwest::Url::parse(&format!("{base_url}{path_and_query}")).map_err(|e| ProxyError::InvalidUrl(e.to_string()))
}

/// Copy of `headers` without hop-by-hop entries.
pub fn forwardable_headers(headers: &HeaderMap) -> HeaderMap {
    headers
        .iter()
        .filter(|(name, _)| !HOP_BY_HOP.contains(&name.as_str()))
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect()
}

/// Axum handler: replay the request against the backend and relay its answer.
///
/// # Errors
///
/// Returns [`ProxyError`] when the body is too large or the backend cannot
/// be reached in time.
pub async fn forward(State(proxy): State<ProxyState>, request: Request) -> Result<Response, ProxyError> {
    let (parts, body) = request.into_parts();
    let path_and_query = parts.uri.path_and_query().map_or_else(|| parts.uri.path(), |pq| pq.as_str());
    let url = upstream_url(&proxy.base_url, path_and_query)?;

    let body = axum::body::to_bytes(body, proxy.max_body_bytes)
        .await
        .map_err(|_| ProxyError::BodyTooLarge { limit: proxy.max_body_bytes })?;

    let upstream = proxy
        .client
        .request(parts.method.clone(), url.clone())
        .headers(forwardable_headers(&parts.headers))
        .body(body)
        .send()
        .await?;

    let status = upstream.status();
    let headers = forwardable_headers(upstream.headers());
    let bytes = upstream.bytes().await?;
    tracing::debug!(method = %parts.method, path = url.path(), %status, "proxied");

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    *response.headers_mut() = headers;
    Ok(response)
}
