//! HTTP transport for benchmark execution
//!
//! Call execution sits behind the [`Transport`] trait so benchmarkers can be
//! driven by a fake implementation in tests. The production transport wraps
//! `reqwest` and measures wall-clock latency around each request.

#![allow(dead_code)]

use async_trait::async_trait;
use reqwest::{Client, Method};
use std::collections::HashMap;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::debug;

/// Transport-level errors
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Timeout after {0} seconds")]
    Timeout(u64),

    #[error("Connection refused to {0}")]
    ConnectionRefused(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

/// A single request to be executed and timed
#[derive(Clone, Debug)]
pub struct ApiRequest {
    pub method: String,
    pub url: String,
    pub headers: HashMap<String, String>,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
            headers: HashMap::new(),
            body: None,
        }
    }

    pub fn headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers.extend(headers);
        self
    }

    pub fn json_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Response status plus the observed latency for one call
#[derive(Clone, Copy, Debug)]
pub struct ApiResponse {
    pub status_code: u16,
    pub latency_ms: f64,
}

/// Capability interface for issuing one timed HTTP call
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: &ApiRequest) -> Result<ApiResponse, TransportError>;
}

/// Production transport backed by `reqwest`
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    timeout_secs: u64,
}

impl HttpTransport {
    /// Create a transport with the default 30 second per-call timeout
    pub fn new() -> anyhow::Result<Self> {
        Self::with_timeout(30)
    }

    /// Create a transport with a custom per-call timeout
    pub fn with_timeout(timeout_secs: u64) -> anyhow::Result<Self> {
        use anyhow::Context;

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs.max(1)))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            timeout_secs: timeout_secs.max(1),
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: &ApiRequest) -> Result<ApiResponse, TransportError> {
        let method = Method::from_bytes(request.method.to_uppercase().as_bytes())
            .map_err(|_| TransportError::InvalidRequest(format!("bad method: {}", request.method)))?;

        let mut builder = self.client.request(method, &request.url);

        for (key, value) in &request.headers {
            builder = builder.header(key.as_str(), value.as_str());
        }

        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        // Latency window: just before send to just after the response status
        // and headers arrive. The body is not consumed.
        let start = Instant::now();

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                TransportError::Timeout(self.timeout_secs)
            } else if e.is_connect() {
                TransportError::ConnectionRefused(request.url.clone())
            } else if e.is_builder() {
                TransportError::InvalidRequest(e.to_string())
            } else {
                TransportError::RequestFailed(e.to_string())
            }
        })?;

        let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
        let status_code = response.status().as_u16();

        debug!(
            "{} {} -> {} in {:.2}ms",
            request.method, request.url, status_code, latency_ms
        );

        Ok(ApiResponse {
            status_code,
            latency_ms,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn request_builder() {
        let req = ApiRequest::new("GET", "https://example.test/")
            .headers(HashMap::from([("Host".to_string(), "example.test".to_string())]))
            .json_body(json!({"k": "v"}));

        assert_eq!(req.method, "GET");
        assert_eq!(req.headers.len(), 1);
        assert!(req.body.is_some());
    }

    #[tokio::test]
    async fn send_reports_status_and_latency() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ping"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let transport = HttpTransport::new().unwrap();
        let request = ApiRequest::new("get", format!("{}/ping", server.uri()));
        let response = transport.send(&request).await.unwrap();

        assert_eq!(response.status_code, 200);
        assert!(response.latency_ms > 0.0);
    }

    #[tokio::test]
    async fn send_forwards_headers_and_json_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/graphql"))
            .and(header("Content-Type", "application/json"))
            .and(body_json(json!({"query": "{ping}"})))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let transport = HttpTransport::new().unwrap();
        let request = ApiRequest::new("POST", format!("{}/graphql", server.uri()))
            .headers(HashMap::from([(
                "Content-Type".to_string(),
                "application/json".to_string(),
            )]))
            .json_body(json!({"query": "{ping}"}));

        let response = transport.send(&request).await.unwrap();
        assert_eq!(response.status_code, 200);
    }

    #[tokio::test]
    async fn error_status_is_not_a_transport_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let transport = HttpTransport::new().unwrap();
        let response = transport
            .send(&ApiRequest::new("GET", server.uri()))
            .await
            .unwrap();

        assert_eq!(response.status_code, 503);
    }

    #[tokio::test]
    async fn connection_failure_maps_to_transport_error() {
        let transport = HttpTransport::with_timeout(2).unwrap();
        let request = ApiRequest::new("GET", "http://127.0.0.1:1/unreachable");

        let err = transport.send(&request).await.unwrap_err();
        assert!(matches!(
            err,
            TransportError::ConnectionRefused(_) | TransportError::RequestFailed(_)
        ));
    }

    #[tokio::test]
    async fn invalid_method_is_rejected_before_send() {
        let transport = HttpTransport::new().unwrap();
        let request = ApiRequest::new("NOT A VERB", "http://127.0.0.1:1/");

        let err = transport.send(&request).await.unwrap_err();
        assert!(matches!(err, TransportError::InvalidRequest(_)));
    }
}
