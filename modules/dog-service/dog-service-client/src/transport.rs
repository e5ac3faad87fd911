use std::time::Duration;

use crate::error::DogServiceError;
use crate::request::Request;
use crate::response::RawResponse;

/// Performs single HTTP round trips; holds no per-call state
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http_client: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport; `None` keeps reqwest's default (no timeout)
    pub fn new(timeout: Option<Duration>) -> Result<Self, DogServiceError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder
            .build()
            .map_err(|e| DogServiceError::Build(e.to_string()))?;

        Ok(Self { http_client })
    }

    /// Send `request` against `endpoint` and buffer the whole response body
    pub async fn execute(
        &self,
        endpoint: &str,
        request: &Request,
    ) -> Result<RawResponse, DogServiceError> {
        let url = request.url(endpoint)?;
        tracing::debug!(method = %request.method(), url = %url, "sending request");

        let resp = self
            .http_client
            .request(request.method().clone(), url)
            .headers(request.headers().clone())
            .send()
            .await
            .map_err(classify)?;

        let status = resp.status();
        let headers = resp.headers().clone();
        let body = resp.bytes().await.map_err(classify)?;

        tracing::debug!(status = %status, len = body.len(), "received response");

        Ok(RawResponse::new(status, headers, body))
    }
}

/// Split reqwest failures into the transport kinds callers branch on
fn classify(e: reqwest::Error) -> DogServiceError {
    if e.is_timeout() {
        DogServiceError::Timeout(e.to_string())
    } else if e.is_connect() {
        DogServiceError::Connection(e.to_string())
    } else {
        DogServiceError::Transport(e)
    }
}
