use std::time::Duration;

use url::Url;

use crate::error::DogServiceError;
use crate::request::Request;
use crate::response::ResponseEnvelope;
use crate::transport::HttpTransport;

/// Path of the dogs resource, relative to the endpoint
pub const DOGS_PATH: &str = "/dogs";

/// Query parameter carrying the breed filter
pub const BREED_PARAM: &str = "breed";

const ENV_BASE_URL: &str = "DOG_SERVICE_URL";
const ENV_TIMEOUT_SECS: &str = "DOG_SERVICE_TIMEOUT_SECS";

/// Configuration for [`DogService`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DogServiceConfig {
    pub base_url: String,
    /// Per-request timeout; `None` leaves the transport default in place
    pub timeout: Option<Duration>,
}

impl DogServiceConfig {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: None,
        }
    }

    /// Set a custom request timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Create configuration from environment variables
    ///
    /// Expects:
    /// - `DOG_SERVICE_URL`: base URL of the dogs backend (required)
    /// - `DOG_SERVICE_TIMEOUT_SECS`: request timeout in whole seconds (optional)
    ///
    /// # Errors
    /// Returns [`DogServiceError::Build`] if the URL is missing or the timeout
    /// is not a number.
    pub fn from_env() -> Result<Self, DogServiceError> {
        let base_url = std::env::var(ENV_BASE_URL)
            .map_err(|_| DogServiceError::Build(format!("{ENV_BASE_URL} not set")))?;

        let mut config = Self::new(base_url);
        if let Ok(raw) = std::env::var(ENV_TIMEOUT_SECS) {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                DogServiceError::Build(format!("{ENV_TIMEOUT_SECS} is not a number: {raw}"))
            })?;
            config = config.with_timeout(Duration::from_secs(secs));
        }

        Ok(config)
    }
}

/// Client for the dogs backend.
///
/// Holds only the immutable endpoint and a connection pool, so one instance
/// can serve any number of concurrent calls.
#[derive(Debug, Clone)]
pub struct DogService {
    endpoint: String,
    transport: HttpTransport,
}

impl DogService {
    /// Create a client for `base_url` with default configuration
    ///
    /// # Errors
    /// Returns [`DogServiceError::Build`] for an invalid endpoint.
    pub fn new(base_url: impl Into<String>) -> Result<Self, DogServiceError> {
        Self::from_config(DogServiceConfig::new(base_url))
    }

    /// Create client from configuration
    ///
    /// # Errors
    /// Returns [`DogServiceError::Build`] if the endpoint is not an absolute
    /// http(s) URL or the HTTP client cannot be built.
    pub fn from_config(config: DogServiceConfig) -> Result<Self, DogServiceError> {
        let DogServiceConfig { base_url, timeout } = config;
        let endpoint = validate_endpoint(&base_url)?;
        let transport = HttpTransport::new(timeout)?;
        Ok(Self {
            endpoint,
            transport,
        })
    }

    /// Base URL this client targets, without trailing slash
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch the dogs of one breed: `GET {endpoint}/dogs?breed={breed}`.
    ///
    /// Performs exactly one round trip. A 200 yields the list, a 404 yields
    /// the server's error record; both are `Ok`.
    ///
    /// # Errors
    /// - [`DogServiceError::Connection`], [`DogServiceError::Timeout`] or
    ///   [`DogServiceError::Transport`] when the server cannot be reached
    /// - [`DogServiceError::UnexpectedStatus`] for any status but 200 or 404
    /// - [`DogServiceError::Parse`] for a body that is not the expected JSON
    pub async fn get_dogs(&self, breed: &str) -> Result<ResponseEnvelope, DogServiceError> {
        let request = dogs_request(breed)?;
        let raw = self.transport.execute(&self.endpoint, &request).await?;
        ResponseEnvelope::from_raw(raw)
    }

    /// Blocking version of [`get_dogs`](Self::get_dogs) for sync contexts.
    ///
    /// Runs the request on a temporary current-thread runtime.
    ///
    /// # Errors
    /// Same as [`get_dogs`](Self::get_dogs), plus
    /// [`DogServiceError::BlockingInAsync`] when called from inside a tokio
    /// runtime and [`DogServiceError::Io`] if the runtime cannot start.
    pub fn get_dogs_blocking(&self, breed: &str) -> Result<ResponseEnvelope, DogServiceError> {
        if tokio::runtime::Handle::try_current().is_ok() {
            return Err(DogServiceError::BlockingInAsync);
        }

        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?
            .block_on(self.get_dogs(breed))
    }
}

/// The one request `get_dogs` sends for `breed`
///
/// # Errors
/// Never in practice; the path is always set.
pub fn dogs_request(breed: &str) -> Result<Request, DogServiceError> {
    Request::builder()
        .path(DOGS_PATH)
        .query(BREED_PARAM, breed)
        .accept_json()
        .build()
}

fn validate_endpoint(base_url: &str) -> Result<String, DogServiceError> {
    let parsed = Url::parse(base_url)
        .map_err(|e| DogServiceError::Build(format!("Invalid endpoint {base_url}: {e}")))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(DogServiceError::Build(format!(
            "Unsupported endpoint scheme: {}",
            parsed.scheme()
        )));
    }

    Ok(base_url.trim_end_matches('/').to_owned())
}
