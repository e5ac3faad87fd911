use bytes::Bytes;
use http::{HeaderMap, StatusCode};
use serde::de::DeserializeOwned;

use crate::error::DogServiceError;
use crate::model::{Dog, ErrorBody};

/// Fully buffered HTTP response as received from the transport
#[derive(Debug, Clone)]
pub struct RawResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Bytes,
}

impl RawResponse {
    /// Create a response from buffered bytes
    #[must_use]
    pub fn new(status: StatusCode, headers: HeaderMap, body: Bytes) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Get the HTTP status code
    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Get the response headers
    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Consume the response and return the body as bytes
    #[must_use]
    pub fn bytes(self) -> Bytes {
        self.body
    }

    /// Deserialize the body as JSON
    ///
    /// # Errors
    /// Returns [`DogServiceError::Parse`] if the body is not valid JSON for `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, DogServiceError> {
        Ok(serde_json::from_slice(&self.body)?)
    }
}

/// The two statuses `GET /dogs` may legitimately answer with
#[must_use]
pub fn is_accepted_status(status: StatusCode) -> bool {
    status == StatusCode::OK || status == StatusCode::NOT_FOUND
}

/// Parsed body of an accepted `GET /dogs` response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DogsBody {
    /// 200: the dogs matching the requested breed
    Dogs(Vec<Dog>),
    /// 404: the server has no dogs for the requested breed
    NotFound(ErrorBody),
}

/// Result of one `GET /dogs` call: status and body, always set together.
///
/// Only 200 and 404 produce an envelope; any other status surfaces as
/// [`DogServiceError::UnexpectedStatus`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseEnvelope {
    status: StatusCode,
    body: DogsBody,
}

impl ResponseEnvelope {
    /// Turn a raw response into an envelope, rejecting unaccepted statuses.
    ///
    /// # Errors
    /// - [`DogServiceError::UnexpectedStatus`] for anything but 200 or 404
    /// - [`DogServiceError::Parse`] when the body does not match the status
    pub fn from_raw(raw: RawResponse) -> Result<Self, DogServiceError> {
        let status = raw.status();
        if !is_accepted_status(status) {
            return Err(DogServiceError::UnexpectedStatus {
                status,
                body: raw.bytes(),
            });
        }

        let body = if status == StatusCode::OK {
            DogsBody::Dogs(raw.json()?)
        } else {
            DogsBody::NotFound(raw.json()?)
        };

        Ok(Self { status, body })
    }

    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    #[must_use]
    pub fn body(&self) -> &DogsBody {
        &self.body
    }

    #[must_use]
    pub fn into_body(self) -> DogsBody {
        self.body
    }

    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self.body, DogsBody::Dogs(_))
    }

    /// The dogs, if the server found any
    #[must_use]
    pub fn dogs(&self) -> Option<&[Dog]> {
        match &self.body {
            DogsBody::Dogs(dogs) => Some(dogs),
            DogsBody::NotFound(_) => None,
        }
    }

    /// The error record, if the server answered 404
    #[must_use]
    pub fn not_found(&self) -> Option<&ErrorBody> {
        match &self.body {
            DogsBody::NotFound(err) => Some(err),
            DogsBody::Dogs(_) => None,
        }
    }
}
