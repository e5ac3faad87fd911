use std::io;

use bytes::Bytes;
use http::StatusCode;
use thiserror::Error;

/// Every way a call to the dogs backend can fail
#[derive(Debug, Error)]
pub enum DogServiceError {
    #[error("Request build error: {0}")]
    Build(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Timeout: {0}")]
    Timeout(String),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a status outside the accepted set (200, 404)
    #[error("Unexpected status: {status}")]
    UnexpectedStatus { status: StatusCode, body: Bytes },

    #[error("Malformed JSON body: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Blocking call issued from inside an async runtime")]
    BlockingInAsync,

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl DogServiceError {
    /// True for network-level failures (connect, timeout, other transport errors)
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Connection(_) | Self::Timeout(_) | Self::Transport(_)
        )
    }

    /// Status code carried by the error, if the server answered at all
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::UnexpectedStatus { status, .. } => Some(*status),
            Self::Transport(e) => e.status(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_classification() {
        assert!(DogServiceError::Connection("refused".into()).is_transport());
        assert!(DogServiceError::Timeout("elapsed".into()).is_transport());
        assert!(!DogServiceError::Build("bad url".into()).is_transport());

        let unexpected = DogServiceError::UnexpectedStatus {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: Bytes::new(),
        };
        assert!(!unexpected.is_transport());
        assert_eq!(unexpected.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
    }

    #[test]
    fn test_parse_error_from_serde() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = DogServiceError::from(err);
        assert!(matches!(err, DogServiceError::Parse(_)));
        assert_eq!(err.status(), None);
    }
}
