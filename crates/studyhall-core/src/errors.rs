use anyhow::Error;
use std::fmt;

/// Classification of a failed API interaction.
///
/// Every asynchronous action in the client terminates at the caller as an
/// [`ApiError`] carrying one of these kinds; nothing is thrown to a global
/// handler and nothing is retried automatically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request could not be sent, or timed out in flight.
    Network,
    /// The server answered with a non-success status code.
    Status(u16),
    /// The response body could not be decoded into the expected shape.
    Decode,
    /// The payload was rejected locally, before any request was sent.
    Validation,
}

#[derive(Debug)]
pub struct ApiError {
    pub kind: ErrorKind,
    pub error: Error,
}

impl ApiError {
    pub fn new<E>(kind: ErrorKind, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            kind,
            error: err.into(),
        }
    }

    pub fn network<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::Network, err)
    }

    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Status(status), anyhow::anyhow!(message.into()))
    }

    pub fn decode<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::Decode, err)
    }

    pub fn validation<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::Validation, err)
    }

    /// Status code of the failed response, if the server answered at all.
    pub fn status_code(&self) -> Option<u16> {
        match self.kind {
            ErrorKind::Status(code) => Some(code),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status_code() == Some(404)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ErrorKind::Network => write!(f, "network error: {}", self.error),
            ErrorKind::Status(code) => write!(f, "server error ({}): {}", code, self.error),
            ErrorKind::Decode => write!(f, "invalid response: {}", self.error),
            ErrorKind::Validation => write!(f, "validation error: {}", self.error),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.error.source()
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        ApiError::validation(err)
    }
}
