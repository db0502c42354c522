//! Client error types
//!
//! Defines the failures the REST client can report. Only transport/HTTP
//! failures exist; there are no domain-specific error kinds.

use thiserror::Error;

use crate::client::TransportError;

/// Errors returned by [`crate::client::ApiClient`]
#[derive(Error, Debug)]
pub enum ApiError {
    /// Non-2xx response to a GET or DELETE
    #[error("HTTP error! status: {0}")]
    Status(u16),

    /// Non-2xx response to a POST or PUT, carrying the server `detail`
    #[error("{0}")]
    Server(String),

    /// The request never produced a response
    #[error("Network error: {0}")]
    Network(String),

    /// 2xx response whose body did not match the expected shape
    #[error("Parse error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<TransportError> for ApiError {
    fn from(err: TransportError) -> Self {
        ApiError::Network(err.to_string())
    }
}

impl ApiError {
    /// HTTP status carried by the error, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status(code) => Some(*code),
            _ => None,
        }
    }
}

/// Result type alias for REST client operations
pub type ApiResult<T> = Result<T, ApiError>;
