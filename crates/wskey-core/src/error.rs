//! Error types for wskey-core

use thiserror::Error;

/// Result type alias for wskey operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for handshake key handling
#[derive(Debug, Error)]
pub enum Error {
    /// Key text longer than any encoded 16-byte nonce
    #[error("Invalid argument: key is {len} bytes, at most {max} allowed")]
    InvalidArgument { len: usize, max: usize },

    /// Key failed strict validation
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Required handshake header absent
    #[error("Missing header: {0}")]
    MissingHeader(&'static str),

    /// Invalid header
    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    /// Random source could not produce output
    #[error("Environment failure: {0}")]
    EnvironmentFailure(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<rand::Error> for Error {
    fn from(err: rand::Error) -> Self {
        Error::EnvironmentFailure(err.to_string())
    }
}

impl From<http::header::InvalidHeaderValue> for Error {
    fn from(err: http::header::InvalidHeaderValue) -> Self {
        Error::InvalidHeader(err.to_string())
    }
}
