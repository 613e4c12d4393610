//! Client error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport-level failure (connect, timeout, decode)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with an error envelope
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// A success envelope arrived without the expected payload
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

pub type ClientResult<T> = Result<T, ClientError>;
