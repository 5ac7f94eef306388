use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Missing or invalid API key")]
    InvalidApiKey,

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Bad request")]
    BadRequest,

    #[error("You have exceeded your rate limit")]
    QuotaExceeded,

    #[error("API error {status}: {reason}")]
    Api { status: StatusCode, reason: String },

    #[error("Failed to parse response: {0}")]
    MalformedResponse(String),

    #[error("Failed to send request: {0}")]
    Request(#[from] reqwest::Error),
}

impl Error {
    pub(crate) fn invalid<T: Into<String>>(message: T) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub(crate) fn malformed<T: ToString>(err: T) -> Self {
        Self::MalformedResponse(err.to_string())
    }
}
