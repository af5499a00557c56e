#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Network error: {0}")]
    Network(reqwest::Error),

    #[error("Cannot read response body: {0}")]
    Body(reqwest::Error),

    #[error("Response body is empty")]
    EmptyBody,

    #[error("Cannot start runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

impl FetchError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, FetchError::Timeout(_))
    }

    /// Maps a reqwest error raised while sending the request.
    pub(crate) fn from_send(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            FetchError::Timeout(e.to_string())
        } else {
            FetchError::Network(e)
        }
    }

    /// Maps a reqwest error raised while reading the body.
    pub(crate) fn from_body(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            FetchError::Timeout(e.to_string())
        } else {
            FetchError::Body(e)
        }
    }
}
