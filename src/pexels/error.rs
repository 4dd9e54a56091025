use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Missing or invalid access key")]
    InvalidApiKey,

    #[error("PEXELS_API_KEY is not set")]
    MissingApiKey,

    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),

    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Failed to send request: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Failed to parse response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("HTTP error {0}")]
    Status(StatusCode),

    #[error("Response holds {items} items but at most {per_page} were requested")]
    PageOverflow { per_page: u32, items: usize },

    #[error("No results on the selected page")]
    NoResults,
}

impl Error {
    /// Returns `true` when the server answered 404.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Status(status) if *status == StatusCode::NOT_FOUND)
    }

    /// Returns `true` for transport failures (connection refused, timeout, broken body).
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Request(_))
    }
}
