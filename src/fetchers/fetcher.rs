use crate::errors::FetchError;
use async_trait::async_trait;

/// Raw markup retrieved for one URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    /// URL that was requested
    pub url: String,
    /// HTTP status of the response
    pub status: u16,
    /// Response body
    pub body: String,
}

impl FetchedPage {
    pub fn new(url: impl Into<String>, status: u16, body: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            status,
            body: body.into(),
        }
    }
}

/// Retrieves page markup
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetch one URL, making exactly one request.
    ///
    /// Non-success statuses are reported as [`FetchError::Status`].
    async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError>;
}
