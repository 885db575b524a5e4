use thiserror::Error;

/// Failure to retrieve a single page
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The server answered with a non-success status
    #[error("HTTP {status} fetching {url}")]
    Status { url: String, status: u16 },

    /// The request never produced a response (DNS, connect, TLS, bad URL, ...)
    #[error("transport error fetching {url}: {message}")]
    Transport { url: String, message: String },
}

impl FetchError {
    /// URL the failed request was made for
    pub fn url(&self) -> &str {
        match self {
            FetchError::Status { url, .. } | FetchError::Transport { url, .. } => url,
        }
    }

    /// HTTP status code, if the server responded at all
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            FetchError::Transport { .. } => None,
        }
    }
}

/// Errors surfaced by the analyzer
#[derive(Error, Debug)]
pub enum AnalyzerError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("failed to load stop words from {path}: {source}")]
    StopWords {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid URL pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("invalid CSS selector `{0}`")]
    Selector(String),

    #[error("CSV export failed: {0}")]
    Export(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
