/// Errors that can occur while writing to the search index
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// Index server unreachable or timed out
    #[error("Search index unavailable: {0}")]
    Unavailable(String),
    /// Index server answered with a non-success status
    #[error("Search index error ({status}): {body}")]
    Status { status: u16, body: String },
    /// Any other transport failure
    #[error("HTTP error: {0}")]
    Http(String),
}

impl From<reqwest::Error> for SearchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Unavailable(format!("Request timeout: {}", err))
        } else if err.is_connect() {
            Self::Unavailable(format!("Connection failed: {}", err))
        } else {
            Self::Http(err.to_string())
        }
    }
}
