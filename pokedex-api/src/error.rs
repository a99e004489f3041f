/// Errors that can occur while talking to PokeAPI.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("PokeAPI returned HTTP {status} for {url}")]
    Status { status: u16, url: String },

    #[error("Failed to parse response from {url}: {message}")]
    Parse { url: String, message: String },
}
