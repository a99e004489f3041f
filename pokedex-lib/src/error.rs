/// Errors from loading the Pokemon catalogue.
#[derive(Debug, thiserror::Error)]
pub enum CatalogueError {
    /// The catalogue resource could not be read (missing file, network, HTTP status).
    #[error("Catalogue unavailable: {0}")]
    Unavailable(String),

    /// The resource was read but is not a valid catalogue.
    #[error("Catalogue malformed: {0}")]
    Malformed(String),
}

impl CatalogueError {
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::Malformed(msg.into())
    }
}

impl From<reqwest::Error> for CatalogueError {
    fn from(e: reqwest::Error) -> Self {
        Self::Unavailable(e.to_string())
    }
}
