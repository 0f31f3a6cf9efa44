use thiserror::Error;

/// Errors that can occur while loading data or talking to the corpus host
#[derive(Error, Debug)]
pub enum MatchError {
    /// Failed to reach the image corpus host
    #[error("Failed to fetch from corpus host: {0}")]
    FetchError(#[from] reqwest::Error),

    /// Catalog or category table could not be deserialized
    #[error("Failed to parse data table: {0}")]
    DataError(#[from] serde_json::Error),

    /// Catalog file could not be read
    #[error("Failed to read catalog file: {0}")]
    IoError(#[from] std::io::Error),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}
