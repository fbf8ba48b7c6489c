use thiserror::Error;

/// Everything that can go wrong between the catalog host and the screen
#[derive(Error, Debug)]
pub enum Error {
    #[error("Catalog request failed: {0}")]
    ApiError(#[from] shopscout_api::CatalogError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
