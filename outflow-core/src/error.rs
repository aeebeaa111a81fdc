//! Outflow error abstractions.

use thiserror::Error;

/// Application error variants.
#[derive(Debug, Error)]
pub enum AppError {
    /// The given input was invalid.
    #[error("validation error: {0}")]
    InvalidInput(String),
    /// The data source specified in the path is not registered.
    #[error("the data source specified in the path is not registered")]
    UnknownDataSource,
    /// A manifest could not be serialized to YAML.
    #[error("error serializing manifest to YAML: {0}")]
    Serialize(#[from] serde_yaml::Error),
    /// The server has hit an internal error, but will remain online.
    #[error("internal server error")]
    Ise(anyhow::Error),
}
