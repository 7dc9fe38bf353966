//! Error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading post data or configuration.
///
/// None of these reach the page: the controller turns load failures into an
/// empty post set.
#[derive(Debug, Error)]
pub enum ListError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid post data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no embedded data block with id {0:?}")]
    MissingEmbeddedData(String),

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, ListError>;
