use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while fetching or storing recipe data
#[derive(Error, Debug)]
pub enum RecipeError {
    /// Remote request failed (unreachable host, timeout, body read)
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Response or stored payload was not the JSON we expect
    #[error("Failed to decode JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Favorites file could not be read or written
    #[error("Favorites storage error at {path}: {source}")]
    Storage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
