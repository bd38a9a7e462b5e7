use std::path::PathBuf;

use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("ERROR: Invalid data path {path}")]
    InvalidDataPath { path: String },

    #[error("Failed to load {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: morphcheck::Error,
    },

    #[error("{0}")]
    Library(#[from] morphcheck::Error),

    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),
}
