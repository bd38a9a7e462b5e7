//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O, SWC and Neurolucida reader errors, and provides
//! semantic variants for unsupported inputs.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("SWC reader error: {0}")]
    Swc(#[from] crate::io::SwcError),

    #[error("Neurolucida reader error: {0}")]
    Asc(#[from] crate::io::AscError),

    #[error("Unsupported morphology file format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("Failed to read directory {}: {source}", path.display())]
    Discovery {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
