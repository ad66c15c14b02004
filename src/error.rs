//! Error types for facelift operations.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while standardizing a page or a folder of pages.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error on {path}: {source}")]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory scan failed: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Serialization failed: {0}")]
    Serialize(std::io::Error),

    #[error("Missing required element: {0}")]
    MissingElement(String),

    #[error("Invalid page path: {0}")]
    InvalidPath(PathBuf),
}

impl Error {
    /// Attach a path to an I/O error.
    pub fn file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::File {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
