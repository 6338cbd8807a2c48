use std::path::PathBuf;
use thiserror::Error;

/// Everything that can end a conversion run.
#[derive(Debug, Error)]
pub enum Error {
    /// Input file could not be opened or read.
    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input is not valid JSON or not shaped like `{"objects": [...]}`.
    #[error("invalid sales JSON at {json_path}: {message}")]
    Parse { json_path: String, message: String },

    /// Output file could not be created.
    #[error("failed to create {path}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Destination stream failed mid-write.
    #[error("failed to write output")]
    Write(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
