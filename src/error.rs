use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while converting a report file
#[derive(Error, Debug)]
pub enum Error {
    /// Error reading the input report
    #[error("failed to read file '{}'", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error writing the output JSON
    #[error("failed to write file '{}'", .path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error serializing the tree to JSON
    #[error("failed to serialize JSON")]
    JsonSerialize(#[from] serde_json::Error),
}

/// Result type alias for cloc-tree operations
pub type Result<T> = std::result::Result<T, Error>;
