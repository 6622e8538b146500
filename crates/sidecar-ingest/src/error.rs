//! Error types for sidecar ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while discovering or loading sidecars.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Directory not found or not a directory.
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Input path does not exist.
    #[error("path not found: {path}")]
    PathNotFound { path: PathBuf },

    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read a sidecar file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Load Errors ===
    /// File content is not valid JSON.
    #[error("failed to parse JSON {path}: {source}")]
    JsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// File parsed, but the top-level value is not an object.
    #[error("expected a JSON object in {path}, found {kind}")]
    NotAnObject { path: PathBuf, kind: &'static str },
}

impl IngestError {
    /// Path of the file or directory the error refers to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::DirectoryNotFound { path }
            | Self::PathNotFound { path }
            | Self::DirectoryRead { path, .. }
            | Self::FileRead { path, .. }
            | Self::JsonParse { path, .. }
            | Self::NotAnObject { path, .. } => path,
        }
    }

    /// Whether this is a load failure for a single sidecar file.
    pub fn is_load_error(&self) -> bool {
        matches!(
            self,
            Self::FileRead { .. } | Self::JsonParse { .. } | Self::NotAnObject { .. }
        )
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
