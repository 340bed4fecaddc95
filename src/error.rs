//! Error types for modcache
//!
//! All modules use `ModcacheResult<T>` as their return type.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for modcache operations
pub type ModcacheResult<T> = Result<T, ModcacheError>;

/// All errors that can occur in modcache
#[derive(Error, Debug)]
pub enum ModcacheError {
    // Manifest errors
    #[error("node_modules cache validation failed: {0} does not exist")]
    ManifestMissing(PathBuf),

    #[error("Failed to parse {path}: {source}")]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    // IO errors
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    // Process errors
    #[error("Command failed: {command}")]
    CommandFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Command failed: {command}, exit code: {code}")]
    CommandExit { command: String, code: i32 },

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ModcacheError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Create a command failed error
    pub fn command_failed(command: impl Into<String>, source: std::io::Error) -> Self {
        Self::CommandFailed {
            command: command.into(),
            source,
        }
    }
}
