// Centralized error handling for checksum operations
// Every failure carries enough context to tell the caller what went wrong and where

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Coarse classification of a [`ChecksumError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The algorithm name is not known to the digest provider
    UnsupportedAlgorithm,
    /// A file or directory could not be read
    Io,
    /// A value could not be encoded into canonical bytes
    Serialization,
}

/// Main error type for checksum computation
#[derive(Debug, Error)]
pub enum ChecksumError {
    #[error(
        "Unsupported checksum algorithm: {algorithm}\n\
         Suggestion: Use one of MD2, MD4, MD5, SHA-1, SHA-256, SHA-384 or SHA-512 (names are case-sensitive)"
    )]
    UnsupportedAlgorithm { algorithm: String },

    #[error(
        "File not found: {}\nSuggestion: Check that the path is correct and the file exists",
        .path.display()
    )]
    FileNotFound { path: PathBuf },

    #[error(
        "Permission denied while {operation} {}\nSuggestion: Check file permissions or run with appropriate privileges",
        .path.display()
    )]
    PermissionDenied { path: PathBuf, operation: String },

    #[error(
        "I/O error while {operation}{}: {source}\nSuggestion: Check that the path is readable and the volume is mounted",
        display_path(.path)
    )]
    IoError {
        path: Option<PathBuf>,
        operation: String,
        #[source]
        source: io::Error,
    },

    #[error(
        "Failed to serialize value into canonical bytes: {source}\n\
         Suggestion: Make sure every field of the value implements Serialize without custom errors"
    )]
    SerializationFailed {
        #[source]
        source: bincode::Error,
    },
}

fn display_path(path: &Option<PathBuf>) -> String {
    match path {
        Some(p) => format!(" {}", p.display()),
        None => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, ChecksumError>;

impl ChecksumError {
    /// Build an I/O error, promoting well-known kinds to their dedicated variants
    pub fn from_io_error(err: io::Error, operation: &str, path: Option<&Path>) -> Self {
        match (err.kind(), path) {
            (io::ErrorKind::NotFound, Some(p)) => ChecksumError::FileNotFound {
                path: p.to_path_buf(),
            },
            (io::ErrorKind::PermissionDenied, Some(p)) => ChecksumError::PermissionDenied {
                path: p.to_path_buf(),
                operation: operation.to_string(),
            },
            _ => ChecksumError::IoError {
                path: path.map(Path::to_path_buf),
                operation: operation.to_string(),
                source: err,
            },
        }
    }

    pub fn unsupported(algorithm: impl Into<String>) -> Self {
        ChecksumError::UnsupportedAlgorithm {
            algorithm: algorithm.into(),
        }
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            ChecksumError::UnsupportedAlgorithm { .. } => FailureKind::UnsupportedAlgorithm,
            ChecksumError::FileNotFound { .. }
            | ChecksumError::PermissionDenied { .. }
            | ChecksumError::IoError { .. } => FailureKind::Io,
            ChecksumError::SerializationFailed { .. } => FailureKind::Serialization,
        }
    }

    /// Path the failure relates to, if any
    pub fn path(&self) -> Option<&Path> {
        match self {
            ChecksumError::FileNotFound { path } | ChecksumError::PermissionDenied { path, .. } => {
                Some(path.as_path())
            }
            ChecksumError::IoError { path, .. } => path.as_deref(),
            _ => None,
        }
    }
}

impl From<bincode::Error> for ChecksumError {
    fn from(source: bincode::Error) -> Self {
        ChecksumError::SerializationFailed { source }
    }
}
