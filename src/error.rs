//! Error types for path helper operations

use thiserror::Error;

/// The error type for path helper operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// A required argument was empty
    #[error("{function} parameter '{parameter}' must not be empty")]
    InvalidArgument {
        function: &'static str,
        parameter: &'static str,
    },

    /// Platform name not recognised when parsing configuration
    #[error("Unknown platform: {name} - expected 'posix' or 'windows'")]
    UnknownPlatform { name: String },
}

impl PathError {
    pub(crate) fn empty(function: &'static str, parameter: &'static str) -> Self {
        PathError::InvalidArgument {
            function,
            parameter,
        }
    }
}

/// Result type for path helper operations
pub type Result<T> = std::result::Result<T, PathError>;
