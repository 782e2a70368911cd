//! Error types for the template catalog

use std::path::PathBuf;

/// Errors while building the template catalog
///
/// Lookups never fail: an unknown identity is `None`, not an error.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    /// Template definition could not be decoded
    #[error("invalid template definition '{id}': {message}")]
    InvalidDefinition { id: String, message: String },

    /// IO error while reading a template directory
    #[error("io error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Template file name does not yield an identity
    #[error("cannot derive template identity from {0}")]
    InvalidFileName(PathBuf),
}

impl TemplateError {
    /// Create invalid-definition error
    pub fn invalid(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidDefinition {
            id: id.into(),
            message: message.into(),
        }
    }

    /// Create IO error for path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
