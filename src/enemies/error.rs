//! Error types for enemy definition loading.

use thiserror::Error;

/// Errors that can occur when loading enemy definition data.
#[derive(Debug, Error)]
pub enum DataLoadError {
    /// File could not be read.
    #[error("Failed to read enemy definition '{path}': {details}")]
    ReadError { path: String, details: String },

    /// RON parsing failed.
    #[error("Parse error in '{path}': {details}")]
    ParseError { path: String, details: String },

    /// File name does not match any enemy kind.
    #[error("Unknown enemy kind '{0}'")]
    UnknownKind(String),
}
