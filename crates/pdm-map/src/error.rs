//! Error types for mapping operations.

use thiserror::Error;

/// Errors from mapping operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    /// Column not found in the uploaded headers.
    #[error("column not found: {0}")]
    ColumnNotFound(String),
    /// Confirmation attempted while every column is ignored.
    #[error("map at least one column before continuing")]
    NothingMapped,
}

pub type Result<T> = std::result::Result<T, MappingError>;
