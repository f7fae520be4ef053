//! Error types for file selection and CSV parsing.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while selecting, reading or parsing an upload.
#[derive(Debug, Error)]
pub enum IngestError {
    // === Selection Errors ===
    /// File name does not end in `.csv`.
    #[error("invalid file format: {name} is not a .csv file")]
    InvalidFileFormat { name: String },

    /// Path has no usable file name component.
    #[error("path has no file name: {path}")]
    MissingFileName { path: PathBuf },

    // === File System Errors ===
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Parsing Errors ===
    /// The CSV reader rejected the input.
    #[error("failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
