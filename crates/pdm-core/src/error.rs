//! Error types for the wizard and the people service.

use pdm_ingest::IngestError;
use pdm_model::Notice;
use pdm_store::StoreError;
use thiserror::Error;

/// Failures inside a [`crate::PeopleService`] call.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Ingest(#[from] IngestError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Failures of a wizard transition. The wizard state is unchanged after any
/// of these.
#[derive(Debug, Error)]
pub enum FlowError {
    /// The selected file does not end in `.csv`.
    #[error("invalid file format: {name}")]
    InvalidFileFormat { name: String },

    /// Upload requested before a file was selected.
    #[error("no file selected")]
    NoFileSelected,

    /// Confirmation requested while every column is ignored.
    #[error("no column is mapped to a standard field")]
    MappingRequired,

    /// Mapping edit for a header that is not in the upload.
    #[error("column not found: {0}")]
    UnknownColumn(String),

    /// Reading, parsing or suggesting failed.
    #[error("failed to process the file: {0}")]
    UploadFailed(#[source] ServiceError),

    /// Applying the mapping or storing the records failed.
    #[error("failed to process the data: {0}")]
    ProcessingFailed(#[source] ServiceError),

    /// The action does not exist in the current step.
    #[error("cannot {action} during the {step} step")]
    InvalidTransition {
        action: &'static str,
        step: &'static str,
    },
}

impl FlowError {
    /// The user-visible notification for this failure.
    ///
    /// Processing failures share one generic message regardless of cause.
    pub fn notice(&self) -> Notice {
        match self {
            Self::InvalidFileFormat { .. } => {
                Notice::error("Invalid file format", "Please upload a CSV file")
            }
            Self::NoFileSelected => Notice::error("No file selected", "Choose a CSV file first"),
            Self::MappingRequired => Notice::error(
                "Mapping required",
                "Map at least one column before continuing",
            ),
            Self::UnknownColumn(column) => Notice::error(
                "Unknown column",
                format!("{column} is not a column of the uploaded file"),
            ),
            Self::UploadFailed(_) => Notice::error("Error", "Failed to process the file"),
            Self::ProcessingFailed(_) => Notice::error("Error", "Failed to process the data"),
            Self::InvalidTransition { action, step } => Notice::error(
                "Action unavailable",
                format!("Cannot {action} during the {step} step"),
            ),
        }
    }
}

pub type Result<T> = std::result::Result<T, FlowError>;
