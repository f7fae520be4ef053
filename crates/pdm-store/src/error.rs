use pdm_model::RecordId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// A record id was not greater than the id before it.
    #[error("record id {id} is not greater than the last stored id {last}")]
    IdNotIncreasing { id: RecordId, last: RecordId },
    #[error("failed to write CSV export: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to write JSON export: {0}")]
    Json(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;
