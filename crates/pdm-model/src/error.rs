use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("unknown standard field: {0}")]
    UnknownField(String),
    #[error("invalid mapping entry '{0}' (expected HEADER=FIELD)")]
    InvalidMappingEntry(String),
    #[error("no column is mapped to a standard field")]
    EmptyMapping,
}

pub type Result<T> = std::result::Result<T, ModelError>;
