//! Structures exchanged between the upload step and the mapping step.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::{ColumnMapping, StandardField};

/// Result of uploading a CSV file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResponse {
    /// Opaque identifier of the uploaded file.
    pub file_id: String,
    /// Trimmed headers from the first line, in column order.
    pub columns: Vec<String>,
    /// Suggested header assignments.
    pub suggestions: ColumnMapping,
    /// Field identifier to label table.
    pub standard_columns: BTreeMap<StandardField, String>,
}
