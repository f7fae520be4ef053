//! Selecting and reading an uploaded file.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::error::{IngestError, Result};

/// Required file name suffix. The check is case-sensitive.
pub const CSV_SUFFIX: &str = ".csv";

/// Checks that `name` ends in [`CSV_SUFFIX`].
pub fn validate_csv_name(name: &str) -> Result<()> {
    if name.ends_with(CSV_SUFFIX) {
        Ok(())
    } else {
        Err(IngestError::InvalidFileFormat {
            name: name.to_string(),
        })
    }
}

/// Builds the opaque id reported for an upload.
pub fn generate_file_id(now: DateTime<Utc>) -> String {
    format!("file_{}", now.timestamp_millis())
}

/// A file the user picked that passed name validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    path: PathBuf,
    name: String,
}

impl SelectedFile {
    /// Validates the file name of `path` without touching the file system.
    pub fn select(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| IngestError::MissingFileName { path: path.clone() })?;
        if let Err(error) = validate_csv_name(&name) {
            tracing::warn!(file = %name, "rejected non-CSV file");
            return Err(error);
        }
        Ok(Self { path, name })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Reads the whole file as text.
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than rejected.
    pub fn read_text(&self) -> Result<String> {
        let bytes = fs::read(&self.path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                IngestError::FileNotFound {
                    path: self.path.clone(),
                }
            } else {
                IngestError::FileRead {
                    path: self.path.clone(),
                    source: e,
                }
            }
        })?;
        tracing::debug!(file = %self.name, bytes = bytes.len(), "read upload");
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
