//! Mapping state for the interactive mapping step.
//!
//! Holds the uploaded columns, the engine's suggestions, and the user's
//! current assignments until they are confirmed.

use std::collections::HashSet;

use pdm_model::{ColumnMapping, ConfirmedMapping, StandardField};

use crate::error::{MappingError, Result};

/// Editable header-to-field assignments for one upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingState {
    columns: Vec<String>,
    suggestions: ColumnMapping,
    mapping: ColumnMapping,
}

impl MappingState {
    /// Creates the state with every suggestion for a known column pre-applied.
    pub fn new(columns: Vec<String>, suggestions: ColumnMapping) -> Self {
        let mapping = columns
            .iter()
            .filter_map(|column| suggestions.get(column).map(|field| (column.clone(), field)))
            .collect();
        Self {
            columns,
            suggestions,
            mapping,
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn suggestions(&self) -> &ColumnMapping {
        &self.suggestions
    }

    pub fn mapping(&self) -> &ColumnMapping {
        &self.mapping
    }

    /// Current assignment for a column.
    pub fn field_for(&self, column: &str) -> Option<StandardField> {
        self.mapping.get(column)
    }

    /// Assigns `field` to `column`.
    pub fn assign(&mut self, column: &str, field: StandardField) -> Result<()> {
        self.ensure_column(column)?;
        self.mapping.assign(column, field);
        Ok(())
    }

    /// Marks `column` as ignored, returning its previous assignment.
    pub fn ignore(&mut self, column: &str) -> Result<Option<StandardField>> {
        self.ensure_column(column)?;
        Ok(self.mapping.ignore(column))
    }

    /// Drops every assignment, including the pre-applied suggestions.
    pub fn clear(&mut self) {
        self.mapping = ColumnMapping::new();
    }

    /// Status of a column's assignment.
    pub fn column_status(&self, column: &str) -> ColumnStatus {
        match (self.mapping.get(column), self.suggestions.get(column)) {
            (None, _) => ColumnStatus::Ignored,
            (Some(current), Some(suggested)) if current == suggested => ColumnStatus::Suggested,
            (Some(_), _) => ColumnStatus::Manual,
        }
    }

    /// True when at least one column is assigned.
    pub fn can_confirm(&self) -> bool {
        !self.mapping.is_empty()
    }

    /// Produces the confirmed mapping; fails if nothing is assigned.
    pub fn confirm(&self) -> Result<ConfirmedMapping> {
        ConfirmedMapping::new(self.mapping.clone()).map_err(|_| MappingError::NothingMapped)
    }

    /// Get summary counts.
    pub fn summary(&self) -> MappingSummary {
        let unique: HashSet<&str> = self.columns.iter().map(String::as_str).collect();
        let mapped = unique
            .iter()
            .filter(|column| self.mapping.get(column).is_some())
            .count();
        let suggested = unique
            .iter()
            .filter(|column| self.column_status(column) == ColumnStatus::Suggested)
            .count();
        MappingSummary {
            total_columns: unique.len(),
            mapped,
            suggested,
            ignored: unique.len() - mapped,
        }
    }

    fn ensure_column(&self, column: &str) -> Result<()> {
        if self.columns.iter().any(|c| c == column) {
            Ok(())
        } else {
            Err(MappingError::ColumnNotFound(column.to_string()))
        }
    }
}

/// Status of a column's assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnStatus {
    /// Assigned to the field the engine suggested.
    Suggested,
    /// Assigned by the user to a field the engine did not suggest.
    Manual,
    /// Not assigned; the column is ignored.
    Ignored,
}

/// Summary of mapping counts over distinct column headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MappingSummary {
    pub total_columns: usize,
    pub mapped: usize,
    pub suggested: usize,
    pub ignored: usize,
}
