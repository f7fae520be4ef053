//! The upload / process / fetch contract and its in-process implementation.

use chrono::Utc;
use pdm_ingest::{SelectedFile, generate_file_id, parse_csv_text};
use pdm_map::{SuggestionEngine, apply_mapping};
use pdm_model::{ConfirmedMapping, Record, StandardField, UploadResponse};
use pdm_store::RecordStore;

use crate::error::ServiceError;

/// Operations the wizard needs from whatever holds the people data.
pub trait PeopleService {
    /// Reads and parses `file`, returning its columns and suggestions.
    fn upload_file(&mut self, file: &SelectedFile) -> Result<UploadResponse, ServiceError>;

    /// Applies `mapping` to every row of `file` and stores the new records.
    fn process_csv(
        &mut self,
        file: &SelectedFile,
        mapping: &ConfirmedMapping,
    ) -> Result<Vec<Record>, ServiceError>;

    /// Every stored record in insertion order.
    fn get_people(&self) -> Result<Vec<Record>, ServiceError>;
}

/// [`PeopleService`] backed by an owned [`RecordStore`].
///
/// Each instance is an isolated session; nothing is shared between them.
#[derive(Debug, Default)]
pub struct LocalPeopleService {
    store: RecordStore,
    engine: SuggestionEngine,
}

impl LocalPeopleService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn into_store(self) -> RecordStore {
        self.store
    }
}

impl PeopleService for LocalPeopleService {
    fn upload_file(&mut self, file: &SelectedFile) -> Result<UploadResponse, ServiceError> {
        let parsed = parse_csv_text(&file.read_text()?)?;
        let suggestions = self.engine.suggest(&parsed.headers);
        tracing::info!(
            file = %file.name(),
            columns = parsed.header_count(),
            suggested = suggestions.mapping.len(),
            "uploaded file"
        );
        Ok(UploadResponse {
            file_id: generate_file_id(Utc::now()),
            columns: parsed.headers,
            suggestions: suggestions.mapping,
            standard_columns: StandardField::catalog(),
        })
    }

    fn process_csv(
        &mut self,
        file: &SelectedFile,
        mapping: &ConfirmedMapping,
    ) -> Result<Vec<Record>, ServiceError> {
        let parsed = parse_csv_text(&file.read_text()?)?;
        let outcome = apply_mapping(
            &parsed.headers,
            &parsed.rows,
            mapping,
            self.store.ids_mut(),
        );
        self.store.append(outcome.records.clone())?;
        tracing::info!(
            file = %file.name(),
            added = outcome.records.len(),
            total = self.store.len(),
            "processed file"
        );
        Ok(outcome.records)
    }

    fn get_people(&self) -> Result<Vec<Record>, ServiceError> {
        Ok(self.store.all().to_vec())
    }
}
