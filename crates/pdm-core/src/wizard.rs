//! The three-step import wizard.
//!
//! ```text
//! Upload --upload--> Mapping --confirm--> Viewing
//!   ^                   |                    |
//!   +-------back--------+--------back--------+
//! ```
//!
//! Every transition either succeeds and returns a [`Notice`], or fails with a
//! [`FlowError`] and leaves the state exactly as it was. [`Wizard::dispatch`]
//! turns failures into notices so a front end never has to handle errors.

use std::path::PathBuf;

use pdm_ingest::{IngestError, SelectedFile};
use pdm_map::{MappingError, MappingState};
use pdm_model::{Notice, Record, StandardField, UploadResponse};
use pdm_store::filter_records;

use crate::error::{FlowError, Result};
use crate::service::PeopleService;

/// Which step the wizard is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Upload,
    Mapping,
    Viewing,
}

impl WizardStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Upload => "upload",
            Self::Mapping => "mapping",
            Self::Viewing => "viewing",
        }
    }
}

/// Wizard state together with the data each step carries.
#[derive(Debug, Clone)]
pub enum WizardState {
    Upload {
        selected: Option<SelectedFile>,
    },
    Mapping {
        file: SelectedFile,
        upload: UploadResponse,
        mapping: MappingState,
    },
    Viewing {
        /// Records added by the confirmation that led here.
        imported: Vec<Record>,
    },
}

impl Default for WizardState {
    fn default() -> Self {
        Self::Upload { selected: None }
    }
}

impl WizardState {
    pub fn step(&self) -> WizardStep {
        match self {
            Self::Upload { .. } => WizardStep::Upload,
            Self::Mapping { .. } => WizardStep::Mapping,
            Self::Viewing { .. } => WizardStep::Viewing,
        }
    }
}

/// A user interaction, for front ends that drive the wizard by events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardAction {
    SelectFile(PathBuf),
    Upload,
    Assign {
        column: String,
        field: StandardField,
    },
    Ignore {
        column: String,
    },
    ClearMapping,
    Confirm,
    Back,
}

/// Sequences upload, mapping and viewing over a [`PeopleService`].
#[derive(Debug)]
pub struct Wizard<S> {
    service: S,
    state: WizardState,
    people: Vec<Record>,
}

impl<S: PeopleService> Wizard<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            state: WizardState::default(),
            people: Vec::new(),
        }
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn step(&self) -> WizardStep {
        self.state.step()
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn into_service(self) -> S {
        self.service
    }

    /// Records loaded by the last confirmation or reload.
    pub fn people(&self) -> &[Record] {
        &self.people
    }

    /// Loaded records matching `term` (case-insensitive).
    pub fn search(&self, term: &str) -> Vec<&Record> {
        filter_records(&self.people, term)
    }

    /// Mapping step data, if the wizard is on that step.
    pub fn mapping(&self) -> Option<(&UploadResponse, &MappingState)> {
        match &self.state {
            WizardState::Mapping {
                upload, mapping, ..
            } => Some((upload, mapping)),
            _ => None,
        }
    }

    /// Runs `action`, converting any failure into a destructive notice.
    pub fn dispatch(&mut self, action: WizardAction) -> Notice {
        let result = match action {
            WizardAction::SelectFile(path) => self.select_file(path),
            WizardAction::Upload => self.upload(),
            WizardAction::Assign { column, field } => self.assign(&column, field),
            WizardAction::Ignore { column } => self.ignore(&column),
            WizardAction::ClearMapping => self.clear_mapping(),
            WizardAction::Confirm => self.confirm(),
            WizardAction::Back => self.back(),
        };
        result.unwrap_or_else(|error| {
            tracing::warn!(step = self.step().as_str(), %error, "wizard action failed");
            error.notice()
        })
    }

    /// Chooses the file to upload. Only names ending in `.csv` are accepted;
    /// a rejected file keeps any earlier selection.
    pub fn select_file(&mut self, path: impl Into<PathBuf>) -> Result<Notice> {
        if self.step() != WizardStep::Upload {
            return Err(self.invalid("select a file"));
        }
        let file = SelectedFile::select(path).map_err(|error| match error {
            IngestError::InvalidFileFormat { name } => FlowError::InvalidFileFormat { name },
            other => FlowError::UploadFailed(other.into()),
        })?;
        let notice = Notice::info("File selected", file.name());
        self.state = WizardState::Upload {
            selected: Some(file),
        };
        Ok(notice)
    }

    /// Uploads the selected file and moves to the mapping step.
    pub fn upload(&mut self) -> Result<Notice> {
        let file = match &self.state {
            WizardState::Upload {
                selected: Some(file),
            } => file.clone(),
            WizardState::Upload { selected: None } => return Err(FlowError::NoFileSelected),
            _ => return Err(self.invalid("upload")),
        };
        let upload = self
            .service
            .upload_file(&file)
            .map_err(FlowError::UploadFailed)?;
        let mapping = MappingState::new(upload.columns.clone(), upload.suggestions.clone());
        let notice = Notice::info(
            "File uploaded",
            format!(
                "{} columns, {} suggested",
                upload.columns.len(),
                mapping.mapping().len()
            ),
        );
        self.state = WizardState::Mapping {
            file,
            upload,
            mapping,
        };
        Ok(notice)
    }

    /// Maps `column` to `field` during the mapping step.
    pub fn assign(&mut self, column: &str, field: StandardField) -> Result<Notice> {
        let mapping = self.mapping_mut("assign a column")?;
        mapping.assign(column, field).map_err(mapping_error)?;
        Ok(Notice::info(
            "Mapping updated",
            format!("{column} -> {}", field.label()),
        ))
    }

    /// Ignores `column` during the mapping step.
    pub fn ignore(&mut self, column: &str) -> Result<Notice> {
        let mapping = self.mapping_mut("ignore a column")?;
        mapping.ignore(column).map_err(mapping_error)?;
        Ok(Notice::info("Mapping updated", format!("{column} ignored")))
    }

    /// Ignores every column, discarding the suggestions.
    pub fn clear_mapping(&mut self) -> Result<Notice> {
        self.mapping_mut("clear the mapping")?.clear();
        Ok(Notice::info("Mapping cleared", "Every column is ignored"))
    }

    /// Confirms the mapping, imports the file and shows the full store.
    ///
    /// Blocked while no column is mapped; the service is not called then.
    pub fn confirm(&mut self) -> Result<Notice> {
        let (file, confirmed) = match &self.state {
            WizardState::Mapping { file, mapping, .. } => {
                (file.clone(), mapping.confirm().map_err(mapping_error)?)
            }
            _ => return Err(self.invalid("confirm a mapping")),
        };
        let imported = self
            .service
            .process_csv(&file, &confirmed)
            .map_err(FlowError::ProcessingFailed)?;
        let people = self
            .service
            .get_people()
            .map_err(FlowError::ProcessingFailed)?;
        tracing::info!(
            imported = imported.len(),
            total = people.len(),
            "mapping confirmed"
        );
        self.people = people;
        self.state = WizardState::Viewing { imported };
        Ok(Notice::info("Success", "Data has been processed successfully"))
    }

    /// Returns to the upload step. Leaving the viewing step reloads the
    /// stored records first; leaving the mapping step discards the upload.
    pub fn back(&mut self) -> Result<Notice> {
        match self.state.step() {
            WizardStep::Upload => return Err(self.invalid("go back")),
            WizardStep::Mapping => {}
            WizardStep::Viewing => {
                self.people = self
                    .service
                    .get_people()
                    .map_err(FlowError::ProcessingFailed)?;
            }
        }
        self.state = WizardState::default();
        Ok(Notice::info("Upload", "Select another CSV file"))
    }

    fn mapping_mut(&mut self, action: &'static str) -> Result<&mut MappingState> {
        let step = self.state.step();
        match &mut self.state {
            WizardState::Mapping { mapping, .. } => Ok(mapping),
            _ => Err(FlowError::InvalidTransition {
                action,
                step: step.as_str(),
            }),
        }
    }

    fn invalid(&self, action: &'static str) -> FlowError {
        FlowError::InvalidTransition {
            action,
            step: self.state.step().as_str(),
        }
    }
}

fn mapping_error(error: MappingError) -> FlowError {
    match error {
        MappingError::ColumnNotFound(column) => FlowError::UnknownColumn(column),
        MappingError::NothingMapped => FlowError::MappingRequired,
    }
}
