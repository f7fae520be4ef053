//! Runs the wizard non-interactively for a list of files.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use pdm_core::{LocalPeopleService, Wizard, WizardAction, WizardState};
use pdm_map::ColumnStatus;
use pdm_model::{ColumnMapping, Notice, Record, StandardField};
use tracing::{debug, info_span, trace};

use crate::logging::redact_value;

/// How each file's suggested mapping is edited before confirmation.
#[derive(Debug, Clone)]
pub struct ImportOptions {
    /// Assignments applied on top of the starting mapping.
    pub overrides: ColumnMapping,
    /// Columns to ignore after the overrides are applied.
    pub ignored: Vec<String>,
    /// Start from the suggestions (true) or from an empty mapping.
    pub use_suggestions: bool,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            overrides: ColumnMapping::new(),
            ignored: Vec::new(),
            use_suggestions: true,
        }
    }
}

impl ImportOptions {
    /// Builds options from a JSON mapping file and `HEADER=FIELD` entries.
    /// Entries win over the file for the same header.
    pub fn from_args(
        mapping_file: Option<&Path>,
        entries: &[String],
        ignored: Vec<String>,
        use_suggestions: bool,
    ) -> Result<Self> {
        let mut overrides = match mapping_file {
            Some(path) => load_mapping_file(path)?,
            None => ColumnMapping::new(),
        };
        for entry in entries {
            let (header, field) = ColumnMapping::parse_entry(entry)
                .with_context(|| format!("parse --map {entry}"))?;
            overrides.assign(header, field);
        }
        Ok(Self {
            overrides,
            ignored,
            use_suggestions,
        })
    }
}

fn load_mapping_file(path: &Path) -> Result<ColumnMapping> {
    let text =
        fs::read_to_string(path).with_context(|| format!("read mapping: {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parse mapping: {}", path.display()))
}

/// Final assignment of one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnReport {
    pub column: String,
    pub field: Option<StandardField>,
    pub status: ColumnStatus,
}

/// What happened to one file.
#[derive(Debug, Clone)]
pub struct FileReport {
    pub file: PathBuf,
    pub columns: Vec<ColumnReport>,
    pub imported: usize,
    /// The failure notice, if the file was not imported.
    pub error: Option<Notice>,
}

impl FileReport {
    fn new(file: &Path) -> Self {
        Self {
            file: file.to_path_buf(),
            columns: Vec::new(),
            imported: 0,
            error: None,
        }
    }
}

/// Result of importing every file into one session.
#[derive(Debug, Clone, Default)]
pub struct ImportReport {
    pub files: Vec<FileReport>,
    /// Full store contents after the last file.
    pub people: Vec<Record>,
}

impl ImportReport {
    pub fn has_errors(&self) -> bool {
        self.files.iter().any(|file| file.error.is_some())
    }

    pub fn imported(&self) -> usize {
        self.files.iter().map(|file| file.imported).sum()
    }
}

/// Imports `files` in order into one fresh session.
///
/// A failing file is reported and skipped; later files still run.
pub fn import_files(files: &[PathBuf], options: &ImportOptions) -> ImportReport {
    let mut wizard = Wizard::new(LocalPeopleService::new());
    let mut report = ImportReport::default();
    for file in files {
        let span = info_span!("file", path = %file.display());
        let _guard = span.enter();
        report.files.push(import_one(&mut wizard, file, options));
    }
    report.people = wizard.into_service().into_store().all().to_vec();
    for record in &report.people {
        trace!(
            id = %record.id,
            name = redact_value(record.name.as_deref().unwrap_or_default()),
            "stored record"
        );
    }
    report
}

fn import_one(
    wizard: &mut Wizard<LocalPeopleService>,
    file: &Path,
    options: &ImportOptions,
) -> FileReport {
    let mut report = FileReport::new(file);

    let steps = [
        WizardAction::SelectFile(file.to_path_buf()),
        WizardAction::Upload,
    ];
    for action in steps {
        let notice = wizard.dispatch(action);
        if notice.is_error() {
            report.error = Some(notice);
            return report;
        }
    }

    if !options.use_suggestions {
        wizard.dispatch(WizardAction::ClearMapping);
    }
    for action in edit_actions(wizard, options) {
        wizard.dispatch(action);
    }
    report.columns = column_reports(wizard);

    let notice = wizard.dispatch(WizardAction::Confirm);
    if notice.is_error() {
        report.error = Some(notice);
    } else if let WizardState::Viewing { imported } = wizard.state() {
        report.imported = imported.len();
    }
    wizard.dispatch(WizardAction::Back);
    report
}

/// Overrides and ignores that apply to the columns of the current upload.
/// Entries for other headers are skipped so one mapping can serve many files.
fn edit_actions(
    wizard: &Wizard<LocalPeopleService>,
    options: &ImportOptions,
) -> Vec<WizardAction> {
    let Some((upload, _)) = wizard.mapping() else {
        return Vec::new();
    };
    let has_column = |column: &str| upload.columns.iter().any(|c| c == column);

    let mut actions = Vec::new();
    for (column, field) in options.overrides.iter() {
        if has_column(column) {
            actions.push(WizardAction::Assign {
                column: column.to_string(),
                field,
            });
        } else {
            debug!(column, "mapping entry does not match a column");
        }
    }
    for column in &options.ignored {
        if has_column(column) {
            actions.push(WizardAction::Ignore {
                column: column.clone(),
            });
        }
    }
    actions
}

fn column_reports(wizard: &Wizard<LocalPeopleService>) -> Vec<ColumnReport> {
    let Some((_, mapping)) = wizard.mapping() else {
        return Vec::new();
    };
    mapping
        .columns()
        .iter()
        .map(|column| ColumnReport {
            column: column.clone(),
            field: mapping.field_for(column),
            status: mapping.column_status(column),
        })
        .collect()
}
