use std::fs;
use std::path::{Path, PathBuf};

use pdm_core::{
    FlowError, LocalPeopleService, PeopleService, ServiceError, Wizard, WizardAction, WizardState,
    WizardStep,
};
use pdm_ingest::SelectedFile;
use pdm_model::{
    ColumnMapping, ConfirmedMapping, Record, RecordId, StandardField, UploadResponse,
};
use pdm_store::StoreError;

fn write_csv(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write csv");
    path
}

/// Service double that records calls and can be told to fail.
#[derive(Default)]
struct ScriptedService {
    processed: usize,
    fail_process: bool,
}

impl PeopleService for ScriptedService {
    fn upload_file(&mut self, _file: &SelectedFile) -> Result<UploadResponse, ServiceError> {
        let mut suggestions = ColumnMapping::new();
        suggestions.assign("Full Name", StandardField::Name);
        Ok(UploadResponse {
            file_id: "file_0".to_string(),
            columns: vec!["Full Name".to_string(), "Notes".to_string()],
            suggestions,
            standard_columns: StandardField::catalog(),
        })
    }

    fn process_csv(
        &mut self,
        _file: &SelectedFile,
        _mapping: &ConfirmedMapping,
    ) -> Result<Vec<Record>, ServiceError> {
        self.processed += 1;
        if self.fail_process {
            Err(ServiceError::Store(StoreError::Io(std::io::Error::other(
                "simulated failure",
            ))))
        } else {
            Ok(Vec::new())
        }
    }

    fn get_people(&self) -> Result<Vec<Record>, ServiceError> {
        Ok(Vec::new())
    }
}

#[test]
fn scenario_a_end_to_end() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write_csv(
        dir.path(),
        "people.csv",
        "Full Name,Email Address\nJohn Doe,john@x.com\n",
    );
    let mut wizard = Wizard::new(LocalPeopleService::new());

    wizard.select_file(&path).expect("select");
    wizard.upload().expect("upload");
    assert_eq!(wizard.step(), WizardStep::Mapping);

    let (upload, mapping) = wizard.mapping().expect("mapping step");
    assert_eq!(upload.columns, vec!["Full Name", "Email Address"]);
    assert_eq!(upload.suggestions.get("Full Name"), Some(StandardField::Name));
    assert_eq!(
        upload.suggestions.get("Email Address"),
        Some(StandardField::Email)
    );
    assert!(upload.file_id.starts_with("file_"));
    assert_eq!(upload.standard_columns.len(), 4);
    assert!(mapping.can_confirm());

    let notice = wizard.confirm().expect("confirm");
    assert_eq!(notice.title, "Success");
    assert_eq!(wizard.step(), WizardStep::Viewing);

    let people = wizard.people();
    assert_eq!(people.len(), 1);
    assert_eq!(people[0].id, RecordId::new(1));
    assert_eq!(people[0].name.as_deref(), Some("John Doe"));
    assert_eq!(people[0].email.as_deref(), Some("john@x.com"));
    assert_eq!(people[0].company, None);
}

#[test]
fn scenario_d_rejects_non_csv_before_parsing() {
    let mut wizard = Wizard::new(LocalPeopleService::new());

    let err = wizard.select_file("data.txt").unwrap_err();
    assert!(matches!(err, FlowError::InvalidFileFormat { .. }));
    assert!(matches!(
        wizard.state(),
        WizardState::Upload { selected: None }
    ));
    assert!(wizard.service().store().is_empty());

    let notice = wizard.dispatch(WizardAction::SelectFile("DATA.CSV".into()));
    assert!(notice.is_error());
    assert_eq!(notice.title, "Invalid file format");
}

#[test]
fn scenario_e_empty_mapping_blocks_confirmation() {
    let mut wizard = Wizard::new(ScriptedService::default());
    wizard.select_file("people.csv").expect("select");
    wizard.upload().expect("upload");
    wizard.ignore("Full Name").expect("ignore");

    let err = wizard.confirm().unwrap_err();
    assert!(matches!(err, FlowError::MappingRequired));
    assert_eq!(wizard.step(), WizardStep::Mapping);
    assert_eq!(wizard.service().processed, 0);
}

#[test]
fn processing_failure_keeps_the_mapping_step() {
    let service = ScriptedService {
        fail_process: true,
        ..ScriptedService::default()
    };
    let mut wizard = Wizard::new(service);
    wizard.select_file("people.csv").expect("select");
    wizard.upload().expect("upload");
    wizard.assign("Notes", StandardField::Company).expect("assign");

    let notice = wizard.dispatch(WizardAction::Confirm);
    assert!(notice.is_error());
    assert_eq!(notice.description, "Failed to process the data");
    assert_eq!(wizard.step(), WizardStep::Mapping);
    let (_, mapping) = wizard.mapping().expect("mapping step");
    assert_eq!(mapping.field_for("Notes"), Some(StandardField::Company));

    // The flow stays usable after a failure.
    assert!(wizard.back().is_ok());
    assert_eq!(wizard.step(), WizardStep::Upload);
}

#[test]
fn repeated_uploads_accumulate_with_increasing_ids() {
    let dir = tempfile::tempdir().expect("temp dir");
    let first = write_csv(dir.path(), "a.csv", "Name,Phone\nAda,1\nGrace,2\n");
    let second = write_csv(dir.path(), "b.csv", "Company,Name\nNavy,Linus\n");
    let mut wizard = Wizard::new(LocalPeopleService::new());

    for path in [&first, &second] {
        wizard.select_file(path).expect("select");
        wizard.upload().expect("upload");
        wizard.confirm().expect("confirm");
        wizard.back().expect("back");
    }

    let ids: Vec<u64> = wizard.people().iter().map(|r| r.id.get()).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(wizard.people()[2].company.as_deref(), Some("Navy"));
    assert_eq!(wizard.search("grace").len(), 1);
    assert_eq!(wizard.search("").len(), 3);
}

#[test]
fn back_from_mapping_discards_the_upload() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write_csv(dir.path(), "a.csv", "Name\nAda\n");
    let mut wizard = Wizard::new(LocalPeopleService::new());
    wizard.select_file(&path).expect("select");
    wizard.upload().expect("upload");

    wizard.back().expect("back");

    assert!(matches!(
        wizard.state(),
        WizardState::Upload { selected: None }
    ));
    assert!(wizard.service().store().is_empty());
    assert!(matches!(
        wizard.back(),
        Err(FlowError::InvalidTransition { .. })
    ));
}

#[test]
fn upload_requires_a_readable_selection() {
    let dir = tempfile::tempdir().expect("temp dir");
    let mut wizard = Wizard::new(LocalPeopleService::new());
    assert!(matches!(wizard.upload(), Err(FlowError::NoFileSelected)));

    wizard
        .select_file(dir.path().join("missing.csv"))
        .expect("select");
    let notice = wizard.dispatch(WizardAction::Upload);
    assert_eq!(notice.description, "Failed to process the file");
    assert!(matches!(
        wizard.state(),
        WizardState::Upload { selected: Some(_) }
    ));
}

#[test]
fn mapping_edits_are_rejected_outside_the_mapping_step() {
    let mut wizard = Wizard::new(ScriptedService::default());
    assert!(matches!(
        wizard.assign("Full Name", StandardField::Name),
        Err(FlowError::InvalidTransition { .. })
    ));

    wizard.select_file("people.csv").expect("select");
    wizard.upload().expect("upload");
    assert!(matches!(
        wizard.assign("Missing", StandardField::Name),
        Err(FlowError::UnknownColumn(_))
    ));
}
