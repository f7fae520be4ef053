use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::{info, info_span};

use pdm_cli::import::{ImportOptions, ImportReport, import_files};
use pdm_core::{LocalPeopleService, PeopleService};
use pdm_ingest::SelectedFile;
use pdm_model::{Record, UploadResponse};
use pdm_store::{filter_records, write_csv, write_json};

use crate::cli::{ImportArgs, OutputFormatArg, SuggestArgs};
use crate::summary::{print_fields, print_import, print_upload};

pub fn run_fields() -> Result<()> {
    print_fields();
    Ok(())
}

pub fn run_suggest(args: &SuggestArgs) -> Result<UploadResponse> {
    let file = SelectedFile::select(args.file.clone())
        .with_context(|| format!("select {}", args.file.display()))?;
    let mut service = LocalPeopleService::new();
    let response = service
        .upload_file(&file)
        .with_context(|| format!("upload {}", file.name()))?;
    if args.json {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        serde_json::to_writer_pretty(&mut out, &response).context("write upload response")?;
        writeln!(out)?;
    } else {
        print_upload(&response);
    }
    Ok(response)
}

pub fn run_import(args: &ImportArgs) -> Result<ImportReport> {
    if args.output.is_some() && matches!(args.format, OutputFormatArg::Table) {
        bail!("--output needs --format json or --format csv");
    }
    let options = ImportOptions::from_args(
        args.mapping.as_deref(),
        &args.map,
        args.ignore.clone(),
        !args.no_suggestions,
    )?;
    let span = info_span!("import", files = args.files.len());
    let _guard = span.enter();
    let report = import_files(&args.files, &options);
    info!(
        imported = report.imported(),
        total = report.people.len(),
        "import finished"
    );

    let search = args.search.as_deref();
    match args.format {
        OutputFormatArg::Table => print_import(&report, search),
        OutputFormatArg::Json | OutputFormatArg::Csv => {
            let records = match search {
                Some(term) => filter_records(&report.people, term),
                None => report.people.iter().collect(),
            };
            write_records(&records, args.format, args.output.as_deref())?;
        }
    }
    Ok(report)
}

fn write_records(records: &[&Record], format: OutputFormatArg, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            let file =
                File::create(path).with_context(|| format!("create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            write_format(records, format, &mut writer)?;
            writer
                .flush()
                .with_context(|| format!("write {}", path.display()))?;
            info!(path = %path.display(), records = records.len(), "wrote records");
            Ok(())
        }
        None => write_format(records, format, io::stdout().lock()),
    }
}

fn write_format<W: Write>(records: &[&Record], format: OutputFormatArg, writer: W) -> Result<()> {
    let records = records.iter().copied();
    match format {
        OutputFormatArg::Json => write_json(records, writer).context("write json"),
        OutputFormatArg::Csv => write_csv(records, writer).context("write csv"),
        OutputFormatArg::Table => Ok(()),
    }
}
