use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use pdm_cli::import::{FileReport, ImportReport};
use pdm_map::ColumnStatus;
use pdm_model::{Record, StandardField, UploadResponse};
use pdm_store::filter_records;

pub fn print_fields() {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Label")]);
    apply_table_style(&mut table);
    for (field, label) in StandardField::catalog() {
        table.add_row(vec![field_cell(field), Cell::new(label)]);
    }
    println!("{table}");
}

pub fn print_upload(response: &UploadResponse) {
    println!("File id: {}", response.file_id);
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Column"),
        header_cell("Suggested field"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (index, column) in response.columns.iter().enumerate() {
        let suggested = match response.suggestions.get(column) {
            Some(field) => field_cell(field),
            None => dim_cell("-"),
        };
        table.add_row(vec![Cell::new(index + 1), Cell::new(column), suggested]);
    }
    println!("{table}");
}

/// Prints the per-file mapping tables and the record table.
pub fn print_import(report: &ImportReport, search: Option<&str>) {
    for file in &report.files {
        print_file(file);
    }
    let records = match search {
        Some(term) => filter_records(&report.people, term),
        None => report.people.iter().collect(),
    };
    print_records(&records);
    println!(
        "Imported {} records from {} files ({} in session)",
        report.imported(),
        report.files.len(),
        report.people.len()
    );
    let failed: Vec<&FileReport> = report
        .files
        .iter()
        .filter(|file| file.error.is_some())
        .collect();
    if !failed.is_empty() {
        eprintln!("Errors:");
        for file in failed {
            if let Some(notice) = &file.error {
                eprintln!(
                    "- {}: {}: {}",
                    file.file.display(),
                    notice.title,
                    notice.description
                );
            }
        }
    }
}

fn print_file(file: &FileReport) {
    println!("File: {}", file.file.display());
    if file.columns.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Field"),
        header_cell("Source"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Center);
    for column in &file.columns {
        let field = match column.field {
            Some(field) => field_cell(field),
            None => dim_cell("-"),
        };
        table.add_row(vec![
            Cell::new(&column.column),
            field,
            status_cell(column.status),
        ]);
    }
    println!("{table}");
}

/// Record table columns after the id, in display order.
const RECORD_COLUMNS: [StandardField; 4] = [
    StandardField::Name,
    StandardField::Company,
    StandardField::Email,
    StandardField::Phone,
];

fn record_header_labels() -> Vec<&'static str> {
    let mut labels = vec!["ID"];
    labels.extend(RECORD_COLUMNS.iter().map(StandardField::label));
    labels
}

fn print_records(records: &[&Record]) {
    if records.is_empty() {
        println!("No results found.");
        return;
    }
    let mut table = Table::new();
    table.set_header(
        record_header_labels()
            .into_iter()
            .map(header_cell)
            .collect::<Vec<_>>(),
    );
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for record in records {
        let mut row = vec![Cell::new(record.id)];
        row.extend(RECORD_COLUMNS.iter().map(|field| match record.get(*field) {
            Some(value) => Cell::new(value),
            None => dim_cell("-"),
        }));
        table.add_row(row);
    }
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn field_cell(field: StandardField) -> Cell {
    Cell::new(field.as_str())
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

fn status_cell(status: ColumnStatus) -> Cell {
    match status {
        ColumnStatus::Suggested => Cell::new("suggested").fg(Color::Green),
        ColumnStatus::Manual => Cell::new("manual").fg(Color::Yellow),
        ColumnStatus::Ignored => dim_cell("ignored"),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_table_lists_email_before_phone() {
        assert_eq!(
            record_header_labels(),
            vec!["ID", "Name", "Company", "Email", "Phone"]
        );
    }
}
