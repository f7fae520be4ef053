//! Turning parsed rows into records.

use pdm_model::{ConfirmedMapping, Record, RecordIdSequence, StandardField};

/// Records built from one file plus the number of rows left out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplyOutcome {
    /// New records, in source row order.
    pub records: Vec<Record>,
    /// Rows skipped because their cell count differed from the header count.
    pub dropped_rows: usize,
}

/// Builds one record per row using the confirmed mapping.
///
/// Rows whose width differs from `headers` are skipped without error. Each
/// kept row takes the next id from `ids`. When several headers map to the
/// same field the right-most column wins.
pub fn apply_mapping(
    headers: &[String],
    rows: &[Vec<String>],
    mapping: &ConfirmedMapping,
    ids: &mut RecordIdSequence,
) -> ApplyOutcome {
    let targets: Vec<Option<StandardField>> =
        headers.iter().map(|h| mapping.field_for(h)).collect();

    let mut outcome = ApplyOutcome {
        records: Vec::with_capacity(rows.len()),
        dropped_rows: 0,
    };
    for (index, row) in rows.iter().enumerate() {
        if row.len() != headers.len() {
            tracing::debug!(
                row = index + 1,
                cells = row.len(),
                expected = headers.len(),
                "dropping row with mismatched cell count"
            );
            outcome.dropped_rows += 1;
            continue;
        }
        let mut record = Record::new(ids.next_id());
        for (target, cell) in targets.iter().zip(row) {
            if let Some(field) = target {
                record.set(*field, cell);
            }
        }
        outcome.records.push(record);
    }

    tracing::info!(
        records = outcome.records.len(),
        dropped = outcome.dropped_rows,
        "applied column mapping"
    );
    outcome
}
