//! Free-text record filtering.

use pdm_model::{Record, StandardField};

const SEARCHED_FIELDS: [StandardField; 4] = [
    StandardField::Name,
    StandardField::Company,
    StandardField::Email,
    StandardField::Phone,
];

/// True if any searched field contains `needle`, which must be lower-case.
fn matches(record: &Record, needle: &str) -> bool {
    SEARCHED_FIELDS.iter().any(|field| {
        record
            .get(*field)
            .is_some_and(|value| value.to_lowercase().contains(needle))
    })
}

/// Filters `records` by a case-insensitive substring. The term is used as
/// typed, surrounding spaces included; an empty term keeps everything.
pub fn filter_records<'a>(records: &'a [Record], term: &str) -> Vec<&'a Record> {
    let needle = term.to_lowercase();
    if needle.is_empty() {
        return records.iter().collect();
    }
    records.iter().filter(|r| matches(r, &needle)).collect()
}
