//! Machine-readable record output.

use std::io::Write;

use pdm_model::{Record, StandardField};

use crate::error::Result;

/// Writes `records` as CSV with an `id` column followed by every field.
/// Absent fields are written as empty cells.
pub fn write_csv<'a, W, I>(records: I, writer: W) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Record>,
{
    let mut out = csv::Writer::from_writer(writer);
    let mut header = vec!["id"];
    header.extend(StandardField::ALL.iter().map(StandardField::as_str));
    out.write_record(&header)?;
    for record in records {
        let id = record.id.to_string();
        let mut row = vec![id.as_str()];
        row.extend(
            StandardField::ALL
                .iter()
                .map(|field| record.get(*field).unwrap_or("")),
        );
        out.write_record(&row)?;
    }
    out.flush()?;
    Ok(())
}

/// Writes `records` as a pretty-printed JSON array.
pub fn write_json<'a, W, I>(records: I, mut writer: W) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Record>,
{
    let records: Vec<&Record> = records.into_iter().collect();
    serde_json::to_writer_pretty(&mut writer, &records)?;
    writeln!(writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use pdm_model::RecordId;

    use super::*;

    fn sample() -> Vec<Record> {
        let mut first = Record::new(RecordId::new(1));
        first.set(StandardField::Name, "Doe, John");
        first.set(StandardField::Email, "john@x.com");
        let mut second = Record::new(RecordId::new(2));
        second.set(StandardField::Phone, "555");
        vec![first, second]
    }

    #[test]
    fn csv_export_quotes_embedded_commas() {
        let mut out = Vec::new();
        write_csv(&sample(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "id,name,company,phone,email\n1,\"Doe, John\",,,john@x.com\n2,,,555,\n"
        );
    }

    #[test]
    fn json_export_omits_absent_fields() {
        let mut out = Vec::new();
        write_json(&sample(), &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value[0]["name"], "Doe, John");
        assert!(value[1].get("name").is_none());
        assert_eq!(value[1]["id"], 2);
    }
}
